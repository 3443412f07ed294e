use std::collections::HashMap;
use std::mem;
use std::time::Duration;

use config::Config;
use config::Translator as CfgTranslator;
use log::{info, warn};

use super::error::{Error, Result};
use super::{Client, Deepl};

/// Translation clients selectable by alias.
#[derive(Default)]
pub struct Registry {
    clients: Vec<Box<dyn Client>>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    /// Builds and configures every translator listed in `config`.
    pub fn from_config(config: &Config) -> Result<Registry> {
        let timeout = Duration::from_secs(config.network.timeout);
        let proxy = &config.network.proxy;
        let mut registry = Registry::new();
        for translator in &config.translators {
            let mut client = match translator {
                CfgTranslator::Deepl { .. } => {
                    let client = Deepl::builder()
                        .timeout(timeout)
                        .maybe_proxy(proxy.clone())
                        .build()?;

                    Box::new(client) as Box<dyn Client>
                }
            };
            client.set_configuration(&translator.options())?;
            if let Some(replaced) = registry.register(client) {
                warn!("{} configured more than once, keep the last one", replaced.alias());
            }
        }
        if registry.is_empty() {
            info!("no translation client enabled");
        } else {
            info!("translation clients enabled: {}", registry.aliases().join(", "));
        }

        Ok(registry)
    }

    /// Adds `client`, replacing and returning one registered under the same alias.
    pub fn register(&mut self, client: Box<dyn Client>) -> Option<Box<dyn Client>> {
        let alias = client.alias();
        match self
            .clients
            .iter()
            .position(|registered| registered.alias() == alias)
        {
            Some(index) => Some(mem::replace(&mut self.clients[index], client)),
            None => {
                self.clients.push(client);
                None
            }
        }
    }

    pub fn get(&self, alias: &str) -> Option<&dyn Client> {
        self.clients
            .iter()
            .find(|client| client.alias() == alias)
            .map(|client| client.as_ref())
    }

    pub fn get_mut(&mut self, alias: &str) -> Option<&mut (dyn Client + 'static)> {
        self.clients
            .iter_mut()
            .find(|client| client.alias() == alias)
            .map(|client| &mut **client)
    }

    pub fn aliases(&self) -> Vec<&'static str> {
        self.clients.iter().map(|client| client.alias()).collect()
    }

    pub fn clients(&self) -> impl Iterator<Item = &dyn Client> {
        self.clients.iter().map(|client| client.as_ref())
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    pub fn configure(&mut self, alias: &str, config: &HashMap<String, String>) -> Result<()> {
        let client = self
            .get_mut(alias)
            .ok_or_else(|| Error::UnknownClient(alias.to_string()))?;

        client.set_configuration(config)
    }

    pub async fn translate(
        &self,
        alias: &str,
        payload: &str,
        from: Option<&str>,
        to: &str,
    ) -> Result<String> {
        let client = self
            .get(alias)
            .ok_or_else(|| Error::UnknownClient(alias.to_string()))?;

        client.translate(payload, from, to).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{body_string, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    struct Upper {
        name: &'static str,
        configured: bool,
    }

    #[async_trait]
    impl Client for Upper {
        fn alias(&self) -> &'static str {
            "upper"
        }

        fn full_name(&self) -> &'static str {
            self.name
        }

        fn set_configuration(&mut self, config: &HashMap<String, String>) -> Result<()> {
            self.configured = config.contains_key("token");
            if !self.configured {
                return Err(Error::Configuration("token is required".to_string()));
            }

            Ok(())
        }

        async fn translate(
            &self,
            payload: &str,
            _from: Option<&str>,
            _to: &str,
        ) -> Result<String> {
            if !self.configured {
                return Err(Error::Configuration("upper is not configured".to_string()));
            }

            Ok(payload.to_uppercase())
        }

        fn normalize(&self, code: &str) -> Result<&'static str> {
            match code {
                "lower" => Ok("LOWER"),
                _ => Err(Error::InvalidLanguageCode {
                    code: code.to_string(),
                    alias: self.alias(),
                }),
            }
        }
    }

    fn upper(name: &'static str) -> Box<dyn Client> {
        Box::new(Upper {
            name,
            configured: false,
        })
    }

    #[test]
    fn test_register() -> Result<()> {
        let mut registry = Registry::new();
        assert!(registry.is_empty());
        assert!(registry.register(Box::new(Deepl::builder().build()?)).is_none());
        assert!(registry.register(upper("Upper")).is_none());
        assert_eq!(registry.aliases(), vec!["deepl", "upper"]);

        let replaced = registry.register(upper("Upper v2"));
        assert_eq!(replaced.map(|client| client.full_name()), Some("Upper"));
        assert_eq!(registry.aliases(), vec!["deepl", "upper"]);
        assert_eq!(
            registry.get("upper").map(|client| client.full_name()),
            Some("Upper v2")
        );
        assert_eq!(
            registry
                .clients()
                .map(|client| client.full_name())
                .collect::<Vec<_>>(),
            vec!["Deepl", "Upper v2"]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_configure_and_translate() -> Result<()> {
        let mut registry = Registry::new();
        registry.register(upper("Upper"));

        let err = registry.translate("upper", "hi", None, "en").await.unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));

        let config = HashMap::from([("token".to_string(), "t".to_string())]);
        registry.configure("upper", &config)?;
        assert_eq!(registry.translate("upper", "hi", None, "en").await?, "HI");

        Ok(())
    }

    #[test]
    fn test_get_mut() -> Result<()> {
        let mut registry = Registry::new();
        registry.register(upper("Upper"));
        registry.register(Box::new(Deepl::builder().build()?));

        let client = registry.get_mut("upper").expect("upper registered");
        assert_eq!(client.full_name(), "Upper");
        let config = HashMap::from([("token".to_string(), "t".to_string())]);
        client.set_configuration(&config)?;

        let deepl = registry.get_mut("deepl").expect("deepl registered");
        let err = deepl.set_configuration(&HashMap::new()).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(registry.get_mut("google").is_none());

        Ok(())
    }

    #[test]
    fn test_supports_language_follows_normalize() {
        let registry = {
            let mut registry = Registry::new();
            registry.register(upper("Upper"));
            registry
        };
        let client = registry.get("upper").expect("upper registered");

        assert_eq!(client.normalize("lower").unwrap(), "LOWER");
        assert!(client.supports_language("lower"));
        assert!(!client.supports_language("upper"));
    }

    #[tokio::test]
    async fn test_unknown_client() {
        let mut registry = Registry::new();
        registry.register(upper("Upper"));

        let err = registry.translate("google", "hi", None, "en").await.unwrap_err();
        assert!(matches!(err, Error::UnknownClient(alias) if alias == "google"));
        let err = registry.configure("google", &HashMap::new()).unwrap_err();
        assert!(matches!(err, Error::UnknownClient(_)));
        assert!(registry.get("google").is_none());
    }

    #[tokio::test]
    async fn test_from_config() -> Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/translate"))
            .and(body_string(
                "auth_key=secret&target_lang=JA&tag_handling=xml&text=Good+morning&source_lang=EN",
            ))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "translations": [{ "text": "おはよう" }] })),
            )
            .expect(1)
            .mount(&server)
            .await;
        let config = Config::parse(&format!(
            r#"
            [network]
            timeout = 3

            [[translators]]
            type = "deepl"
            auth_key = "secret"
            base_uri = "{}/"
            "#,
            server.uri()
        ))
        .expect("parse config");

        let registry = Registry::from_config(&config)?;
        assert_eq!(registry.aliases(), vec!["deepl"]);
        let deepl = registry.get("deepl").expect("deepl registered");
        assert!(deepl.supports_language("ja-JP"));
        assert!(!deepl.supports_language("ko"));

        let actual = registry
            .translate("deepl", "Good morning", Some("en"), "ja")
            .await?;
        assert_eq!(actual, "おはよう");

        Ok(())
    }

    #[test]
    fn test_from_config_keeps_last_duplicate() -> Result<()> {
        let config = Config {
            network: config::Network::default(),
            translators: vec![
                CfgTranslator::Deepl {
                    auth_key: "first".to_string(),
                    base_uri: None,
                },
                CfgTranslator::Deepl {
                    auth_key: "second".to_string(),
                    base_uri: Some("https://second/".to_string()),
                },
            ],
        };

        let registry = Registry::from_config(&config)?;
        assert_eq!(registry.aliases(), vec!["deepl"]);

        Ok(())
    }

    #[test]
    fn test_from_empty_config() -> Result<()> {
        let config = Config::parse("").expect("parse config");
        let registry = Registry::from_config(&config)?;

        assert!(registry.is_empty());

        Ok(())
    }
}
