use std::collections::HashMap;
use std::fmt::{self, Display};
use std::time::Duration;

use async_trait::async_trait;
use bon::bon;
use log::debug;
use reqwest::{Client as HttpClient, Proxy, Url};
use serde::{Deserialize, Serialize};

use super::Client;
use super::error::{Error, ProviderError, Result};
use super::language;

/// Languages accepted by the DeepL API, see https://www.deepl.com/api.html.
pub const LANGUAGE_CODES: [&str; 8] = ["EN", "DE", "FR", "ES", "IT", "NL", "PL", "JA"];
pub const DEFAULT_BASE_URI: &str = "https://api.deepl.com/";
pub const AUTH_KEY: &str = "authKey";
pub const BASE_URI: &str = "baseUri";

const TRANSLATE_PATH: &str = "/v2/translate";
const TIMEOUT: Duration = Duration::from_secs(5);

pub struct Deepl {
    client: HttpClient,
    auth_key: Option<String>,
    base_uri: Url,
}

#[bon]
impl Deepl {
    #[builder]
    pub fn new(timeout: Option<Duration>, proxy: Option<String>) -> Result<Deepl> {
        let mut client_builder = HttpClient::builder()
            .timeout(timeout.unwrap_or(TIMEOUT))
            .user_agent(app::USER_AGENT);
        if let Some(url) = proxy {
            let proxy = Proxy::all(&url)
                .map_err(|err| Error::Configuration(format!("set proxy to {url}: {err}")))?;
            client_builder = client_builder.proxy(proxy);
        }
        let client = client_builder
            .build()
            .map_err(|err| Error::Configuration(format!("build http client: {err}")))?;
        let base_uri = Url::parse(DEFAULT_BASE_URI)
            .map_err(|err| Error::Configuration(format!("parse {DEFAULT_BASE_URI}: {err}")))?;
        let deepl = Deepl {
            client,
            auth_key: None,
            base_uri,
        };

        Ok(deepl)
    }

    pub fn base_uri(&self) -> &Url {
        &self.base_uri
    }

    pub fn is_configured(&self) -> bool {
        self.auth_key.is_some()
    }

    fn endpoint(&self) -> Result<Url> {
        self.base_uri
            .join(TRANSLATE_PATH)
            .map_err(|err| Error::Configuration(format!("join {TRANSLATE_PATH}: {err}")))
    }

    fn failed(&self, source: impl Into<ProviderError>) -> Error {
        Error::Provider {
            alias: self.alias(),
            source: source.into(),
        }
    }
}

impl Display for Deepl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name())
    }
}

#[derive(Serialize)]
struct Form<'a> {
    auth_key: &'a str,
    target_lang: &'static str,
    tag_handling: &'static str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_lang: Option<&'static str>,
}

#[derive(Deserialize)]
struct Response {
    translations: Vec<Translation>,
}

#[derive(Deserialize)]
struct Translation {
    text: String,
}

#[async_trait]
impl Client for Deepl {
    fn alias(&self) -> &'static str {
        "deepl"
    }

    fn full_name(&self) -> &'static str {
        "Deepl"
    }

    fn set_configuration(&mut self, config: &HashMap<String, String>) -> Result<()> {
        self.auth_key = None;
        let auth_key = config
            .get(AUTH_KEY)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::Configuration(format!("{AUTH_KEY} is required")))?;
        if let Some(base_uri) = config.get(BASE_URI) {
            let url = Url::parse(base_uri).map_err(|err| {
                Error::Configuration(format!("{BASE_URI} {base_uri:?} is not a url: {err}"))
            })?;
            if url.cannot_be_a_base() {
                return Err(Error::Configuration(format!(
                    "{BASE_URI} {base_uri:?} cannot be used as a base"
                )));
            }
            self.base_uri = url;
        }
        self.auth_key = Some(auth_key.clone());

        Ok(())
    }

    async fn translate(&self, payload: &str, from: Option<&str>, to: &str) -> Result<String> {
        let Some(auth_key) = &self.auth_key else {
            return Err(Error::Configuration(format!(
                "{self} is not configured, {AUTH_KEY} is required"
            )));
        };
        let form = Form {
            auth_key: auth_key.as_str(),
            target_lang: self.normalize(to)?,
            tag_handling: "xml",
            text: payload,
            source_lang: from.map(|from| self.normalize(from)).transpose()?,
        };
        let url = self.endpoint()?;
        debug!(
            "translate {} chars from {} to {} via {url}",
            payload.chars().count(),
            form.source_lang.unwrap_or("auto"),
            form.target_lang
        );

        let body = self
            .client
            .post(url)
            .form(&form)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| self.failed(err))?
            .text()
            .await
            .map_err(|err| self.failed(err))?;
        let response = serde_json::from_str::<Response>(&body).map_err(|err| {
            self.failed(ProviderError::Response(format!("decode body: {err}")))
        })?;
        let Some(translation) = response.translations.into_iter().next() else {
            return Err(self.failed(ProviderError::Response(
                "no translations in body".to_string(),
            )));
        };

        Ok(translation.text)
    }

    fn normalize(&self, code: &str) -> Result<&'static str> {
        language::normalize(code, &LANGUAGE_CODES, self.alias())
    }
}
