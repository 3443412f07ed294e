mod helper;
mod network;
mod translator;

use std::path::Path;

use anyhow::{Context, Result, bail};
use log::info;
use serde::Deserialize;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use validator::Validate;

pub use network::Network;
pub use translator::Translator;

#[derive(Debug, Deserialize, Validate)]
pub struct Config {
    #[serde(default)]
    #[validate(nested)]
    pub network: Network,
    #[serde(default)]
    #[validate(custom(function = "helper::translators"))]
    pub translators: Vec<Translator>,
}

impl Config {
    pub async fn load(path: &Path) -> Result<Config> {
        if !path.exists() {
            Config::generate_default_config(path).await?;

            bail!(
                "config file not found, generated a default one at {}, fill in the auth_key first",
                path.display()
            );
        }
        let config = fs::read_to_string(path)
            .await
            .with_context(|| format!("read config from {}", path.display()))?;

        Config::parse(&config)
    }

    pub fn parse(config: &str) -> Result<Config> {
        let config: Config =
            toml::from_str(config).map_err(|err| anyhow::anyhow!("config ->\n\n{err}"))?;
        config
            .validate()
            .map_err(|err| anyhow::anyhow!("config -> {err}"))?;

        Ok(config)
    }

    async fn generate_default_config(path: &Path) -> Result<()> {
        info!("generate default config at {}", path.display());
        OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .await?
            .write_all(include_bytes!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/config.default.toml"
            )))
            .await?;

        Ok(())
    }
}
