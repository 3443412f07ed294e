use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::Config;
use translator::{Client, Registry};

#[derive(Parser)]
#[command(name = app::NAME, version = app::VERSION, about = "Translate text through configured services")]
pub struct Cli {
    /// Path of the configuration file
    #[arg(short, long, default_value = "autotrans.toml")]
    pub config: PathBuf,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Translate a text
    Translate {
        /// Target language, e.g. de or en-US
        #[arg(short, long)]
        to: String,
        /// Source language, detected by the service when omitted
        #[arg(short, long)]
        from: Option<String>,
        #[arg(long, default_value = "deepl")]
        client: String,
        text: String,
    },
    /// Check which language codes a client accepts
    Supports {
        #[arg(long, default_value = "deepl")]
        client: String,
        #[arg(required = true)]
        codes: Vec<String>,
    },
    /// List configured clients
    Clients,
}

pub struct App {
    registry: Registry,
}

impl App {
    pub fn new(config: &Config) -> Result<App> {
        let registry = Registry::from_config(config).with_context(|| "build translators")?;

        Ok(App { registry })
    }

    pub async fn run(&self, command: Command) -> Result<()> {
        match command {
            Command::Translate {
                to,
                from,
                client,
                text,
            } => {
                let translated = self
                    .registry
                    .translate(&client, &text, from.as_deref(), &to)
                    .await
                    .with_context(|| format!("translate by {client}"))?;
                println!("{translated}");
            }
            Command::Supports { client, codes } => {
                let client = self
                    .client(&client)
                    .with_context(|| format!("check languages of {client}"))?;
                for code in codes {
                    println!("{}", describe(client, &code));
                }
            }
            Command::Clients => {
                for client in self.registry.clients() {
                    println!("{}\t{}", client.alias(), client.full_name());
                }
            }
        }

        Ok(())
    }

    fn client(&self, alias: &str) -> translator::Result<&dyn Client> {
        self.registry
            .get(alias)
            .ok_or_else(|| translator::Error::UnknownClient(alias.to_string()))
    }
}

fn describe(client: &dyn Client, code: &str) -> String {
    match client.normalize(code) {
        Ok(normalized) => format!("{code}\t{normalized}"),
        Err(_) => format!("{code}\tunsupported"),
    }
}
