mod cli;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use cli::{App, Cli};
use config::Config;
use log::debug;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    debug!("{} {}", app::NAME, app::VERSION);

    let config = Config::load(&cli.config).await?;
    let app = App::new(&config)?;

    app.run(cli.command).await
}
