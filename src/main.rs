use std::fs::OpenOptions;

use anyhow::Context as _;
use client::Client;
use tracing::info;
use tracing_subscriber::EnvFilter;
use view::Shell;

mod app;
mod command;
mod settings;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config_name = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Config.toml".to_string());
    let settings = settings::Settings::load(&config_name)?;

    let out_file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(&settings.log.file)
        .with_context(|| format!("failed to open {}", settings.log.file))?;
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log.level))
        .context("failed to parse log level")?;
    tracing_subscriber::fmt()
        .with_writer(out_file)
        .with_ansi(false)
        .with_env_filter(filter)
        .init();

    let base_url = settings.backend.base_url();
    info!(task = "start", env = %settings.backend.env, base_url);

    let client = Client::new(base_url)?;
    let mut shell = Shell::new(client);

    app::run(&mut shell).await
}
