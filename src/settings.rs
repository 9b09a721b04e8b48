use anyhow::Context as _;
use client::config::{self, BackendConfig};
use toml::{map::Map, Value};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    pub file: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: "yapper.log".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub backend: BackendConfig,
    pub log: LogConfig,
}

impl Settings {
    /// Reads the toml file once and applies `YAPPER_ENV` to the backend.
    pub fn load(config_name: &str) -> anyhow::Result<Self> {
        let config = util::load_config(config_name)?;

        Self::from_config(&config, std::env::var(config::ENV_VAR).ok())
    }

    pub fn from_config(
        config: &Map<String, Value>,
        env_override: Option<String>,
    ) -> anyhow::Result<Self> {
        let backend =
            config::init_config(config)?.with_env_override(env_override)?;
        let log = init_log_config(config)?;

        Ok(Self { backend, log })
    }
}

fn init_log_config(config: &Map<String, Value>) -> anyhow::Result<LogConfig> {
    let Some(log) = config.get("log") else {
        return Ok(LogConfig::default());
    };
    let defaults = LogConfig::default();

    let level = match log.get("level") {
        Some(level) => level
            .as_str()
            .context("failed to parse log level config")?
            .to_string(),
        None => defaults.level,
    };

    let file = match log.get("file") {
        Some(file) => file
            .as_str()
            .context("failed to parse log file config")?
            .to_string(),
        None => defaults.file,
    };

    Ok(LogConfig { level, file })
}
