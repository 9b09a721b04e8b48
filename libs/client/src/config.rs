use std::str::FromStr;

use anyhow::Context as _;
use toml::{map::Map, Value};

pub static ENV_VAR: &str = "YAPPER_ENV";

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    strum::EnumString,
    strum::Display,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Environment {
    #[default]
    Local,
    #[strum(serialize = "prod", serialize = "production")]
    Prod,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    pub env: Environment,
    pub local_url: String,
    pub deployed_url: String,
}

impl BackendConfig {
    pub fn base_url(&self) -> &str {
        match self.env {
            Environment::Local => &self.local_url,
            Environment::Prod => &self.deployed_url,
        }
    }

    /// Applies `YAPPER_ENV` when it is set.
    pub fn with_env_override(
        mut self,
        value: Option<String>,
    ) -> anyhow::Result<Self> {
        if let Some(value) = value {
            self.env = Environment::from_str(&value)
                .with_context(|| format!("invalid {}: {}", ENV_VAR, value))?;
        }

        Ok(self)
    }
}

pub fn init_config(
    config: &Map<String, Value>,
) -> anyhow::Result<BackendConfig> {
    let backend = config
        .get("backend")
        .context("failed to get backend config")?;

    let env = match backend.get("env") {
        Some(env) => {
            let env = env.as_str().context("failed to parse env config")?;
            Environment::from_str(env)
                .with_context(|| format!("unknown env: {}", env))?
        }
        None => Environment::default(),
    };

    let local_url = backend
        .get("local_url")
        .context("failed to load local_url config")?
        .as_str()
        .context("failed to parse local_url config")?
        .to_string();

    let deployed_url = backend
        .get("deployed_url")
        .context("failed to load deployed_url config")?
        .as_str()
        .context("failed to parse deployed_url config")?
        .to_string();

    Ok(BackendConfig {
        env,
        local_url,
        deployed_url,
    })
}
