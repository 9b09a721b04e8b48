use std::path::{Path, PathBuf};

use anyhow::Context;
use toml::{map::Map, Value};

pub fn workspace_dir() -> anyhow::Result<PathBuf> {
    let output = std::process::Command::new(env!("CARGO"))
        .arg("locate-project")
        .arg("--workspace")
        .arg("--message-format=plain")
        .output()
        .context("failed to locate workspace")?
        .stdout;
    let cargo_path = std::str::from_utf8(&output)
        .context("failed to read cargo locate-project output")?;
    let cargo_path = Path::new(cargo_path.trim());

    cargo_path
        .parent()
        .map(Path::to_path_buf)
        .context("workspace manifest has no parent directory")
}

/// Reads a toml file. Relative paths that do not exist under the current
/// directory are resolved against the workspace root.
pub fn load_config(config_name: &str) -> anyhow::Result<Map<String, Value>> {
    let path = resolve(config_name)?;
    let config = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    parse_config(&config)
        .with_context(|| format!("failed to parse {}", path.display()))
}

pub fn parse_config(text: &str) -> anyhow::Result<Map<String, Value>> {
    let config = toml::from_str::<Map<String, Value>>(text)?;

    Ok(config)
}

fn resolve(config_name: &str) -> anyhow::Result<PathBuf> {
    let path = PathBuf::from(config_name);
    if path.is_absolute() || path.exists() {
        return Ok(path);
    }

    Ok(workspace_dir()?.join(path))
}
