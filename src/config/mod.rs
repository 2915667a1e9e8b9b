pub mod settings;

pub use settings::{Config, DebugLogRotation};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the configuration file path
pub fn config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Failed to get config directory")?
        .join("tool-inventory");

    Ok(config_dir.join("config.toml"))
}

/// Load configuration from the default location, falling back to defaults.
///
/// A missing file is not an error and nothing is written to disk.
pub fn load_config() -> Result<Config> {
    let path = config_path()?;
    load_config_from(&path)
}

/// Load configuration from an explicit path, falling back to defaults if absent
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    Ok(config)
}

/// Load configuration, treating an unreadable or malformed file as defaults.
///
/// The config only tunes debug logging, so a broken file must not keep the
/// menu from starting. The problem is reported on stderr.
pub fn load_config_or_default(path: &Path) -> Config {
    load_config_from(path).unwrap_or_else(|e| {
        eprintln!("Warning: ignoring config ({e:#}); debug logging disabled");
        Config::default()
    })
}

/// Save configuration to the default location
pub fn save_config(config: &Config) -> Result<()> {
    let path = config_path()?;
    save_config_to(&path, config)
}

/// Save configuration to an explicit path, creating parent directories
pub fn save_config_to(path: &Path, config: &Config) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create config directory")?;
    }
    let content = toml::to_string_pretty(config)
        .context("Failed to serialize config")?;
    fs::write(path, content)
        .context("Failed to write config file")?;
    Ok(())
}
