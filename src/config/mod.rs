mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = ["./mediacatalog.toml", "~/.config/mediacatalog/config.toml"];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    if config.probe.timeout_secs == 0 {
        anyhow::bail!("probe.timeout_secs must be greater than 0");
    }

    for name in &config.scan.ignore_names {
        if name.is_empty() || name.contains('/') || name.contains('\\') {
            anyhow::bail!(
                "scan.ignore_names entries must be bare file names, got {:?}",
                name
            );
        }
    }

    if let Some(ref path) = config.probe.ffprobe_path {
        if !path.exists() {
            tracing::warn!("Configured ffprobe does not exist: {:?}", path);
        }
    }

    Ok(())
}
