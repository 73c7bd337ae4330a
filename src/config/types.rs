use mediacatalog_common::SquarePolicy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub probe: ProbeConfig,

    #[serde(default)]
    pub classify: ClassifyConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ScanConfig {
    /// Descend into symlinked directories (cycle-safe)
    #[serde(default)]
    pub follow_symlinks: bool,

    /// Extra file names to leave out of the manifest, on top of `list.json`
    /// and the executable itself
    #[serde(default)]
    pub ignore_names: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProbeConfig {
    /// Explicit ffprobe location; looked up on PATH when unset
    #[serde(default)]
    pub ffprobe_path: Option<PathBuf>,

    /// Hard limit for a single ffprobe run, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Ask the general-purpose image decoder before the header sniffers
    #[serde(default = "default_image_decoder")]
    pub image_decoder: bool,
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_image_decoder() -> bool {
    true
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            ffprobe_path: None,
            timeout_secs: default_timeout_secs(),
            image_decoder: default_image_decoder(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ClassifyConfig {
    /// Label given to files whose width equals their height
    #[serde(default)]
    pub square: SquarePolicy,
}
