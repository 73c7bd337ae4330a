use clap::Parser;
use mediacatalog::config::Config;
use mediacatalog_common::SquarePolicy;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mediacatalog")]
#[command(author, version, about = "Build a list.json orientation manifest for a media folder")]
pub struct Cli {
    /// Directory to scan (defaults to the directory containing this executable)
    pub root: Option<PathBuf>,

    /// Follow symbolic links to directories
    #[arg(short = 'L', long)]
    pub follow_symlinks: bool,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the manifest instead of writing list.json
    #[arg(long)]
    pub dry_run: bool,

    /// Check that external tools are available and exit
    #[arg(long)]
    pub check_tools: bool,

    /// Timeout for each ffprobe call, in seconds
    #[arg(long, value_name = "SECS")]
    pub probe_timeout: Option<u64>,

    /// Path to the ffprobe executable
    #[arg(long, value_name = "PATH")]
    pub ffprobe: Option<PathBuf>,

    /// Use only the built-in header sniffers for images
    #[arg(long)]
    pub no_image_decoder: bool,

    /// Label for files with equal width and height
    #[arg(long, value_name = "POLICY")]
    pub square: Option<SquarePolicy>,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if self.follow_symlinks {
            config.scan.follow_symlinks = true;
        }
        if let Some(secs) = self.probe_timeout {
            config.probe.timeout_secs = secs;
        }
        if let Some(ref path) = self.ffprobe {
            config.probe.ffprobe_path = Some(path.clone());
        }
        if self.no_image_decoder {
            config.probe.image_decoder = false;
        }
        if let Some(square) = self.square {
            config.classify.square = square;
        }
    }
}
