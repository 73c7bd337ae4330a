//! # mediacatalog-av
//!
//! External tool integration for mediacatalog.
//!
//! This crate provides:
//! - Tool detection (`ffprobe` on `PATH` or at a configured location)
//! - [`ToolCommand`], a subprocess builder with a hard timeout
//! - [`FfprobeSource`], a [`mediacatalog_probe::DimensionSource`] that reads
//!   the size of the first video stream
//!
//! ## Example
//!
//! ```no_run
//! use mediacatalog_av::FfprobeSource;
//! use std::path::Path;
//! use std::time::Duration;
//!
//! let ffprobe = FfprobeSource::discover(None, Duration::from_secs(5));
//! let dims = ffprobe.probe(Path::new("/path/to/video.mp4"))?;
//! println!("{}x{}", dims.width, dims.height);
//! # Ok::<(), mediacatalog_av::Error>(())
//! ```

pub mod command;
mod error;
pub mod ffprobe;
pub mod tools;

// Re-exports
pub use command::{ToolCommand, ToolOutput, DEFAULT_TIMEOUT};
pub use error::{Error, Result};
pub use ffprobe::FfprobeSource;
pub use tools::{check_tool_with_arg, check_tools, get_tool_path, require_tool, ToolInfo};
