//! FFprobe-based video dimension probing.

use std::path::{Path, PathBuf};
use std::time::Duration;

use mediacatalog_common::paths::is_video_file;
use mediacatalog_common::Dimensions;
use mediacatalog_probe::{DimensionSource, ProbeError};

use crate::command::ToolCommand;
use crate::tools::get_tool_path;
use crate::{Error, Result};

const TOOL: &str = "ffprobe";

/// Asks ffprobe for the width and height of the first video stream.
#[derive(Debug, Clone)]
pub struct FfprobeSource {
    program: Option<PathBuf>,
    timeout: Duration,
}

impl FfprobeSource {
    /// Use an explicit ffprobe executable.
    pub fn new(program: PathBuf, timeout: Duration) -> Self {
        Self {
            program: Some(program),
            timeout,
        }
    }

    /// Locate ffprobe (configured path first, then `PATH`).
    ///
    /// A missing executable is not an error here: every probe will simply
    /// report [`Error::ToolNotFound`].
    pub fn discover(config_path: Option<&Path>, timeout: Duration) -> Self {
        let program = match get_tool_path(TOOL, config_path) {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::info!("{e}; video orientation will be unknown");
                None
            }
        };
        Self { program, timeout }
    }

    /// Probe a video file.
    pub fn probe(&self, path: &Path) -> Result<Dimensions> {
        let program = self
            .program
            .clone()
            .ok_or_else(|| Error::tool_not_found(TOOL))?;

        let output = ToolCommand::new(program)
            .args([
                "-v",
                "error",
                "-select_streams",
                "v:0",
                "-show_entries",
                "stream=width,height",
                "-of",
                "csv=s=x:p=0",
            ])
            .arg(path.to_string_lossy())
            .timeout(self.timeout)
            .execute_blocking()?;

        parse_dimensions(&output.stdout)
    }
}

impl DimensionSource for FfprobeSource {
    fn name(&self) -> &'static str {
        TOOL
    }

    fn supports(&self, path: &Path) -> bool {
        is_video_file(path)
    }

    fn dimensions(&self, path: &Path) -> mediacatalog_probe::Result<Dimensions> {
        self.probe(path).map_err(|e| ProbeError::backend(TOOL, e))
    }
}

/// Parse `WIDTHxHEIGHT` from the first non-empty line of ffprobe output.
///
/// Some builds append a trailing separator (`1920x1080x`); anything after
/// the height is ignored.
fn parse_dimensions(stdout: &str) -> Result<Dimensions> {
    let line = stdout
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .ok_or_else(|| Error::parse_error(TOOL, "no video stream in output"))?;

    let mut parts = line.split('x');
    let width = parts.next().and_then(|w| w.trim().parse::<u32>().ok());
    let height = parts.next().and_then(|h| h.trim().parse::<u32>().ok());

    match (width, height) {
        (Some(w), Some(h)) => Dimensions::new(w, h)
            .ok_or_else(|| Error::parse_error(TOOL, format!("zero-sized stream: {line}"))),
        _ => Err(Error::parse_error(TOOL, format!("unexpected output: {line}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::DEFAULT_TIMEOUT;

    #[test]
    fn test_parse_dimensions() {
        let dims = parse_dimensions("1920x1080\n").unwrap();
        assert_eq!((dims.width, dims.height), (1920, 1080));

        let dims = parse_dimensions("\n  720x1280x\n").unwrap();
        assert_eq!((dims.width, dims.height), (720, 1280));
    }

    #[test]
    fn test_parse_dimensions_rejects_garbage() {
        assert!(parse_dimensions("").is_err());
        assert!(parse_dimensions("N/AxN/A").is_err());
        assert!(parse_dimensions("1920").is_err());
        assert!(parse_dimensions("0x1080").is_err());
        assert!(parse_dimensions("widthxheight").is_err());
    }

    #[test]
    fn test_missing_tool_is_error() {
        let source = FfprobeSource {
            program: None,
            timeout: DEFAULT_TIMEOUT,
        };
        let err = source.probe(Path::new("clip.mp4")).unwrap_err();
        assert!(matches!(err, Error::ToolNotFound { .. }));
    }

    #[test]
    fn test_nonexistent_executable_is_error() {
        let source =
            FfprobeSource::new(PathBuf::from("/nonexistent/ffprobe-12345"), DEFAULT_TIMEOUT);
        assert!(source.dimensions(Path::new("clip.mp4")).is_err());
    }

    #[test]
    fn test_supports_videos_only() {
        let source = FfprobeSource::new(PathBuf::from("ffprobe"), DEFAULT_TIMEOUT);
        assert!(source.supports(Path::new("clip.MKV")));
        assert!(!source.supports(Path::new("photo.png")));
    }

    #[cfg(unix)]
    #[test]
    fn test_probe_with_stub_executable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let stub = dir.path().join("ffprobe");
        std::fs::write(&stub, "#!/bin/sh\necho 640x360\n").unwrap();
        std::fs::set_permissions(&stub, std::fs::Permissions::from_mode(0o755)).unwrap();

        let source = FfprobeSource::new(stub, DEFAULT_TIMEOUT);
        let dims = source.probe(Path::new("clip.mp4")).unwrap();
        assert_eq!((dims.width, dims.height), (640, 360));
    }

    #[cfg(unix)]
    #[test]
    fn test_probe_timeout_kills_slow_tool() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let stub = dir.path().join("ffprobe");
        std::fs::write(&stub, "#!/bin/sh\nsleep 10\necho 640x360\n").unwrap();
        std::fs::set_permissions(&stub, std::fs::Permissions::from_mode(0o755)).unwrap();

        let source = FfprobeSource::new(stub, Duration::from_millis(200));
        let started = std::time::Instant::now();
        let err = source.probe(Path::new("clip.mp4")).unwrap_err();
        assert!(matches!(err, Error::Timeout { .. }), "{err:?}");
        assert!(started.elapsed() < Duration::from_secs(5));
        assert!(source.dimensions(Path::new("clip.mp4")).is_err());
    }
}
