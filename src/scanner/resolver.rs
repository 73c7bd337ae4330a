//! Dimension resolution for the scanner.
//!
//! Routes each file to the right [`DimensionSource`] for its kind and turns
//! every failure into "unknown". Nothing a source reports escapes this
//! module as an error.

use std::path::Path;
use std::time::Duration;

use mediacatalog_av::FfprobeSource;
use mediacatalog_common::{Dimensions, MediaKind};
use mediacatalog_probe::{default_image_source, DimensionSource};
use tracing::debug;

use crate::config::ProbeConfig;

/// Per-kind dispatcher over the available dimension sources.
pub struct DimensionResolver {
    images: Box<dyn DimensionSource>,
    videos: Box<dyn DimensionSource>,
}

impl DimensionResolver {
    /// Create a resolver from explicit image and video sources.
    pub fn new(images: Box<dyn DimensionSource>, videos: Box<dyn DimensionSource>) -> Self {
        Self { images, videos }
    }

    /// Build the standard resolver: optional decoder then header sniffers for
    /// images, ffprobe for videos.
    pub fn from_config(config: &ProbeConfig) -> Self {
        let images = default_image_source(config.image_decoder);
        let videos = FfprobeSource::discover(
            config.ffprobe_path.as_deref(),
            Duration::from_secs(config.timeout_secs),
        );
        Self::new(Box::new(images), Box::new(videos))
    }

    /// Resolve the dimensions of `path`, or `None` when they cannot be
    /// determined for any reason.
    pub fn resolve(&self, path: &Path, kind: MediaKind) -> Option<Dimensions> {
        let source = match kind {
            MediaKind::Image => &self.images,
            MediaKind::Video => &self.videos,
        };

        match source.dimensions(path) {
            Ok(dims) => {
                debug!(path = %path.display(), %kind, %dims, "resolved dimensions");
                Some(dims)
            }
            Err(e) => {
                debug!(
                    path = %path.display(),
                    %kind,
                    source = source.name(),
                    error = %e,
                    "dimensions unknown"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediacatalog_probe::{HeaderSniffer, ProbeError};

    struct NoVideo;

    impl DimensionSource for NoVideo {
        fn name(&self) -> &'static str {
            "no-video"
        }

        fn supports(&self, _path: &Path) -> bool {
            true
        }

        fn dimensions(&self, _path: &Path) -> mediacatalog_probe::Result<Dimensions> {
            Err(ProbeError::backend("no-video", "tool not found: ffprobe"))
        }
    }

    struct FixedVideo;

    impl DimensionSource for FixedVideo {
        fn name(&self) -> &'static str {
            "fixed-video"
        }

        fn supports(&self, _path: &Path) -> bool {
            true
        }

        fn dimensions(&self, _path: &Path) -> mediacatalog_probe::Result<Dimensions> {
            Ok(Dimensions::new(1280, 720).unwrap())
        }
    }

    fn gif(width: u16, height: u16) -> Vec<u8> {
        let mut data = b"GIF89a".to_vec();
        data.extend_from_slice(&width.to_le_bytes());
        data.extend_from_slice(&height.to_le_bytes());
        data.extend_from_slice(&[0, 0, 0]);
        data
    }

    #[test]
    fn test_image_uses_image_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("anim.gif");
        std::fs::write(&path, gif(30, 20)).unwrap();

        let resolver = DimensionResolver::new(Box::new(HeaderSniffer::new()), Box::new(NoVideo));
        assert_eq!(resolver.resolve(&path, MediaKind::Image), Dimensions::new(30, 20));
    }

    #[test]
    fn test_video_uses_video_source() {
        let resolver = DimensionResolver::new(Box::new(HeaderSniffer::new()), Box::new(FixedVideo));
        assert_eq!(
            resolver.resolve(Path::new("clip.mp4"), MediaKind::Video),
            Dimensions::new(1280, 720)
        );
    }

    #[test]
    fn test_failures_become_unknown() {
        let dir = tempfile::tempdir().unwrap();
        let corrupt = dir.path().join("corrupt.png");
        std::fs::write(&corrupt, b"\x89PNG garbage").unwrap();

        let resolver = DimensionResolver::new(Box::new(HeaderSniffer::new()), Box::new(NoVideo));
        assert_eq!(resolver.resolve(&corrupt, MediaKind::Image), None);
        assert_eq!(resolver.resolve(&dir.path().join("missing.png"), MediaKind::Image), None);
        assert_eq!(resolver.resolve(Path::new("clip.mov"), MediaKind::Video), None);
        // No sniffer for webp without the decoder.
        assert_eq!(resolver.resolve(&dir.path().join("a.webp"), MediaKind::Image), None);
    }

    #[test]
    fn test_from_config_without_ffprobe() {
        let config = ProbeConfig {
            ffprobe_path: Some("/nonexistent/ffprobe-12345".into()),
            timeout_secs: 1,
            image_decoder: false,
        };
        let resolver = DimensionResolver::from_config(&config);
        // Either no ffprobe is installed, or it cannot read a file that does
        // not exist; both are unknown.
        assert_eq!(
            resolver.resolve(Path::new("/nonexistent/clip.mp4"), MediaKind::Video),
            None
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_video_timeout_becomes_unknown() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let stub = dir.path().join("ffprobe");
        std::fs::write(&stub, "#!/bin/sh\nsleep 10\necho 1280x720\n").unwrap();
        std::fs::set_permissions(&stub, std::fs::Permissions::from_mode(0o755)).unwrap();

        let videos = FfprobeSource::new(stub, Duration::from_millis(200));
        let resolver = DimensionResolver::new(Box::new(HeaderSniffer::new()), Box::new(videos));
        assert_eq!(resolver.resolve(Path::new("clip.mp4"), MediaKind::Video), None);
    }
}
