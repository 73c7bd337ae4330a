//! Path utilities for detecting media kinds by extension.
//!
//! This module provides the extension tables the catalog filters on, plus the
//! helper that turns a scanned path into the forward-slash filename stored in
//! the manifest.

use crate::{Error, MediaKind, Result};
use std::path::{Component, Path};

/// List of supported image file extensions.
const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "tiff", "tif", "avif", "heic", "heif", "ico",
];

/// List of supported video file extensions.
const VIDEO_EXTENSIONS: &[&str] = &[
    "mp4", "webm", "mov", "mkv", "avi", "wmv", "m4v", "mpg", "mpeg", "3gp", "flv", "ogg",
];

/// Lower-cased extension of `path`, without the leading dot.
///
/// Returns `None` for paths without an extension, for dotfiles such as
/// `.png`, and for extensions that are not valid UTF-8.
pub fn lower_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Determine the media kind of a path from its extension.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use mediacatalog_common::{paths::media_kind, MediaKind};
///
/// assert_eq!(media_kind(Path::new("clip.MOV")), Some(MediaKind::Video));
/// assert_eq!(media_kind(Path::new("scan.tif")), Some(MediaKind::Image));
/// assert_eq!(media_kind(Path::new("list.json")), None);
/// ```
pub fn media_kind(path: &Path) -> Option<MediaKind> {
    let ext = lower_extension(path)?;
    if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        Some(MediaKind::Image)
    } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
        Some(MediaKind::Video)
    } else {
        None
    }
}

/// Check if a path has an image file extension.
pub fn is_image_file(path: &Path) -> bool {
    media_kind(path) == Some(MediaKind::Image)
}

/// Check if a path has a video file extension.
pub fn is_video_file(path: &Path) -> bool {
    media_kind(path) == Some(MediaKind::Video)
}

/// Express `path` relative to `root` with forward slashes, whatever the host
/// separator is.
///
/// # Errors
///
/// Returns [`Error::NotUnderRoot`] when `path` does not start with `root` or
/// when the remainder contains `..` or another root, and
/// [`Error::NonUtf8Name`] when a component is not valid UTF-8. Lossy
/// conversion would map distinct names onto the same filename.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use mediacatalog_common::paths::relative_posix;
///
/// let rel = relative_posix(Path::new("/photos"), Path::new("/photos/2021/beach.png")).unwrap();
/// assert_eq!(rel, "2021/beach.png");
/// ```
pub fn relative_posix(root: &Path, path: &Path) -> Result<String> {
    let rel = path
        .strip_prefix(root)
        .map_err(|_| Error::not_under_root(path, root))?;

    let mut parts = Vec::new();
    for component in rel.components() {
        match component {
            Component::Normal(part) => {
                let part = part.to_str().ok_or_else(|| Error::non_utf8_name(path))?;
                parts.push(part);
            }
            Component::CurDir => {}
            _ => return Err(Error::not_under_root(path, root)),
        }
    }

    Ok(parts.join("/"))
}
