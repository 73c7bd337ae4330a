//! Directory traversal.
//!
//! Two modes share one iterator type:
//!
//! - the default walk, backed by `walkdir`, which never descends through a
//!   symlinked directory but still yields symlinked files;
//! - the symlink-following walk, an explicit worklist guarded by a set of
//!   visited directory identities so cyclic link structures terminate.
//!
//! Unreadable directories are skipped in both modes.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};
use walkdir::WalkDir;

/// Walk `root`, yielding every regular file below it.
///
/// The sequence is lazy and one-shot. Its order is unspecified; callers sort.
pub fn walk(root: &Path, follow_symlinks: bool) -> Walk {
    if follow_symlinks {
        Walk::Following(SymlinkWalk::new(root))
    } else {
        Walk::Plain(WalkDir::new(root).follow_links(false).into_iter())
    }
}

/// Iterator returned by [`walk`].
pub enum Walk {
    Plain(walkdir::IntoIter),
    Following(SymlinkWalk),
}

impl Iterator for Walk {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        match self {
            Self::Plain(iter) => loop {
                let entry = match iter.next()? {
                    Ok(entry) => entry,
                    Err(e) => {
                        debug!(error = %e, "skipping unreadable entry");
                        continue;
                    }
                };

                let file_type = entry.file_type();
                if file_type.is_file() {
                    return Some(entry.into_path());
                }
                // Symlinks are not followed here; only those pointing at files count.
                if file_type.is_symlink() && entry.path().is_file() {
                    return Some(entry.into_path());
                }
            },
            Self::Following(iter) => iter.next(),
        }
    }
}

#[cfg(unix)]
type DirId = (u64, u64);

#[cfg(not(unix))]
type DirId = PathBuf;

#[cfg(unix)]
fn dir_id(path: &Path) -> std::io::Result<DirId> {
    use std::os::unix::fs::MetadataExt;

    let meta = fs::metadata(path)?;
    Ok((meta.dev(), meta.ino()))
}

#[cfg(not(unix))]
fn dir_id(path: &Path) -> std::io::Result<DirId> {
    fs::canonicalize(path)
}

/// Symlink-following traversal with cycle detection.
///
/// Each directory's identity is recorded before it is listed; a directory
/// seen before is dropped without listing its children again.
pub struct SymlinkWalk {
    pending: Vec<PathBuf>,
    files: Vec<PathBuf>,
    visited: HashSet<DirId>,
}

impl SymlinkWalk {
    pub fn new(root: &Path) -> Self {
        Self {
            pending: vec![root.to_path_buf()],
            files: Vec::new(),
            visited: HashSet::new(),
        }
    }

    /// List one directory, queueing its subdirectories and buffering its files.
    fn expand(&mut self, dir: PathBuf) {
        let id = match dir_id(&dir) {
            Ok(id) => id,
            Err(e) => {
                debug!(dir = %dir.display(), error = %e, "skipping unreadable directory");
                return;
            }
        };
        if !self.visited.insert(id) {
            trace!(dir = %dir.display(), "directory already visited");
            return;
        }

        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(dir = %dir.display(), error = %e, "skipping unreadable directory");
                return;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            // `metadata` follows links, so a symlinked directory counts as a directory.
            match fs::metadata(&path) {
                Ok(meta) if meta.is_dir() => self.pending.push(path),
                Ok(meta) if meta.is_file() => self.files.push(path),
                Ok(_) => {}
                Err(e) => trace!(path = %path.display(), error = %e, "dangling entry"),
            }
        }
    }
}

impl Iterator for SymlinkWalk {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            if let Some(file) = self.files.pop() {
                return Some(file);
            }
            let dir = self.pending.pop()?;
            self.expand(dir);
        }
    }
}
