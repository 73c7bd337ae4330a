//! Media catalog scanner.
//!
//! Walks a root directory, keeps the files whose extension marks them as
//! images or videos, resolves their dimensions and classifies each one. The
//! result is a [`Catalog`] sorted case-insensitively by filename.

pub mod classifier;
pub mod resolver;
pub mod walk;

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use mediacatalog_common::paths::{media_kind, relative_posix};
use mediacatalog_common::MediaRecord;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{CatalogError, Result};
use crate::manifest::MANIFEST_NAME;

pub use classifier::{classify, OrientationClassifier, DEFAULT_SQUARE_POLICY};
pub use resolver::DimensionResolver;
pub use walk::walk;

/// Options that shape which files are considered.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Enter symlinked directories, with cycle detection.
    pub follow_symlinks: bool,
    /// Bare file names that are never cataloged, wherever they appear.
    pub reserved_names: HashSet<String>,
}

impl ScanOptions {
    /// Options with the manifest name and the running executable's name reserved.
    pub fn with_defaults(follow_symlinks: bool) -> Self {
        let mut reserved_names = HashSet::from([MANIFEST_NAME.to_string()]);
        if let Some(name) = current_exe_name() {
            reserved_names.insert(name);
        }
        Self {
            follow_symlinks,
            reserved_names,
        }
    }

    fn is_reserved(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| self.reserved_names.contains(n))
    }
}

fn current_exe_name() -> Option<String> {
    std::env::current_exe()
        .ok()?
        .file_name()?
        .to_str()
        .map(String::from)
}

/// Builds catalogs from directory trees.
pub struct CatalogBuilder {
    options: ScanOptions,
    resolver: DimensionResolver,
    classifier: OrientationClassifier,
}

impl CatalogBuilder {
    /// Create a builder from explicit parts.
    pub fn new(
        options: ScanOptions,
        resolver: DimensionResolver,
        classifier: OrientationClassifier,
    ) -> Self {
        Self {
            options,
            resolver,
            classifier,
        }
    }

    /// Create a builder from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        let mut options = ScanOptions::with_defaults(config.scan.follow_symlinks);
        options
            .reserved_names
            .extend(config.scan.ignore_names.iter().cloned());

        Self::new(
            options,
            DimensionResolver::from_config(&config.probe),
            OrientationClassifier::new(config.classify.square),
        )
    }

    /// Scan `root` and classify every media file below it.
    ///
    /// `root` is expected to be an existing directory (see [`resolve_root`]).
    /// Per-file failures never abort the scan; such files are recorded as
    /// `unknown`.
    pub fn build(&self, root: &Path) -> Catalog {
        info!(
            root = %root.display(),
            follow_symlinks = self.options.follow_symlinks,
            "Scanning directory"
        );

        let mut records = Vec::new();
        for path in walk(root, self.options.follow_symlinks) {
            let Some(kind) = media_kind(&path) else {
                continue;
            };
            if self.options.is_reserved(&path) {
                debug!(path = %path.display(), "skipping reserved file");
                continue;
            }

            let filename = match relative_posix(root, &path) {
                Ok(name) => name,
                Err(e) => {
                    warn!("Skipping {:?}: {}", path, e);
                    continue;
                }
            };

            let dims = self.resolver.resolve(&path, kind);
            let orientation = self.classifier.classify(dims);
            debug!(%filename, %kind, %orientation, "classified");
            records.push(MediaRecord::new(filename, orientation));
        }

        let catalog = Catalog::new(records);
        info!(
            files = catalog.len(),
            orientations = ?catalog.summary(),
            "Scan complete"
        );
        catalog
    }
}

/// Sorted collection of media records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<MediaRecord>,
}

impl Catalog {
    /// Build a catalog, sorting case-insensitively by filename.
    ///
    /// The sort is stable, so names that differ only by case keep their
    /// input order relative to each other.
    pub fn new(mut records: Vec<MediaRecord>) -> Self {
        records.sort_by_cached_key(|r| r.filename.to_lowercase());
        Self { records }
    }

    pub fn records(&self) -> &[MediaRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record counts per orientation label.
    pub fn summary(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for record in &self.records {
            *counts.entry(record.orientation.to_string()).or_insert(0) += 1;
        }
        counts
    }
}

/// Validate the scan root and return its canonical absolute form.
///
/// # Errors
///
/// [`CatalogError::RootNotFound`] when nothing exists at `path`, and
/// [`CatalogError::NotADirectory`] when it is not a directory.
pub fn resolve_root(path: &Path) -> Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };

    if !absolute.exists() {
        return Err(CatalogError::RootNotFound(absolute));
    }
    if !absolute.is_dir() {
        return Err(CatalogError::NotADirectory(absolute));
    }

    Ok(absolute.canonicalize().unwrap_or(absolute))
}
