//! The `list.json` manifest.
//!
//! A pretty-printed JSON array of `{ "filename", "orientation" }` objects in
//! catalog order, terminated by a newline. Identical trees produce identical
//! bytes.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{CatalogError, Result};
use crate::scanner::Catalog;

/// File name of the manifest, written at the scan root.
pub const MANIFEST_NAME: &str = "list.json";

/// Render the catalog as manifest text.
pub fn to_json(catalog: &Catalog) -> Result<String> {
    let mut json = serde_json::to_string_pretty(catalog.records())?;
    json.push('\n');
    Ok(json)
}

/// Write the manifest into `root`, replacing any previous one.
pub fn write_manifest(root: &Path, catalog: &Catalog) -> Result<PathBuf> {
    let path = root.join(MANIFEST_NAME);
    let json = to_json(catalog)?;

    std::fs::write(&path, json).map_err(|source| CatalogError::Write {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), records = catalog.len(), "Wrote manifest");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediacatalog_common::{MediaRecord, Orientation};

    #[test]
    fn test_to_json_shape() {
        let catalog = Catalog::new(vec![
            MediaRecord::new("b.mp4", Orientation::Unknown),
            MediaRecord::new("a/x.png", Orientation::Landscape),
        ]);

        let json = to_json(&catalog).unwrap();
        let expected = r#"[
  {
    "filename": "a/x.png",
    "orientation": "landscape"
  },
  {
    "filename": "b.mp4",
    "orientation": "unknown"
  }
]
"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_empty_catalog() {
        assert_eq!(to_json(&Catalog::default()).unwrap(), "[]\n");
    }

    #[test]
    fn test_write_manifest_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_NAME), "stale").unwrap();

        let catalog = Catalog::new(vec![MediaRecord::new("p.gif", Orientation::Portrait)]);
        let path = write_manifest(dir.path(), &catalog).unwrap();

        assert_eq!(path, dir.path().join(MANIFEST_NAME));
        let written = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<MediaRecord> = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, catalog.records());
    }

    #[test]
    fn test_write_manifest_failure() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-dir");
        let err = write_manifest(&missing, &Catalog::default()).unwrap_err();
        assert!(matches!(err, CatalogError::Write { .. }));
        assert_eq!(err.exit_code(), 1);
    }
}
