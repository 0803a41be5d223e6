use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::domain::MediaKind;
use crate::error::{PrepError, Result};

/// Direct children of `root` whose extension belongs to `kind`, in the order
/// the filesystem lists them. Subdirectories are skipped, never entered.
pub fn scan(root: &Path, kind: MediaKind) -> Result<Vec<PathBuf>> {
    let scan_err = |source: io::Error| PrepError::Scan {
        path: root.to_path_buf(),
        source,
    };

    let md = std::fs::metadata(root).map_err(scan_err)?;
    if !md.is_dir() {
        return Err(scan_err(io::Error::other("not a directory")));
    }

    let mut candidates = Vec::new();
    for e in WalkDir::new(root).min_depth(1).max_depth(1).follow_links(false) {
        let e = e.map_err(|e| scan_err(e.into()))?;
        if e.file_type().is_dir() {
            continue;
        }
        let matches = e
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| kind.matches_extension(ext));
        if matches {
            candidates.push(e.into_path());
        }
    }
    Ok(candidates)
}
