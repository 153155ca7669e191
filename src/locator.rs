//! Recursive discovery of `.po` files.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use glob::Pattern;
use rayon::prelude::*;
use serde::Serialize;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::po::read_catalog;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoFileInfo {
    pub path: String,
    /// Header `Language`, or `""` when the file cannot be parsed.
    pub language: String,
}

/// Find every `.po` file under `root` and report its header language.
///
/// The walk is depth-first and lexical within each directory, so results are
/// stable for a fixed layout. Paths matching any of `ignores` are skipped.
/// A file that fails to parse is still listed, with an empty language.
pub fn scan(root: &Path, ignores: &[Pattern]) -> Result<Vec<PoFileInfo>> {
    let metadata = fs::metadata(root).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => Error::DirectoryNotFound {
            path: root.to_path_buf(),
        },
        _ => Error::DirectoryScan {
            path: root.to_path_buf(),
            source,
        },
    })?;

    let paths = if metadata.is_dir() {
        collect_po_paths(root, ignores)?
    } else if is_po_file(root) {
        vec![root.to_path_buf()]
    } else {
        return Err(Error::DirectoryScan {
            path: root.to_path_buf(),
            source: io::Error::from(io::ErrorKind::NotADirectory),
        });
    };

    let files: Vec<PoFileInfo> = paths
        .par_iter()
        .map(|path| PoFileInfo {
            path: path.to_string_lossy().into_owned(),
            language: detect_language(path),
        })
        .collect();

    tracing::info!(root = %root.display(), count = files.len(), "scanned for PO files");
    Ok(files)
}

fn collect_po_paths(root: &Path, ignores: &[Pattern]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_ignored(entry.path(), ignores));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                let source = err
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::other("cannot read directory"));
                return Err(Error::DirectoryScan {
                    path: root.to_path_buf(),
                    source,
                });
            }
            Err(err) => {
                tracing::warn!("Cannot access path: {}", err);
                continue;
            }
        };

        if entry.file_type().is_file() && is_po_file(entry.path()) {
            paths.push(entry.into_path());
        }
    }

    Ok(paths)
}

fn is_ignored(path: &Path, ignores: &[Pattern]) -> bool {
    ignores.iter().any(|pattern| pattern.matches_path(path))
}

fn is_po_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("po"))
}

fn detect_language(path: &Path) -> String {
    match read_catalog(path) {
        Ok(catalog) => catalog.language().to_string(),
        Err(err) => {
            tracing::debug!(path = %path.display(), "language unavailable: {}", err);
            String::new()
        }
    }
}
