//! gettext PO catalogs: model, parser and serializer.
//!
//! ## Module Structure
//!
//! - `catalog`: `Catalog`, `Header` and `MessageEntry`
//! - `escape`: PO string literal escaping
//! - `parser`: tolerant line-oriented parser
//! - `serializer`: canonical PO rendering

mod catalog;
mod escape;
mod parser;
mod serializer;

use std::{fs, io::ErrorKind, path::Path};

pub use catalog::{Catalog, Header, MessageEntry, Plural};
pub use parser::{parse, parse_bytes};
pub use serializer::serialize;

use crate::error::{Error, Result};

/// Read and parse a PO file.
pub fn read_catalog(path: &Path) -> Result<Catalog> {
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => Error::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::FileRead {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let catalog = parse_bytes(bytes)?;
    tracing::debug!(
        path = %path.display(),
        entries = catalog.len(),
        language = catalog.language(),
        "parsed PO file"
    );
    Ok(catalog)
}

/// Serialize a catalog and overwrite `path` with the result.
pub fn write_catalog(path: &Path, catalog: &Catalog) -> Result<()> {
    fs::write(path, serialize(catalog)).map_err(|source| Error::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), entries = catalog.len(), "wrote PO file");
    Ok(())
}
