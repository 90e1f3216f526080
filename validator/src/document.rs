use std::fs;
use std::path::Path;

use toml::Table;
use tracing::debug;

use crate::errors::DocumentError;

/// A successfully parsed TOML document. Only the top-level table is kept;
/// values stay as arbitrary TOML (tables, arrays, scalars) since nothing
/// beyond syntax is checked.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    table: Table,
}

impl Document {
    /// Parse `text` as a TOML document.
    pub fn parse(text: &str) -> Result<Self, DocumentError> {
        let table: Table = toml::from_str(text).map_err(|err| DocumentError::Syntax { err })?;
        debug!("parsed document with {} top-level keys", table.len());
        Ok(Self { table })
    }

    /// Read the file at `path` and parse it as a TOML document.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|err| DocumentError::Read {
            path: path.to_path_buf(),
            err,
        })?;
        debug!("read {} bytes from \"{}\"", text.len(), path.display());
        Self::parse(&text)
    }

    /// Top-level key names in the order they appear in the file.
    pub fn top_level_keys(&self) -> Vec<&str> {
        self.table.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
