//! Syntax validation for TOML files: read a file, parse it as a generic
//! document, and surface either the top-level keys or the parser's
//! diagnostic.

use std::path::Path;

mod document;
mod errors;

pub use document::Document;
pub use errors::DocumentError;

/// Read the file at `path` and check that it parses as TOML.
///
/// `Ok` carries the parsed document whose top-level keys get reported.
/// `Err` carries the diagnostic for the failure report; read failures and
/// syntax failures surface the same way.
pub fn validate_file(path: impl AsRef<Path>) -> Result<Document, DocumentError> {
    Document::load(path)
}
