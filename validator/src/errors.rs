use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The one failure category of a validation run. I/O problems and syntax
/// problems both land here and render through the same report path.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Unable to open file located at \"{path}\": {err}")]
    Read { path: PathBuf, err: io::Error },
    #[error("{err}")]
    Syntax { err: toml::de::Error },
}
