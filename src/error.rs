use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Scan directory not found: {0}")]
    RootNotFound(PathBuf),
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("File is not valid UTF-8: {path}")]
    Encoding { path: PathBuf },
    #[error("Binary content in source file: {path}")]
    BinaryFile { path: PathBuf },
    #[error("Symlink cycle detected at {path}")]
    SymlinkCycle { path: PathBuf },
    #[error("Invalid exclusion pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
    #[error("Invalid config file {path}: {message}")]
    Config { path: PathBuf, message: String },
}
impl ExportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExportError::Io {
            path: path.into(),
            source,
        }
    }
}
