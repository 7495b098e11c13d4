//! Error types for quire operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while assembling a document.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A symbolic constant is not present in the backend's constant space.
    /// Indicates a typo or an unsupported feature; aborts the emission.
    #[error("unknown constant: {0}")]
    UnknownConstant(String),

    /// No document session could be obtained or created.
    #[error("backend unavailable: {0}")]
    BackendUnavailable(String),

    /// The target path exists but cannot be read.
    #[error("cannot read document: {0}")]
    FileAccessDenied(PathBuf),

    /// A backend call failed mid-emission.
    #[error("backend error: {0}")]
    Backend(String),

    /// The input node tree could not be deserialized.
    #[error("invalid node tree: {0}")]
    Tree(String),
}

pub type Result<T> = std::result::Result<T, Error>;
