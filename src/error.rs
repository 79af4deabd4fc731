use std::fmt;

#[derive(Debug)]
pub enum DiffMergeError {
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    /// An encoded diff path that the decoder could not parse
    MalformedPath {
        offset: usize,
        reason: String,
    },
    /// A merge control that does not fit the documents it is applied to
    InvalidMergeAction(String),
    ConfigError(String),
    Generic(String),
}

impl fmt::Display for DiffMergeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiffMergeError::IoError(e) => write!(f, "IO error: {}", e),
            DiffMergeError::JsonError(e) => write!(f, "JSON error: {}", e),
            DiffMergeError::MalformedPath { offset, reason } => {
                write!(f, "Malformed diff path at byte {}: {}", offset, reason)
            }
            DiffMergeError::InvalidMergeAction(e) => write!(f, "Invalid merge action: {}", e),
            DiffMergeError::ConfigError(e) => write!(f, "Config error: {}", e),
            DiffMergeError::Generic(e) => write!(f, "Generic error: {}", e),
        }
    }
}

impl std::error::Error for DiffMergeError {}

impl From<std::io::Error> for DiffMergeError {
    fn from(err: std::io::Error) -> Self {
        DiffMergeError::IoError(err)
    }
}

impl From<serde_json::Error> for DiffMergeError {
    fn from(err: serde_json::Error) -> Self {
        DiffMergeError::JsonError(err)
    }
}

impl From<envy::Error> for DiffMergeError {
    fn from(err: envy::Error) -> Self {
        DiffMergeError::ConfigError(err.to_string())
    }
}
