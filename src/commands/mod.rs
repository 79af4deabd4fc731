pub mod config;
pub mod merge;
pub mod path;
pub mod render;
pub mod stats;

use clap::Args;

use crate::config::Config;
use crate::error::DiffMergeError;
use crate::utils::read_document;

/// The two documents every comparing subcommand takes.
#[derive(Debug, Args)]
pub struct DocumentArgs {
    /// Original document, or `-` for stdin
    pub original: String,
    /// Modified document, or `-` for stdin
    pub modified: String,
}

impl DocumentArgs {
    /// Reads both documents, enforcing the configured size limit.
    pub fn read(&self) -> Result<(String, String), DiffMergeError> {
        if self.original == "-" && self.modified == "-" {
            return Err(DiffMergeError::Generic(
                "only one document can be read from stdin".to_string(),
            ));
        }
        let limit = Config::get().max_input_bytes();
        let original = read_document(&self.original, limit)?;
        let modified = read_document(&self.modified, limit)?;
        Ok((original, modified))
    }
}
