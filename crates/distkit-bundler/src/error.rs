//! Error types for bundling and minification.

use std::path::PathBuf;

use thiserror::Error;

use crate::process::ToolError;

pub type Result<T> = std::result::Result<T, BundleError>;

#[derive(Debug, Error)]
pub enum BundleError {
    /// The engine reported a failure (syntax error, unresolved import,
    /// invalid option combination, ...).
    #[error("{engine} failed: {message}")]
    Engine { engine: String, message: String },

    /// A command-line engine could not be run or exited unsuccessfully.
    #[error(transparent)]
    Tool(#[from] ToolError),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BundleError {
    pub fn engine(engine: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Engine {
            engine: engine.into(),
            message: message.into(),
        }
    }
}
