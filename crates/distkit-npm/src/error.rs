//! Error types for package synthesis.

use std::path::PathBuf;

use distkit_bundler::ToolError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PackageError>;

#[derive(Debug, Error)]
pub enum PackageError {
    #[error("{}: {source}", .path.display())]
    Fs {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The packaging engine reported a failure.
    #[error("{engine} failed: {message}")]
    Engine { engine: String, message: String },

    /// The packaging engine could not be run or exited unsuccessfully.
    #[error(transparent)]
    Tool(#[from] ToolError),

    #[error("scripts '{first}' and '{second}' both write {path}")]
    OutputCollision {
        path: String,
        first: String,
        second: String,
    },

    #[error("refusing to clear {}: {reason}", .path.display())]
    UnsafeOutputDir { path: PathBuf, reason: String },

    #[error("failed to serialize {what}: {source}")]
    Serialize {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl PackageError {
    pub(crate) fn fs(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Fs { path, source }
    }

    pub fn engine(engine: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Engine {
            engine: engine.into(),
            message: message.into(),
        }
    }

    fn unsafe_dir(path: PathBuf, reason: &str) -> Self {
        Self::UnsafeOutputDir {
            path,
            reason: reason.to_string(),
        }
    }

    pub(crate) fn not_a_directory(path: PathBuf) -> Self {
        Self::unsafe_dir(path, "path exists but is not a directory")
    }

    pub(crate) fn contains(path: PathBuf, what: &str) -> Self {
        Self::unsafe_dir(path, &format!("it contains the {what}"))
    }
}
