//! Error types for descriptor loading, registry construction and configuration.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Descriptor errors
    #[error("project descriptor not found: {}", .0.display())]
    DescriptorNotFound(PathBuf),

    #[error("invalid project descriptor {}: {reason}", .path.display())]
    InvalidDescriptor { path: PathBuf, reason: String },

    // Registry errors
    #[error("entry point has no file stem: {0}")]
    InvalidEntry(String),

    #[error("duplicate entry point name '{name}': {first} and {second}")]
    DuplicateEntry {
        name: String,
        first: String,
        second: String,
    },

    #[error("entry point name '{name}' is reserved ({path})")]
    ReservedEntryName { name: String, path: String },

    #[error("entry point not found: {}", .0.display())]
    EntryNotFound(PathBuf),

    // Config parsing/loading errors
    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
