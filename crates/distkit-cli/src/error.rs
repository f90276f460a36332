//! Error handling for the distkit CLI.
//!
//! Library crates each own an error enum; [`CliError`] wraps them via
//! `#[from]` so commands can use `?` throughout. [`ResultExt`] attaches paths,
//! hints and context. `main` renders the final error through miette.
//!
//! # Example
//!
//! ```rust,no_run
//! use distkit_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_readme(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path)
//!         .with_path(path)
//!         .with_hint("Set `readme` in distkit.toml")
//! }
//! ```

mod miette;

pub use self::miette::cli_error_to_miette;

use std::path::PathBuf;

use distkit_bundler::BundleError;
use distkit_config::ConfigError;
use distkit_npm::PackageError;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration, descriptor or entry point problems
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Single-file bundle failures
    #[error("Bundle error: {0}")]
    Bundle(#[from] BundleError),

    /// npm package synthesis failures
    #[error("Package error: {0}")]
    Package(#[from] PackageError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),

    #[error("{0}")]
    Custom(String),
}

pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Turn a not-found I/O error into [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Append a hint line to the error message.
    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T>;

    /// Prefix the error message.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            other => other,
        })
    }

    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}\n\nHint: {}", err, hint))
        })
    }

    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}: {}", msg, err))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_converts() {
        let err: CliError = ConfigError::DescriptorNotFound(PathBuf::from("deno.json")).into();
        assert!(matches!(err, CliError::Config(_)));
        assert!(err.to_string().contains("deno.json"));
    }

    #[test]
    fn package_error_converts() {
        let err: CliError = PackageError::engine("dnt", "type error").into();
        assert!(matches!(err, CliError::Package(_)));
        assert_eq!(err.to_string(), "Package error: dnt failed: type error");
    }

    #[test]
    fn bundle_error_converts() {
        let err: CliError = BundleError::engine("esbuild", "Could not resolve \"./missing\"").into();
        assert!(matches!(err, CliError::Bundle(_)));
    }

    #[test]
    fn with_path_maps_not_found() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));

        let err = result.with_path("src/readme.md").unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(ref p) if p == &PathBuf::from("src/readme.md")));
    }

    #[test]
    fn with_path_keeps_other_errors() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));

        let err = result.with_path("npm").unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }

    #[test]
    fn with_hint_appends_hint() {
        let result: std::result::Result<(), ConfigError> =
            Err(ConfigError::DescriptorNotFound(PathBuf::from("deno.json")));

        let msg = result.with_hint("Pass --cwd").unwrap_err().to_string();
        assert!(msg.contains("project descriptor not found"));
        assert!(msg.ends_with("Hint: Pass --cwd"));
    }

    #[test]
    fn context_prefixes_message() {
        let result: std::result::Result<(), ConfigError> =
            Err(ConfigError::InvalidValue("unknown field `outdir`".to_string()));

        let msg = result.context("Failed to load distkit.toml").unwrap_err().to_string();
        assert!(msg.starts_with("Failed to load distkit.toml: "));
    }
}
