//! Project descriptor reader.
//!
//! The descriptor is the single source of truth for the identity fields of every
//! emitted manifest. It is read once per run and never mutated afterwards.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{ConfigError, Result};

/// Package manager the packaging engine should use when installing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl PackageManager {
    /// Get the command name for this package manager.
    pub fn command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

/// Source project metadata, as authored in `deno.json`.
///
/// Keys the pipeline does not know about (tasks, import maps, formatter
/// settings, ...) are dropped on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDescriptor {
    pub name: String,

    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// String or `{ name, email, url }` object, kept as authored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<Value>,

    #[serde(rename = "bugs", default, skip_serializing_if = "Option::is_none")]
    pub bug_tracker: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_dependencies: Option<IndexMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compiler_options: Option<Value>,

    #[serde(
        rename = "node_packageManager",
        alias = "packageManager",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub package_manager: Option<PackageManager>,
}

impl ProjectDescriptor {
    /// Load the descriptor from a JSON file.
    ///
    /// # Errors
    ///
    /// - `DescriptorNotFound` if the file does not exist
    /// - `InvalidDescriptor` for malformed JSON or a missing/empty `name` or `version`
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => ConfigError::DescriptorNotFound(path.to_path_buf()),
            _ => ConfigError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let descriptor = Self::from_json(&content, path)?;
        debug!(
            name = %descriptor.name,
            version = %descriptor.version,
            "loaded project descriptor from {}",
            path.display()
        );
        Ok(descriptor)
    }

    /// Parse descriptor JSON. `origin` is only used in error messages.
    pub fn from_json(content: &str, origin: &Path) -> Result<Self> {
        let descriptor: Self =
            serde_json::from_str(content).map_err(|e| ConfigError::InvalidDescriptor {
                path: origin.to_path_buf(),
                reason: e.to_string(),
            })?;
        descriptor.validate(origin)?;
        Ok(descriptor)
    }

    /// The package manager declared by the descriptor, or npm.
    pub fn package_manager(&self) -> PackageManager {
        self.package_manager.unwrap_or_default()
    }

    // `name` ends up inside shell commands and output file names
    fn validate(&self, origin: &Path) -> Result<()> {
        for (field, value) in [("name", &self.name), ("version", &self.version)] {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidDescriptor {
                    path: origin.to_path_buf(),
                    reason: format!("field '{field}' must not be empty"),
                });
            }
        }
        Ok(())
    }
}
