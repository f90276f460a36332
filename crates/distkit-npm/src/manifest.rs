//! The published package manifest (`package.json`).

use distkit_config::ProjectDescriptor;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::scripts::ScriptTable;

/// Manifest handed to the packaging engine.
///
/// Built from an explicit field whitelist of the descriptor; any descriptor
/// key not listed here never reaches the published package.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bugs: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_dependencies: Option<IndexMap<String, String>>,
    pub scripts: ScriptTable,
}

impl PackageManifest {
    pub fn from_descriptor(descriptor: &ProjectDescriptor, scripts: ScriptTable) -> Self {
        Self {
            name: descriptor.name.clone(),
            version: descriptor.version.clone(),
            description: descriptor.description.clone(),
            author: descriptor.author.clone(),
            license: descriptor.license.clone(),
            repository: descriptor.repository.clone(),
            bugs: descriptor.bug_tracker.clone(),
            dev_dependencies: descriptor.dev_dependencies.clone(),
            scripts,
        }
    }
}
