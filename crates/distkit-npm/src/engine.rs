//! Packaging engine seam and the request it receives.

use async_trait::async_trait;
use distkit_config::{EntryRegistry, PackageManager, ProjectDescriptor};
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::manifest::PackageManifest;

/// One entry point as the packaging engine expects it.
///
/// The main entry is positional; sub-entries become sub-path exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EntryPointSpec {
    Path(String),
    Named { name: String, path: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shims {
    pub deno: bool,
}

/// Everything the packaging engine is called with.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageBuildRequest {
    pub entry_points: Vec<EntryPointSpec>,
    pub out_dir: String,
    pub shims: Shims,
    pub package_manager: PackageManager,
    pub package: PackageManifest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compiler_options: Option<Value>,
    pub type_check: bool,
    pub declaration: bool,
    pub es_module: bool,
    pub script_module: bool,
    pub test: bool,
}

impl PackageBuildRequest {
    /// Request with the fixed build flags: runtime shims on, type checking off,
    /// declarations on, ES module output only, no test harness.
    pub fn new(
        registry: &EntryRegistry,
        out_dir: impl Into<String>,
        descriptor: &ProjectDescriptor,
        package: PackageManifest,
    ) -> Self {
        let entry_points = std::iter::once(EntryPointSpec::Path(registry.main().to_string()))
            .chain(registry.sub_entries().iter().map(|entry| EntryPointSpec::Named {
                name: format!("./{}", entry.logical_name()),
                path: entry.source_path().to_string(),
            }))
            .collect();

        Self {
            entry_points,
            out_dir: out_dir.into(),
            shims: Shims { deno: true },
            package_manager: descriptor.package_manager(),
            package,
            compiler_options: descriptor.compiler_options.clone(),
            type_check: false,
            declaration: true,
            es_module: true,
            script_module: false,
            test: false,
        }
    }
}

/// Transpiles the source project into a Node-consumable package.
///
/// Implementations write into `request.out_dir`, resolved against the
/// project root they were created for.
#[async_trait]
pub trait PackagingEngine: Send + Sync + std::fmt::Debug {
    async fn package(&self, request: &PackageBuildRequest) -> Result<()>;
}
