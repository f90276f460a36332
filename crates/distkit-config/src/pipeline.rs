//! Pipeline configuration with multi-source loading.
//!
//! Priority: environment (`DISTKIT_*`) > `distkit.toml` > defaults.

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::entry::EntryRegistry;
use crate::error::{ConfigError, Result};

/// File name looked up in the project root.
pub const CONFIG_FILE: &str = "distkit.toml";

/// Prefix for environment overrides, e.g. `DISTKIT_NPM_DIR=./out/npm/`.
pub const ENV_PREFIX: &str = "DISTKIT_";

/// Project paths used by the pipelines. All relative paths are resolved
/// against the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Project descriptor file
    pub descriptor: PathBuf,

    /// Main entry point, kept verbatim in every manifest
    pub main_entry: String,

    /// Sub-entry points, in navigation order
    pub sub_entries: Vec<String>,

    /// Output path of the single-file minified bundle
    pub bundle_outfile: PathBuf,

    /// Output directory of the npm package (cleared on every run)
    pub npm_dir: PathBuf,

    /// Readme copied into the npm package
    pub readme: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            descriptor: PathBuf::from("deno.json"),
            main_entry: "./src/mod.ts".to_string(),
            sub_entries: Vec::new(),
            bundle_outfile: PathBuf::from("./dist/mod.min.js"),
            npm_dir: PathBuf::from("./npm/"),
            readme: PathBuf::from("./src/readme.md"),
        }
    }
}

impl PipelineConfig {
    /// Load configuration for the project rooted at `root`.
    ///
    /// A missing `distkit.toml` is not an error; the defaults apply.
    pub fn load(root: &Path) -> Result<Self> {
        Self::figment(root)
            .extract()
            .map_err(|e| ConfigError::InvalidValue(e.to_string()))
    }

    /// The layered provider stack, exposed for callers that want to add
    /// their own layer on top.
    pub fn figment(root: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(root.join(CONFIG_FILE)))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Build the entry point registry described by this configuration.
    pub fn registry(&self) -> Result<EntryRegistry> {
        EntryRegistry::new(self.main_entry.clone(), self.sub_entries.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_conventional_layout() {
        let config = PipelineConfig::default();
        assert_eq!(config.descriptor, PathBuf::from("deno.json"));
        assert_eq!(config.main_entry, "./src/mod.ts");
        assert!(config.sub_entries.is_empty());
        assert_eq!(config.bundle_outfile, PathBuf::from("./dist/mod.min.js"));
        assert_eq!(config.npm_dir, PathBuf::from("./npm/"));
        assert_eq!(config.readme, PathBuf::from("./src/readme.md"));
    }

    #[test]
    fn registry_uses_configured_entries() {
        let config = PipelineConfig {
            sub_entries: vec!["./src/crypto.ts".into(), "./src/image.ts".into()],
            ..PipelineConfig::default()
        };
        let registry = config.registry().unwrap();
        assert_eq!(registry.main(), "./src/mod.ts");
        let names: Vec<_> = registry
            .sub_entries()
            .iter()
            .map(|e| e.logical_name())
            .collect();
        assert_eq!(names, ["crypto", "image"]);
    }
}
