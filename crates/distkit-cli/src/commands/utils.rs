//! Shared utilities for command implementations.

use std::path::{Path, PathBuf};

use distkit_config::{EntryRegistry, PipelineConfig, ProjectDescriptor};
use tracing::debug;

use crate::error::{CliError, Result, ResultExt};

/// Resolve a path relative to a working directory.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// The project root: `--cwd` if given (relative to the current directory),
/// otherwise the current directory. Must be an existing directory.
pub fn project_root(cwd: Option<&Path>) -> Result<PathBuf> {
    let current = std::env::current_dir()?;
    let root = match cwd {
        Some(dir) => resolve_path(dir, &current),
        None => current,
    };

    if !root.exists() {
        return Err(CliError::FileNotFound(root));
    }
    if !root.is_dir() {
        return Err(CliError::InvalidArgument(format!(
            "Project root is not a directory: {}",
            root.display()
        )));
    }
    Ok(root)
}

/// Read-only inputs shared by every command.
#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub config: PipelineConfig,
    pub descriptor: ProjectDescriptor,
    pub registry: EntryRegistry,
}

impl Project {
    /// Load configuration, then the descriptor, then the entry registry.
    pub fn load(root: &Path) -> Result<Self> {
        let config = PipelineConfig::load(root).context("Failed to load configuration")?;
        let descriptor = ProjectDescriptor::from_file(&resolve_path(&config.descriptor, root))?;
        let registry = config.registry()?;

        debug!(
            root = %root.display(),
            sub_entries = registry.sub_entries().len(),
            "loaded project {}@{}",
            descriptor.name,
            descriptor.version
        );

        Ok(Self {
            root: root.to_path_buf(),
            config,
            descriptor,
            registry,
        })
    }

    pub fn resolve(&self, path: &Path) -> PathBuf {
        resolve_path(path, &self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn resolve_keeps_absolute_paths() {
        let abs = if cfg!(windows) { "C:\\abs\\deno.json" } else { "/abs/deno.json" };
        assert_eq!(resolve_path(Path::new(abs), Path::new("/project")), PathBuf::from(abs));
        assert_eq!(
            resolve_path(Path::new("deno.json"), Path::new("/project")),
            Path::new("/project").join("deno.json")
        );
    }

    #[test]
    fn project_root_must_exist() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");
        assert!(matches!(
            project_root(Some(&missing)),
            Err(CliError::FileNotFound(_))
        ));
    }

    #[test]
    fn project_root_must_be_a_directory() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("deno.json");
        fs::write(&file, "{}").unwrap();
        assert!(matches!(
            project_root(Some(&file)),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn loads_project_inputs() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("deno.json"),
            r#"{ "name": "kitchensink", "version": "1.2.3" }"#,
        )
        .unwrap();

        let project = Project::load(dir.path()).unwrap();
        assert_eq!(project.descriptor.name, "kitchensink");
        assert_eq!(project.registry.main(), "./src/mod.ts");
    }

    #[test]
    fn missing_descriptor_is_a_config_error() {
        let dir = TempDir::new().unwrap();
        let err = Project::load(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Config(distkit_config::ConfigError::DescriptorNotFound(_))
        ));
    }
}
