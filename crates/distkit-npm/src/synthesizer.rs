//! NPM package synthesizer.
//!
//! Clears the output directory, derives the manifest and scripts, hands the
//! build to the packaging engine and, only once the engine has succeeded,
//! writes the auxiliary files next to its output.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use distkit_config::{EntryRegistry, PipelineConfig, ProjectDescriptor, TsConfig};
use distkit_docs::{DocsManifest, DocsOptions, SiteRoot};
use path_clean::PathClean;
use tracing::info;

use crate::dnt::DntCli;
use crate::engine::{PackageBuildRequest, PackagingEngine};
use crate::error::{PackageError, Result};
use crate::manifest::PackageManifest;
use crate::output::{clear_output_dir, resolve_output_dir, write_file};
use crate::scripts::ScriptTable;

pub const GITIGNORE: &str = "/node_modules/\n";

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct PackageReport {
    pub out_dir: PathBuf,
    /// Manifest exactly as passed to the packaging engine
    pub manifest: PackageManifest,
    pub docs: DocsManifest,
    /// Files written after the engine finished, in write order
    pub auxiliary_files: Vec<PathBuf>,
    pub duration: Duration,
}

#[derive(Debug, Clone)]
pub struct NpmPackageSynthesizer {
    engine: Arc<dyn PackagingEngine>,
    tsconfig: TsConfig,
    docs_options: DocsOptions,
}

impl NpmPackageSynthesizer {
    pub fn new(engine: Arc<dyn PackagingEngine>) -> Self {
        Self {
            engine,
            tsconfig: TsConfig::default(),
            docs_options: DocsOptions::default(),
        }
    }

    /// Synthesizer backed by dnt, run from `root`.
    pub fn dnt(root: &Path) -> Self {
        Self::new(Arc::new(DntCli::new(root)))
    }

    pub fn with_tsconfig(mut self, tsconfig: TsConfig) -> Self {
        self.tsconfig = tsconfig;
        self
    }

    /// Renderer options for `typedoc.json`. Their `readme` is always replaced
    /// by the location the readme is copied to.
    pub fn with_docs_options(mut self, options: DocsOptions) -> Self {
        self.docs_options = options;
        self
    }

    /// Build the package under `config.npm_dir`.
    ///
    /// # Errors
    ///
    /// - `UnsafeOutputDir` if the output directory is not a dedicated one
    /// - `OutputCollision` if two bundle scripts would write the same file
    /// - `Fs` for unreadable inputs or unwritable outputs
    /// - `Engine`/`Tool` if the packaging engine fails; no auxiliary file is
    ///   written in that case
    pub async fn run(
        &self,
        root: &Path,
        config: &PipelineConfig,
        descriptor: &ProjectDescriptor,
        registry: &EntryRegistry,
        site_root: &SiteRoot,
    ) -> Result<PackageReport> {
        let started = Instant::now();

        let sources: Vec<&Path> = registry
            .paths()
            .map(Path::new)
            .chain(std::iter::once(config.readme.as_path()))
            .collect();
        let out_dir = resolve_output_dir(root, &config.npm_dir, &sources).await?;
        let readme_source = root.join(&config.readme);
        let readme = tokio::fs::read(&readme_source)
            .await
            .map_err(PackageError::fs(&readme_source))?;

        let scripts = ScriptTable::new(&descriptor.name, registry.main());
        scripts.verify_distinct_outputs()?;
        let manifest = PackageManifest::from_descriptor(descriptor, scripts);
        let request = PackageBuildRequest::new(
            registry,
            config.npm_dir.to_string_lossy(),
            descriptor,
            manifest.clone(),
        );
        let readme_path = readme_target(&config.readme);
        let docs_options = DocsOptions {
            readme: package_relative(&readme_path),
            ..self.docs_options.clone()
        };
        let docs = DocsManifest::generate(registry, site_root, &docs_options);

        let tsconfig_json = serde_json::to_string(&self.tsconfig).map_err(|source| {
            PackageError::Serialize {
                what: "tsconfig.json",
                source,
            }
        })?;
        let typedoc_json = docs.to_json().map_err(|source| PackageError::Serialize {
            what: "typedoc.json",
            source,
        })?;

        info!("clearing {}", out_dir.display());
        clear_output_dir(&out_dir).await?;

        info!(
            entry_points = request.entry_points.len(),
            package_manager = %request.package_manager,
            "building npm package {}@{}",
            manifest.name,
            manifest.version
        );
        self.engine.package(&request).await?;

        let readme_dest = out_dir.join(&readme_path);
        let files: [(PathBuf, &[u8]); 4] = [
            (out_dir.join(".gitignore"), GITIGNORE.as_bytes()),
            (readme_dest, readme.as_slice()),
            (out_dir.join("tsconfig.json"), tsconfig_json.as_bytes()),
            (out_dir.join("typedoc.json"), typedoc_json.as_bytes()),
        ];

        let mut auxiliary_files = Vec::with_capacity(files.len());
        for (path, contents) in files {
            write_file(&path, contents).await?;
            auxiliary_files.push(path);
        }

        let duration = started.elapsed();
        info!(
            elapsed_ms = duration.as_millis() as u64,
            "npm package written to {}",
            out_dir.display()
        );

        Ok(PackageReport {
            out_dir,
            manifest,
            docs,
            auxiliary_files,
            duration,
        })
    }
}

/// Readme location inside the package, mirroring its place in the project.
/// Paths that would leave the package directory keep only the file name.
fn readme_target(readme: &Path) -> PathBuf {
    let cleaned = readme.clean();
    if cleaned.is_absolute() || cleaned.starts_with("..") {
        cleaned
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("readme.md"))
    } else {
        cleaned
    }
}

/// `./`-prefixed, `/`-separated form of a path inside the package.
fn package_relative(path: &Path) -> String {
    let parts: Vec<_> = path
        .components()
        .map(|part| part.as_os_str().to_string_lossy())
        .collect();
    format!("./{}", parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readme_keeps_relative_location() {
        assert_eq!(readme_target(Path::new("./src/readme.md")), PathBuf::from("src/readme.md"));
        assert_eq!(readme_target(Path::new("README.md")), PathBuf::from("README.md"));
    }

    #[test]
    fn readme_outside_project_is_flattened() {
        assert_eq!(readme_target(Path::new("../docs/readme.md")), PathBuf::from("readme.md"));
        assert_eq!(readme_target(Path::new("/abs/README.md")), PathBuf::from("README.md"));
    }

    #[test]
    fn docs_readme_points_into_the_package() {
        assert_eq!(
            package_relative(&readme_target(Path::new("./src/readme.md"))),
            "./src/readme.md"
        );
        assert_eq!(package_relative(&readme_target(Path::new("README.md"))), "./README.md");
        assert_eq!(
            package_relative(&readme_target(Path::new("../docs/intro.md"))),
            "./intro.md"
        );
    }
}
