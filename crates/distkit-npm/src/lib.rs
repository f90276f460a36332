//! # distkit-npm
//!
//! Synthesizes a Node-consumable package directory from a Deno project.
//!
//! The package manifest is a whitelist copy of the project descriptor plus a
//! derived [`ScriptTable`]. Transpilation and declaration emission are
//! delegated to a [`PackagingEngine`]; [`DntCli`] drives dnt through
//! `deno eval`.
//!
//! ```no_run
//! use distkit_config::{PipelineConfig, ProjectDescriptor};
//! use distkit_docs::SiteRoot;
//! use distkit_npm::NpmPackageSynthesizer;
//! use std::path::Path;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let root = Path::new(".");
//! let config = PipelineConfig::load(root)?;
//! let descriptor = ProjectDescriptor::from_file(&root.join(&config.descriptor))?;
//! let registry = config.registry()?;
//!
//! let report = NpmPackageSynthesizer::dnt(root)
//!     .run(root, &config, &descriptor, &registry, &SiteRoot::default())
//!     .await?;
//! println!("{}", report.out_dir.display());
//! # Ok(()) }
//! ```

pub mod dnt;
pub mod engine;
pub mod error;
pub mod manifest;
pub mod output;
pub mod scripts;
pub mod synthesizer;

pub use dnt::DntCli;
pub use engine::{EntryPointSpec, PackageBuildRequest, PackagingEngine, Shims};
pub use error::{PackageError, Result};
pub use manifest::PackageManifest;
pub use output::{clear_output_dir, resolve_output_dir};
pub use scripts::{BUILD_DIST, BUILD_DOCS, ScriptTable};
pub use synthesizer::{GITIGNORE, NpmPackageSynthesizer, PackageReport};
