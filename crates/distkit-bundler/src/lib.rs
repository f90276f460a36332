//! # distkit-bundler
//!
//! Build targets and the single-file bundle pipeline.
//!
//! The bundler and minifier themselves are external collaborators. This crate
//! only fixes the options they are called with ([`TransformOptions`]) and the
//! contract between the pipeline and them ([`BundleEngine`], [`Minifier`]).
//! [`EsbuildCli`] implements both by driving `npx esbuild`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use distkit_bundler::SingleFilePipeline;
//! use std::path::Path;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let root = Path::new(".");
//! let report = SingleFilePipeline::esbuild(root)
//!     .run(root, "./src/mod.ts", Path::new("./dist/mod.min.js"))
//!     .await?;
//! println!("{:.1} kb in {:.0} ms", report.size_kb(), report.elapsed_ms());
//! # Ok(()) }
//! ```

pub mod engine;
pub mod error;
pub mod esbuild;
pub mod process;
pub mod single_file;
pub mod target;

pub use engine::{BundleEngine, Minifier};
pub use error::{BundleError, Result};
pub use esbuild::EsbuildCli;
pub use process::{ToolCommand, ToolError};
pub use single_file::{BundleReport, SingleFilePipeline};
pub use target::{BuildTarget, DropKind, EsTarget, ModuleFormat, TransformOptions};
