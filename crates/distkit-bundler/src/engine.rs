//! The contract between the pipeline and the external bundling engine.
//!
//! # Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use distkit_bundler::{BundleEngine, Result};
//! use std::path::Path;
//!
//! #[derive(Debug)]
//! struct Concat;
//!
//! #[async_trait]
//! impl BundleEngine for Concat {
//!     async fn bundle(&self, entry: &Path) -> Result<String> {
//!         Ok(format!("// {}\n", entry.display()))
//!     }
//! }
//! ```

use async_trait::async_trait;
use std::path::Path;

use crate::error::Result;
use crate::target::TransformOptions;

/// Module graph rooted at an entry point -> single text blob.
#[async_trait]
pub trait BundleEngine: Send + Sync + std::fmt::Debug {
    async fn bundle(&self, entry: &Path) -> Result<String>;
}

/// Text blob + options -> transformed (minified) text blob.
#[async_trait]
pub trait Minifier: Send + Sync + std::fmt::Debug {
    async fn minify(&self, code: &str, options: &TransformOptions) -> Result<String>;
}
