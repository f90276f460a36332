//! Single-file bundle pipeline.
//!
//! Main entry -> bundle -> minify (fixed [`TransformOptions::single_file`]) ->
//! one file at a fixed path. The output is only written once both transforms
//! have succeeded, so a failed run never leaves a freshly written bundle behind.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::info;

use crate::engine::{BundleEngine, Minifier};
use crate::error::{BundleError, Result};
use crate::esbuild::EsbuildCli;
use crate::target::TransformOptions;

/// Measurements of a successful run. Informational only.
#[derive(Debug, Clone, PartialEq)]
pub struct BundleReport {
    pub outfile: PathBuf,
    /// Wall-clock time of the bundle + minify step
    pub duration: Duration,
    pub size_bytes: u64,
}

impl BundleReport {
    pub fn elapsed_ms(&self) -> f64 {
        self.duration.as_secs_f64() * 1000.0
    }

    pub fn size_kb(&self) -> f64 {
        self.size_bytes as f64 / 1024.0
    }
}

#[derive(Debug, Clone)]
pub struct SingleFilePipeline {
    bundler: Arc<dyn BundleEngine>,
    minifier: Arc<dyn Minifier>,
}

impl SingleFilePipeline {
    pub fn new(bundler: Arc<dyn BundleEngine>, minifier: Arc<dyn Minifier>) -> Self {
        Self { bundler, minifier }
    }

    /// Pipeline backed by `npx esbuild` for both steps.
    pub fn esbuild(root: &Path) -> Self {
        let engine = Arc::new(EsbuildCli::new(root));
        Self::new(engine.clone(), engine)
    }

    /// Bundle `entry` and write the minified result to `outfile`.
    ///
    /// Relative paths are resolved against `root`. An existing file at
    /// `outfile` is overwritten in place.
    pub async fn run(&self, root: &Path, entry: &str, outfile: &Path) -> Result<BundleReport> {
        let entry_path = root.join(entry);
        let outfile = root.join(outfile);
        let options = TransformOptions::single_file();

        info!("bundling {}", entry);
        let started = Instant::now();
        let bundled = self.bundler.bundle(&entry_path).await?;
        let minified = self.minifier.minify(&bundled, &options).await?;
        let duration = started.elapsed();

        write_output(&outfile, minified.as_bytes()).await?;
        let size_bytes = tokio::fs::metadata(&outfile)
            .await
            .map_err(|source| BundleError::Write {
                path: outfile.clone(),
                source,
            })?
            .len();

        let report = BundleReport {
            outfile,
            duration,
            size_bytes,
        };
        info!(elapsed_ms = report.elapsed_ms(), "execution time");
        info!(size_kb = report.size_kb(), "dist binary size");

        Ok(report)
    }
}

async fn write_output(path: &Path, content: &[u8]) -> Result<()> {
    let write_err = |source| BundleError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(write_err)?;
    }
    tokio::fs::write(path, content).await.map_err(write_err)
}
