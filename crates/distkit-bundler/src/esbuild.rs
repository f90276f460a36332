//! esbuild, driven through `npx`.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::engine::{BundleEngine, Minifier};
use crate::error::Result;
use crate::process::ToolCommand;
use crate::target::{ModuleFormat, TransformOptions};

/// Bundles and minifies by running `npx esbuild` in the project root.
#[derive(Debug, Clone)]
pub struct EsbuildCli {
    cwd: PathBuf,
    program: String,
}

impl EsbuildCli {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            program: "npx".to_string(),
        }
    }

    /// Use a different launcher than `npx` (e.g. `pnpm exec`, `bunx`).
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    fn command(&self) -> ToolCommand {
        ToolCommand::new("esbuild", &self.program, &self.cwd).arg("esbuild")
    }
}

#[async_trait]
impl BundleEngine for EsbuildCli {
    async fn bundle(&self, entry: &Path) -> Result<String> {
        let code = self
            .command()
            .arg(entry.to_string_lossy())
            .arg("--bundle")
            .arg(format!("--format={}", ModuleFormat::Esm.as_str()))
            .arg("--log-level=warning")
            .run()
            .await?;
        Ok(code)
    }
}

#[async_trait]
impl Minifier for EsbuildCli {
    async fn minify(&self, code: &str, options: &TransformOptions) -> Result<String> {
        // with no entry point esbuild transforms stdin to stdout
        let code = self
            .command()
            .args(options.to_esbuild_args())
            .arg("--log-level=warning")
            .stdin(code)
            .run()
            .await?;
        Ok(code)
    }
}
