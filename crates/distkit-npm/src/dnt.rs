//! dnt, driven through `deno eval`.

use std::path::PathBuf;

use async_trait::async_trait;
use distkit_bundler::ToolCommand;
use tracing::debug;

use crate::engine::{PackageBuildRequest, PackagingEngine};
use crate::error::{PackageError, Result};

pub const DEFAULT_MODULE: &str = "jsr:@deno/dnt";

/// Runs dnt's `build` in the project root with the request read from stdin.
#[derive(Debug, Clone)]
pub struct DntCli {
    cwd: PathBuf,
    program: String,
    module: String,
}

impl DntCli {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            program: "deno".to_string(),
            module: DEFAULT_MODULE.to_string(),
        }
    }

    /// Import dnt from somewhere else (a pinned version, a local checkout).
    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = module.into();
        self
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    fn driver(&self) -> String {
        format!(
            "import {{ build }} from {module};\n\
             const request = JSON.parse(await new Response(Deno.stdin.readable).text());\n\
             await build(request);\n",
            module = serde_json::Value::String(self.module.clone()),
        )
    }

    fn command(&self) -> ToolCommand {
        ToolCommand::new("dnt", &self.program, &self.cwd)
            .arg("eval")
            .arg(self.driver())
    }
}

#[async_trait]
impl PackagingEngine for DntCli {
    async fn package(&self, request: &PackageBuildRequest) -> Result<()> {
        let input = serde_json::to_string(request).map_err(|source| PackageError::Serialize {
            what: "packaging request",
            source,
        })?;

        let output = self.command().stdin(input).run().await?;
        for line in output.lines().filter(|line| !line.trim().is_empty()) {
            debug!(target: "distkit_npm::dnt", "{}", line);
        }
        Ok(())
    }
}
