//! Running command-line engines.
//!
//! Engines are one-shot processes: optional input on stdin, result on stdout,
//! diagnostics on stderr. A non-zero exit status is always fatal.

use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};

use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} exited with {status}: {stderr}")]
    Failed {
        tool: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("{tool} produced non-UTF-8 output")]
    Utf8 { tool: String },

    #[error("I/O error while running {tool}: {source}")]
    Io {
        tool: String,
        #[source]
        source: std::io::Error,
    },
}

/// A single engine invocation.
#[derive(Debug, Clone)]
pub struct ToolCommand {
    tool: String,
    program: String,
    args: Vec<String>,
    cwd: PathBuf,
    stdin: Option<String>,
}

impl ToolCommand {
    /// `tool` names the engine in diagnostics; `program` is what gets spawned
    /// (e.g. tool `esbuild`, program `npx`).
    pub fn new(tool: impl Into<String>, program: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            tool: tool.into(),
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.into(),
            stdin: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn stdin(mut self, input: impl Into<String>) -> Self {
        self.stdin = Some(input.into());
        self
    }

    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run to completion and return stdout.
    pub async fn run(self) -> Result<String, ToolError> {
        debug!(cwd = %self.cwd.display(), "running {}", self.command_line());

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .current_dir(&self.cwd)
            .stdin(if self.stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| ToolError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let input = self.stdin;
        let handle = child.stdin.take();
        let feed = async move {
            if let (Some(mut handle), Some(input)) = (handle, input) {
                handle.write_all(input.as_bytes()).await?;
                handle.shutdown().await?;
            }
            Ok::<_, std::io::Error>(())
        };

        // stdin is fed while stdout drains so large inputs cannot deadlock
        let (fed, output) = tokio::join!(feed, child.wait_with_output());
        let io_err = |source| ToolError::Io {
            tool: self.tool.clone(),
            source,
        };
        let output = output.map_err(io_err)?;

        // an engine that exits early closes stdin; its stderr says why
        if !output.status.success() {
            return Err(ToolError::Failed {
                tool: self.tool.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        fed.map_err(io_err)?;

        String::from_utf8(output.stdout).map_err(|_| ToolError::Utf8 { tool: self.tool })
    }
}
