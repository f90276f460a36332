//! Command implementations.
//!
//! - [`dist`] - single-file bundle
//! - [`npm`] - npm package synthesis
//! - [`check`] - input validation
//!
//! Each command loads the project once through [`utils::Project`] and hands
//! the read-only inputs to its pipeline.

pub mod check;
pub mod dist;
pub mod npm;
pub mod utils;

pub use check::execute as check_execute;
pub use dist::execute as dist_execute;
pub use npm::execute as npm_execute;

use crate::cli::{Cli, Command};
use crate::error::Result;

/// Resolve the project root and run the selected command.
pub async fn execute(cli: Cli) -> Result<()> {
    let root = utils::project_root(cli.cwd.as_deref())?;

    match cli.command {
        Command::Dist => dist_execute(&root).await,
        Command::Npm(args) => npm_execute(&root, args).await,
        Command::Check => check_execute(&root).await,
    }
}
