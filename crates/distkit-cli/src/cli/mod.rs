//! Command-line interface definition.
//!
//! - `distkit dist` - build the single-file bundle
//! - `distkit npm [SITE_ROOT]` - synthesize the npm package
//! - `distkit check` - validate configuration, descriptor and entry points

mod commands;

use std::path::PathBuf;

use clap::Parser;

pub use commands::{Command, NpmArgs};

/// distkit - distribution artifacts for Deno projects
#[derive(Parser, Debug)]
#[command(
    name = "distkit",
    version,
    about = "Build distribution artifacts for a Deno project",
    long_about = "distkit turns a Deno project into a minified single-file browser bundle\n\
                  and a dual-module npm package with type declarations, build scripts\n\
                  and a documentation-site configuration."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Project root (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
