//! distkit CLI.
//!
//! Three commands over one Deno project:
//!
//! - `distkit dist` - single-file minified browser bundle
//! - `distkit npm [SITE_ROOT]` - npm package directory with docs configuration
//! - `distkit check` - validate inputs without writing anything
//!
//! # Architecture
//!
//! - [`cli`] - clap argument definitions
//! - [`commands`] - command implementations
//! - [`error`] - [`CliError`] and its miette rendering
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - status lines, spinners and summaries

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result, ResultExt};
