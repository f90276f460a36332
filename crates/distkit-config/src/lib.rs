//! # distkit-config
//!
//! Read-only inputs shared by every distkit pipeline:
//!
//! - [`ProjectDescriptor`] - the authoritative project metadata (`deno.json`)
//! - [`EntryRegistry`] - the ordered set of root modules every artifact enumerates
//! - [`PipelineConfig`] - the project paths, layered from defaults, `distkit.toml`
//!   and `DISTKIT_*` environment variables
//! - [`TsConfig`] - the compiler configuration written next to the npm package

pub mod descriptor;
pub mod entry;
pub mod error;
pub mod pipeline;
pub mod tsconfig;

pub use descriptor::{PackageManager, ProjectDescriptor};
pub use entry::{EntryPoint, EntryRegistry, RESERVED_NAMES};
pub use error::{ConfigError, Result};
pub use pipeline::{CONFIG_FILE, ENV_PREFIX, PipelineConfig};
pub use tsconfig::{TsCompilerOptions, TsConfig};
