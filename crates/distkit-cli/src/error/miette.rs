//! Miette diagnostic conversion for CLI errors.

use ::miette::{Report, miette};
use distkit_bundler::{BundleError, ToolError};
use distkit_config::ConfigError;
use distkit_npm::PackageError;

use crate::error::CliError;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        CliError::Bundle(e) => bundle_error_to_miette(e),
        CliError::Package(e) => package_error_to_miette(e),
        _ => miette!("{}", err),
    }
}

fn config_error_to_miette(err: ConfigError) -> Report {
    match err {
        ConfigError::DescriptorNotFound(_) => miette!(
            help = "Run distkit from the project root, pass --cwd <DIR>, or set `descriptor` in distkit.toml",
            "{}",
            err
        ),
        ConfigError::EntryNotFound(_) => miette!(
            help = "Check `main_entry` and `sub_entries` in distkit.toml",
            "{}",
            err
        ),
        ConfigError::DuplicateEntry { .. } | ConfigError::ReservedEntryName { .. } => miette!(
            help = "Sub-entries are named after their file stem; rename one of the files",
            "{}",
            err
        ),
        _ => miette!("Configuration error: {}", err),
    }
}

fn bundle_error_to_miette(err: BundleError) -> Report {
    match err {
        BundleError::Tool(tool) => tool_error_to_miette(tool, "Node.js (npx) and esbuild"),
        _ => miette!("Bundle error: {}", err),
    }
}

fn package_error_to_miette(err: PackageError) -> Report {
    match err {
        PackageError::Tool(tool) => tool_error_to_miette(tool, "Deno"),
        PackageError::UnsafeOutputDir { .. } => miette!(
            help = "Point `npm_dir` in distkit.toml at a dedicated output directory",
            "{}",
            err
        ),
        _ => miette!("Package error: {}", err),
    }
}

fn tool_error_to_miette(err: ToolError, requirement: &str) -> Report {
    match err {
        ToolError::Spawn { .. } => miette!(
            help = format!("{requirement} must be installed and on PATH"),
            "{}",
            err
        ),
        _ => miette!("{}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn descriptor_not_found_has_help() {
        let report = cli_error_to_miette(CliError::Config(ConfigError::DescriptorNotFound(
            PathBuf::from("deno.json"),
        )));
        assert!(report.to_string().contains("deno.json"));
        let help = report.help().map(|h| h.to_string()).unwrap_or_default();
        assert!(help.contains("--cwd"));
    }

    #[test]
    fn custom_errors_render_verbatim() {
        let report = cli_error_to_miette(CliError::Custom("plain".to_string()));
        assert_eq!(report.to_string(), "plain");
    }
}
