//! Logging setup for the distkit CLI.
//!
//! Verbosity is picked in this order:
//! 1. `--verbose`: debug for every distkit crate
//! 2. `--quiet`: errors only
//! 3. `RUST_LOG`
//! 4. info for every distkit crate
//!
//! Log lines go to stderr so stdout stays free for command output.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str =
    "distkit=debug,distkit_config=debug,distkit_bundler=debug,distkit_docs=debug,distkit_npm=debug,distkit_cli=debug";
const QUIET_FILTER: &str = "error";
const DEFAULT_FILTER: &str =
    "distkit=info,distkit_config=info,distkit_bundler=info,distkit_docs=info,distkit_npm=info,distkit_cli=info";

/// Pick the filter for the given flags.
pub fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Install the global subscriber. Call once, before anything logs.
///
/// ```rust,no_run
/// use distkit_cli::logger::init_logger;
///
/// init_logger(false, false, false);
/// tracing::info!("bundling ./src/mod.ts");
/// ```
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && crate::ui::should_use_color())
        .compact();

    tracing_subscriber::registry()
        .with(filter_for(verbose, quiet))
        .with(fmt_layer)
        .init();
}
