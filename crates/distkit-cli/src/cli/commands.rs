use clap::{Args, Subcommand};

/// Available distkit subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the single-file minified bundle
    ///
    /// Bundles the main entry point, minifies it (tree shaking on, `debugger`
    /// and `console` calls stripped, ESM, esnext) and writes one file,
    /// `./dist/mod.min.js` by default.
    Dist,

    /// Synthesize the npm package
    ///
    /// Clears the npm output directory, transpiles the project with dnt and
    /// writes the package manifest, tsconfig.json, typedoc.json, .gitignore
    /// and the readme next to the engine output.
    Npm(NpmArgs),

    /// Validate configuration, descriptor and entry points
    ///
    /// Loads every input the other commands use and reports problems without
    /// writing anything.
    Check,
}

/// Arguments for the npm command
#[derive(Args, Debug)]
pub struct NpmArgs {
    /// Base path the documentation site is served from
    ///
    /// Prefixes every sidebar link in typedoc.json. Use `/` for a local
    /// server and `/<repo>/` for a project page.
    ///
    /// Examples:
    ///   distkit npm
    ///   distkit npm /kitchensink_ts/
    #[arg(value_name = "SITE_ROOT")]
    pub site_root: Option<String>,
}
