//! Build targets and the transform options that distinguish them.
//!
//! Every artifact distkit knows how to produce is a [`BuildTarget`]. The five
//! bundle variants carry fixed [`TransformOptions`]; the npm package and the
//! documentation manifest are produced by other pipelines and carry none.

use serde::{Deserialize, Serialize};

/// Output module format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleFormat {
    Esm,
    Iife,
}

impl ModuleFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleFormat::Esm => "esm",
            ModuleFormat::Iife => "iife",
        }
    }
}

/// Statements stripped from the emitted output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropKind {
    Debugger,
    Console,
}

impl DropKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DropKind::Debugger => "debugger",
            DropKind::Console => "console",
        }
    }
}

/// JavaScript language target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EsTarget {
    Es2020,
    Es2022,
    EsNext,
}

impl EsTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            EsTarget::Es2020 => "es2020",
            EsTarget::Es2022 => "es2022",
            EsTarget::EsNext => "esnext",
        }
    }
}

/// Options handed to the minifier/bundler for one target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformOptions {
    pub format: ModuleFormat,
    pub minify: bool,
    pub tree_shaking: bool,
    pub drop: Vec<DropKind>,
    /// `None` leaves the engine's own default in place.
    pub target: Option<EsTarget>,
}

impl TransformOptions {
    /// Fixed options of the single-file browser bundle.
    pub fn single_file() -> Self {
        Self {
            format: ModuleFormat::Esm,
            minify: true,
            tree_shaking: true,
            drop: vec![DropKind::Debugger, DropKind::Console],
            target: Some(EsTarget::EsNext),
        }
    }

    fn scripted(format: ModuleFormat, minify: bool) -> Self {
        Self {
            format,
            minify,
            tree_shaking: false,
            drop: Vec::new(),
            target: None,
        }
    }

    /// Render the options as esbuild command-line flags.
    ///
    /// Flags appear in a fixed order so generated commands are stable:
    /// minify, tree shaking, drops, format, target.
    ///
    /// ```
    /// use distkit_bundler::TransformOptions;
    ///
    /// assert_eq!(
    ///     TransformOptions::single_file().to_esbuild_args(),
    ///     [
    ///         "--minify",
    ///         "--tree-shaking=true",
    ///         "--drop:debugger",
    ///         "--drop:console",
    ///         "--format=esm",
    ///         "--target=esnext",
    ///     ]
    /// );
    /// ```
    pub fn to_esbuild_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if self.minify {
            args.push("--minify".to_string());
        }
        if self.tree_shaking {
            args.push("--tree-shaking=true".to_string());
        }
        for drop in &self.drop {
            args.push(format!("--drop:{}", drop.as_str()));
        }
        args.push(format!("--format={}", self.format.as_str()));
        if let Some(target) = self.target {
            args.push(format!("--target={}", target.as_str()));
        }
        args
    }
}

/// Every artifact the pipelines can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuildTarget {
    SingleFileMinified,
    EsmBundle,
    EsmBundleMinified,
    IifeBundle,
    IifeBundleMinified,
    NpmPackage,
    DocManifest,
}

impl BuildTarget {
    /// The four bundle formats built by the published package's scripts,
    /// in the order the combined script runs them.
    pub const SCRIPTED: [BuildTarget; 4] = [
        BuildTarget::EsmBundle,
        BuildTarget::EsmBundleMinified,
        BuildTarget::IifeBundle,
        BuildTarget::IifeBundleMinified,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BuildTarget::SingleFileMinified => "single-file-minified",
            BuildTarget::EsmBundle => "esm-bundle",
            BuildTarget::EsmBundleMinified => "esm-bundle-minified",
            BuildTarget::IifeBundle => "iife-bundle",
            BuildTarget::IifeBundleMinified => "iife-bundle-minified",
            BuildTarget::NpmPackage => "npm-package",
            BuildTarget::DocManifest => "doc-manifest",
        }
    }

    pub fn transform_options(&self) -> Option<TransformOptions> {
        match self {
            BuildTarget::SingleFileMinified => Some(TransformOptions::single_file()),
            BuildTarget::EsmBundle => Some(TransformOptions::scripted(ModuleFormat::Esm, false)),
            BuildTarget::EsmBundleMinified => {
                Some(TransformOptions::scripted(ModuleFormat::Esm, true))
            }
            BuildTarget::IifeBundle => Some(TransformOptions::scripted(ModuleFormat::Iife, false)),
            BuildTarget::IifeBundleMinified => {
                Some(TransformOptions::scripted(ModuleFormat::Iife, true))
            }
            BuildTarget::NpmPackage | BuildTarget::DocManifest => None,
        }
    }

    /// Name of the package script that builds this target.
    pub fn script_name(&self) -> Option<&'static str> {
        match self {
            BuildTarget::EsmBundle => Some("build-esm"),
            BuildTarget::EsmBundleMinified => Some("build-esm-minify"),
            BuildTarget::IifeBundle => Some("build-iife"),
            BuildTarget::IifeBundleMinified => Some("build-iife-minify"),
            _ => None,
        }
    }

    /// Output path of a script-built bundle for the package `name`.
    pub fn outfile(&self, name: &str) -> Option<String> {
        let suffix = match self {
            BuildTarget::EsmBundle => "esm.js",
            BuildTarget::EsmBundleMinified => "esm.min.js",
            BuildTarget::IifeBundle => "iife.js",
            BuildTarget::IifeBundleMinified => "iife.min.js",
            _ => return None,
        };
        Some(format!("./dist/{name}.{suffix}"))
    }
}

impl std::fmt::Display for BuildTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
