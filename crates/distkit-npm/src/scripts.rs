//! Build and documentation scripts of the published package.

use std::path::PathBuf;

use distkit_bundler::BuildTarget;
use indexmap::IndexMap;
use path_clean::PathClean;
use serde::{Serialize, Serializer};

use crate::error::{PackageError, Result};

pub const BUILD_DOCS: &str = "build-docs";
pub const BUILD_DIST: &str = "build-dist";

/// The manifest's `scripts` table.
///
/// Script bodies are written, never run, by distkit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptTable {
    scripts: IndexMap<String, String>,
    outputs: Vec<(&'static str, String)>,
}

impl ScriptTable {
    /// Derive the scripts for package `name` bundling from `entry`.
    ///
    /// ```
    /// use distkit_npm::ScriptTable;
    ///
    /// let table = ScriptTable::new("kitchensink", "./src/mod.ts");
    /// assert_eq!(
    ///     table.get("build-esm-minify").unwrap(),
    ///     r#"npx esbuild "./src/mod.ts" --bundle --minify --format=esm --outfile="./dist/kitchensink.esm.min.js""#
    /// );
    /// ```
    pub fn new(name: &str, entry: &str) -> Self {
        let mut scripts = IndexMap::new();
        let mut outputs = Vec::new();

        scripts.insert(BUILD_DOCS.to_string(), "npx typedoc".to_string());

        let mut steps = Vec::with_capacity(BuildTarget::SCRIPTED.len());
        let mut bundles = Vec::with_capacity(BuildTarget::SCRIPTED.len());
        for target in BuildTarget::SCRIPTED {
            let (Some(script), Some(outfile), Some(options)) = (
                target.script_name(),
                target.outfile(name),
                target.transform_options(),
            ) else {
                continue;
            };
            let flags = options.to_esbuild_args().join(" ");
            bundles.push((
                script,
                format!(r#"npx esbuild "{entry}" --bundle {flags} --outfile="{outfile}""#),
            ));
            steps.push(format!("npm run {script}"));
            outputs.push((script, outfile));
        }

        scripts.insert(BUILD_DIST.to_string(), steps.join(" && "));
        for (script, body) in bundles {
            scripts.insert(script.to_string(), body);
        }

        Self { scripts, outputs }
    }

    pub fn get(&self, script: &str) -> Option<&str> {
        self.scripts.get(script).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.scripts.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }

    /// Fail if two bundle scripts would write the same file.
    pub fn verify_distinct_outputs(&self) -> Result<()> {
        check_distinct(&self.outputs)
    }
}

fn check_distinct(outputs: &[(&'static str, String)]) -> Result<()> {
    let mut seen: Vec<(&str, PathBuf)> = Vec::with_capacity(outputs.len());
    for &(script, ref outfile) in outputs {
        let normalized = PathBuf::from(outfile).clean();
        if let Some((first, _)) = seen.iter().find(|(_, path)| *path == normalized) {
            return Err(PackageError::OutputCollision {
                path: outfile.clone(),
                first: first.to_string(),
                second: script.to_string(),
            });
        }
        seen.push((script, normalized));
    }
    Ok(())
}

impl Serialize for ScriptTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.scripts.serialize(serializer)
    }
}
