//! Integration tests for the single-file bundle pipeline, using in-process
//! engines in place of esbuild.

use async_trait::async_trait;
use distkit_bundler::{
    BundleEngine, BundleError, DropKind, Minifier, ModuleFormat, Result, SingleFilePipeline,
    TransformOptions,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Reads the entry file and returns its content as the "bundle".
#[derive(Debug, Default)]
struct ReadEntry {
    seen: Mutex<Vec<PathBuf>>,
}

#[async_trait]
impl BundleEngine for ReadEntry {
    async fn bundle(&self, entry: &Path) -> Result<String> {
        self.seen.lock().unwrap().push(entry.to_path_buf());
        fs::read_to_string(entry).map_err(|e| BundleError::engine("fake-bundler", e.to_string()))
    }
}

/// Strips whitespace and records the options it was called with.
#[derive(Debug, Default)]
struct StripWhitespace {
    options: Mutex<Option<TransformOptions>>,
}

#[async_trait]
impl Minifier for StripWhitespace {
    async fn minify(&self, code: &str, options: &TransformOptions) -> Result<String> {
        *self.options.lock().unwrap() = Some(options.clone());
        Ok(code.split_whitespace().collect())
    }
}

#[derive(Debug)]
struct UnresolvedImport;

#[async_trait]
impl BundleEngine for UnresolvedImport {
    async fn bundle(&self, _entry: &Path) -> Result<String> {
        Err(BundleError::engine(
            "fake-bundler",
            "Could not resolve \"./missing.ts\"",
        ))
    }
}

#[derive(Debug)]
struct FailingMinifier;

#[async_trait]
impl Minifier for FailingMinifier {
    async fn minify(&self, _code: &str, _options: &TransformOptions) -> Result<String> {
        Err(BundleError::engine("fake-minifier", "Expected \";\" but found \"}\""))
    }
}

fn project() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("src")).unwrap();
    fs::write(
        temp.path().join("src/mod.ts"),
        "export const answer = 42 ;\n",
    )
    .unwrap();
    temp
}

#[tokio::test]
async fn writes_minified_bundle_and_reports_size() {
    let temp = project();
    let bundler = Arc::new(ReadEntry::default());
    let minifier = Arc::new(StripWhitespace::default());
    let pipeline = SingleFilePipeline::new(bundler.clone(), minifier.clone());

    let report = pipeline
        .run(temp.path(), "./src/mod.ts", Path::new("./dist/mod.min.js"))
        .await
        .unwrap();

    let written = fs::read_to_string(temp.path().join("dist/mod.min.js")).unwrap();
    assert_eq!(written, "exportconstanswer=42;");
    assert_eq!(report.size_bytes, written.len() as u64);
    assert!((report.size_kb() - written.len() as f64 / 1024.0).abs() < f64::EPSILON);
    assert!(report.elapsed_ms() >= 0.0);

    assert_eq!(
        bundler.seen.lock().unwrap().as_slice(),
        [temp.path().join("./src/mod.ts")]
    );
}

#[tokio::test]
async fn minifier_receives_fixed_options() {
    let temp = project();
    let minifier = Arc::new(StripWhitespace::default());
    let pipeline = SingleFilePipeline::new(Arc::new(ReadEntry::default()), minifier.clone());

    pipeline
        .run(temp.path(), "./src/mod.ts", Path::new("./dist/mod.min.js"))
        .await
        .unwrap();

    let options = minifier.options.lock().unwrap().clone().unwrap();
    assert_eq!(options, TransformOptions::single_file());
    assert_eq!(options.format, ModuleFormat::Esm);
    assert!(options.minify && options.tree_shaking);
    assert!(options.drop.contains(&DropKind::Console));
    assert!(options.drop.contains(&DropKind::Debugger));
}

#[tokio::test]
async fn overwrites_existing_output_in_place() {
    let temp = project();
    fs::create_dir_all(temp.path().join("dist")).unwrap();
    fs::write(temp.path().join("dist/mod.min.js"), "stale content").unwrap();
    fs::write(temp.path().join("dist/other.js"), "untouched").unwrap();

    let pipeline = SingleFilePipeline::new(
        Arc::new(ReadEntry::default()),
        Arc::new(StripWhitespace::default()),
    );
    pipeline
        .run(temp.path(), "./src/mod.ts", Path::new("./dist/mod.min.js"))
        .await
        .unwrap();

    assert_eq!(
        fs::read_to_string(temp.path().join("dist/mod.min.js")).unwrap(),
        "exportconstanswer=42;"
    );
    // only the one output path is touched
    assert_eq!(
        fs::read_to_string(temp.path().join("dist/other.js")).unwrap(),
        "untouched"
    );
}

#[tokio::test]
async fn bundling_failure_writes_nothing() {
    let temp = project();
    let pipeline = SingleFilePipeline::new(
        Arc::new(UnresolvedImport),
        Arc::new(StripWhitespace::default()),
    );

    let err = pipeline
        .run(temp.path(), "./src/mod.ts", Path::new("./dist/mod.min.js"))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Could not resolve"));
    assert!(!temp.path().join("dist/mod.min.js").exists());
    assert!(!temp.path().join("dist").exists());
}

#[tokio::test]
async fn minification_failure_writes_nothing() {
    let temp = project();
    let pipeline = SingleFilePipeline::new(Arc::new(ReadEntry::default()), Arc::new(FailingMinifier));

    let err = pipeline
        .run(temp.path(), "./src/mod.ts", Path::new("./dist/mod.min.js"))
        .await
        .unwrap_err();

    assert!(matches!(err, BundleError::Engine { ref engine, .. } if engine == "fake-minifier"));
    assert!(!temp.path().join("dist/mod.min.js").exists());
}
