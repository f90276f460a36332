//! `distkit dist`: single-file minified bundle.

use std::path::Path;

use distkit_bundler::SingleFilePipeline;

use crate::commands::utils::Project;
use crate::error::Result;
use crate::ui;

/// Bundle and minify the main entry into the configured output file.
///
/// The two measurements (duration and size) are informational; they are
/// logged and shown but never change the exit status.
pub async fn execute(root: &Path) -> Result<()> {
    let project = Project::load(root)?;
    let entry = project.registry.main();

    let spinner = ui::Spinner::new(&format!("Bundling {entry}"));
    let result = SingleFilePipeline::esbuild(&project.root)
        .run(&project.root, entry, &project.config.bundle_outfile)
        .await;

    let report = match result {
        Ok(report) => {
            spinner.clear();
            report
        }
        Err(err) => {
            spinner.fail(&format!("Bundling {entry} failed"));
            return Err(err.into());
        }
    };

    ui::print_artifact_summary(
        "Single-file bundle",
        &[(project.config.bundle_outfile.as_path(), report.size_bytes)],
        report.duration,
    );
    ui::success(&format!(
        "{} ({}, {:.0} ms)",
        project.config.bundle_outfile.display(),
        ui::format_kb(report.size_kb()),
        report.elapsed_ms()
    ));

    Ok(())
}
