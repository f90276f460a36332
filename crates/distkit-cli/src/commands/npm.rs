//! `distkit npm [SITE_ROOT]`: npm package synthesis.

use std::path::Path;

use distkit_docs::SiteRoot;
use distkit_npm::NpmPackageSynthesizer;

use crate::cli::NpmArgs;
use crate::commands::utils::Project;
use crate::error::Result;
use crate::ui;

/// Synthesize the npm package for the project at `root`.
///
/// # Errors
///
/// Fails before touching the output directory when the inputs are invalid
/// or the directory is unsafe to clear. A packaging engine failure leaves
/// no auxiliary files behind.
pub async fn execute(root: &Path, args: NpmArgs) -> Result<()> {
    let project = Project::load(root)?;
    let site_root = SiteRoot::from_arg(args.site_root);

    ui::info(&format!(
        "Packaging {}@{} into {} (docs served from {})",
        project.descriptor.name,
        project.descriptor.version,
        project.config.npm_dir.display(),
        site_root
    ));

    let spinner = ui::Spinner::new("Running dnt");
    let result = NpmPackageSynthesizer::dnt(&project.root)
        .run(
            &project.root,
            &project.config,
            &project.descriptor,
            &project.registry,
            &site_root,
        )
        .await;

    let report = match result {
        Ok(report) => {
            spinner.clear();
            report
        }
        Err(err) => {
            spinner.fail("Packaging failed");
            return Err(err.into());
        }
    };

    for file in &report.auxiliary_files {
        let shown = file.strip_prefix(&report.out_dir).unwrap_or(file);
        ui::info(&format!("wrote {}", shown.display()));
    }
    ui::success(&format!(
        "npm package {} written to {} in {}",
        report.manifest.name,
        report.out_dir.display(),
        ui::format_duration(report.duration)
    ));

    Ok(())
}
