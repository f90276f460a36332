//! `distkit check`: validate every input without writing anything.

use std::path::Path;

use distkit_bundler::BuildTarget;
use distkit_npm::ScriptTable;

use crate::commands::utils::Project;
use crate::error::{Result, ResultExt};
use crate::ui;

/// # Validation Steps
///
/// 1. Load `distkit.toml` and the environment overrides
/// 2. Load and validate the project descriptor
/// 3. Build the entry registry and check every entry file exists
/// 4. Check the readme exists
/// 5. Derive the script table and check its bundle outputs are distinct
pub async fn execute(root: &Path) -> Result<()> {
    ui::info("Checking configuration...");
    let project = Project::load(root)?;
    ui::success(&format!(
        "{}@{} ({})",
        project.descriptor.name,
        project.descriptor.version,
        project.config.descriptor.display()
    ));

    ui::info("Checking entry points...");
    project.registry.verify_files(&project.root)?;
    ui::success(&format!("  {} (main)", project.registry.main()));
    for entry in project.registry.sub_entries() {
        ui::success(&format!("  {} ({})", entry.source_path(), entry.logical_name()));
    }

    let readme = project.resolve(&project.config.readme);
    tokio::fs::metadata(&readme)
        .await
        .with_path(&readme)
        .with_hint("Set `readme` in distkit.toml or DISTKIT_README")?;
    ui::success(&format!("  {} (readme)", project.config.readme.display()));

    ui::info("Checking package scripts...");
    let scripts = ScriptTable::new(&project.descriptor.name, project.registry.main());
    scripts.verify_distinct_outputs()?;
    for target in BuildTarget::SCRIPTED {
        if let (Some(script), Some(outfile)) =
            (target.script_name(), target.outfile(&project.descriptor.name))
        {
            ui::success(&format!("  {script} -> {outfile}"));
        }
    }

    ui::debug(&format!(
        "Effective configuration:\n{}",
        toml::to_string(&project.config)?
    ));
    ui::success("Project is ready to build");

    Ok(())
}
