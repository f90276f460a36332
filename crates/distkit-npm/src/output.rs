//! Package output directory preparation.

use std::path::{Path, PathBuf};

use path_clean::PathClean;
use tracing::debug;

use crate::error::{PackageError, Result};

/// Resolve `out_dir` against `root` and refuse anything that is not a
/// dedicated build-output directory.
///
/// The resolved directory must not be, or contain, the project root or the
/// directory holding any of `sources` (entry points, readme). An existing
/// path must be a directory.
pub async fn resolve_output_dir(root: &Path, out_dir: &Path, sources: &[&Path]) -> Result<PathBuf> {
    let root = tokio::fs::canonicalize(root)
        .await
        .map_err(PackageError::fs(root))?;

    let joined = root.join(out_dir).clean();
    let resolved = match tokio::fs::metadata(&joined).await {
        Ok(meta) if !meta.is_dir() => return Err(PackageError::not_a_directory(joined)),
        Ok(_) => tokio::fs::canonicalize(&joined)
            .await
            .map_err(PackageError::fs(&joined))?,
        Err(_) => joined,
    };

    if resolved.parent().is_none() {
        return Err(PackageError::contains(resolved, "filesystem root"));
    }
    if root.starts_with(&resolved) {
        return Err(PackageError::contains(resolved, "project root"));
    }

    for source in sources {
        let source_file = root.join(source).clean();
        let source_dir = source_file.parent().unwrap_or(root.as_path());
        if source_dir.starts_with(&resolved) {
            return Err(PackageError::contains(
                resolved,
                &format!("directory of {}", source.display()),
            ));
        }
    }

    Ok(resolved)
}

/// Remove everything inside `out_dir`, creating it if missing.
pub async fn clear_output_dir(out_dir: &Path) -> Result<()> {
    if tokio::fs::try_exists(out_dir)
        .await
        .map_err(PackageError::fs(out_dir))?
    {
        let mut entries = tokio::fs::read_dir(out_dir)
            .await
            .map_err(PackageError::fs(out_dir))?;
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(PackageError::fs(out_dir))?
        {
            let path = entry.path();
            let file_type = entry.file_type().await.map_err(PackageError::fs(&path))?;
            let removed = if file_type.is_dir() {
                tokio::fs::remove_dir_all(&path).await
            } else {
                tokio::fs::remove_file(&path).await
            };
            removed.map_err(PackageError::fs(&path))?;
        }
        debug!("cleared {}", out_dir.display());
    } else {
        tokio::fs::create_dir_all(out_dir)
            .await
            .map_err(PackageError::fs(out_dir))?;
    }

    Ok(())
}

/// Write `contents` to `path`, creating parent directories.
pub(crate) async fn write_file(path: &Path, contents: impl AsRef<[u8]>) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(PackageError::fs(parent))?;
    }
    tokio::fs::write(path, contents)
        .await
        .map_err(PackageError::fs(path))
}
