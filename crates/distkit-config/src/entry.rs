//! Entry point registry.
//!
//! One main entry, addressed positionally, followed by named sub-entries in
//! declaration order. Every downstream artifact enumerates the registry in this
//! order; nothing here ever re-sorts it.

use std::path::Path;

use crate::error::{ConfigError, Result};

/// Logical names that cannot be used by sub-entries. `readme` is the fixed
/// key of the documentation sidebar's landing link.
pub const RESERVED_NAMES: &[&str] = &["readme"];

/// A named root module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPoint {
    logical_name: String,
    source_path: String,
}

impl EntryPoint {
    /// Create an entry point, deriving its logical name from the file stem.
    ///
    /// ```
    /// use distkit_config::EntryPoint;
    ///
    /// let entry = EntryPoint::from_path("./src/eightpack_varint.ts").unwrap();
    /// assert_eq!(entry.logical_name(), "eightpack_varint");
    /// ```
    pub fn from_path(path: impl Into<String>) -> Result<Self> {
        let source_path = path.into();
        let logical_name = Path::new(&source_path)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .filter(|stem| !stem.is_empty())
            .ok_or_else(|| ConfigError::InvalidEntry(source_path.clone()))?
            .to_string();

        Ok(Self {
            logical_name,
            source_path,
        })
    }

    pub fn logical_name(&self) -> &str {
        &self.logical_name
    }

    pub fn source_path(&self) -> &str {
        &self.source_path
    }
}

/// The fixed, ordered set of root modules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRegistry {
    main: String,
    sub_entries: Vec<EntryPoint>,
}

impl EntryRegistry {
    /// Build a registry from the main entry path and the sub-entry paths.
    ///
    /// # Errors
    ///
    /// - `InvalidEntry` if a sub-entry path has no file stem
    /// - `ReservedEntryName` if a sub-entry would be named `readme`
    /// - `DuplicateEntry` if two sub-entries share a logical name
    pub fn new<I, S>(main: impl Into<String>, sub_entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries: Vec<EntryPoint> = Vec::new();
        for path in sub_entries {
            let entry = EntryPoint::from_path(path)?;
            if RESERVED_NAMES.contains(&entry.logical_name.as_str()) {
                return Err(ConfigError::ReservedEntryName {
                    name: entry.logical_name,
                    path: entry.source_path,
                });
            }
            if let Some(existing) = entries
                .iter()
                .find(|e| e.logical_name == entry.logical_name)
            {
                return Err(ConfigError::DuplicateEntry {
                    name: entry.logical_name,
                    first: existing.source_path.clone(),
                    second: entry.source_path,
                });
            }
            entries.push(entry);
        }

        Ok(Self {
            main: main.into(),
            sub_entries: entries,
        })
    }

    /// Path of the main entry point.
    pub fn main(&self) -> &str {
        &self.main
    }

    pub fn sub_entries(&self) -> &[EntryPoint] {
        &self.sub_entries
    }

    /// Main entry path followed by every sub-entry path, in registry order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.main.as_str()).chain(self.sub_entries.iter().map(|e| e.source_path()))
    }

    /// Check that every registered path is a file under `root`.
    pub fn verify_files(&self, root: &Path) -> Result<()> {
        for path in self.paths() {
            let resolved = root.join(path);
            if !resolved.is_file() {
                return Err(ConfigError::EntryNotFound(resolved));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn logical_name_is_file_stem() {
        let entry = EntryPoint::from_path("./src/crypto.ts").unwrap();
        assert_eq!(entry.logical_name(), "crypto");
        assert_eq!(entry.source_path(), "./src/crypto.ts");
    }

    #[test]
    fn path_without_stem_is_rejected() {
        assert!(matches!(
            EntryPoint::from_path("./src/.."),
            Err(ConfigError::InvalidEntry(_))
        ));
        assert!(EntryPoint::from_path("").is_err());
    }

    #[test]
    fn registry_preserves_declaration_order() {
        let registry =
            EntryRegistry::new("./src/mod.ts", ["./src/struct.ts", "./src/browser.ts", "./src/image.ts"])
                .unwrap();

        let paths: Vec<_> = registry.paths().collect();
        assert_eq!(
            paths,
            ["./src/mod.ts", "./src/struct.ts", "./src/browser.ts", "./src/image.ts"]
        );
        assert_eq!(registry.sub_entries().len(), 3);
    }

    #[test]
    fn duplicate_logical_names_are_rejected() {
        let err = EntryRegistry::new("./src/mod.ts", ["./src/a/image.ts", "./src/b/image.js"])
            .unwrap_err();
        match err {
            ConfigError::DuplicateEntry { name, first, second } => {
                assert_eq!(name, "image");
                assert_eq!(first, "./src/a/image.ts");
                assert_eq!(second, "./src/b/image.js");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn reserved_name_is_rejected() {
        let err = EntryRegistry::new("./src/mod.ts", ["./src/readme.ts"]).unwrap_err();
        assert!(matches!(err, ConfigError::ReservedEntryName { ref name, .. } if name == "readme"));
    }

    #[test]
    fn main_entry_may_share_a_stem() {
        // the main entry is positional and never named
        let registry = EntryRegistry::new("./src/mod.ts", ["./src/other/mod.ts"]).unwrap();
        assert_eq!(registry.sub_entries()[0].logical_name(), "mod");
    }

    #[test]
    fn verify_files_reports_missing_entry() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("src")).unwrap();
        fs::write(temp.path().join("src/mod.ts"), "export {}").unwrap();

        let registry = EntryRegistry::new("./src/mod.ts", ["./src/crypto.ts"]).unwrap();
        let err = registry.verify_files(temp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::EntryNotFound(p) if p.ends_with("crypto.ts")));

        fs::write(temp.path().join("src/crypto.ts"), "export {}").unwrap();
        registry.verify_files(temp.path()).unwrap();
    }
}
