//! Documentation-tool configuration (`typedoc.json`).

use distkit_config::EntryRegistry;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::options::{DocsOptions, SortStrategy};
use crate::site::SiteRoot;

/// Sidebar key of the landing page link.
pub const README_LINK: &str = "readme";

/// Serialized renderer configuration.
///
/// Field order matches the emitted document; `sidebar_links` keeps insertion
/// order so the sidebar renders in registry order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocsManifest {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub entry_points: Vec<String>,
    pub out: String,
    pub readme: String,
    pub sidebar_links: IndexMap<String, String>,
    pub skip_error_checking: bool,
    pub github_pages: bool,
    pub include_version: bool,
    pub sort: Vec<SortStrategy>,
}

impl DocsManifest {
    /// Derive the renderer configuration for `registry` served under `site_root`.
    ///
    /// The `readme` link points at the site root itself; every sub-entry links
    /// to its rendered module page. The main entry has no sidebar link.
    pub fn generate(registry: &EntryRegistry, site_root: &SiteRoot, options: &DocsOptions) -> Self {
        let entry_points = registry.paths().map(str::to_string).collect();

        let mut sidebar_links = IndexMap::with_capacity(registry.sub_entries().len() + 1);
        sidebar_links.insert(README_LINK.to_string(), site_root.as_str().to_string());
        for entry in registry.sub_entries() {
            sidebar_links.insert(
                entry.logical_name().to_string(),
                site_root.module_link(entry.logical_name()),
            );
        }

        Self {
            schema: options.schema.clone(),
            entry_points,
            out: options.out.clone(),
            readme: options.readme.clone(),
            sidebar_links,
            skip_error_checking: options.skip_error_checking,
            github_pages: options.github_pages,
            include_version: options.include_version,
            sort: options.sort.clone(),
        }
    }

    /// Compact JSON, as written to disk.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
