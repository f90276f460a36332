//! Fixed renderer options.

use serde::{Deserialize, Serialize};

/// Ordering strategies understood by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortStrategy {
    SourceOrder,
    RequiredFirst,
    Kind,
}

/// Renderer settings that do not depend on the registry or the site root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocsOptions {
    pub schema: String,
    pub out: String,
    pub readme: String,
    pub skip_error_checking: bool,
    pub github_pages: bool,
    pub include_version: bool,
    pub sort: Vec<SortStrategy>,
}

impl Default for DocsOptions {
    fn default() -> Self {
        Self {
            schema: "https://typedoc.org/schema.json".to_string(),
            out: "./docs/".to_string(),
            readme: "./src/readme.md".to_string(),
            skip_error_checking: true,
            github_pages: true,
            include_version: true,
            sort: vec![
                SortStrategy::SourceOrder,
                SortStrategy::RequiredFirst,
                SortStrategy::Kind,
            ],
        }
    }
}
