//! Site root used to build absolute sidebar links.

use std::fmt;

/// Base path the documentation site is served from.
///
/// Links are built by plain concatenation, so the value is kept exactly as
/// given: `"/"` for a local server, `"/<repo>/"` for a project page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SiteRoot(String);

impl SiteRoot {
    pub const DEFAULT: &'static str = "/";

    pub fn new(root: impl Into<String>) -> Self {
        Self(root.into())
    }

    /// Site root from an optional command-line argument.
    pub fn from_arg(arg: Option<String>) -> Self {
        arg.map(Self).unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Rendered page of a module, following the renderer's
    /// `modules/<name>.html` output layout.
    pub fn module_link(&self, logical_name: &str) -> String {
        format!("{}modules/{}.html", self.0, logical_name)
    }
}

impl Default for SiteRoot {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for SiteRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
