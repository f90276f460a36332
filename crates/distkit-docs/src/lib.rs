//! # distkit-docs
//!
//! Derives the documentation renderer's configuration (`typedoc.json`) from the
//! entry point registry and a site root.
//!
//! ```
//! use distkit_config::EntryRegistry;
//! use distkit_docs::{DocsManifest, DocsOptions, SiteRoot};
//!
//! let registry = EntryRegistry::new("./src/mod.ts", ["./src/crypto.ts"]).unwrap();
//! let manifest = DocsManifest::generate(&registry, &SiteRoot::new("/docs/"), &DocsOptions::default());
//!
//! assert_eq!(manifest.entry_points, ["./src/mod.ts", "./src/crypto.ts"]);
//! assert_eq!(manifest.sidebar_links["crypto"], "/docs/modules/crypto.html");
//! ```

pub mod manifest;
pub mod options;
pub mod site;

pub use manifest::{DocsManifest, README_LINK};
pub use options::{DocsOptions, SortStrategy};
pub use site::SiteRoot;
