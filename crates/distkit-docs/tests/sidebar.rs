//! Sidebar and entry point ordering of the generated renderer configuration.

use distkit_config::EntryRegistry;
use distkit_docs::{DocsManifest, DocsOptions, README_LINK, SiteRoot};
use indexmap::IndexMap;
use proptest::prelude::*;

fn kitchensink() -> EntryRegistry {
    EntryRegistry::new("./src/mod.ts", ["./src/crypto.ts", "./src/image.ts"]).unwrap()
}

#[test]
fn project_page_links() {
    let manifest = DocsManifest::generate(
        &kitchensink(),
        &SiteRoot::new("/docs/"),
        &DocsOptions::default(),
    );

    let expected: IndexMap<String, String> = [
        ("readme", "/docs/"),
        ("crypto", "/docs/modules/crypto.html"),
        ("image", "/docs/modules/image.html"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    assert_eq!(manifest.sidebar_links, expected);
    assert_eq!(
        manifest.entry_points,
        ["./src/mod.ts", "./src/crypto.ts", "./src/image.ts"]
    );
}

#[test]
fn kitchensink_typedoc_json() {
    let manifest = DocsManifest::generate(
        &kitchensink(),
        &SiteRoot::new("/docs/"),
        &DocsOptions::default(),
    );

    insta::assert_snapshot!(
        manifest.to_json().unwrap(),
        @r#"{"$schema":"https://typedoc.org/schema.json","entryPoints":["./src/mod.ts","./src/crypto.ts","./src/image.ts"],"out":"./docs/","readme":"./src/readme.md","sidebarLinks":{"readme":"/docs/","crypto":"/docs/modules/crypto.html","image":"/docs/modules/image.html"},"skipErrorChecking":true,"githubPages":true,"includeVersion":true,"sort":["source-order","required-first","kind"]}"#
    );
}

#[test]
fn omitted_site_root_links_to_slash() {
    let manifest = DocsManifest::generate(
        &kitchensink(),
        &SiteRoot::from_arg(None),
        &DocsOptions::default(),
    );

    assert_eq!(manifest.sidebar_links[README_LINK], "/");
    assert_eq!(manifest.sidebar_links["image"], "/modules/image.html");
}

#[test]
fn fixed_options_are_not_derived() {
    let manifest = DocsManifest::generate(
        &kitchensink(),
        &SiteRoot::new("/elsewhere/"),
        &DocsOptions::default(),
    );

    assert_eq!(manifest.out, "./docs/");
    assert_eq!(manifest.readme, "./src/readme.md");
    assert!(manifest.skip_error_checking);
    assert!(manifest.github_pages);
    assert!(manifest.include_version);
}

#[test]
fn main_only_registry_has_readme_link_only() {
    let registry = EntryRegistry::new("./src/mod.ts", Vec::<String>::new()).unwrap();
    let manifest = DocsManifest::generate(&registry, &SiteRoot::default(), &DocsOptions::default());

    assert_eq!(manifest.entry_points, ["./src/mod.ts"]);
    assert_eq!(manifest.sidebar_links.len(), 1);
}

fn unique_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set("[a-z][a-z0-9_]{0,9}", 0..=8).prop_map(|names| {
        names
            .into_iter()
            .filter(|name| name != README_LINK)
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Changing the site root only rewrites link prefixes.
    #[test]
    fn links_are_site_root_prefixed(root in "[/a-zA-Z0-9_.-]{0,16}", names in unique_names()) {
        let paths: Vec<String> = names.iter().map(|n| format!("./src/{n}.ts")).collect();
        let registry = EntryRegistry::new("./src/mod.ts", paths).unwrap();
        let manifest = DocsManifest::generate(&registry, &SiteRoot::new(root.clone()), &DocsOptions::default());

        prop_assert_eq!(&manifest.sidebar_links[README_LINK], &root);
        for name in &names {
            prop_assert_eq!(
                &manifest.sidebar_links[name.as_str()],
                &format!("{root}modules/{name}.html")
            );
        }
    }

    /// Entry points keep the main entry first and sub-entries in declaration order.
    #[test]
    fn entry_order_is_preserved(names in unique_names()) {
        let paths: Vec<String> = names.iter().map(|n| format!("./lib/{n}.ts")).collect();
        let registry = EntryRegistry::new("./lib/main.ts", paths.clone()).unwrap();
        let manifest = DocsManifest::generate(&registry, &SiteRoot::default(), &DocsOptions::default());

        prop_assert_eq!(&manifest.entry_points[0], "./lib/main.ts");
        prop_assert_eq!(&manifest.entry_points[1..], &paths[..]);

        let sidebar: Vec<&String> = manifest.sidebar_links.keys().skip(1).collect();
        let declared: Vec<&String> = names.iter().collect();
        prop_assert_eq!(sidebar, declared);
    }
}
