//! Integration coverage for the host directory built from the
//! compiled-in table, exercised through the crate's public API only.

use pbin_core::hosts::{Expiry, Feature, HostDescriptor, HostDirectory};

#[test]
fn compiled_in_directory_is_reused_across_calls() {
    let a = HostDirectory::compiled_in();
    let b = HostDirectory::compiled_in();
    assert_eq!(a.len(), b.len());
    assert!(a.len() > 10, "curated table should have a healthy host count");
}

#[test]
fn filter_never_drops_a_host_that_matches() {
    let directory = HostDirectory::new(vec![
        HostDescriptor::new("https://a.example/", [Expiry::OneWeek], [Feature::Burn]),
        HostDescriptor::new("https://b.example/", [Expiry::OneWeek], []),
        HostDescriptor::new("https://c.example/", [Expiry::OneDay], [Feature::Burn]),
    ]);

    let hits = directory.filter(Expiry::OneWeek, &[Feature::Burn]);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].base_url, "https://a.example/");
}

#[test]
fn repeated_filters_return_the_same_set_in_possibly_different_order() {
    let directory = HostDirectory::new(vec![
        HostDescriptor::new("https://a.example/", [Expiry::Never], []),
        HostDescriptor::new("https://b.example/", [Expiry::Never], []),
        HostDescriptor::new("https://c.example/", [Expiry::Never], []),
        HostDescriptor::new("https://d.example/", [Expiry::Never], []),
    ]);

    let mut first: Vec<_> = directory
        .filter(Expiry::Never, &[])
        .into_iter()
        .map(|h| h.base_url)
        .collect();
    let mut second: Vec<_> = directory
        .filter(Expiry::Never, &[])
        .into_iter()
        .map(|h| h.base_url)
        .collect();
    first.sort();
    second.sort();
    assert_eq!(first, second);
}

#[test]
fn empty_directory_filters_to_nothing() {
    let directory = HostDirectory::new(vec![]);
    assert!(directory.filter(Expiry::Never, &[]).is_empty());
}
