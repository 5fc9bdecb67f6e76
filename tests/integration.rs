//! Integration tests for binding discovery and access.
//!
//! Covers the consumer-visible flow end to end: a service-binding root
//! projected on disk, discovery, name/type/provider filtering, entry
//! access through the shared accessors, the caching decorator, and
//! resolution of the root from the environment.

use std::fs;

use service_bindings as bindings;
use service_bindings::{Binding, FilesystemBinding, MapBinding};
use tempfile::TempDir;

/// Builds a bindings root shaped like a workload projection:
///
/// ```text
/// <root>/
///   test-k8s/            binding: type=postgresql, provider=acme
///     test-secret-key    "test-secret-value\n"
///     .hidden-data/      directory, invisible to lookups
///   other-service/       binding: type=mysql, provider=acme
///   additional-file      plain file, not a binding
/// ```
fn projected_root() -> TempDir {
    let dir = TempDir::new().unwrap();

    let first = dir.path().join("test-k8s");
    fs::create_dir(&first).unwrap();
    fs::write(first.join("test-secret-key"), "test-secret-value\n").unwrap();
    fs::write(first.join("type"), "postgresql\n").unwrap();
    fs::write(first.join("provider"), "acme\n").unwrap();
    fs::create_dir(first.join(".hidden-data")).unwrap();

    let second = dir.path().join("other-service");
    fs::create_dir(&second).unwrap();
    fs::write(second.join("type"), "mysql\n").unwrap();
    fs::write(second.join("provider"), "acme\n").unwrap();

    fs::write(dir.path().join("additional-file"), "not a binding").unwrap();

    dir
}

fn sorted_names(collection: &[Box<dyn Binding>]) -> Vec<String> {
    let mut names: Vec<String> = collection.iter().map(|b| b.name()).collect();
    names.sort();
    names
}

#[test]
fn test_discovery_skips_non_directory_children() {
    let root = projected_root();

    let all = bindings::from_path(root.path());

    assert_eq!(all.len(), 2);
    assert_eq!(sorted_names(&all), vec!["other-service", "test-k8s"]);
}

#[test]
fn test_discovery_of_missing_or_plain_file_root_is_empty() {
    let root = projected_root();

    assert!(bindings::from_path(root.path().join("no-such-root")).is_empty());
    assert!(bindings::from_path(root.path().join("additional-file")).is_empty());
}

#[test]
fn test_filesystem_binding_reads_fail_closed() {
    let root = projected_root();
    let binding = FilesystemBinding::new(root.path().join("test-k8s"));

    // Raw bytes are returned unmodified, trailing newline included.
    assert_eq!(
        binding.get_as_bytes("test-secret-key"),
        Some(b"test-secret-value\n".to_vec())
    );

    // The decoded accessor trims surrounding whitespace.
    assert_eq!(
        binding.get("test-secret-key").as_deref(),
        Some("test-secret-value")
    );

    // Invalid key syntax and directory entries read as absent.
    assert_eq!(binding.get_as_bytes("test^secret^key"), None);
    assert_eq!(binding.get_as_bytes(".hidden-data"), None);

    assert_eq!(binding.name(), "test-k8s");
}

#[test]
fn test_find_by_name_is_case_insensitive() {
    let root = projected_root();
    let all = bindings::from_path(root.path());

    let found = bindings::find(&all, "TEST-K8S").unwrap();
    assert_eq!(found.name(), "test-k8s");

    assert!(bindings::find(&all, "unknown-service").is_none());
}

#[test]
fn test_typed_filtering_across_projected_bindings() {
    let root = projected_root();
    let all = bindings::from_path(root.path());

    let postgres = bindings::filter_with_provider(&all, "postgresql", "acme");
    assert_eq!(postgres.len(), 1);
    assert_eq!(postgres[0].name(), "test-k8s");

    let mysql = bindings::filter(&all, "mysql");
    assert_eq!(mysql.len(), 1);
    assert_eq!(mysql[0].name(), "other-service");

    assert!(bindings::filter(&all, "redis").is_empty());
}

#[test]
fn test_typed_filtering_across_map_bindings() {
    let collection: Vec<Box<dyn Binding>> = vec![
        Box::new(
            MapBinding::empty("test-name-1")
                .with_entry("type", "postgresql")
                .with_entry("provider", "acme"),
        ),
        Box::new(
            MapBinding::empty("test-name-2")
                .with_entry("type", "mysql")
                .with_entry("provider", "acme"),
        ),
    ];

    let postgres = bindings::filter_with_provider(&collection, "postgresql", "acme");
    assert_eq!(postgres.len(), 1);
    assert_eq!(postgres[0].name(), "test-name-1");

    let mysql = bindings::filter(&collection, "mysql");
    assert_eq!(mysql.len(), 1);
    assert_eq!(mysql[0].name(), "test-name-2");
}

#[test]
fn test_unfiltered_collection_is_returned_unchanged() {
    let root = projected_root();
    let all = bindings::from_path(root.path());
    let original: Vec<String> = all.iter().map(|b| b.name()).collect();

    let unfiltered = bindings::filter_with_provider(&all, "", "");
    let names: Vec<String> = unfiltered.iter().map(|b| b.name()).collect();

    assert_eq!(names, original);
}

#[test]
fn test_cached_bindings_survive_entry_removal() {
    let root = projected_root();
    let entry = root.path().join("test-k8s").join("test-secret-key");

    let all = bindings::cached(bindings::from_path(root.path()));
    let binding = bindings::find(&all, "test-k8s").unwrap();

    assert_eq!(
        binding.get("test-secret-key").as_deref(),
        Some("test-secret-value")
    );

    fs::remove_file(&entry).unwrap();

    // The cached value is still served, byte-identical to the first read.
    assert_eq!(
        binding.get_as_bytes("test-secret-key"),
        Some(b"test-secret-value\n".to_vec())
    );

    // An uncached binding over the same directory sees the removal.
    let fresh = FilesystemBinding::new(root.path().join("test-k8s"));
    assert_eq!(fresh.get_as_bytes("test-secret-key"), None);
}

#[test]
fn test_cached_bindings_notice_late_entries() {
    let root = projected_root();

    let all = bindings::cached(bindings::from_path(root.path()));
    let binding = bindings::find(&all, "test-k8s").unwrap();

    // Misses are not cached, so an entry projected later becomes visible.
    assert_eq!(binding.get("late-key"), None);

    fs::write(root.path().join("test-k8s").join("late-key"), "late-value\n").unwrap();

    assert_eq!(binding.get("late-key").as_deref(), Some("late-value"));
}

// The only test that touches SERVICE_BINDING_ROOT: both the unset and the
// set paths are exercised here sequentially so parallel test threads never
// race on the process environment.
#[test]
fn test_environment_root_resolution() {
    let root = projected_root();

    std::env::remove_var(bindings::SERVICE_BINDING_ROOT);
    assert!(bindings::from_service_binding_root().is_empty());

    std::env::set_var(bindings::SERVICE_BINDING_ROOT, root.path());
    let all = bindings::from_service_binding_root();
    assert_eq!(all.len(), 2);

    std::env::set_var(
        bindings::SERVICE_BINDING_ROOT,
        root.path().join("no-such-root"),
    );
    assert!(bindings::from_service_binding_root().is_empty());

    std::env::remove_var(bindings::SERVICE_BINDING_ROOT);
}
