//! Mapping file bootstrap tests

use autowire_domain::Mapping;
use autowire_infrastructure::bootstrap::{ensure_mapping_file, render_mapping};
use tempfile::TempDir;

#[test]
fn test_render_mapping_is_loadable() {
    let content = render_mapping(&[("SomeInterface", "SomeImpl"), ("SomeOtherInterface", "SODoer")]);

    assert!(content.starts_with("# mapping"));
    let mapping = Mapping::parse(&content).unwrap();
    assert_eq!(mapping.get("SomeInterface"), Some("SomeImpl"));
    assert_eq!(mapping.get("SomeOtherInterface"), Some("SODoer"));
}

#[test]
fn test_ensure_creates_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("injector.properties");

    let created = ensure_mapping_file(&path, "Shape=Circle\n").unwrap();

    assert!(created);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "Shape=Circle\n");
}

#[test]
fn test_ensure_never_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("injector.properties");
    std::fs::write(&path, "Shape=Square\n").unwrap();

    let created = ensure_mapping_file(&path, "Shape=Circle\n").unwrap();

    assert!(!created);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "Shape=Square\n");
}
