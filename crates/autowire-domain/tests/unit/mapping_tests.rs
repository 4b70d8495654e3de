//! Unit tests for the abstraction mapping

use autowire_domain::{Error, Mapping};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "# mapping: interface = implementation").unwrap();
    writeln!(file, "SomeInterface=SomeImpl").unwrap();
    writeln!(file, "SomeOtherInterface=SODoer").unwrap();

    let mapping = Mapping::load(file.path()).unwrap();

    assert_eq!(mapping.get("SomeInterface"), Some("SomeImpl"));
    assert_eq!(mapping.get("SomeOtherInterface"), Some("SODoer"));
}

#[test]
fn test_load_leaves_file_untouched() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Shape=Circle").unwrap();
    let before = std::fs::read_to_string(file.path()).unwrap();

    Mapping::load(file.path()).unwrap();

    assert_eq!(std::fs::read_to_string(file.path()).unwrap(), before);
}

#[test]
fn test_load_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.properties");

    match Mapping::load(&path) {
        Err(Error::ConfigLoad { source_name, source, .. }) => {
            assert!(source_name.contains("absent.properties"));
            assert!(source.is_some());
        }
        other => panic!("Expected ConfigLoad error, got {other:?}"),
    }
}

#[test]
fn test_last_write_wins() {
    let mapping = Mapping::parse("Shape=Circle\nShape=Square\n").unwrap();

    assert_eq!(mapping.len(), 1);
    assert_eq!(mapping.get("Shape"), Some("Square"));
}

#[test]
fn test_blank_value_is_no_mapping() {
    let mapping = Mapping::parse("Shape=\nLogger =   \n").unwrap();

    assert_eq!(mapping.len(), 2);
    assert_eq!(mapping.get("Shape"), None);
    assert!(!mapping.contains("Logger"));
}

#[test]
fn test_blank_key_is_rejected() {
    let result = Mapping::parse("=Circle\n");
    assert!(matches!(result, Err(Error::ConfigLoad { .. })));
}

#[test]
fn test_from_iter_and_sorted_entries() {
    let mapping: Mapping = [("Shape", "Circle"), ("Logger", "ConsoleLogger")]
        .into_iter()
        .collect();

    assert_eq!(
        mapping.entries(),
        vec![("Logger", "ConsoleLogger"), ("Shape", "Circle")]
    );
}

#[test]
fn test_windows_line_endings() {
    let mapping = Mapping::parse("# header\r\nShape=Circle\r\n").unwrap();
    assert_eq!(mapping.get("Shape"), Some("Circle"));
}
