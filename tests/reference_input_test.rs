//! Reference strings read from files.

use std::fs;

use pagesim::{read_references, run, Error, PageId, ParseError, PolicyKind};
use tempfile::tempdir;

#[test]
fn test_read_and_simulate() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("refs.txt");
    fs::write(&path, "1,2,3,4,1,2,5,1,2,3,4,5\n").unwrap();

    let refs = read_references(&path).unwrap();
    assert_eq!(refs.len(), 12);
    assert_eq!(run(&refs, 3, PolicyKind::Optimal).unwrap().faults(), 7);
}

#[test]
fn test_read_multiline_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("refs.txt");
    fs::write(&path, "7 0 1\n2 0 3\n\n0 4\n").unwrap();

    assert_eq!(
        read_references(&path).unwrap(),
        PageId::sequence(&[7, 0, 1, 2, 0, 3, 0, 4])
    );
}

#[test]
fn test_read_malformed_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("refs.txt");
    fs::write(&path, "1, 2, x3").unwrap();

    match read_references(&path) {
        Err(Error::Parse(ParseError::InvalidToken { position, token })) => {
            assert_eq!(position, 3);
            assert_eq!(token, "x3");
        }
        other => panic!("Expected parse error, got {other:?}"),
    }
}

#[test]
fn test_empty_file_fails_at_simulation() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("refs.txt");
    fs::write(&path, "").unwrap();

    let refs = read_references(&path).unwrap();
    assert!(refs.is_empty());
    assert!(matches!(
        run(&refs, 3, PolicyKind::Lru),
        Err(Error::Config(_))
    ));
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    assert!(matches!(
        read_references(dir.path().join("absent.txt")),
        Err(Error::Io(_))
    ));
}
