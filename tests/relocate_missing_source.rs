use std::fs;

use apk_relocate::{relocate, RelocationError};
use assert_fs::prelude::*;

#[test]
fn missing_source_creates_nothing() {
    let temp = assert_fs::TempDir::new().unwrap();
    let src = temp.child("build/outputs/apk/debug/app-debug.apk");
    let dest = temp.child("out/flutter-apk/app-debug.apk");

    let err = relocate(src.path(), dest.path()).unwrap_err();

    match &err {
        RelocationError::SourceMissing(p) => assert_eq!(p, src.path()),
        other => panic!("expected SourceMissing, got {other:?}"),
    }
    assert!(err.to_string().contains("app-debug.apk"));
    assert!(!temp.child("out").path().exists(), "no directories may be created");
}

#[test]
fn missing_source_leaves_existing_destination_alone() {
    let temp = assert_fs::TempDir::new().unwrap();
    let src = temp.child("gone.apk");
    let dest = temp.child("out/app-debug.apk");
    dest.write_str("previous build").unwrap();
    let before = fs::metadata(dest.path()).unwrap().modified().unwrap();

    let err = relocate(src.path(), dest.path()).unwrap_err();

    assert!(matches!(err, RelocationError::SourceMissing(_)));
    assert_eq!(fs::read_to_string(dest.path()).unwrap(), "previous build");
    assert_eq!(fs::metadata(dest.path()).unwrap().modified().unwrap(), before);
    let entries: Vec<_> = fs::read_dir(temp.child("out").path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}
