use std::fs;

use apk_relocate::fs_ops::TEMP_PREFIX;
use apk_relocate::{relocate, RelocationError};
use assert_fs::prelude::*;

#[test]
fn parent_that_is_a_file_is_an_io_failure() {
    let temp = assert_fs::TempDir::new().unwrap();
    let src = temp.child("app-debug.apk");
    src.write_str("APK").unwrap();
    // "out" exists as a regular file, so it cannot become a directory.
    temp.child("out").write_str("not a dir").unwrap();
    let dest = temp.child("out/flutter-apk/app-debug.apk");

    let err = relocate(src.path(), dest.path()).unwrap_err();

    match &err {
        RelocationError::IoFailure { op, .. } => assert_eq!(*op, "create destination directory"),
        other => panic!("expected IoFailure, got {other:?}"),
    }
    assert_eq!(fs::read_to_string(temp.child("out").path()).unwrap(), "not a dir");
}

#[test]
fn destination_that_is_a_directory_fails_rename_without_leftovers() {
    let temp = assert_fs::TempDir::new().unwrap();
    let src = temp.child("app-debug.apk");
    src.write_str("fresh").unwrap();
    let out_dir = temp.child("out");
    let dest = out_dir.child("app-debug.apk");
    dest.child("keep.txt").write_str("occupied").unwrap();

    let err = relocate(src.path(), dest.path()).unwrap_err();

    match &err {
        RelocationError::IoFailure { op, path, .. } => {
            assert_eq!(*op, "rename temporary file into place");
            assert_eq!(path, dest.path());
        }
        other => panic!("expected IoFailure, got {other:?}"),
    }
    assert_eq!(
        fs::read_to_string(dest.child("keep.txt").path()).unwrap(),
        "occupied"
    );
    let names: Vec<String> = fs::read_dir(out_dir.path())
        .unwrap()
        .flatten()
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["app-debug.apk".to_string()]);
}

#[cfg(unix)]
#[test]
fn unreadable_source_is_reported_against_the_source() {
    use std::os::unix::fs::PermissionsExt;

    // Root reads 0000 files regardless of mode.
    unsafe {
        if libc::geteuid() == 0 {
            eprintln!("skipping: running as root");
            return;
        }
    }

    let temp = assert_fs::TempDir::new().unwrap();
    let src = temp.child("build/outputs/apk/debug/app-debug.apk");
    src.write_str("APKBYTES1").unwrap();
    fs::set_permissions(src.path(), fs::Permissions::from_mode(0o000)).unwrap();
    let dest = temp.child("out/flutter-apk/app-debug.apk");

    let res = relocate(src.path(), dest.path());

    fs::set_permissions(src.path(), fs::Permissions::from_mode(0o644)).unwrap();
    match &res {
        Err(RelocationError::IoFailure { op, path, .. }) => {
            assert_eq!(*op, "open source artifact");
            assert_eq!(path, src.path());
        }
        other => panic!("expected IoFailure, got {other:?}"),
    }
    assert!(!temp.child("out").path().exists());
}

#[cfg(unix)]
#[test]
fn readonly_destination_dir_keeps_old_artifact_and_no_temp() {
    use std::os::unix::fs::PermissionsExt;

    // Root can write into 0555 directories, which defeats the premise.
    unsafe {
        if libc::geteuid() == 0 {
            eprintln!("skipping: running as root");
            return;
        }
    }

    let temp = assert_fs::TempDir::new().unwrap();
    let src = temp.child("app-debug.apk");
    src.write_str("fresh").unwrap();
    let out_dir = temp.child("readonly");
    let dest = out_dir.child("app-debug.apk");
    dest.write_str("stale").unwrap();
    fs::set_permissions(out_dir.path(), fs::Permissions::from_mode(0o555)).unwrap();

    let res = relocate(src.path(), dest.path());

    fs::set_permissions(out_dir.path(), fs::Permissions::from_mode(0o755)).unwrap();
    assert!(matches!(res, Err(RelocationError::IoFailure { .. })));
    assert_eq!(fs::read_to_string(dest.path()).unwrap(), "stale");
    for entry in fs::read_dir(out_dir.path()).unwrap().flatten() {
        let name = entry.file_name();
        assert!(
            !name.to_string_lossy().starts_with(TEMP_PREFIX),
            "tmp file left behind: {:?}",
            name
        );
    }
}
