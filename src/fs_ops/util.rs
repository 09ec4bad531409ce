use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Prefix shared by every temporary file we create next to a destination.
pub const TEMP_PREFIX: &str = ".apk_relocate.";

static SEQ: AtomicU64 = AtomicU64::new(0);

/// Hidden sibling name inside `dst_dir`: `.apk_relocate.<pid>.<nanos>.<seq>.tmp`
pub(super) fn unique_temp_path(dst_dir: &Path) -> PathBuf {
    let pid = std::process::id();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let seq = SEQ.fetch_add(1, Ordering::Relaxed);
    dst_dir.join(format!("{TEMP_PREFIX}{pid}.{nanos}.{seq}.tmp"))
}

/// Persist a rename by syncing its directory. Windows has no equivalent.
#[cfg(unix)]
pub(super) fn fsync_dir(dir: &Path) -> std::io::Result<()> {
    std::fs::File::open(dir)?.sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn temp_paths_are_unique_and_hidden() {
        let dir = Path::new("/out/flutter-apk");
        let mut seen = HashSet::new();
        for _ in 0..64 {
            let p = unique_temp_path(dir);
            assert_eq!(p.parent(), Some(dir));
            let name = p.file_name().unwrap().to_string_lossy().into_owned();
            assert!(name.starts_with(TEMP_PREFIX));
            assert!(name.ends_with(".tmp"));
            assert!(seen.insert(p));
        }
    }
}
