//! Look for APKs the packaging step may have written somewhere unexpected.
//! Only used to enrich the "artifact not found" diagnostics.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// `build/outputs/apk/<variant>/<file>` sits at depth 3 below `build/outputs`;
/// allow one extra level for flavored builds.
const MAX_DEPTH: usize = 4;

/// List `.apk` files under `outputs_dir`, sorted for stable output.
/// Missing or unreadable directories yield an empty list.
pub fn find_apk_candidates(outputs_dir: &Path) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = WalkDir::new(outputs_dir)
        .min_depth(1)
        .max_depth(MAX_DEPTH)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| {
            p.extension()
                .map(|ext| ext.eq_ignore_ascii_case("apk"))
                .unwrap_or(false)
        })
        .collect();
    found.sort();
    found
}
