use std::path::{Path, PathBuf};

use walkdir::WalkDir;

const HTML_SUFFIX: &[u8] = b".html";

/// Recursively yields every `.html` file under `root`.
///
/// Order is whatever the filesystem returns. Hidden directories are walked
/// and depth is unlimited. Directory symlinks are not descended into. Any
/// other non-directory entry is yielded, including dangling symlinks, so a
/// broken link surfaces as a read error downstream. Entries that cannot be
/// listed come back as `Err` so the caller picks the policy.
pub fn html_files(root: &Path) -> impl Iterator<Item = Result<PathBuf, walkdir::Error>> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) if is_html(entry.path()) && !entry.path().is_dir() => {
                Some(Ok(entry.into_path()))
            }
            Ok(_) => None,
            Err(err) => Some(Err(err)),
        })
}

/// Case-sensitive check on the file name, so `.HTML` and `.htm` do not count.
pub fn is_html(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.as_encoded_bytes().ends_with(HTML_SUFFIX))
}
