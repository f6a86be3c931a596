//! Disk I/O and file lifecycle.
//!
//! Every file this crate produces (stored images and the rewritten document)
//! is written to a `.part` sibling, synced, then atomically renamed into place,
//! so a crash never leaves a truncated file under the final name.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `post.md` → `post.md.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Writes `data` to `final_path` all-or-nothing.
///
/// The parent directory must exist. An existing file keeps its permissions.
/// On failure the temp file is removed and any previous content at
/// `final_path` is left intact. `final_path` must not be a symlink; resolve it
/// first or the link itself is replaced.
pub fn write_atomic(final_path: &Path, data: &[u8]) -> io::Result<()> {
    let tp = temp_path(final_path);
    let result = write_and_rename(&tp, final_path, data);
    if result.is_err() {
        let _ = std::fs::remove_file(&tp);
    }
    result
}

fn write_and_rename(temp: &Path, final_path: &Path, data: &[u8]) -> io::Result<()> {
    let mut file = File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp)?;
    file.write_all(data)?;
    if let Ok(meta) = std::fs::metadata(final_path) {
        file.set_permissions(meta.permissions())?;
    }
    file.sync_all()?;
    drop(file);
    std::fs::rename(temp, final_path)
}
