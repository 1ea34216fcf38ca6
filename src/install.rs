//! Destination path resolution and the file write.

use std::env;
use std::fs::OpenOptions;
use std::io::Write as _;
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};

use crate::entry::LauncherSpec;
use crate::error::Result;
use crate::renderer;

const SYSTEM_DIR: &str = "/usr/share/applications";

/// Resolve the full destination path for a spec.
///
/// Per-user entries go under `$HOME/.local/share/applications`, read from
/// the environment at call time. An unset HOME yields a path rooted at an
/// empty segment; the subsequent write fails there and surfaces as an I/O
/// error rather than being rejected up front.
pub fn entry_path(spec: &LauncherSpec) -> PathBuf {
    let dir = if spec.system_wide {
        PathBuf::from(SYSTEM_DIR)
    } else {
        user_dir(&env::var("HOME").unwrap_or_default())
    };
    dir.join(filename(&spec.name))
}

fn user_dir(home: &str) -> PathBuf {
    Path::new(home)
        .join(".local")
        .join("share")
        .join("applications")
}

/// The filename is the full display name lowercased, not the generic name.
/// No sanitization of separators or special characters: callers are
/// trusted input.
fn filename(name: &str) -> String {
    format!("{}.desktop", name.to_lowercase())
}

/// Render the entry and write it to its resolved path.
///
/// Create-or-truncate, not atomic, and the destination directory is not
/// created when missing. New files get mode 0644 regardless of umask; an
/// existing file keeps its bits on overwrite.
pub fn write(spec: &LauncherSpec) -> Result<PathBuf> {
    let path = entry_path(spec);
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o644)
        .open(&path)?;
    file.write_all(renderer::render(spec).as_bytes())?;
    Ok(path)
}
