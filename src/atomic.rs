// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Atomic file replacement: write a sibling `<path>_tmp`, then rename it over `<path>`.

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Sibling temporary path used while rewriting `path`
pub fn temp_path(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push("_tmp");
    PathBuf::from(name)
}

/// Replace the contents of `path` with `content`.
///
/// If writing the temporary file fails, `path` is untouched. If only the rename
/// fails, the temporary file is left behind and reported on stderr.
pub fn write_file_atomic(path: &Path, content: impl AsRef<[u8]>) -> Result<()> {
    let tmp = temp_path(path);

    fs::write(&tmp, content)
        .with_context(|| format!("Failed to write temporary file {}", tmp.display()))?;

    if let Err(e) = fs::rename(&tmp, path) {
        eprintln!("warning: leaving temporary file {}", tmp.display());
        return Err(e).with_context(|| {
            format!("Failed to rename {} onto {}", tmp.display(), path.display())
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_path_appends_suffix() {
        assert_eq!(temp_path(Path::new("/a/foo.h")), PathBuf::from("/a/foo.h_tmp"));
        assert_eq!(temp_path(Path::new("foo.h")), PathBuf::from("foo.h_tmp"));
    }

    #[test]
    fn test_write_file_atomic_replaces_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("x.h");
        fs::write(&path, "old\n").unwrap();

        write_file_atomic(&path, "new\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
        assert!(!temp_path(&path).exists());
    }
}
