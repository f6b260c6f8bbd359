// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Guard name derivation from a header path.
//!
//! Paths are handled as text on `/`, the way `dirname`/`basename` split them:
//! - base name: everything after the last `/`
//! - directory segments: the directory split on `/`, first element dropped
//!
//! For an absolute path the dropped element is the empty segment before the
//! root. For a relative path it is the first real directory.

use anyhow::{bail, Result};
use std::path::Path;

/// Names derived from one header path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardNames {
    /// Last path segment, as written
    pub base_name: String,
    /// Upper-cased base name with `.` replaced by `_`; matches the old guard lines
    pub legacy_token: String,
    /// Path-derived guard, e.g. `PROJECT_INCLUDE_FOO_H_`
    pub guard: String,
}

impl GuardNames {
    /// Derive the names for `path`.
    ///
    /// Fails for non-UTF-8 paths and paths with no file name segment.
    pub fn from_path(path: &Path) -> Result<Self> {
        let Some(text) = path.to_str() else {
            bail!("Path is not valid UTF-8: {}", path.display());
        };
        Self::from_str_path(text)
    }

    fn from_str_path(text: &str) -> Result<Self> {
        let (dir, base_name) = split_dir_base(text);
        if base_name.is_empty() {
            bail!("Path has no file name: {text}");
        }

        let file_token = base_name.replace('.', "_");
        let mut parts: Vec<&str> = directory_segments(dir);
        parts.push(&file_token);
        let guard = format!("{}_", parts.join("_")).to_ascii_uppercase();

        Ok(GuardNames {
            base_name: base_name.to_string(),
            legacy_token: file_token.to_ascii_uppercase(),
            guard,
        })
    }

    /// First diagnostic line: the upper-cased, dot-translated base name
    pub fn display_name(&self) -> &str {
        &self.legacy_token
    }
}

/// Split `text` into (directory, base name) on the last `/`.
///
/// Trailing slashes are stripped from the directory unless it is all slashes.
fn split_dir_base(text: &str) -> (&str, &str) {
    match text.rfind('/') {
        Some(idx) => {
            let head = &text[..=idx];
            let base = &text[idx + 1..];
            let dir = if head.chars().all(|c| c == '/') {
                head
            } else {
                head.trim_end_matches('/')
            };
            (dir, base)
        }
        None => ("", text),
    }
}

/// Directory split on `/` with the first element dropped.
///
/// Empty segments from doubled separators are kept.
fn directory_segments(dir: &str) -> Vec<&str> {
    dir.split('/').skip(1).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_dir_base() {
        assert_eq!(split_dir_base("/a/b/c.h"), ("/a/b", "c.h"));
        assert_eq!(split_dir_base("c.h"), ("", "c.h"));
        assert_eq!(split_dir_base("/c.h"), ("/", "c.h"));
        assert_eq!(split_dir_base("a//c.h"), ("a", "c.h"));
        assert_eq!(split_dir_base("a/"), ("a", ""));
    }

    #[test]
    fn test_directory_segments() {
        assert!(directory_segments("").is_empty());
        assert_eq!(directory_segments("/"), vec![""]);
        assert_eq!(directory_segments("/a/b"), vec!["a", "b"]);
        assert_eq!(directory_segments("a/b"), vec!["b"]);
        assert_eq!(directory_segments("a//b"), vec!["", "b"]);
    }
}
