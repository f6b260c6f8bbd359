// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Include guard rewriting.
//!
//! Each line goes through two independent transforms:
//! - guard lines (`#ifndef`/`#define` mentioning the legacy token) are replaced
//!   with the path-derived guard
//! - `signals:` gets a leading space unless the line already has ` signals:`
//!
//! The last line is then overwritten with `#endif  // <GUARD>`, whatever it held.

use anyhow::{bail, Context, Result};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::atomic::write_file_atomic;
use crate::guard::GuardNames;

/// What a single fix changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixKind {
    Ifndef,
    Define,
    Signals,
    Endif,
}

impl fmt::Display for FixKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            FixKind::Ifndef => "rename #ifndef guard",
            FixKind::Define => "rename #define guard",
            FixKind::Signals => "space before signals:",
            FixKind::Endif => "closing #endif comment",
        };
        f.write_str(text)
    }
}

/// A single line change. Lines are stored for display, without their terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fix {
    /// 1-based line number
    pub line_num: usize,
    pub kind: FixKind,
    pub old_line: String,
    pub new_line: String,
}

/// Result of rewriting a file's content in memory
#[derive(Debug, Clone)]
pub struct Rewrite {
    pub content: Vec<u8>,
    pub fixes: Vec<Fix>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RewriteOptions {
    /// Compute the rewrite but leave the file alone
    pub dry_run: bool,
}

/// Outcome of `rewrite_file`
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub names: GuardNames,
    pub fixes: Vec<Fix>,
    pub written: bool,
}

/// Whether `needle` occurs anywhere in `haystack`
fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.windows(needle.len()).any(|w| w == needle)
}

/// Replace every non-overlapping `from` with `to`, scanning left to right
fn replace_all(haystack: &[u8], from: &[u8], to: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(haystack.len());
    let mut i = 0;
    while i < haystack.len() {
        if haystack[i..].starts_with(from) {
            out.extend_from_slice(to);
            i += from.len();
        } else {
            out.push(haystack[i]);
            i += 1;
        }
    }
    out
}

/// Replacement for a guard line, if `line` is one.
///
/// `#ifndef` wins over `#define` when a line mentions both.
pub fn guard_line(line: &[u8], names: &GuardNames) -> Option<(FixKind, Vec<u8>)> {
    if !contains(line, names.legacy_token.as_bytes()) {
        return None;
    }
    if contains(line, b"#ifndef") {
        Some((FixKind::Ifndef, format!("#ifndef {}\n", names.guard).into_bytes()))
    } else if contains(line, b"#define") {
        Some((FixKind::Define, format!("#define {}\n", names.guard).into_bytes()))
    } else {
        None
    }
}

/// Insert a space before every `signals:` unless the line already has ` signals:`.
///
/// Returns `None` when the line is left as is.
pub fn normalize_signals(line: &[u8]) -> Option<Vec<u8>> {
    if contains(line, b" signals:") || !contains(line, b"signals:") {
        return None;
    }
    Some(replace_all(line, b"signals:", b" signals:"))
}

/// Closing line written at the end of every rewritten file
pub fn endif_line(guard: &str) -> Vec<u8> {
    format!("#endif  // {guard}\n").into_bytes()
}

/// Display form of a line: terminator dropped, invalid UTF-8 replaced
fn display_line(line: &[u8]) -> String {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    String::from_utf8_lossy(line).into_owned()
}

/// Rewrite `content` in memory.
///
/// Content is handled as raw bytes, so headers in any ASCII-compatible
/// encoding pass through untouched outside the rewritten lines.
/// Fails if `content` has no lines, since there is no last line to replace.
pub fn rewrite_lines(content: impl AsRef<[u8]>, names: &GuardNames) -> Result<Rewrite> {
    let mut lines: Vec<Vec<u8>> = Vec::new();
    let mut fixes: Vec<Fix> = Vec::new();

    for (idx, original) in content.as_ref().split_inclusive(|&b| b == b'\n').enumerate() {
        let line_num = idx + 1;
        let mut line = original.to_vec();

        if let Some((kind, replacement)) = guard_line(&line, names) {
            if replacement != line {
                fixes.push(Fix {
                    line_num,
                    kind,
                    old_line: display_line(&line),
                    new_line: display_line(&replacement),
                });
            }
            line = replacement;
        }

        if let Some(normalized) = normalize_signals(&line) {
            fixes.push(Fix {
                line_num,
                kind: FixKind::Signals,
                old_line: display_line(&line),
                new_line: display_line(&normalized),
            });
            line = normalized;
        }

        lines.push(line);
    }

    let line_count = lines.len();
    let Some(last) = lines.last_mut() else {
        bail!("No lines to rewrite");
    };
    let closing = endif_line(&names.guard);
    if *last != closing {
        fixes.push(Fix {
            line_num: line_count,
            kind: FixKind::Endif,
            old_line: display_line(last.as_slice()),
            new_line: display_line(&closing),
        });
        *last = closing;
    }

    Ok(Rewrite {
        content: lines.concat(),
        fixes,
    })
}

/// Rewrite the include guard of the file at `path`.
///
/// Prints the upper-cased base name and the guard before touching the file.
/// The file is replaced atomically; if reading or rewriting fails it is not touched.
pub fn rewrite_file(path: &Path, options: RewriteOptions) -> Result<FileReport> {
    let names = GuardNames::from_path(path)?;
    println!("{}", names.display_name());
    println!("{}", names.guard);

    let content = fs::read(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let rewrite = rewrite_lines(&content, &names)
        .with_context(|| format!("Failed to rewrite {}", path.display()))?;

    if !options.dry_run {
        write_file_atomic(path, &rewrite.content)?;
    }

    Ok(FileReport {
        path: path.to_path_buf(),
        names,
        fixes: rewrite.fixes,
        written: !options.dry_run,
    })
}
