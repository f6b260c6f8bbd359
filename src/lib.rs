// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! header-guard - include guard rewriting for generated headers
//!
//! Replaces the `#ifndef`/`#define`/`#endif` guard of a header with a name
//! derived from the header's path.

pub mod args;
pub mod atomic;
pub mod guard;
pub mod rewrite;

// Re-export commonly used items
pub use args::Args;
pub use atomic::write_file_atomic;
pub use guard::GuardNames;
pub use rewrite::{rewrite_file, rewrite_lines, FileReport, Fix, FixKind, Rewrite, RewriteOptions};
