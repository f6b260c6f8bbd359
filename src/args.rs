// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Command line arguments for header-guard

use clap::Parser;
use std::path::PathBuf;

use crate::rewrite::RewriteOptions;

#[derive(Parser, Debug)]
#[command(name = "header-guard")]
#[command(version)]
#[command(about = "Rewrite include guards so the guard name is derived from the file path")]
#[command(after_help = "\
The first directory of each path is dropped when building the guard, so pass
absolute paths to get every directory into the guard:

  header-guard /project/include/foo.h   # PROJECT_INCLUDE_FOO_H_
  header-guard include/foo.h            # FOO_H_

Use -- before file names that start with a dash:

  header-guard -- -n.h")]
pub struct Args {
    /// Header files to rewrite, processed left to right
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Show what would change without modifying files
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Show every changed line and a summary
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn rewrite_options(&self) -> RewriteOptions {
        RewriteOptions {
            dry_run: self.dry_run,
        }
    }
}
