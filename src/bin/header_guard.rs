// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Fix: Header Guards
//!
//! Rewrites the include guard of each header so the guard name comes from the
//! header's path instead of whatever the generator emitted.
//!
//! Usage:
//!   header-guard /project/include/foo.h            # Rewrite one header
//!   header-guard -n /project/include/*.h           # Show guards, change nothing
//!   header-guard -v /project/include/foo.h         # Show every changed line
//!
//! Binary: header-guard

use anyhow::Result;
use clap::Parser;
use header_guard::{rewrite_file, Args, FileReport, FixKind};

/// Statistics for the run
#[derive(Default)]
struct Stats {
    files_processed: usize,
    files_modified: usize,
    guards_renamed: usize,
    signals_spaced: usize,
    endifs_written: usize,
}

impl Stats {
    fn record(&mut self, report: &FileReport) {
        self.files_processed += 1;
        if !report.fixes.is_empty() {
            self.files_modified += 1;
        }
        for fix in &report.fixes {
            match fix.kind {
                FixKind::Ifndef | FixKind::Define => self.guards_renamed += 1,
                FixKind::Signals => self.signals_spaced += 1,
                FixKind::Endif => self.endifs_written += 1,
            }
        }
    }
}

fn print_fixes(report: &FileReport) {
    println!("{}:", report.path.display());
    if report.fixes.is_empty() {
        println!("  no changes");
        return;
    }
    for fix in &report.fixes {
        println!("  Line {}: FIX - {}", fix.line_num, fix.kind);
        println!("    - {}", fix.old_line);
        println!("    + {}", fix.new_line);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let options = args.rewrite_options();
    let mut stats = Stats::default();

    for file in &args.files {
        let report = rewrite_file(file, options)?;
        if args.verbose {
            print_fixes(&report);
        }
        stats.record(&report);
    }

    if args.verbose {
        println!();
        println!("Summary");
        println!("-------");
        println!("Files processed:  {}", stats.files_processed);
        println!("Files modified:   {}", stats.files_modified);
        println!("Guards renamed:   {}", stats.guards_renamed);
        println!("Signals spaced:   {}", stats.signals_spaced);
        println!("Endifs written:   {}", stats.endifs_written);
        if args.dry_run && stats.files_modified > 0 {
            println!();
            println!("Run without --dry-run to apply fixes.");
        }
    }

    Ok(())
}
