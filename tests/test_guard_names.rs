// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Tests for guard name derivation

use header_guard::GuardNames;
use std::path::Path;

fn names(path: &str) -> GuardNames {
    GuardNames::from_path(Path::new(path)).unwrap()
}

#[test]
fn test_absolute_path_keeps_all_directories() {
    let n = names("/project/include/foo.h");
    assert_eq!(n.base_name, "foo.h");
    assert_eq!(n.legacy_token, "FOO_H");
    assert_eq!(n.guard, "PROJECT_INCLUDE_FOO_H_");
}

#[test]
fn test_relative_path_drops_first_directory() {
    assert_eq!(names("include/foo.h").guard, "FOO_H_");
    assert_eq!(names("src/core/signalchecker.h").guard, "CORE_SIGNALCHECKER_H_");
}

#[test]
fn test_bare_file_name() {
    let n = names("foo.h");
    assert_eq!(n.guard, "FOO_H_");
    assert_eq!(n.legacy_token, "FOO_H");
}

#[test]
fn test_file_in_root_directory() {
    assert_eq!(names("/foo.h").guard, "_FOO_H_");
}

#[test]
fn test_every_dot_in_base_name_replaced() {
    let n = names("/gen/ui/main.window.pb.h");
    assert_eq!(n.legacy_token, "MAIN_WINDOW_PB_H");
    assert_eq!(n.guard, "GEN_UI_MAIN_WINDOW_PB_H_");
}

#[test]
fn test_dots_in_directories_are_kept() {
    assert_eq!(names("/a.b/c.h").guard, "A.B_C_H_");
}

#[test]
fn test_doubled_separator_yields_empty_segment() {
    assert_eq!(names("/a//b/c.h").guard, "A__B_C_H_");
}

#[test]
fn test_display_name_is_upper_cased_base() {
    let n = names("/x/podcastparser.h");
    assert_eq!(n.display_name(), "PODCASTPARSER_H");
}

#[test]
fn test_path_without_file_name_is_rejected() {
    assert!(GuardNames::from_path(Path::new("/project/include/")).is_err());
    assert!(GuardNames::from_path(Path::new("")).is_err());
}

#[test]
fn test_non_ascii_left_as_is_by_upper_casing() {
    assert_eq!(names("/x/é.h").guard, "X_é_H_");
    assert_eq!(names("/straße/ß.h").guard, "STRAßE_ß_H_");
    assert_eq!(names("/x/ß.h").legacy_token, "ß_H");
}
