#![no_main]

use header_guard::{rewrite_lines, GuardNames};
use libfuzzer_sys::fuzz_target;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    let names = GuardNames::from_path(Path::new("/fuzz/include/target.h")).unwrap();
    // Errors are fine (empty input), panics are not
    if let Ok(out) = rewrite_lines(data, &names) {
        let closing = format!("#endif  // {}\n", names.guard);
        assert!(out.content.ends_with(closing.as_bytes()));
    }
});
