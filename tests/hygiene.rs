//! Hygiene: source-level rules for `src/`, checked at test time.
//!
//! Each rule has a budget of zero. Panicking calls are banned outright, and
//! angle math must go through the crate's own helpers so wrapping and
//! conversion stay in one place.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`, excluding `*_test.rs`.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

/// Lines containing `pattern`, skipping `//` comment lines.
fn hits(files: &[SourceFile], pattern: &str) -> Vec<String> {
    files
        .iter()
        .flat_map(|file| {
            file.content
                .lines()
                .enumerate()
                .filter(|(_, line)| !line.trim_start().starts_with("//") && line.contains(pattern))
                .map(|(n, line)| format!("  {}:{}: {}", file.path, n + 1, line.trim()))
        })
        .collect()
}

fn assert_absent(pattern: &str, why: &str) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the crate root");
    let found = hits(&files, pattern);
    assert!(found.is_empty(), "`{pattern}` is not allowed in src/ ({why}):\n{}", found.join("\n"));
}

#[test]
fn no_unwrap() {
    assert_absent(".unwrap()", "propagate or default instead");
}

#[test]
fn no_expect() {
    assert_absent(".expect(", "propagate or default instead");
}

#[test]
fn no_panic() {
    assert_absent("panic!(", "library calls are total");
}

#[test]
fn no_unreachable() {
    assert_absent("unreachable!(", "library calls are total");
}

#[test]
fn no_todo() {
    assert_absent("todo!(", "stubs do not ship");
}

#[test]
fn no_silent_discard() {
    assert_absent("let _ =", "inspect or propagate results");
}

#[test]
fn no_dot_ok() {
    assert_absent(".ok()", "inspect or propagate results");
}

#[test]
fn no_allow_dead_code() {
    assert_absent("#[allow(dead_code)]", "delete unused code");
}

#[test]
fn radians_go_through_convert_angle_to_radians() {
    assert_absent(".to_radians()", "use angle::convert_angle_to_radians");
}

#[test]
fn wrapping_goes_through_normalize_degrees() {
    assert_absent("% 360", "use angle::normalize_degrees");
}
