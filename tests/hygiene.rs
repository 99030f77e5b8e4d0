//! Hygiene — enforces coding standards at test time
//!
//! These tests scan the crate's production sources for antipatterns. Each has
//! a budget (ideally zero). If you must add one, you have to fix an existing
//! one first — the budget never grows.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

// Panics — these crash the page's wasm instance.
const MAX_UNWRAP: usize = 0;
const MAX_EXPECT: usize = 0;
const MAX_PANIC: usize = 0;
const MAX_UNREACHABLE: usize = 0;
const MAX_TODO: usize = 0;
const MAX_UNIMPLEMENTED: usize = 0;

// Silent loss — discards errors without inspecting.
const MAX_SILENT_DISCARD: usize = 0;
const MAX_DOT_OK: usize = 0;

// Style / structure.
const MAX_ALLOW_DEAD_CODE: usize = 0;

/// The only production file allowed to call into `web-sys`.
const BROWSER_BACKEND: &str = "web.rs";

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `src/`, excluding test files.
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
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn count_in_source(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            if count > 0 { Some((file.path.clone(), count)) } else { None }
        })
        .collect()
}

fn total(hits: &[(String, usize)]) -> usize {
    hits.iter().map(|(_, c)| c).sum()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter().map(|(path, count)| format!("  {path}: {count}")).collect::<Vec<_>>().join("\n")
}

fn assert_budget(pattern: &str, max: usize, label: &str) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the crate root");
    let hits = count_in_source(&files, pattern);
    let count = total(&hits);
    assert!(count <= max, "{label} budget exceeded: found {count}, max {max}.\n{}", format_hits(&hits));
}

#[test]
fn unwrap_budget() {
    assert_budget(".unwrap()", MAX_UNWRAP, ".unwrap()");
}

#[test]
fn expect_budget() {
    assert_budget(".expect(", MAX_EXPECT, ".expect()");
}

#[test]
fn panic_budget() {
    assert_budget("panic!(", MAX_PANIC, "panic!()");
}

#[test]
fn unreachable_budget() {
    assert_budget("unreachable!(", MAX_UNREACHABLE, "unreachable!()");
}

#[test]
fn todo_budget() {
    assert_budget("todo!(", MAX_TODO, "todo!()");
}

#[test]
fn unimplemented_budget() {
    assert_budget("unimplemented!(", MAX_UNIMPLEMENTED, "unimplemented!()");
}

#[test]
fn silent_discard_budget() {
    assert_budget("let _ =", MAX_SILENT_DISCARD, "let _ =");
}

#[test]
fn dot_ok_budget() {
    assert_budget(".ok()", MAX_DOT_OK, ".ok()");
}

#[test]
fn allow_dead_code_budget() {
    assert_budget("#[allow(dead_code)]", MAX_ALLOW_DEAD_CODE, "#[allow(dead_code)]");
}

#[test]
fn web_sys_stays_in_browser_backend() {
    let files = source_files();
    let hits: Vec<(String, usize)> = count_in_source(&files, "web_sys")
        .into_iter()
        .filter(|(path, _)| !path.ends_with(BROWSER_BACKEND))
        .collect();
    assert!(hits.is_empty(), "web_sys used outside {BROWSER_BACKEND}:\n{}", format_hits(&hits));
}
