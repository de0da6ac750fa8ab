// src/report/pages.rs
//! One-directory-per-page walkthrough for architectural review.
//!
//! Page 1 is the tree overview. Every following page covers exactly one
//! directory: the root first, then the rest in lexicographic order.

use std::fmt::{self, Write};

use serde::Serialize;

use crate::graph::paths::{self, ROOT};
use crate::graph::{ImportPair, ScanResult};

use super::pluralize;
use super::tree::render_tree;

/// A rendered page, or a description of why none could be produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PageOutcome {
    Page { number: usize, total: usize, body: String },
    OutOfRange { requested: usize, total: usize },
}

impl PageOutcome {
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

impl fmt::Display for PageOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page { number, total, body } => {
                write!(f, "{body}\n--- page {number}/{total} ---")
            }
            Self::OutOfRange { requested, total } => write!(
                f,
                "Page {requested} is out of range: this review has {total} {} (1-{total}).",
                pluralize(*total, "page", "pages")
            ),
        }
    }
}

/// Directories in page order: root first, then lexicographic.
#[must_use]
pub fn page_directories(result: &ScanResult) -> Vec<&str> {
    let root = result.tree.contains(ROOT).then_some(ROOT);
    root.into_iter()
        .chain(result.tree.directories().filter(|d| *d != ROOT))
        .collect()
}

/// One overview page plus one page per populated directory.
#[must_use]
pub fn page_count(result: &ScanResult) -> usize {
    1 + result.tree.len()
}

/// Renders page `number` (1-indexed).
#[must_use]
pub fn render_page(result: &ScanResult, number: usize) -> PageOutcome {
    let total = page_count(result);
    if number == 0 || number > total {
        return PageOutcome::OutOfRange {
            requested: number,
            total,
        };
    }

    let dirs = page_directories(result);
    let body = match number.checked_sub(2).and_then(|i| dirs.get(i)) {
        Some(dir) => render_directory(result, dir),
        None => render_overview(result, &dirs),
    };

    PageOutcome::Page { number, total, body }
}

fn render_overview(result: &ScanResult, dirs: &[&str]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Architecture review: {}\n", result.base_dir.display());
    out.push_str(&render_tree(&result.tree));

    if !dirs.is_empty() {
        let _ = writeln!(out, "\nPages:");
        for (i, dir) in dirs.iter().enumerate() {
            let _ = writeln!(out, "  {:>3}  {dir}", i + 2);
        }
    }
    out
}

/// One segment above `dir`, or `dir` itself when it has no parent segment.
#[must_use]
pub fn parent_module(dir: &str) -> &str {
    match dir.rfind('/') {
        Some(idx) => &dir[..idx],
        None => dir,
    }
}

/// True for targets outside `dir` and its subdirectories.
#[must_use]
pub fn is_cross_directory(dir: &str, import: &ImportPair) -> bool {
    if !import.is_internal() {
        return false;
    }
    let target_dir = paths::parent_dir(&import.target);
    !paths::is_within(target_dir, dir)
}

fn render_directory(result: &ScanResult, dir: &str) -> String {
    let module = parent_module(dir);
    let files = result.tree.files_in(dir);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "# {dir}/ ({} {}, parent module: {module})\n",
        files.len(),
        pluralize(files.len(), "file", "files")
    );

    let mut shown = 0;
    for name in files {
        let file = if dir == ROOT {
            name.clone()
        } else {
            format!("{dir}/{name}")
        };
        let Some(record) = result.records.get(&file) else {
            continue;
        };
        let outgoing: Vec<&ImportPair> = record
            .imports
            .iter()
            .filter(|p| is_cross_directory(dir, p))
            .collect();
        if outgoing.is_empty() {
            continue;
        }

        shown += 1;
        let _ = writeln!(out, "{name}");
        for import in outgoing {
            let verdict = if paths::is_within(&import.target, module) {
                format!("within {module}")
            } else {
                format!("leaves {module}")
            };
            let _ = writeln!(out, "  {} -> {}  [{verdict}]", import.raw, import.target);
        }
    }

    if shown == 0 {
        let _ = writeln!(out, "No cross-directory imports.");
    }
    out
}
