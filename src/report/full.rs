// src/report/full.rs
//! Complete dump: tree, per-file dependencies, mutual dependencies.

use std::collections::HashMap;
use std::fmt::Write;

use crate::graph::{DependencyRecord, ScanResult, TargetKind};

use super::tree::render_tree;

/// Renders the whole scan as plain text.
#[must_use]
pub fn render_full(result: &ScanResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Dependency report: {}\n", result.base_dir.display());

    let _ = writeln!(out, "## Directory tree\n");
    out.push_str(&render_tree(&result.tree));

    let _ = writeln!(out, "\n## Dependencies\n");
    if result.files.is_empty() {
        let _ = writeln!(out, "(no files in scope)");
    }
    for file in &result.files {
        let _ = writeln!(out, "{file}");
        match result.records.get(file) {
            Some(record) if !record.all.is_empty() => write_targets(&mut out, record),
            _ => {
                let _ = writeln!(out, "  (no imports)");
            }
        }
    }

    let _ = writeln!(out, "\n## Mutual dependencies\n");
    let mutual = result.mutual_dependencies();
    if mutual.is_empty() {
        let _ = writeln!(out, "(none)");
    }
    for pair in &mutual {
        let _ = writeln!(out, "{} <-> {}", pair.first, pair.second);
    }

    out
}

fn write_targets(out: &mut String, record: &DependencyRecord) {
    // `all` is first-seen order, so the first pair for a target decides its note.
    let mut kinds: HashMap<&str, TargetKind> = HashMap::new();
    for pair in &record.imports {
        kinds.entry(pair.target.as_str()).or_insert(pair.kind);
    }

    for target in &record.all {
        let note = match kinds.get(target.as_str()) {
            Some(TargetKind::External) => " (external)",
            Some(TargetKind::Unresolved) => " (unresolved)",
            _ => "",
        };
        let _ = writeln!(out, "  -> {target}{note}");
    }
}
