// src/report/tree.rs
//! Directory tree overview shared by both report modes.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write;

use crate::graph::paths::{self, ROOT};
use crate::graph::DirectoryTree;

use super::pluralize;

/// Renders every directory (ancestors included) with its direct file count.
#[must_use]
pub fn render_tree(tree: &DirectoryTree) -> String {
    let all = tree.with_ancestors();
    let children = child_index(&all);

    let mut out = String::new();
    let total: usize = tree.iter().map(|(_, files)| files.len()).sum();
    let _ = writeln!(
        out,
        "{total} {} in {} {}",
        pluralize(total, "file", "files"),
        tree.len(),
        pluralize(tree.len(), "directory", "directories"),
    );
    write_node(&mut out, ROOT, tree, &children);
    out
}

fn child_index(all: &BTreeSet<String>) -> BTreeMap<&str, Vec<&str>> {
    let mut children: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for dir in all.iter().filter(|d| d.as_str() != ROOT) {
        children.entry(paths::parent_dir(dir)).or_default().push(dir);
    }
    children
}

fn write_node(out: &mut String, dir: &str, tree: &DirectoryTree, children: &BTreeMap<&str, Vec<&str>>) {
    let indent = "  ".repeat(paths::depth(dir));
    let name = if dir == ROOT { ROOT } else { paths::basename(dir) };
    let count = tree.file_count(dir);
    let _ = writeln!(out, "{indent}{name}/ ({count} {})", pluralize(count, "file", "files"));

    if let Some(kids) = children.get(dir) {
        for kid in kids {
            write_node(out, kid, tree, children);
        }
    }
}
