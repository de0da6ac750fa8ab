// src/graph/anomaly.rs
//! Flags directories that look vendored or generated.

use serde::Serialize;

use super::paths::ROOT;
use super::tree::DirectoryTree;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuspiciousDir {
    pub path: String,
    pub file_count: usize,
}

/// Non-root directories whose direct file count is at least `threshold`,
/// largest first. Ties keep directory order.
#[must_use]
pub fn find_suspicious(tree: &DirectoryTree, threshold: usize) -> Vec<SuspiciousDir> {
    let mut found: Vec<SuspiciousDir> = tree
        .iter()
        .filter(|(dir, files)| *dir != ROOT && files.len() >= threshold)
        .map(|(dir, files)| SuspiciousDir {
            path: dir.to_string(),
            file_count: files.len(),
        })
        .collect();

    found.sort_by(|a, b| b.file_count.cmp(&a.file_count));
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_with(counts: &[(&str, usize)]) -> DirectoryTree {
        let files: Vec<String> = counts
            .iter()
            .flat_map(|(dir, n)| {
                (0..*n).map(move |i| {
                    if *dir == "." {
                        format!("f{i}.js")
                    } else {
                        format!("{dir}/f{i}.js")
                    }
                })
            })
            .collect();
        DirectoryTree::from_files(&files)
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let tree = tree_with(&[("at", 50), ("below", 49), ("above", 80)]);
        let found = find_suspicious(&tree, 50);
        let names: Vec<_> = found.iter().map(|s| s.path.as_str()).collect();
        assert_eq!(names, vec!["above", "at"]);
        assert_eq!(found[0].file_count, 80);
    }

    #[test]
    fn test_root_is_never_flagged() {
        let tree = tree_with(&[(".", 100), ("src", 3)]);
        assert!(find_suspicious(&tree, 50).is_empty());
    }

    #[test]
    fn test_counts_are_direct_only() {
        let tree = tree_with(&[("gen", 30), ("gen/sub", 30)]);
        assert!(find_suspicious(&tree, 50).is_empty());
    }
}
