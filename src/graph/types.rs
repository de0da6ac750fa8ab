// src/graph/types.rs
//! Data structures produced by a scan.

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

use super::dirgraph::{DirectoryGraph, MutualDependency};
use super::paths;
use super::resolver::TargetKind;
use super::tree::DirectoryTree;

/// What the developer wrote and where it led.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportPair {
    pub raw: String,
    pub target: String,
    pub kind: TargetKind,
}

impl ImportPair {
    #[must_use]
    pub fn is_internal(&self) -> bool {
        self.kind != TargetKind::External
    }
}

/// Per-file dependency views.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DependencyRecord {
    /// Every target (resolved, unresolved or external), deduplicated, first-seen order.
    pub all: Vec<String>,
    /// Targets confirmed as in-tree files via a relative or alias import.
    pub resolved: Vec<String>,
    /// One entry per raw token, in extraction order.
    pub imports: Vec<ImportPair>,
}

/// A walk entry skipped in best-effort mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalkIssue {
    pub path: String,
    pub message: String,
}

/// Everything derived from one snapshot of the filesystem.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanResult {
    pub base_dir: PathBuf,
    pub tree: DirectoryTree,
    pub files: Vec<String>,
    pub records: BTreeMap<String, DependencyRecord>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub walk_errors: Vec<WalkIssue>,
}

impl ScanResult {
    /// Explicitly empty result: nothing was scoped.
    #[must_use]
    pub fn empty(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Derives the directory-level adjacency from the resolved views.
    #[must_use]
    pub fn directory_graph(&self) -> DirectoryGraph {
        DirectoryGraph::from_records(&self.records)
    }

    #[must_use]
    pub fn mutual_dependencies(&self) -> Vec<MutualDependency> {
        self.directory_graph().mutual_dependencies()
    }

    /// New result with every directory, file and record at or under any of
    /// `excluded` removed. `self` is left untouched.
    #[must_use]
    pub fn without(&self, excluded: &[String]) -> Self {
        let excluded: Vec<String> = excluded
            .iter()
            .map(|e| e.trim_start_matches("./").trim_end_matches('/').to_string())
            .filter(|e| !e.is_empty() && e != paths::ROOT)
            .collect();

        let outside = |path: &str| !excluded.iter().any(|ex| paths::is_within(path, ex));

        Self {
            base_dir: self.base_dir.clone(),
            tree: self.tree.without(&excluded),
            files: self.files.iter().filter(|f| outside(f)).cloned().collect(),
            records: self
                .records
                .iter()
                .filter(|(f, _)| outside(f))
                .map(|(f, r)| (f.clone(), r.clone()))
                .collect(),
            walk_errors: self.walk_errors.clone(),
        }
    }
}
