// src/graph/dirgraph.rs
//! Directory-to-directory dependency graph.
//!
//! Built in one pass from finished dependency records; never mutated after.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use super::paths;
use super::types::DependencyRecord;

/// Source directory → directories it imports from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DirectoryGraph {
    edges: BTreeMap<String, BTreeSet<String>>,
}

/// Two directories that import from each other. `first` sorts before `second`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MutualDependency {
    pub first: String,
    pub second: String,
}

impl DirectoryGraph {
    /// Adds an edge for every resolved target whose directory differs from
    /// the importing file's directory.
    #[must_use]
    pub fn from_records(records: &BTreeMap<String, DependencyRecord>) -> Self {
        let edges = records.iter().fold(
            BTreeMap::<String, BTreeSet<String>>::new(),
            |mut acc, (file, record)| {
                let from = paths::parent_dir(file);
                for target in &record.resolved {
                    let to = paths::parent_dir(target);
                    if to != from {
                        acc.entry(from.to_string()).or_default().insert(to.to_string());
                    }
                }
                acc
            },
        );
        Self { edges }
    }

    #[must_use]
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.edges.get(from).is_some_and(|t| t.contains(to))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.edges
            .iter()
            .flat_map(|(from, tos)| tos.iter().map(move |to| (from.as_str(), to.as_str())))
    }

    /// Every pair with edges in both directions, reported once with the
    /// lexicographically smaller directory first.
    #[must_use]
    pub fn mutual_dependencies(&self) -> Vec<MutualDependency> {
        self.iter()
            .filter(|(a, b)| a < b && self.has_edge(b, a))
            .map(|(a, b)| MutualDependency {
                first: a.to_string(),
                second: b.to_string(),
            })
            .collect()
    }
}
