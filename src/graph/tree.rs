// src/graph/tree.rs
//! Directory → direct file basenames, built once per scan.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use super::paths::{self, ROOT};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DirectoryTree {
    dirs: BTreeMap<String, Vec<String>>,
}

impl DirectoryTree {
    /// Groups relative file paths by their parent directory, keeping the
    /// order files were supplied in.
    #[must_use]
    pub fn from_files(files: &[String]) -> Self {
        let mut dirs: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for file in files {
            dirs.entry(paths::parent_dir(file).to_string())
                .or_default()
                .push(paths::basename(file).to_string());
        }
        Self { dirs }
    }

    #[must_use]
    pub fn files_in(&self, dir: &str) -> &[String] {
        self.dirs.get(dir).map_or(&[], Vec::as_slice)
    }

    /// Direct (non-recursive) file count.
    #[must_use]
    pub fn file_count(&self, dir: &str) -> usize {
        self.files_in(dir).len()
    }

    #[must_use]
    pub fn contains(&self, dir: &str) -> bool {
        self.dirs.contains_key(dir)
    }

    /// Populated directories in key order.
    pub fn directories(&self) -> impl Iterator<Item = &str> {
        self.dirs.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.dirs.iter().map(|(d, f)| (d.as_str(), f.as_slice()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    /// Populated directories plus every ancestor segment, so the tree can be
    /// drawn connected even through directories that only hold directories.
    /// Always includes the root.
    #[must_use]
    pub fn with_ancestors(&self) -> BTreeSet<String> {
        let mut all = BTreeSet::new();
        all.insert(ROOT.to_string());
        for dir in self.dirs.keys() {
            all.extend(paths::ancestors(dir));
            all.insert(dir.clone());
        }
        all
    }

    /// Copy of the tree without any directory equal to or under `excluded`.
    #[must_use]
    pub fn without(&self, excluded: &[String]) -> Self {
        let dirs = self
            .dirs
            .iter()
            .filter(|(dir, _)| !excluded.iter().any(|ex| paths::is_within(dir, ex)))
            .map(|(d, f)| (d.clone(), f.clone()))
            .collect();
        Self { dirs }
    }
}
