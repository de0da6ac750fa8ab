// src/discovery.rs
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{Result, ScanError};
use crate::graph::paths;
use crate::graph::types::WalkIssue;

/// What to do when a single walk entry cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalkMode {
    /// Abort the whole walk on the first unreadable entry.
    #[default]
    FailFast,
    /// Record the entry and keep walking.
    BestEffort,
}

/// Files found under a root, relative to it, plus skipped entries.
#[derive(Debug, Default)]
pub struct Discovery {
    pub files: Vec<String>,
    pub issues: Vec<WalkIssue>,
}

/// Recursively enumerates regular files under `root`.
///
/// Directories whose basename is in `skip` are pruned at any depth. Paths
/// come back slash-separated and relative to `root`, in a stable order.
///
/// # Errors
/// In `FailFast` mode, returns the first entry error (permissions, loops).
pub fn walk(root: &Path, skip: &HashSet<String>, mode: WalkMode) -> Result<Discovery> {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_skipped(e, skip));

    let mut found = Discovery::default();
    for item in walker {
        match item {
            Ok(entry) => {
                if entry.file_type().is_file() {
                    found.files.push(relative(root, entry.path()));
                }
            }
            Err(e) if mode == WalkMode::BestEffort => {
                let path = e.path().map_or_else(|| "<unknown>".to_string(), |p| relative(root, p));
                warn!(%path, error = %e, "skipping unreadable entry");
                found.issues.push(WalkIssue {
                    path,
                    message: e.to_string(),
                });
            }
            Err(e) => return Err(walk_error(e)),
        }
    }

    debug!(root = %root.display(), files = found.files.len(), "walk finished");
    Ok(found)
}

fn is_skipped(entry: &walkdir::DirEntry, skip: &HashSet<String>) -> bool {
    entry.file_type().is_dir() && skip.contains(entry.file_name().to_string_lossy().as_ref())
}

fn relative(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    paths::to_slash(rel)
}

fn walk_error(e: walkdir::Error) -> ScanError {
    let path = e.path().map(PathBuf::from);
    let io = e.io_error().map(|io| std::io::Error::new(io.kind(), io.to_string()));
    match (path, io) {
        (Some(path), Some(source)) => ScanError::io(source, path),
        _ => ScanError::Walk(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn skip(names: &[&str]) -> HashSet<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_walk_prunes_by_basename_at_any_depth() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let root = dir.path();
        fs::create_dir_all(root.join("src/node_modules/pkg"))?;
        fs::create_dir_all(root.join("node_modules"))?;
        fs::create_dir_all(root.join("src/lib"))?;
        fs::write(root.join("main.ts"), "")?;
        fs::write(root.join("src/lib/a.ts"), "")?;
        fs::write(root.join("src/node_modules/pkg/index.js"), "")?;
        fs::write(root.join("node_modules/x.js"), "")?;

        let found = walk(root, &skip(&["node_modules"]), WalkMode::FailFast)?;
        assert_eq!(found.files, vec!["main.ts", "src/lib/a.ts"]);
        assert!(found.issues.is_empty());
        Ok(())
    }

    #[test]
    fn test_skip_matches_directories_only() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join("build"), "not a dir")?;
        let found = walk(dir.path(), &skip(&["build"]), WalkMode::FailFast)?;
        assert_eq!(found.files, vec!["build"]);
        Ok(())
    }

    #[test]
    fn test_missing_root_fails() {
        let missing = Path::new("/definitely/not/here/strata");
        assert!(walk(missing, &HashSet::new(), WalkMode::FailFast).is_err());
    }

    #[test]
    fn test_missing_root_best_effort_records_issue() -> anyhow::Result<()> {
        let missing = Path::new("/definitely/not/here/strata");
        let found = walk(missing, &HashSet::new(), WalkMode::BestEffort)?;
        assert!(found.files.is_empty());
        assert_eq!(found.issues.len(), 1);
        Ok(())
    }
}
