// src/graph/builder.rs
//! Scan pipeline: walk, extract, resolve, aggregate.

use rayon::prelude::*;
use regex::Regex;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use tracing::{debug, info, warn};

use super::imports;
use super::ordered::OrderedSet;
use super::paths;
use super::resolver::{Resolver, TargetKind};
use super::tree::DirectoryTree;
use super::types::{DependencyRecord, ImportPair, ScanResult, WalkIssue};
use crate::config::ScanConfig;
use crate::discovery::{self, WalkMode};
use crate::error::{Result, ScanError};

/// Scans the tree under `config.base_dir` and builds every dependency record.
///
/// Returns an empty result without touching the filesystem when no
/// extensions or patterns are configured.
///
/// In best-effort mode a file that cannot be read is recorded in
/// `walk_errors` and left out of `files`, `tree` and `records`.
///
/// # Errors
/// In fail-fast mode, returns error if the walk fails or a file cannot be read.
pub fn scan(config: &ScanConfig) -> Result<ScanResult> {
    if config.is_unscoped() {
        debug!("no extensions or patterns configured; returning empty scan");
        return Ok(ScanResult::empty(config.base_dir.clone()));
    }

    let found = discovery::walk(&config.base_dir, &config.skip_dirs, config.walk_mode)?;
    let mut walk_errors = found.issues;
    let candidates: Vec<String> = found
        .files
        .into_iter()
        .filter(|f| has_extension(f, &config.extensions))
        .collect();

    // Indexed parallel collect keeps the walk order.
    let contents = candidates
        .into_par_iter()
        .map(|file| {
            let content = read_lossy(config, &file);
            (file, content)
        })
        .collect::<Vec<_>>();

    let mut files = Vec::with_capacity(contents.len());
    let mut texts = Vec::with_capacity(contents.len());
    for (file, content) in contents {
        match content {
            Ok(text) => {
                files.push(file);
                texts.push(text);
            }
            Err(e) if config.walk_mode == WalkMode::BestEffort => {
                warn!(path = %file, error = %e, "skipping unreadable file");
                walk_errors.push(WalkIssue {
                    path: file,
                    message: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        }
    }

    // Unreadable files are dropped before the file set is built, so imports
    // pointing at them stay unresolved.
    let tree = DirectoryTree::from_files(&files);
    let file_set: HashSet<String> = files.iter().cloned().collect();
    let resolver = Resolver::new(&file_set, &config.extensions, config.aliases.as_ref());

    let records = files
        .par_iter()
        .zip(texts.par_iter())
        .map(|(file, text)| (file.clone(), build_record(file, text, &config.patterns, &resolver)))
        .collect::<Vec<_>>()
        .into_iter()
        .collect::<BTreeMap<_, _>>();

    info!(
        files = files.len(),
        directories = tree.len(),
        "scan complete"
    );

    Ok(ScanResult {
        base_dir: config.base_dir.clone(),
        tree,
        files,
        records,
        walk_errors,
    })
}

/// Extracts and resolves the imports of a single file.
#[must_use]
pub fn build_record(file: &str, content: &str, patterns: &[Regex], resolver: &Resolver) -> DependencyRecord {
    let from_dir = paths::parent_dir(file);
    let mut all = OrderedSet::new();
    let mut resolved = OrderedSet::new();
    let mut pairs = Vec::new();

    for token in imports::extract(content, patterns) {
        let Some(res) = resolver.resolve(&token, from_dir) else {
            continue;
        };
        all.insert(&res.target);
        if res.kind == TargetKind::Resolved {
            resolved.insert(&res.target);
        }
        pairs.push(ImportPair {
            raw: token,
            target: res.target,
            kind: res.kind,
        });
    }

    DependencyRecord {
        all: all.into_vec(),
        resolved: resolved.into_vec(),
        imports: pairs,
    }
}

fn has_extension(file: &str, extensions: &[String]) -> bool {
    let name = paths::basename(file);
    extensions.iter().any(|ext| {
        name.strip_suffix(ext.as_str())
            .is_some_and(|stem| stem.len() > 1 && stem.ends_with('.'))
    })
}

fn read_lossy(config: &ScanConfig, file: &str) -> Result<String> {
    let path = config.base_dir.join(file);
    let bytes = fs::read(&path).map_err(|e| ScanError::io(e, path))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_extension() {
        let exts = vec!["ts".to_string(), "d.ts".to_string()];
        assert!(has_extension("a/b.ts", &exts));
        assert!(has_extension("types.d.ts", &exts));
        assert!(!has_extension("a/b.tsx", &exts));
        assert!(!has_extension("a/ts", &exts));
        assert!(!has_extension(".ts", &exts));
    }

    #[test]
    fn test_build_record_views() {
        let files: HashSet<String> = ["a/util.ts", "b/api.ts"].iter().map(ToString::to_string).collect();
        let exts = vec!["ts".to_string()];
        let resolver = Resolver::new(&files, &exts, None);
        let patterns = vec![imports::compile_pattern(r#"from '([^']+)'"#).unwrap()];

        let content = "from './util'\nfrom '../b/api'\nfrom 'react'\nfrom './gone'\nfrom '../../up'\nfrom './util.ts'";
        let record = build_record("a/index.ts", content, &patterns, &resolver);

        assert_eq!(record.all, vec!["a/util.ts", "b/api.ts", "react", "a/gone"]);
        assert_eq!(record.resolved, vec!["a/util.ts", "b/api.ts"]);
        assert_eq!(record.imports.len(), 5);
        assert_eq!(record.imports[4].raw, "./util.ts");
        assert_eq!(record.imports[4].target, "a/util.ts");
        assert!(record.imports.iter().all(|p| p.raw != "../../up"));
    }
}
