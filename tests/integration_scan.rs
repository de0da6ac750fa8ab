// tests/integration_scan.rs
//! End-to-end scans over temporary trees.

use anyhow::Result;
use std::fs;
use std::path::Path;
use strata_core::config::{Config, ScanConfig};
use strata_core::graph::{self, find_suspicious, TargetKind};
use tempfile::tempdir;

fn write(root: &Path, rel: &str, content: &str) -> Result<()> {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

fn ts_config(root: &Path) -> Result<ScanConfig> {
    let mut c = Config::new(root);
    c.languages = vec!["typescript".into()];
    c.use_tsconfig = false;
    Ok(c.compile()?)
}

#[test]
fn test_relative_import_resolves_to_file() -> Result<()> {
    let dir = tempdir()?;
    write(dir.path(), "a/index.ts", "import x from './util'\n")?;
    write(dir.path(), "a/util.ts", "export const x = 1;\n")?;

    let result = graph::scan(&ts_config(dir.path())?)?;
    let record = &result.records["a/index.ts"];
    assert_eq!(record.all, vec!["a/util.ts"]);
    assert_eq!(record.resolved, vec!["a/util.ts"]);
    assert_eq!(record.imports[0].raw, "./util");
    Ok(())
}

#[test]
fn test_missing_relative_target_is_kept_unresolved() -> Result<()> {
    let dir = tempdir()?;
    write(dir.path(), "a/index.ts", "import x from './util'\n")?;

    let result = graph::scan(&ts_config(dir.path())?)?;
    let record = &result.records["a/index.ts"];
    assert_eq!(record.all, vec!["a/util"]);
    assert!(record.resolved.is_empty());
    assert_eq!(record.imports[0].kind, TargetKind::Unresolved);
    Ok(())
}

#[test]
fn test_escaping_import_is_dropped() -> Result<()> {
    let dir = tempdir()?;
    write(dir.path(), "a/index.ts", "import x from '../../outside/secret'\nimport y from 'react'\n")?;

    let result = graph::scan(&ts_config(dir.path())?)?;
    let record = &result.records["a/index.ts"];
    assert_eq!(record.all, vec!["react"]);
    assert!(record.imports.iter().all(|p| !p.raw.contains("secret")));
    Ok(())
}

#[test]
fn test_index_resolution_and_extension_filter() -> Result<()> {
    let dir = tempdir()?;
    write(dir.path(), "app.ts", "import w from './widgets'\n")?;
    write(dir.path(), "widgets/index.tsx", "")?;
    write(dir.path(), "widgets/readme.md", "import nope from './x'")?;

    let result = graph::scan(&ts_config(dir.path())?)?;
    assert_eq!(result.files, vec!["app.ts", "widgets/index.tsx"]);
    assert_eq!(result.records["app.ts"].resolved, vec!["widgets/index.tsx"]);
    Ok(())
}

#[test]
fn test_alias_resolution_prefers_longest_prefix() -> Result<()> {
    let dir = tempdir()?;
    write(dir.path(), "app/page.ts", "import B from '@/components/Button'\nimport u from '@/util'\n")?;
    write(dir.path(), "lib/Button.ts", "")?;
    write(dir.path(), "components/Button.ts", "")?;
    write(dir.path(), "util.ts", "")?;

    let mut c = Config::new(dir.path());
    c.languages = vec!["ts".into()];
    c.use_tsconfig = false;
    c.aliases.insert("@/".into(), ".".into());
    c.aliases.insert("@/components/".into(), "lib".into());

    let result = graph::scan(&c.compile()?)?;
    assert_eq!(result.records["app/page.ts"].resolved, vec!["lib/Button.ts", "util.ts"]);
    Ok(())
}

#[test]
fn test_tsconfig_paths_become_aliases() -> Result<()> {
    let dir = tempdir()?;
    write(
        dir.path(),
        "tsconfig.json",
        r#"{ "compilerOptions": { "baseUrl": ".", "paths": { "~/*": ["src/*"] } } }"#,
    )?;
    write(dir.path(), "src/main.ts", "import { api } from '~/api/client'\n")?;
    write(dir.path(), "src/api/client.ts", "")?;

    let mut c = Config::new(dir.path());
    c.languages = vec!["ts".into()];
    let result = graph::scan(&c.compile()?)?;
    assert_eq!(result.records["src/main.ts"].resolved, vec!["src/api/client.ts"]);
    Ok(())
}

#[test]
fn test_disabled_aliases_leave_tokens_external() -> Result<()> {
    let dir = tempdir()?;
    write(dir.path(), "main.ts", "import x from '@/x'\n")?;
    write(dir.path(), "x.ts", "")?;

    let mut c = Config::new(dir.path());
    c.languages = vec!["ts".into()];
    c.aliases.insert("@/".into(), ".".into());
    c.aliases_enabled = false;
    let result = graph::scan(&c.compile()?)?;
    assert_eq!(result.records["main.ts"].imports[0].kind, TargetKind::External);
    Ok(())
}

#[test]
fn test_mutual_dependency_reported_once() -> Result<()> {
    let dir = tempdir()?;
    write(dir.path(), "a/one.ts", "import b from '../b/two'\n")?;
    write(dir.path(), "b/two.ts", "import a from '../a/one'\n")?;
    write(dir.path(), "c/three.ts", "import a from '../a/one'\n")?;

    let result = graph::scan(&ts_config(dir.path())?)?;
    let mutual = result.mutual_dependencies();
    assert_eq!(mutual.len(), 1);
    assert_eq!((mutual[0].first.as_str(), mutual[0].second.as_str()), ("a", "b"));

    let graph = result.directory_graph();
    assert!(graph.has_edge("c", "a"));
    assert!(!graph.has_edge("a", "c"));
    Ok(())
}

#[test]
fn test_unscoped_config_yields_empty_result() -> Result<()> {
    let dir = tempdir()?;
    write(dir.path(), "a.ts", "import x from './b'\n")?;

    let c = Config::new(dir.path()).compile()?;
    let result = graph::scan(&c)?;
    assert!(result.is_empty());
    assert!(result.tree.is_empty());
    assert!(result.records.is_empty());
    Ok(())
}

#[test]
fn test_skip_dirs_prune_subtrees() -> Result<()> {
    let dir = tempdir()?;
    write(dir.path(), "src/a.ts", "")?;
    write(dir.path(), "src/node_modules/lib/b.ts", "")?;
    write(dir.path(), "dist/c.ts", "")?;

    let result = graph::scan(&ts_config(dir.path())?)?;
    assert_eq!(result.files, vec!["src/a.ts"]);
    Ok(())
}

#[test]
fn test_suspicious_and_exclusion() -> Result<()> {
    let dir = tempdir()?;
    for i in 0..50 {
        write(dir.path(), &format!("vendor/gen{i}.ts"), "")?;
    }
    for i in 0..49 {
        write(dir.path(), &format!("almost/f{i}.ts"), "")?;
    }
    write(dir.path(), "vendor/deep/x.ts", "")?;
    write(dir.path(), "main.ts", "import v from './vendor/gen1'\n")?;

    let result = graph::scan(&ts_config(dir.path())?)?;
    let flagged = find_suspicious(&result.tree, 50);
    assert_eq!(flagged.len(), 1);
    assert_eq!(flagged[0].path, "vendor");
    assert_eq!(flagged[0].file_count, 50);

    let filtered = result.without(&["vendor".to_string()]);
    assert!(filtered.files.iter().all(|f| !f.starts_with("vendor/")));
    assert!(filtered
        .tree
        .directories()
        .all(|d| d != "vendor" && !d.starts_with("vendor/")));
    assert!(filtered.records.keys().all(|f| !f.starts_with("vendor/")));
    assert!(filtered.records.contains_key("main.ts"));

    // Original result is untouched.
    assert!(result.tree.contains("vendor"));
    assert_eq!(result.files.len(), 101);
    Ok(())
}

#[test]
fn test_parallel_scan_is_deterministic() -> Result<()> {
    let dir = tempdir()?;
    for i in 0..40 {
        write(
            dir.path(),
            &format!("m{}/f{i}.ts", i % 4),
            &format!("import a from '../m{}/f{}'\nimport r from 'lib{i}'\n", (i + 1) % 4, (i + 1) % 40),
        )?;
    }

    let config = ts_config(dir.path())?;
    let first = graph::scan(&config)?;
    let second = graph::scan(&config)?;
    assert_eq!(first.files, second.files);
    assert_eq!(first.records, second.records);
    Ok(())
}

#[cfg(unix)]
fn make_unreadable(path: &Path) -> Result<bool> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o000))?;
    // Root ignores file modes; nothing to exercise then.
    Ok(fs::read(path).is_err())
}

#[cfg(unix)]
#[test]
fn test_best_effort_skips_unreadable_file() -> Result<()> {
    let dir = tempdir()?;
    write(dir.path(), "a/ok.ts", "import x from './locked'\n")?;
    write(dir.path(), "a/locked.ts", "import y from './ok'\n")?;
    if !make_unreadable(&dir.path().join("a/locked.ts"))? {
        return Ok(());
    }

    let mut c = Config::new(dir.path());
    c.languages = vec!["typescript".into()];
    c.use_tsconfig = false;
    c.strict_walk = false;
    let result = graph::scan(&c.compile()?)?;

    assert_eq!(result.files, vec!["a/ok.ts"]);
    assert_eq!(result.tree.files_in("a"), ["ok.ts".to_string()]);
    assert!(!result.records.contains_key("a/locked.ts"));
    assert_eq!(result.walk_errors.len(), 1);
    assert_eq!(result.walk_errors[0].path, "a/locked.ts");
    assert_eq!(result.records["a/ok.ts"].imports[0].kind, TargetKind::Unresolved);
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_fail_fast_reports_unreadable_file() -> Result<()> {
    let dir = tempdir()?;
    write(dir.path(), "a/locked.ts", "")?;
    if !make_unreadable(&dir.path().join("a/locked.ts"))? {
        return Ok(());
    }

    assert!(graph::scan(&ts_config(dir.path())?).is_err());
    Ok(())
}
