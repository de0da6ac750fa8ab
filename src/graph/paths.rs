// src/graph/paths.rs
//! Slash-separated relative path arithmetic, independent of the host OS.

/// Literal key used for the base directory itself.
pub const ROOT: &str = ".";

/// Normalizes a path to use forward slashes (cross-platform pattern matching).
#[must_use]
pub fn to_slash(path: &std::path::Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Joins `rel` onto `dir` and collapses `.`/`..` segments.
///
/// Returns `None` when the result climbs above the base directory. The base
/// directory itself comes back as [`ROOT`].
#[must_use]
pub fn join_normalized(dir: &str, rel: &str) -> Option<String> {
    let mut parts: Vec<&str> = Vec::new();
    let joined = dir.split('/').chain(rel.split('/'));

    for seg in joined {
        match seg {
            "" | "." => {}
            ".." => {
                parts.pop()?;
            }
            s => parts.push(s),
        }
    }

    if parts.is_empty() {
        Some(ROOT.to_string())
    } else {
        Some(parts.join("/"))
    }
}

/// Directory portion of a relative file path; [`ROOT`] for top-level files.
#[must_use]
pub fn parent_dir(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) if idx > 0 => &path[..idx],
        _ => ROOT,
    }
}

/// Final segment of a relative path.
#[must_use]
pub fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// True if `path` equals `dir` or lies beneath it.
#[must_use]
pub fn is_within(path: &str, dir: &str) -> bool {
    if dir == ROOT {
        return true;
    }
    path == dir || path.strip_prefix(dir).is_some_and(|rest| rest.starts_with('/'))
}

/// Every ancestor of `dir`, outermost first, excluding the root and `dir` itself.
#[must_use]
pub fn ancestors(dir: &str) -> Vec<String> {
    if dir == ROOT {
        return Vec::new();
    }
    let segs: Vec<&str> = dir.split('/').collect();
    (1..segs.len()).map(|n| segs[..n].join("/")).collect()
}

/// Number of segments in a directory path; the root has depth zero.
#[must_use]
pub fn depth(dir: &str) -> usize {
    if dir == ROOT {
        0
    } else {
        dir.split('/').count()
    }
}
