// src/graph/resolver.rs
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

use super::aliases::AliasMap;
use super::paths::{self, ROOT};

/// How a raw token ended up after resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    /// Relative or alias import that matched a file in the source set.
    Resolved,
    /// Relative or alias import whose target file could not be found.
    Unresolved,
    /// Bare token kept verbatim (package, stdlib module, ...).
    External,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub target: String,
    pub kind: TargetKind,
}

impl Resolution {
    /// True for targets that live inside the base directory.
    #[must_use]
    pub fn is_internal(&self) -> bool {
        self.kind != TargetKind::External
    }
}

/// Resolves raw import tokens against a fixed snapshot of the source tree.
///
/// All paths are slash-separated and relative to the base directory.
pub struct Resolver<'a> {
    files: &'a HashSet<String>,
    extensions: &'a [String],
    aliases: Option<&'a AliasMap>,
}

impl<'a> Resolver<'a> {
    #[must_use]
    pub fn new(files: &'a HashSet<String>, extensions: &'a [String], aliases: Option<&'a AliasMap>) -> Self {
        Self {
            files,
            extensions,
            aliases: aliases.filter(|a| !a.is_empty()),
        }
    }

    /// Resolves `token` as imported from a file in `from_dir`.
    ///
    /// Returns `None` when the token points above the base directory; such
    /// tokens cannot be attributed to any directory and are dropped.
    #[must_use]
    pub fn resolve(&self, token: &str, from_dir: &str) -> Option<Resolution> {
        let dotted = dotted_to_relative(token);
        let relative = dotted.as_deref().unwrap_or(token);
        if is_relative(relative) {
            let Some(path) = paths::join_normalized(from_dir, relative) else {
                debug!(token, from_dir, "relative import escapes base directory");
                return None;
            };
            return Some(self.locate(path));
        }

        if let Some(aliases) = self.aliases {
            if let Some((alias, rest)) = aliases.match_token(token) {
                let Some(path) = paths::join_normalized(&alias.target, rest) else {
                    debug!(token, prefix = %alias.prefix, "alias import escapes base directory");
                    return None;
                };
                return Some(self.locate(path));
            }
        }

        Some(Resolution {
            target: token.to_string(),
            kind: TargetKind::External,
        })
    }

    /// Exact file, then each extension, then `index.<ext>` inside the path.
    /// Falls back to the normalized path itself, unconfirmed.
    fn locate(&self, path: String) -> Resolution {
        match self.find_file(&path) {
            Some(found) => Resolution {
                target: found,
                kind: TargetKind::Resolved,
            },
            None => Resolution {
                target: path,
                kind: TargetKind::Unresolved,
            },
        }
    }

    fn find_file(&self, path: &str) -> Option<String> {
        let is_root = path == ROOT;

        if !is_root && self.files.contains(path) {
            return Some(path.to_string());
        }

        if !is_root {
            let with_ext = self
                .extensions
                .iter()
                .map(|ext| format!("{path}.{ext}"))
                .find(|p| self.files.contains(p));
            if with_ext.is_some() {
                return with_ext;
            }
        }

        self.extensions
            .iter()
            .map(|ext| {
                if is_root {
                    format!("index.{ext}")
                } else {
                    format!("{path}/index.{ext}")
                }
            })
            .find(|p| self.files.contains(p))
    }
}

/// Rewrites a dotted relative module (`.models`, `..pkg.mod`, `...`) as a
/// slash path: one leading dot is the current directory, each extra dot
/// climbs one level, and inner dots separate segments.
///
/// Returns `None` for anything else, including tokens that already contain
/// a slash.
#[must_use]
pub fn dotted_to_relative(token: &str) -> Option<String> {
    if !token.starts_with('.') || token.contains('/') {
        return None;
    }
    let rest = token.trim_start_matches('.');
    let dots = token.len() - rest.len();
    let is_module = rest
        .split('.')
        .all(|seg| !seg.is_empty() && seg.chars().all(|c| c.is_alphanumeric() || c == '_'));
    if !rest.is_empty() && !is_module {
        return None;
    }
    if rest.is_empty() && dots < 3 {
        // `.` and `..` are already directory markers.
        return None;
    }

    let mut path = if dots == 1 {
        ".".to_string()
    } else {
        vec![".."; dots - 1].join("/")
    };
    if !rest.is_empty() {
        path.push('/');
        path.push_str(&rest.replace('.', "/"));
    }
    Some(path)
}

/// Tokens starting with a same-directory or parent-directory marker.
#[must_use]
pub fn is_relative(token: &str) -> bool {
    token == "."
        || token == ".."
        || token.starts_with("./")
        || token.starts_with("../")
}
