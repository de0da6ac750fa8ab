// src/graph/imports.rs
use regex::Regex;

use super::ordered::OrderedSet;
use crate::error::{Result, ScanError};

/// Compiles an import extraction pattern, rejecting anything that does not
/// have exactly one capturing group.
///
/// # Errors
/// Returns `ScanError::Pattern` if the regex is invalid or has the wrong
/// number of groups.
pub fn compile_pattern(pattern: &str) -> Result<Regex> {
    let re = Regex::new(pattern).map_err(|e| ScanError::Pattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })?;

    let groups = re.captures_len() - 1;
    if groups != 1 {
        return Err(ScanError::Pattern {
            pattern: pattern.to_string(),
            reason: format!("expected exactly one capture group, found {groups}"),
        });
    }
    Ok(re)
}

/// Extracts raw import tokens from the given file content.
///
/// Patterns run in order over the whole content; each contributes the first
/// capture group of every non-overlapping match. A token already produced by
/// an earlier pattern or match is skipped.
///
/// # Returns
/// Tokens in first-seen order (e.g., "./utils", "react", "os.path").
#[must_use]
pub fn extract(content: &str, patterns: &[Regex]) -> Vec<String> {
    let mut tokens = OrderedSet::new();

    for re in patterns {
        for caps in re.captures_iter(content) {
            if let Some(m) = caps.get(1) {
                let text = m.as_str().trim();
                if !text.is_empty() {
                    tokens.insert(text);
                }
            }
        }
    }

    tokens.into_vec()
}
