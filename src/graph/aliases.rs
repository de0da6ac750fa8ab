// src/graph/aliases.rs
//! Prefix aliases such as `@/` → `src`.

use serde::Serialize;

/// A single prefix → target directory mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alias {
    pub prefix: String,
    /// Target directory relative to the base directory (`.` for the root).
    pub target: String,
}

/// Ordered alias table. Entries are kept longest-prefix first so a short
/// prefix never shadows a more specific one.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AliasMap {
    entries: Vec<Alias>,
}

impl AliasMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map from `(prefix, target)` pairs. Later duplicates of a
    /// prefix are ignored.
    pub fn from_pairs<I, P, T>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (P, T)>,
        P: Into<String>,
        T: Into<String>,
    {
        let mut map = Self::new();
        for (prefix, target) in pairs {
            map.insert(prefix, target);
        }
        map
    }

    /// Adds a mapping unless the prefix is already present.
    pub fn insert(&mut self, prefix: impl Into<String>, target: impl Into<String>) {
        let prefix = prefix.into();
        if prefix.is_empty() || self.entries.iter().any(|a| a.prefix == prefix) {
            return;
        }
        let target = clean_target(&target.into());
        self.entries.push(Alias { prefix, target });
        // Stable sort keeps insertion order among equal-length prefixes.
        self.entries.sort_by(|a, b| b.prefix.len().cmp(&a.prefix.len()));
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Alias> {
        self.entries.iter()
    }

    /// Finds the longest alias whose prefix starts `token`.
    ///
    /// Returns the alias and the remainder of the token after the prefix.
    #[must_use]
    pub fn match_token<'a>(&self, token: &'a str) -> Option<(&Alias, &'a str)> {
        self.entries
            .iter()
            .find_map(|a| token.strip_prefix(a.prefix.as_str()).map(|rest| (a, rest)))
    }
}

fn clean_target(target: &str) -> String {
    let trimmed = target.trim_start_matches("./").trim_end_matches('/');
    if trimmed.is_empty() {
        ".".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_prefix_wins() {
        let map = AliasMap::from_pairs([("@/", "."), ("@/components/", "lib")]);
        let (alias, rest) = map.match_token("@/components/Button").unwrap();
        assert_eq!(alias.target, "lib");
        assert_eq!(rest, "Button");

        let (alias, rest) = map.match_token("@/utils/date").unwrap();
        assert_eq!(alias.target, ".");
        assert_eq!(rest, "utils/date");
    }

    #[test]
    fn test_no_match() {
        let map = AliasMap::from_pairs([("~/", "src")]);
        assert!(map.match_token("react").is_none());
    }

    #[test]
    fn test_targets_are_cleaned() {
        let map = AliasMap::from_pairs([("#a", "./src/"), ("#b", "./")]);
        let targets: Vec<_> = map.iter().map(|a| a.target.as_str()).collect();
        assert_eq!(targets, vec!["src", "."]);
    }

    #[test]
    fn test_first_prefix_definition_kept() {
        let mut map = AliasMap::new();
        map.insert("@/", "src");
        map.insert("@/", "lib");
        assert_eq!(map.len(), 1);
        assert_eq!(map.iter().next().map(|a| a.target.as_str()), Some("src"));
    }
}
