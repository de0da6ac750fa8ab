// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::types::{AliasSection, ScanSection, StrataToml};

use regex::Regex;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::PathBuf;
use tracing::warn;

use crate::constants::{self, SKIP_DIRS, SUSPICIOUS_THRESHOLD};
use crate::discovery::WalkMode;
use crate::error::{Result, ScanError};
use crate::graph::aliases::AliasMap;
use crate::graph::imports::compile_pattern;
use crate::graph::tsconfig::TsConfig;

/// Merged settings from config files and command-line flags.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone)]
pub struct Config {
    pub base_dir: PathBuf,
    pub languages: Vec<String>,
    pub extensions: Vec<String>,
    pub patterns: Vec<String>,
    pub skip_dirs: Vec<String>,
    pub exclude: Vec<String>,
    pub exclude_suspicious: bool,
    pub suspicious_threshold: usize,
    pub strict_walk: bool,
    pub aliases_enabled: bool,
    pub use_tsconfig: bool,
    pub aliases: BTreeMap<String, String>,
}

/// Compiled, validated inputs for one scan.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub base_dir: PathBuf,
    pub extensions: Vec<String>,
    pub patterns: Vec<Regex>,
    pub skip_dirs: HashSet<String>,
    /// `None` when aliasing is disabled.
    pub aliases: Option<AliasMap>,
    pub walk_mode: WalkMode,
}

impl Config {
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            languages: Vec::new(),
            extensions: Vec::new(),
            patterns: Vec::new(),
            skip_dirs: SKIP_DIRS.iter().map(ToString::to_string).collect(),
            exclude: Vec::new(),
            exclude_suspicious: false,
            suspicious_threshold: SUSPICIOUS_THRESHOLD,
            strict_walk: true,
            aliases_enabled: true,
            use_tsconfig: true,
            aliases: BTreeMap::new(),
        }
    }

    /// Creates a config for `base_dir` and applies every `strata.toml` found
    /// in it or its ancestors. `base_dir` is canonicalized first so relative
    /// paths see their real ancestors.
    ///
    /// # Errors
    /// Returns error if `base_dir` does not exist, or a config file is
    /// unreadable or malformed.
    pub fn load(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let requested = base_dir.into();
        let base = fs::canonicalize(&requested).map_err(|e| ScanError::io(e, &requested))?;
        let mut config = Self::new(base);
        let start = config.base_dir.clone();
        io::load_cascade(&mut config, &start)?;
        Ok(config)
    }

    /// Overlays the keys present in `file`.
    pub fn apply_toml(&mut self, file: &StrataToml) {
        let scan = &file.scan;
        if let Some(v) = &scan.languages {
            self.languages.clone_from(v);
        }
        if let Some(v) = &scan.extensions {
            self.extensions.clone_from(v);
        }
        if let Some(v) = &scan.patterns {
            self.patterns.clone_from(v);
        }
        if let Some(v) = &scan.skip_dirs {
            for name in v {
                if !self.skip_dirs.contains(name) {
                    self.skip_dirs.push(name.clone());
                }
            }
        }
        if let Some(v) = &scan.exclude {
            self.exclude.clone_from(v);
        }
        if let Some(v) = scan.suspicious_threshold {
            self.suspicious_threshold = v;
        }
        if let Some(v) = scan.strict_walk {
            self.strict_walk = v;
        }

        let aliases = &file.aliases;
        if let Some(v) = aliases.enabled {
            self.aliases_enabled = v;
        }
        if let Some(v) = aliases.tsconfig {
            self.use_tsconfig = v;
        }
        for (prefix, target) in &aliases.map {
            self.aliases.insert(prefix.clone(), target.clone());
        }
    }

    /// Resolves presets, normalizes extensions and compiles patterns.
    ///
    /// # Errors
    /// Returns `ScanError::Pattern` for an invalid extraction pattern.
    pub fn compile(&self) -> Result<ScanConfig> {
        let mut extensions: Vec<String> = Vec::new();
        let mut patterns: Vec<String> = Vec::new();

        for name in &self.languages {
            let Some(preset) = constants::preset(name) else {
                warn!(language = %name, "unknown language preset ignored");
                continue;
            };
            extensions.extend(preset.extensions.iter().map(ToString::to_string));
            patterns.extend(preset.patterns.iter().map(ToString::to_string));
        }
        extensions.extend(self.extensions.iter().cloned());
        patterns.extend(self.patterns.iter().cloned());

        let extensions = dedup(extensions.iter().map(|e| normalize_extension(e)).filter(|e| !e.is_empty()));
        let patterns = dedup(patterns.into_iter())
            .iter()
            .map(|p| compile_pattern(p))
            .collect::<Result<Vec<_>>>()?;

        Ok(ScanConfig {
            base_dir: self.base_dir.clone(),
            extensions,
            patterns,
            skip_dirs: self.skip_dirs.iter().cloned().collect(),
            aliases: self.alias_map(),
            walk_mode: if self.strict_walk {
                WalkMode::FailFast
            } else {
                WalkMode::BestEffort
            },
        })
    }

    /// Explicit aliases first, then tsconfig paths for prefixes not already set.
    fn alias_map(&self) -> Option<AliasMap> {
        if !self.aliases_enabled {
            return None;
        }
        let mut map = AliasMap::from_pairs(self.aliases.iter().map(|(p, t)| (p.as_str(), t.as_str())));
        if self.use_tsconfig {
            if let Some(ts) = TsConfig::load(&self.base_dir) {
                for (prefix, target) in ts.aliases() {
                    map.insert(prefix, target);
                }
            }
        }
        Some(map)
    }
}

impl ScanConfig {
    /// True when nothing was scoped; the scan short-circuits to an empty result.
    #[must_use]
    pub fn is_unscoped(&self) -> bool {
        self.extensions.is_empty() || self.patterns.is_empty()
    }
}

fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_string()
}

fn dedup(items: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items.filter(|i| seen.insert(i.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = Config::new(".");
        assert_eq!(c.suspicious_threshold, 50);
        assert!(c.strict_walk);
        assert!(c.skip_dirs.iter().any(|d| d == "node_modules"));
        let compiled = c.compile().unwrap();
        assert!(compiled.is_unscoped());
    }

    #[test]
    fn test_presets_and_extensions_merge() {
        let mut c = Config::new(".");
        c.languages = vec!["ts".into()];
        c.extensions = vec![".ts".into(), ".vue".into()];
        c.use_tsconfig = false;
        let compiled = c.compile().unwrap();
        assert_eq!(compiled.extensions, vec!["ts", "tsx", "d.ts", "vue"]);
        assert!(!compiled.patterns.is_empty());
        assert!(!compiled.is_unscoped());
    }

    #[test]
    fn test_bad_pattern_is_rejected() {
        let mut c = Config::new(".");
        c.extensions = vec!["py".into()];
        c.patterns = vec!["import \\w+".into()];
        assert!(c.compile().is_err());
    }

    #[test]
    fn test_apply_toml_overrides_and_extends() {
        let file = io::parse_toml(
            r#"
            [scan]
            extensions = ["py"]
            skip_dirs = ["migrations"]
            suspicious_threshold = 10
            [aliases]
            enabled = false
            [aliases.map]
            "@/" = "src"
            "#,
        )
        .unwrap();

        let mut c = Config::new(".");
        c.apply_toml(&file);
        assert_eq!(c.extensions, vec!["py"]);
        assert!(c.skip_dirs.iter().any(|d| d == "migrations"));
        assert!(c.skip_dirs.iter().any(|d| d == ".git"));
        assert_eq!(c.suspicious_threshold, 10);
        assert!(!c.aliases_enabled);
        assert_eq!(c.aliases.get("@/").map(String::as_str), Some("src"));
        assert!(c.compile().unwrap().aliases.is_none());
    }
}
