// src/config/types.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One `strata.toml` file as written on disk. Every key is optional so that
/// nearer files override only what they mention.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StrataToml {
    pub scan: ScanSection,
    pub aliases: AliasSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanSection {
    /// Preset names from the language table (`typescript`, `py`, ...).
    pub languages: Option<Vec<String>>,
    pub extensions: Option<Vec<String>>,
    pub patterns: Option<Vec<String>>,
    /// Extra directory basenames to prune, on top of the defaults.
    pub skip_dirs: Option<Vec<String>>,
    /// Directories dropped from the result after scanning.
    pub exclude: Option<Vec<String>>,
    pub suspicious_threshold: Option<usize>,
    pub strict_walk: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AliasSection {
    pub enabled: Option<bool>,
    /// Import `compilerOptions.paths` from tsconfig.json / jsconfig.json.
    pub tsconfig: Option<bool>,
    pub map: BTreeMap<String, String>,
}
