// src/config/io.rs
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::types::StrataToml;
use super::Config;
use crate::constants::CONFIG_FILE;
use crate::error::{Result, ScanError};

/// Every `strata.toml` from the filesystem root down to `start`, outermost first.
/// `start` should be absolute; a relative path only yields its own segments.
#[must_use]
pub fn find_config_files(start: &Path) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE))
        .filter(|p| p.is_file())
        .collect();
    found.reverse();
    found
}

/// Parses one config file.
///
/// # Errors
/// Returns error if the file cannot be read or is not valid TOML.
pub fn read_toml(path: &Path) -> Result<StrataToml> {
    let content = fs::read_to_string(path).map_err(|e| ScanError::io(e, path))?;
    parse_toml(&content).map_err(|message| ScanError::Config {
        path: path.to_path_buf(),
        message,
    })
}

/// Parses config text. The error is the TOML parser's message.
///
/// # Errors
/// Returns the parser message on invalid TOML or unknown value types.
pub fn parse_toml(content: &str) -> std::result::Result<StrataToml, String> {
    toml::from_str(content).map_err(|e| e.to_string())
}

/// Applies the cascade: outermost file first, nearest file last.
///
/// # Errors
/// Returns error on the first unreadable or malformed file.
pub fn load_cascade(config: &mut Config, start: &Path) -> Result<()> {
    for path in find_config_files(start) {
        debug!(path = %path.display(), "loading config");
        let parsed = read_toml(&path)?;
        config.apply_toml(&parsed);
    }
    Ok(())
}
