// src/graph/tsconfig.rs
//! Reads tsconfig.json / jsconfig.json `paths` as prefix aliases.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use super::paths;

/// Wildcard path mappings from a tsconfig, relative to the project root.
#[derive(Debug, Default)]
pub struct TsConfig {
    pub base_url: String,
    pub paths: BTreeMap<String, Vec<String>>,
}

#[derive(Deserialize)]
struct RawConfig {
    #[serde(rename = "compilerOptions")]
    compiler_options: Option<CompilerOptions>,
}

#[derive(Deserialize)]
struct CompilerOptions {
    #[serde(rename = "baseUrl")]
    base_url: Option<String>,
    paths: Option<BTreeMap<String, Vec<String>>>,
}

impl TsConfig {
    /// Attempt to load tsconfig.json or jsconfig.json from project root.
    #[must_use]
    pub fn load(root: &Path) -> Option<Self> {
        let candidates = ["tsconfig.json", "jsconfig.json"];
        candidates.iter().find_map(|name| Self::parse_file(&root.join(name)))
    }

    fn parse_file(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        Self::parse_content(&content)
    }

    fn parse_content(content: &str) -> Option<Self> {
        let clean = strip_json_comments(content);
        let raw: RawConfig = serde_json::from_str(&clean).ok()?;
        let opts = raw.compiler_options?;

        Some(Self {
            base_url: opts.base_url.unwrap_or_else(|| paths::ROOT.to_string()),
            paths: opts.paths.unwrap_or_default(),
        })
    }

    /// `"@/*": ["src/*"]` becomes `("@/", "src")`. Only wildcard entries map
    /// cleanly onto prefixes; exact entries and targets escaping the root
    /// are skipped. The first target of each entry is used.
    #[must_use]
    pub fn aliases(&self) -> Vec<(String, String)> {
        self.paths
            .iter()
            .filter_map(|(pattern, targets)| {
                let prefix = pattern.strip_suffix('*')?;
                let target = targets.first()?.strip_suffix('*')?;
                let dir = paths::join_normalized(&self.base_url, target)?;
                Some((prefix.to_string(), dir))
            })
            .filter(|(prefix, _)| !prefix.is_empty())
            .collect()
    }
}

/// Strip single-line (//) and multi-line (/* */) comments from JSON.
fn strip_json_comments(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            result.push(c);
            in_string = handle_string_char(c, &mut chars, &mut result);
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                result.push(c);
            }
            '/' => handle_slash(&mut chars, &mut result),
            _ => result.push(c),
        }
    }
    result
}

type Chars<'a> = std::iter::Peekable<std::str::Chars<'a>>;

fn handle_string_char(c: char, chars: &mut Chars, result: &mut String) -> bool {
    if c == '\\' {
        if let Some(next) = chars.next() {
            result.push(next);
        }
        return true;
    }
    c != '"'
}

fn handle_slash(chars: &mut Chars, result: &mut String) {
    match chars.peek() {
        Some(&'/') => skip_line_comment(chars, result),
        Some(&'*') => skip_block_comment(chars),
        _ => result.push('/'),
    }
}

fn skip_line_comment(chars: &mut Chars, result: &mut String) {
    for ch in chars.by_ref() {
        if ch == '\n' {
            result.push('\n');
            break;
        }
    }
}

fn skip_block_comment(chars: &mut Chars) {
    chars.next(); // consume '*'
    while let Some(ch) = chars.next() {
        if ch == '*' && chars.peek() == Some(&'/') {
            chars.next();
            break;
        }
    }
}
