// src/constants.rs
//! Immutable default tables handed to the walker and config layer by reference.

/// Directory basenames pruned at any depth unless the config overrides them.
pub const SKIP_DIRS: &[&str] = &[
    ".git",
    ".hg",
    ".svn",
    "node_modules",
    "dist",
    "build",
    "target",
    "out",
    ".next",
    ".nuxt",
    ".venv",
    "venv",
    "__pycache__",
    ".tox",
    ".cache",
    "coverage",
    ".idea",
    ".vscode",
];

/// Default direct-file count at which a directory looks vendored or generated.
pub const SUSPICIOUS_THRESHOLD: usize = 50;

/// Config file looked up in the base directory and each of its ancestors.
pub const CONFIG_FILE: &str = "strata.toml";

/// Extensions and extraction patterns for one language family.
#[derive(Debug)]
pub struct LanguagePreset {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub extensions: &'static [&'static str],
    pub patterns: &'static [&'static str],
}

impl LanguagePreset {
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name) || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }
}

const JS_PATTERNS: &[&str] = &[
    r#"(?m)^\s*import\s+(?:[^'"]*?\s+from\s+)?['"]([^'"]+)['"]"#,
    r#"(?m)^\s*export\s+[^'"]*?\s+from\s+['"]([^'"]+)['"]"#,
    r#"require\(\s*['"]([^'"]+)['"]\s*\)"#,
    r#"import\(\s*['"]([^'"]+)['"]\s*\)"#,
];

pub const LANGUAGE_PRESETS: &[LanguagePreset] = &[
    LanguagePreset {
        name: "typescript",
        aliases: &["ts", "tsx"],
        extensions: &["ts", "tsx", "d.ts"],
        patterns: JS_PATTERNS,
    },
    LanguagePreset {
        name: "javascript",
        aliases: &["js", "jsx", "node"],
        extensions: &["js", "jsx", "mjs", "cjs"],
        patterns: JS_PATTERNS,
    },
    LanguagePreset {
        name: "python",
        aliases: &["py"],
        extensions: &["py"],
        patterns: &[
            r"(?m)^\s*from\s+([\w.]+)\s+import\b",
            r"(?m)^\s*import\s+([\w.]+)",
        ],
    },
    LanguagePreset {
        name: "rust",
        aliases: &["rs"],
        extensions: &["rs"],
        patterns: &[
            r"(?m)^\s*(?:pub(?:\([^)]*\))?\s+)?use\s+([\w:]+)",
            r"(?m)^\s*(?:pub(?:\([^)]*\))?\s+)?mod\s+(\w+)\s*;",
        ],
    },
    LanguagePreset {
        name: "go",
        aliases: &["golang"],
        extensions: &["go"],
        patterns: &[
            r#"(?m)^\s*import\s+(?:\w+\s+)?"([^"]+)""#,
            r#"(?m)^\s+(?:\w+\s+)?"([^"]+)"\s*$"#,
        ],
    },
    LanguagePreset {
        name: "c",
        aliases: &["cpp", "c++"],
        extensions: &["c", "h", "cc", "cpp", "hpp"],
        patterns: &[r#"(?m)^\s*#\s*include\s+"([^"]+)""#],
    },
    LanguagePreset {
        name: "css",
        aliases: &["scss", "less"],
        extensions: &["css", "scss", "less"],
        patterns: &[r#"@import\s+(?:url\()?['"]([^'"]+)['"]"#],
    },
];

/// Looks up a language preset by name or alias, case-insensitively.
#[must_use]
pub fn preset(name: &str) -> Option<&'static LanguagePreset> {
    LANGUAGE_PRESETS.iter().find(|p| p.matches(name))
}
