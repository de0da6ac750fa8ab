// src/cli/args.rs
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "strata", version, about = "Import graph scanner for architectural review")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Log scan progress to stderr (overridden by STRATA_LOG)
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the full dump: tree, per-file dependencies, mutual dependencies
    Scan {
        #[command(flatten)]
        scan: ScanArgs,
        /// Emit the scan result as JSON
        #[arg(long)]
        json: bool,
        /// Exit non-zero when mutual dependencies exist
        #[arg(long)]
        strict: bool,
    },
    /// Walk through the tree one directory per page
    Review {
        #[command(flatten)]
        scan: ScanArgs,
        /// Page to show (1 is the overview)
        #[arg(long, short, default_value = "1")]
        page: usize,
    },
    /// List directories that look vendored or generated
    Suspicious {
        #[command(flatten)]
        scan: ScanArgs,
        /// Emit the list as JSON
        #[arg(long)]
        json: bool,
        /// Exit non-zero when any directory is flagged
        #[arg(long)]
        strict: bool,
    },
}

/// Scan inputs shared by every subcommand. Non-empty values override
/// `strata.toml`.
#[allow(clippy::struct_excessive_bools)]
#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    /// Base directory to scan
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,
    /// Language preset (typescript, javascript, python, rust, go, c, css)
    #[arg(long = "lang", value_name = "NAME")]
    pub languages: Vec<String>,
    /// File extension to include
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,
    /// Import extraction regex with exactly one capture group
    #[arg(long = "pattern", value_name = "REGEX")]
    pub patterns: Vec<String>,
    /// Extra directory name to prune at any depth
    #[arg(long = "skip", value_name = "NAME")]
    pub skip: Vec<String>,
    /// Directory to drop from the result
    #[arg(long = "exclude", value_name = "DIR")]
    pub exclude: Vec<String>,
    /// Drop every suspicious directory from the result
    #[arg(long)]
    pub exclude_suspicious: bool,
    /// Direct file count that marks a directory as suspicious
    #[arg(long, value_name = "N")]
    pub threshold: Option<usize>,
    /// Path alias, e.g. `@/=src`
    #[arg(long = "alias", value_name = "PREFIX=DIR")]
    pub aliases: Vec<String>,
    /// Disable alias resolution entirely
    #[arg(long)]
    pub no_aliases: bool,
    /// Ignore tsconfig.json / jsconfig.json paths
    #[arg(long)]
    pub no_tsconfig: bool,
    /// Keep walking past unreadable entries
    #[arg(long)]
    pub best_effort: bool,
}
