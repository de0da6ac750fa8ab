// src/cli/handlers.rs
use anyhow::{anyhow, Context, Result};
use colored::Colorize;
use tracing::info;

use crate::cli::args::ScanArgs;
use crate::config::Config;
use crate::exit::StrataExit;
use crate::graph::{self, find_suspicious, ScanResult, SuspiciousDir};
use crate::report::{self, PageOutcome};

/// Loads the config cascade for the requested base directory and overlays
/// command-line flags.
///
/// # Errors
/// Returns error if the path does not exist, a config file is malformed, or
/// an `--alias` value lacks `=`.
pub fn build_config(args: &ScanArgs) -> Result<Config> {
    let base = std::fs::canonicalize(&args.path)
        .with_context(|| format!("cannot open base directory {}", args.path.display()))?;
    let mut config = Config::load(base)?;

    if !args.languages.is_empty() {
        config.languages.clone_from(&args.languages);
    }
    if !args.extensions.is_empty() {
        config.extensions.clone_from(&args.extensions);
    }
    if !args.patterns.is_empty() {
        config.patterns.clone_from(&args.patterns);
    }
    for name in &args.skip {
        if !config.skip_dirs.contains(name) {
            config.skip_dirs.push(name.clone());
        }
    }
    config.exclude.extend(args.exclude.iter().cloned());
    config.exclude_suspicious |= args.exclude_suspicious;
    if let Some(n) = args.threshold {
        config.suspicious_threshold = n;
    }
    for raw in &args.aliases {
        let (prefix, target) = parse_alias(raw)?;
        config.aliases.insert(prefix, target);
    }
    if args.no_aliases {
        config.aliases_enabled = false;
    }
    if args.no_tsconfig {
        config.use_tsconfig = false;
    }
    if args.best_effort {
        config.strict_walk = false;
    }
    Ok(config)
}

fn parse_alias(raw: &str) -> Result<(String, String)> {
    let (prefix, target) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("alias `{raw}` must look like PREFIX=DIR"))?;
    if prefix.is_empty() {
        return Err(anyhow!("alias `{raw}` has an empty prefix"));
    }
    Ok((prefix.to_string(), target.to_string()))
}

/// Scans and applies configured exclusions.
///
/// # Errors
/// Returns error if config compilation or the scan fails.
pub fn run_scan(config: &Config) -> Result<ScanResult> {
    let scan_config = config.compile()?;
    let result = graph::scan(&scan_config)
        .with_context(|| format!("scan of {} failed", config.base_dir.display()))?;

    let mut excluded = config.exclude.clone();
    if config.exclude_suspicious {
        let flagged = find_suspicious(&result.tree, config.suspicious_threshold);
        info!(count = flagged.len(), "excluding suspicious directories");
        excluded.extend(flagged.into_iter().map(|s| s.path));
    }

    if excluded.is_empty() {
        Ok(result)
    } else {
        Ok(result.without(&excluded))
    }
}

/// Handles the scan command.
///
/// # Errors
/// Returns error if scanning or JSON serialization fails.
pub fn handle_scan(args: &ScanArgs, json: bool, strict: bool) -> Result<StrataExit> {
    let config = build_config(args)?;
    let result = run_scan(&config)?;
    warn_unscoped(&result);
    warn_walk_errors(&result);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", report::render_full(&result));
    }

    let mutual = result.mutual_dependencies();
    if strict && !mutual.is_empty() {
        eprintln!(
            "{} {} mutual dependencies found",
            "[FAIL]".red().bold(),
            mutual.len()
        );
        return Ok(StrataExit::CheckFailed);
    }
    Ok(StrataExit::Success)
}

/// Handles the review command.
///
/// # Errors
/// Returns error if scanning fails.
pub fn handle_review(args: &ScanArgs, page: usize) -> Result<StrataExit> {
    let config = build_config(args)?;
    let result = run_scan(&config)?;
    warn_unscoped(&result);

    let outcome = report::render_page(&result, page);
    match outcome {
        PageOutcome::Page { .. } => {
            println!("{outcome}");
            Ok(StrataExit::Success)
        }
        PageOutcome::OutOfRange { .. } => {
            eprintln!("{}", outcome.to_string().yellow());
            Ok(StrataExit::InvalidInput)
        }
    }
}

/// Handles the suspicious command.
///
/// # Errors
/// Returns error if scanning or JSON serialization fails.
pub fn handle_suspicious(args: &ScanArgs, json: bool, strict: bool) -> Result<StrataExit> {
    let config = build_config(args)?;
    let result = run_scan(&config)?;
    let found = find_suspicious(&result.tree, config.suspicious_threshold);

    if json {
        println!("{}", serde_json::to_string_pretty(&found)?);
    } else {
        print_suspicious(&found, config.suspicious_threshold);
    }

    if strict && !found.is_empty() {
        eprintln!(
            "{} {} suspicious {} found",
            "[FAIL]".red().bold(),
            found.len(),
            report::pluralize(found.len(), "directory", "directories")
        );
        return Ok(StrataExit::CheckFailed);
    }
    Ok(StrataExit::Success)
}

fn print_suspicious(found: &[SuspiciousDir], threshold: usize) {
    if found.is_empty() {
        println!(
            "{}",
            format!("No directories with {threshold}+ direct files.").green()
        );
        return;
    }

    println!(
        "{} (>= {threshold} direct files)",
        "SUSPICIOUS DIRECTORIES".yellow().bold()
    );
    for dir in found {
        println!("  {:>6}  {}", dir.file_count, dir.path);
    }
    println!(
        "\n  {} Re-run with --exclude-suspicious or add them to [scan].exclude in strata.toml",
        "→".cyan()
    );
}

fn warn_unscoped(result: &ScanResult) {
    if result.is_empty() {
        eprintln!(
            "{} nothing in scope; set --lang, or --ext and --pattern (or [scan] in strata.toml)",
            "WARN:".yellow()
        );
    }
}

fn warn_walk_errors(result: &ScanResult) {
    for issue in &result.walk_errors {
        eprintln!("{} skipped {}: {}", "WARN:".yellow(), issue.path, issue.message);
    }
}
