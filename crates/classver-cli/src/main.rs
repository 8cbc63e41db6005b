//! classver - Report the class file versions inside a jar or directory tree
//!
//! This tool checks the major and minor class file version of every
//! `.class` file within a `.jar` archive or below a directory (recursive)
//! and prints the highest and lowest major version found.

use anyhow::{bail, Result};
use clap::{CommandFactory, Parser};
use classver_core::scan_path;
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

/// Report the class file versions inside a jar or directory tree
#[derive(Parser, Debug)]
#[command(name = "classver")]
#[command(version, about, long_about = None)]
#[command(
    after_help = "Examples:\n  classver path/to/JarToCheck.jar\n  classver path/to/dir/with/classFilesToCheck/"
)]
struct Cli {
    /// Path to a .jar file or to a directory containing class files
    path: PathBuf,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Help aliases accepted alongside clap's own `-h`/`--help`
fn wants_help(args: &[String]) -> bool {
    args.len() == 1
        && matches!(
            args[0].to_ascii_lowercase().as_str(),
            "h" | "-h" | "?" | "-?"
        )
}

fn main() -> Result<()> {
    // The lone-token help spellings predate clap and are kept working
    let raw: Vec<String> = std::env::args().skip(1).collect();
    if wants_help(&raw) {
        Cli::command().print_help()?;
        return Ok(());
    }

    let cli = Cli::parse();

    // Initialize tracing
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_target(false)
        .init();

    if !cli.path.exists() {
        bail!("input path does not exist: {}", cli.path.display());
    }

    debug!("Checking {}", cli.path.display());
    let report = scan_path(&cli.path)?;

    for line in report.lines() {
        println!("{}", line);
    }
    for failure in report.failures() {
        eprintln!("{}", failure);
    }

    println!();
    println!("{}", report.summary(&cli.path.display().to_string()));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wants_help_aliases() {
        for alias in ["h", "H", "-h", "-H", "?", "-?"] {
            assert!(wants_help(&[alias.to_string()]), "alias {} rejected", alias);
        }
        assert!(!wants_help(&["classes".to_string()]));
        assert!(!wants_help(&["--help".to_string()]));
        assert!(!wants_help(&["-h".to_string(), "extra".to_string()]));
        assert!(!wants_help(&[]));
    }

    #[test]
    fn test_parse_positional_path() {
        let cli = Cli::try_parse_from(["classver", "path/to/classes"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("path/to/classes"));
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_missing_path_is_a_usage_error() {
        assert!(Cli::try_parse_from(["classver"]).is_err());
    }

    #[test]
    fn test_extra_arguments_are_a_usage_error() {
        assert!(Cli::try_parse_from(["classver", "a.jar", "b.jar"]).is_err());
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }
}
