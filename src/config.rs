//! Configuration for the Luau documentation extractor.
//!
//! Handles:
//! - Command-line argument parsing
//! - Defaults matching the `api-docs/` layout used by the language server

use anyhow::{anyhow, Result};
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

use crate::document::LUAU_PREFIX;

/// Full API documentation file read by default
pub const DEFAULT_INPUT: &str = "api-docs/en-us.json";
/// Luau-only documentation file written by default
pub const DEFAULT_OUTPUT: &str = "api-docs/luau-en-us.json";

/// Command-line arguments for the extractor
#[derive(Debug, Parser)]
#[command(name = "luau-docs-extract")]
#[command(about = "Extract the Luau entries from an API documentation file")]
#[command(version)]
pub struct Args {
    /// Documentation file to read
    #[arg(long, default_value = DEFAULT_INPUT, help = "Path to the full API documentation JSON")]
    pub input: PathBuf,

    /// File receiving the filtered entries
    #[arg(long, default_value = DEFAULT_OUTPUT, help = "Path to write the filtered JSON to")]
    pub output: PathBuf,

    /// Key prefix selecting the entries to keep
    #[arg(long, default_value = LUAU_PREFIX, help = "Keep only keys starting with this prefix")]
    pub prefix: String,

    /// Log level for the extractor
    #[arg(
        long,
        default_value = "info",
        help = "Log level (off, trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Resolved configuration for one run
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub prefix: String,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            prefix: LUAU_PREFIX.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    /// Create configuration from the process command line only
    pub fn from_command_line() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let log_level = args
            .log_level
            .parse::<LevelFilter>()
            .map_err(|_| anyhow!("Unknown log level '{}'", args.log_level))?;

        Ok(Config {
            input: args.input,
            output: args.output,
            prefix: args.prefix,
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_matches_default() {
        let args = Args::try_parse_from(["luau-docs-extract"]).expect("parse args");
        let config = Config::from_args(args).expect("build config");
        assert_eq!(config, Config::default());
        assert_eq!(config.input, PathBuf::from("api-docs/en-us.json"));
        assert_eq!(config.output, PathBuf::from("api-docs/luau-en-us.json"));
        assert_eq!(config.prefix, "@luau");
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "luau-docs-extract",
            "--input",
            "docs/full.json",
            "--output",
            "docs/out.json",
            "--prefix",
            "@roblox",
            "--log-level",
            "debug",
        ])
        .expect("parse args");
        let config = Config::from_args(args).expect("build config");

        assert_eq!(config.input, PathBuf::from("docs/full.json"));
        assert_eq!(config.output, PathBuf::from("docs/out.json"));
        assert_eq!(config.prefix, "@roblox");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_unknown_log_level_is_rejected() {
        let args = Args::try_parse_from(["luau-docs-extract", "--log-level", "chatty"])
            .expect("parse args");
        let err = Config::from_args(args).expect_err("bad level");
        assert!(err.to_string().contains("chatty"));
    }
}
