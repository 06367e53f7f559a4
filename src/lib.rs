//! Luau API documentation extractor
//!
//! Reads the full API documentation file shipped with the language server,
//! keeps the entries whose key starts with `@luau`, and writes them to a
//! separate file.
//!
//! This library provides:
//! - Loading documentation files with key order preserved
//! - Prefix filtering of documentation entries
//! - Compact JSON output
//! - Configuration management

pub mod config;
pub mod document;
pub mod error;

use std::path::PathBuf;

pub use config::Config;
pub use document::{filter, load, save, Document, FilteredDocument, LUAU_PREFIX};
pub use error::{Error, ParseError, Result};

/// What a completed run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub total_entries: usize,
    pub kept_entries: usize,
}

/// Load the input file, filter it by the configured prefix and save the result.
///
/// Any failure aborts before later steps run, so a bad input never touches
/// the output file.
pub fn run(config: &Config) -> Result<ExtractSummary> {
    let doc = load(&config.input)?;
    let filtered = filter(&doc, &config.prefix);

    if filtered.is_empty() {
        log::warn!(
            "No entries in {} start with '{}'",
            config.input.display(),
            config.prefix
        );
    }

    save(&filtered, &config.output)?;

    Ok(ExtractSummary {
        input: config.input.clone(),
        output: config.output.clone(),
        total_entries: doc.len(),
        kept_entries: filtered.len(),
    })
}
