//! Error types for loading, filtering and saving API documentation files.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the extraction pipeline
#[derive(Error, Debug)]
pub enum Error {
    /// Input missing or unreadable, or output location unwritable
    #[error("cannot access '{}': {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Input is not a well-formed JSON object
    #[error("cannot parse '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

/// Why an input file could not be turned into a document
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("top-level value is {0}, expected an object")]
    NotAnObject(&'static str),
}

impl Error {
    pub(crate) fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::FileAccess {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, source: impl Into<ParseError>) -> Self {
        Error::Parse {
            path: path.into(),
            source: source.into(),
        }
    }

    /// True for `FileAccess` errors
    pub fn is_file_access(&self) -> bool {
        matches!(self, Error::FileAccess { .. })
    }

    /// True for `Parse` errors
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_path() {
        let err = Error::file_access(
            "api-docs/en-us.json",
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        assert!(err.is_file_access());
        assert!(err.to_string().contains("api-docs/en-us.json"));

        let err = Error::parse("doc.json", ParseError::NotAnObject("an array"));
        assert!(err.is_parse());
        assert_eq!(
            err.to_string(),
            "cannot parse 'doc.json': top-level value is an array, expected an object"
        );
    }
}
