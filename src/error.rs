//! Fatal error taxonomy for a version check run.
//!
//! Per-keyboard findings (mismatched or missing versions) are not errors; they
//! live in [`crate::compare::Finding`]. Everything here stops the run with exit
//! status 1.

use std::{fmt, path::PathBuf};

use thiserror::Error;

/// Which input a file-level error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    KeyboardsCsv,
    KmpJson,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::KeyboardsCsv => f.write_str("keyboards.csv text file"),
            InputKind::KmpJson => f.write_str("kmp.json"),
        }
    }
}

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("{0}")]
    Usage(String),

    #[error("Can't open {kind} {}", path.display())]
    FileNotFound { kind: InputKind, path: PathBuf },

    #[error("Invalid JSON file. Exiting")]
    ManifestParse(#[source] serde_json::Error),

    #[error("Invalid kmp.json structure: {0}")]
    ManifestSchema(String),

    #[error("Reading {kind} {}: {source}", path.display())]
    Io {
        kind: InputKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("{count} keyboard version finding(s) reported")]
    Findings { count: usize },
}

/// Errors raised while reading the rows of a keyboards.csv export.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Reading keyboards.csv line {line}: {source}")]
    Csv {
        line: u64,
        #[source]
        source: csv::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_not_found_names_the_input() {
        let err = CheckError::FileNotFound {
            kind: InputKind::KmpJson,
            path: PathBuf::from("missing/kmp.json"),
        };
        assert_eq!(err.to_string(), "Can't open kmp.json missing/kmp.json");
    }

    #[test]
    fn manifest_parse_message_is_fixed() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = CheckError::ManifestParse(source);
        assert_eq!(err.to_string(), "Invalid JSON file. Exiting");
    }
}
