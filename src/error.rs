//! Error enum
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    /// A score file that disagrees with the bitext schema.
    SchemaMismatch(SchemaMismatch),
    /// Aligned corpus files (or a weights file) of differing lengths.
    AlignmentError {
        path: PathBuf,
        expected: usize,
        found: usize,
    },
    /// Policy parameter outside its valid range.
    InvalidParameter(String),
    /// Sampling weights that sum to zero or are unusable.
    DegenerateDistribution(String),
    Serde(serde_json::Error),
    Custom(String),
}

/// Ways a score file can disagree with the bitext: a line count off from
/// the bitext's, or a line that is not a finite float.
#[derive(Debug)]
pub enum SchemaMismatch {
    LineCount {
        path: PathBuf,
        expected: usize,
        found: usize,
    },
    Value {
        path: PathBuf,
        line: usize,
        value: String,
    },
}

impl From<SchemaMismatch> for Error {
    fn from(m: SchemaMismatch) -> Error {
        Error::SchemaMismatch(m)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}
