//! Roster persistence contracts and the JSON file implementation.
//!
//! # Responsibility
//! - Define the load/save seam between the shell and durable storage.
//! - Report storage failures with the offending path attached.
//!
//! # Invariants
//! - A missing storage file is an empty roster, not an error.
//! - A malformed file is a fatal `CodecError::Format`; it is never masked.
//! - Stores keep no copy of the records after a call returns.

use crate::model::person::Person;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::{Path, PathBuf};

pub mod json_store;

pub type CodecResult<T> = Result<T, CodecError>;

/// Failure while reading or writing the stored roster.
#[derive(Debug)]
pub enum CodecError {
    /// File system failure (open, read, write, rename).
    Io { path: PathBuf, source: io::Error },
    /// The stored document is malformed or breaks record invariants.
    Format { path: PathBuf, message: String },
}

impl CodecError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn format(path: &Path, message: impl Into<String>) -> Self {
        Self::Format {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    pub(crate) fn from_json(path: &Path, err: serde_json::Error) -> Self {
        if err.is_io() {
            Self::io(path, err.into())
        } else {
            Self::format(path, err.to_string())
        }
    }

    /// Stable short code for log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "roster_io_failed",
            Self::Format { .. } => "roster_format_invalid",
        }
    }
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "roster file `{}`: {source}", path.display()),
            Self::Format { path, message } => {
                write!(f, "malformed roster file `{}`: {message}", path.display())
            }
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Format { .. } => None,
        }
    }
}

/// Durable storage for the roster.
pub trait RosterStore {
    /// Reads the stored roster in stored order.
    fn load(&self) -> CodecResult<Vec<Person>>;
    /// Replaces the stored roster with `persons`.
    fn save(&self, persons: &[Person]) -> CodecResult<()>;
}
