//! Error types used across chperm.
use std::fmt;
use std::path::PathBuf;

use thiserror::Error as ThisError;

/// Which half of an owner/group token failed to resolve.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IdField {
    User,
    Group,
    /// The token as a whole (e.g. a bare `:`).
    OwnerGroup,
}

impl fmt::Display for IdField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IdField::User => "user",
            IdField::Group => "group",
            IdField::OwnerGroup => "owner:group",
        })
    }
}

/// Syscall that failed while mutating an entry.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operation {
    Ownership,
    Permissions,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Ownership => "ownership",
            Operation::Permissions => "permissions",
        })
    }
}

/// Every failure chperm can report.
///
/// The first four variants are configuration errors and abort the whole invocation before any
/// file is touched. The remaining three are per-path and only mark that path as failed.
#[derive(Debug, ThisError)]
pub enum Error {
    #[error("invalid {field}: '{token}'")]
    InvalidIdentifier { field: IdField, token: String },
    #[error("invalid mode: '{0}'")]
    InvalidMode(String),
    #[error("cannot specify both -h and -L")]
    ConflictingOptions,
    #[error("missing {0}")]
    MissingOperand(&'static str),
    #[error("cannot access '{}': {}", .path.display(), .source)]
    PathUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("changing {} of '{}': {}", .op, .path.display(), .source)]
    MutationFailed {
        path: PathBuf,
        op: Operation,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot read directory '{}': {}", .path.display(), .source)]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// True for configuration errors that must fail the invocation before any mutation.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::InvalidIdentifier { .. }
                | Error::InvalidMode(_)
                | Error::ConflictingOptions
                | Error::MissingOperand(_)
        )
    }
}

/// Convenient alias for results returning a `types::Error`.
pub type Result<T> = std::result::Result<T, Error>;
