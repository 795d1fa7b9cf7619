use std::path::PathBuf;

use thiserror::Error;

use crate::roster::StudentId;

/// Errors produced while loading class data, searching for a seating, or
/// rendering it.
#[derive(Error, Debug)]
pub enum SeatingError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("roster must list exactly {expected} students (found {found})")]
    RosterSize { expected: usize, found: usize },

    #[error("roster line {line} is not `<id> <name>`: {content:?}")]
    RosterLine { line: usize, content: String },

    #[error("student {0} appears more than once in the roster")]
    DuplicateStudent(StudentId),

    /// No assignment could be constructed, e.g. a forced-pair member is not
    /// on the roster.
    #[error("seat assignment failed: {0}")]
    AssignmentFailure(String),

    #[error("{remaining} students remain for {desks} desks after seating the forced pair")]
    UnevenRemainder { remaining: usize, desks: usize },

    #[error("invalid assignment: {0}")]
    InvalidAssignment(String),

    #[error("failed to render seating chart: {0}")]
    Render(String),
}

impl SeatingError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SeatingError>;
