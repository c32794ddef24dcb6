use crate::model::Subject;
use thiserror::Error;

/// A single subject's mark was rejected.
///
/// Scoped to one subject so a caller can re-prompt for just that value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarkError {
    #[error("{subject}: '{input}' is not a number")]
    NotNumeric { subject: Subject, input: String },

    #[error("{subject}: {value} is outside the range 0-100")]
    OutOfRange { subject: Subject, value: f64 },
}

impl MarkError {
    pub fn subject(&self) -> Subject {
        match self {
            MarkError::NotNumeric { subject, .. } | MarkError::OutOfRange { subject, .. } => {
                *subject
            }
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AddError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Roll number cannot be empty")]
    EmptyRoll,

    #[error("Roll number '{0}' already exists")]
    DuplicateRoll(String),

    #[error("Invalid mark: {0}")]
    InvalidMark(#[from] MarkError),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum UpdateError {
    #[error("No student found with roll number '{0}'")]
    NotFound(String),

    #[error("Invalid mark: {0}")]
    InvalidMark(#[from] MarkError),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("No student records available")]
pub struct EmptyStoreError;

#[derive(Error, Debug)]
pub enum GradebookError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, GradebookError>;
