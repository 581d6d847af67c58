use std::path::PathBuf;

use thiserror::Error;

/// Failure of a directory operation. The display strings are part of the
/// HTTP contract and are returned to callers verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Activity not found")]
    ActivityNotFound { activity: String },

    #[error("Student not found")]
    ParticipantNotFound { activity: String, email: String },

    #[error("Already signed up for this activity")]
    AlreadyRegistered { activity: String, email: String },

    /// Only produced when [`CapacityPolicy::Enforce`] is active.
    ///
    /// [`CapacityPolicy::Enforce`]: crate::CapacityPolicy::Enforce
    #[error("Activity is full")]
    ActivityFull { activity: String, capacity: u32 },
}

/// The two kinds of failure a caller can observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
}

impl DirectoryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DirectoryError::ActivityNotFound { .. }
            | DirectoryError::ParticipantNotFound { .. } => ErrorKind::NotFound,
            DirectoryError::AlreadyRegistered { .. }
            | DirectoryError::ActivityFull { .. } => ErrorKind::Conflict,
        }
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("failed to read seed file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML seed file {path}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid JSON seed file {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(
        "failed to parse seed file {path}: toml error: {toml}; json error: {json}"
    )]
    UnknownFormat {
        path: PathBuf,
        toml: String,
        json: String,
    },

    #[error("activity name must not be empty")]
    EmptyName,

    #[error("activity '{0}' is declared more than once")]
    DuplicateActivity(String),

    #[error("activity '{0}' must allow at least one participant")]
    ZeroCapacity(String),

    #[error("activity '{activity}' lists participant '{email}' more than once")]
    DuplicateParticipant { activity: String, email: String },
}
