//! Error types for LinkedWith domain operations

use crate::status::Status;
use thiserror::Error;

/// Result type alias for domain operations.
pub type Result<T> = std::result::Result<T, SocialError>;

/// Reasons an operation on the social network was rejected
///
/// Every variant except [`SocialError::Uninitialized`] and
/// [`SocialError::DateFormat`] corresponds to one status code. State is never
/// mutated when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SocialError {
    /// Object was never given its identity (placeholder link or user)
    #[error("Object is uninitialized")]
    Uninitialized,

    /// Identity was already assigned and cannot be reassigned
    #[error("Object is already valid")]
    AlreadyValid,

    /// Unknown users, or a group that is not exactly two distinct users
    #[error("Invalid users: {0}")]
    InvalidUsers(String),

    /// Date precedes the link history or cannot be appended
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Link is already active on the requested date
    #[error("Link is already active")]
    AlreadyActive,

    /// Link is already inactive on the requested date
    #[error("Link is already inactive")]
    AlreadyInactive,

    /// Maximum hop distance is negative
    #[error("Invalid distance: {0}")]
    InvalidDistance(i64),

    /// Date string could not be parsed
    #[error("Date format error: {0}")]
    DateFormat(String),
}

impl SocialError {
    /// Status code reported for this rejection, if it has one
    pub fn status(&self) -> Option<Status> {
        match self {
            SocialError::Uninitialized | SocialError::DateFormat(_) => None,
            SocialError::AlreadyValid => Some(Status::AlreadyValid),
            SocialError::InvalidUsers(_) => Some(Status::InvalidUsers),
            SocialError::InvalidDate(_) => Some(Status::InvalidDate),
            SocialError::AlreadyActive => Some(Status::AlreadyActive),
            SocialError::AlreadyInactive => Some(Status::AlreadyInactive),
            SocialError::InvalidDistance(_) => Some(Status::InvalidDistance),
        }
    }
}

impl From<chrono::ParseError> for SocialError {
    fn from(e: chrono::ParseError) -> Self {
        SocialError::DateFormat(e.to_string())
    }
}
