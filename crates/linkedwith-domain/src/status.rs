//! Status module - outcome codes reported for every network operation

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of an operation on a link or the network
///
/// `Success` is reported for `Ok` results; every other code names the
/// rejection that left state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// Operation completed and state was updated
    Success,

    /// Participants were already assigned
    AlreadyValid,

    /// Unknown users or a group that is not exactly two users
    InvalidUsers,

    /// Date precedes the recorded history
    InvalidDate,

    /// Link already active at the date
    AlreadyActive,

    /// Link already inactive at the date
    AlreadyInactive,

    /// Negative hop distance
    InvalidDistance,
}

impl Status {
    /// Get the status code as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Success => "SUCCESS",
            Status::AlreadyValid => "ALREADY_VALID",
            Status::InvalidUsers => "INVALID_USERS",
            Status::InvalidDate => "INVALID_DATE",
            Status::AlreadyActive => "ALREADY_ACTIVE",
            Status::AlreadyInactive => "ALREADY_INACTIVE",
            Status::InvalidDistance => "INVALID_DISTANCE",
        }
    }

    /// Status reported for an operation result
    ///
    /// Returns `None` for failures outside the status channel, such as an
    /// uninitialized link.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedwith_domain::{SocialError, Status};
    ///
    /// let ok: linkedwith_domain::Result<()> = Ok(());
    /// assert_eq!(Status::of(&ok), Some(Status::Success));
    ///
    /// let rejected: linkedwith_domain::Result<()> = Err(SocialError::AlreadyActive);
    /// assert_eq!(Status::of(&rejected), Some(Status::AlreadyActive));
    /// ```
    pub fn of<T>(result: &Result<T>) -> Option<Status> {
        match result {
            Ok(_) => Some(Status::Success),
            Err(e) => e.status(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
