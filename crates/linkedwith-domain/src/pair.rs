//! Pair module - unordered pairs of participants (the key of a link)

use crate::error::{Result, SocialError};
use crate::user::UserId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// An unordered pair of two distinct users
///
/// Members are stored sorted, so `{A, B}` and `{B, A}` are the same key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserPair {
    first: UserId,
    second: UserId,
}

impl UserPair {
    /// Create a pair from two distinct users
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedwith_domain::{UserId, UserPair};
    ///
    /// let a = UserId::new("a").unwrap();
    /// let b = UserId::new("b").unwrap();
    /// assert_eq!(
    ///     UserPair::new(a.clone(), b.clone()).unwrap(),
    ///     UserPair::new(b, a).unwrap()
    /// );
    /// ```
    pub fn new(a: UserId, b: UserId) -> Result<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Ok(Self { first: a, second: b }),
            std::cmp::Ordering::Greater => Ok(Self { first: b, second: a }),
            std::cmp::Ordering::Equal => Err(SocialError::InvalidUsers(format!(
                "a link needs two distinct users, got {} twice",
                a
            ))),
        }
    }

    /// Create a pair from a group of ids
    ///
    /// Duplicates collapse; the group must hold exactly two distinct ids.
    pub fn from_ids<I>(ids: I) -> Result<Self>
    where
        I: IntoIterator<Item = UserId>,
    {
        let distinct: BTreeSet<UserId> = ids.into_iter().collect();
        if distinct.len() != 2 {
            return Err(SocialError::InvalidUsers(format!(
                "a link needs exactly two users, got {}",
                distinct.len()
            )));
        }
        let mut members = distinct.into_iter();
        match (members.next(), members.next()) {
            (Some(first), Some(second)) => Ok(Self { first, second }),
            _ => Err(SocialError::InvalidUsers("a link needs exactly two users".to_string())),
        }
    }

    /// The lower-ordered member
    pub fn first(&self) -> &UserId {
        &self.first
    }

    /// The higher-ordered member
    pub fn second(&self) -> &UserId {
        &self.second
    }

    /// Whether the user is one of the two members
    pub fn contains(&self, id: &str) -> bool {
        self.first.as_str() == id || self.second.as_str() == id
    }

    /// The opposite endpoint of `id`, or `None` if `id` is not a member
    pub fn other(&self, id: &str) -> Option<&UserId> {
        if self.first.as_str() == id {
            Some(&self.second)
        } else if self.second.as_str() == id {
            Some(&self.first)
        } else {
            None
        }
    }

    /// Iterate over both members
    pub fn iter(&self) -> impl Iterator<Item = &UserId> {
        [&self.first, &self.second].into_iter()
    }
}

impl fmt::Display for UserPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} and {}", self.first, self.second)
    }
}
