//! User module - participants of the social network

use crate::error::{Result, SocialError};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Unique, immutable string key of a participant
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Create a new user id
    ///
    /// # Errors
    /// Returns [`SocialError::InvalidUsers`] if the id is empty
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(SocialError::InvalidUsers("user id cannot be empty".to_string()));
        }
        Ok(Self(value))
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for UserId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A participant of the social network
///
/// A user starts uninitialized and becomes valid once its id is set. The id
/// is fixed for the user's lifetime. Contact attributes can only be set on a
/// valid user.
#[derive(Debug, Clone, Default)]
pub struct User {
    id: Option<UserId>,
    first_name: Option<String>,
    middle_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
}

impl User {
    /// Create an uninitialized user
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a valid user with the given id
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedwith_domain::User;
    ///
    /// let user = User::with_id("ShaunHoward").unwrap();
    /// assert!(user.is_valid());
    /// assert_eq!(user.to_string(), "ShaunHoward");
    /// ```
    pub fn with_id(id: impl Into<String>) -> Result<Self> {
        let mut user = Self::new();
        user.set_id(UserId::new(id)?)?;
        Ok(user)
    }

    /// Assign the unique id
    ///
    /// # Errors
    /// Returns [`SocialError::AlreadyValid`] if the id was already set; the
    /// existing id is kept.
    pub fn set_id(&mut self, id: UserId) -> Result<()> {
        if self.id.is_some() {
            return Err(SocialError::AlreadyValid);
        }
        self.id = Some(id);
        Ok(())
    }

    /// Whether the id has been assigned
    pub fn is_valid(&self) -> bool {
        self.id.is_some()
    }

    /// The user's id, if assigned
    pub fn id(&self) -> Option<&UserId> {
        self.id.as_ref()
    }

    /// Set the first name
    pub fn set_first_name(&mut self, name: impl Into<String>) -> Result<&mut Self> {
        self.ensure_valid()?;
        self.first_name = Some(name.into());
        Ok(self)
    }

    /// Set the middle name
    pub fn set_middle_name(&mut self, name: impl Into<String>) -> Result<&mut Self> {
        self.ensure_valid()?;
        self.middle_name = Some(name.into());
        Ok(self)
    }

    /// Set the last name
    pub fn set_last_name(&mut self, name: impl Into<String>) -> Result<&mut Self> {
        self.ensure_valid()?;
        self.last_name = Some(name.into());
        Ok(self)
    }

    /// Set the email address
    pub fn set_email(&mut self, email: impl Into<String>) -> Result<&mut Self> {
        self.ensure_valid()?;
        self.email = Some(email.into());
        Ok(self)
    }

    /// Set the phone number
    pub fn set_phone_number(&mut self, phone: impl Into<String>) -> Result<&mut Self> {
        self.ensure_valid()?;
        self.phone = Some(phone.into());
        Ok(self)
    }

    /// First name
    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    /// Middle name
    pub fn middle_name(&self) -> Option<&str> {
        self.middle_name.as_deref()
    }

    /// Last name
    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    /// Email address
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Phone number
    pub fn phone_number(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    fn ensure_valid(&self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(SocialError::Uninitialized)
        }
    }
}

// Users are identified by id alone
impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.id {
            Some(id) => write!(f, "{}", id),
            None => f.write_str("Invalid User: Uninitialized ID"),
        }
    }
}
