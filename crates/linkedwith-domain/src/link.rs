//! Link module - the temporal activity history between two users
//!
//! A link records an append-only list of event dates. Entries alternate by
//! position: even indices are establish events, odd indices are tear-downs.
//! The alternation and the non-decreasing order of dates are maintained by
//! the acceptance policy in [`Link::establish`] and [`Link::tear_down`].

use crate::error::{Result, SocialError};
use crate::pair::UserPair;
use crate::user::UserId;
use chrono::NaiveDate;
use std::fmt;

/// Requested state change for a link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkChange {
    /// Make the link active from the date on
    Establish,

    /// Make the link inactive from the date on
    TearDown,
}

impl LinkChange {
    /// Whether this is an establish request
    pub fn is_establish(&self) -> bool {
        matches!(self, LinkChange::Establish)
    }
}

/// Temporal relationship between exactly two users
///
/// Created as a placeholder without users; every date operation on a
/// placeholder fails with [`SocialError::Uninitialized`]. Links are never
/// deleted, a tear-down is just another event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Link {
    users: Option<UserPair>,
    events: Vec<NaiveDate>,
}

impl Link {
    /// Create a placeholder link with no users and no history
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign the two users of this link
    ///
    /// # Errors
    /// - [`SocialError::AlreadyValid`] if users were already assigned
    /// - [`SocialError::InvalidUsers`] if the group is not exactly two
    ///   distinct users
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedwith_domain::{Link, SocialError, UserId};
    ///
    /// let users = [UserId::new("a").unwrap(), UserId::new("b").unwrap()];
    /// let mut link = Link::new();
    /// link.set_users(users.clone()).unwrap();
    /// assert!(link.is_valid());
    /// assert_eq!(link.set_users(users), Err(SocialError::AlreadyValid));
    /// ```
    pub fn set_users<I>(&mut self, users: I) -> Result<()>
    where
        I: IntoIterator<Item = UserId>,
    {
        if self.is_valid() {
            return Err(SocialError::AlreadyValid);
        }
        self.users = Some(UserPair::from_ids(users)?);
        Ok(())
    }

    /// Whether users have been assigned
    pub fn is_valid(&self) -> bool {
        self.users.is_some()
    }

    /// The two users of this link
    pub fn users(&self) -> Result<&UserPair> {
        self.users.as_ref().ok_or(SocialError::Uninitialized)
    }

    /// Recorded event dates, alternating establish / tear-down
    pub fn events(&self) -> &[NaiveDate] {
        &self.events
    }

    /// Establish the link at `date`
    ///
    /// # Errors
    /// - [`SocialError::Uninitialized`] on a placeholder link
    /// - [`SocialError::InvalidDate`] if `date` precedes the recorded history
    /// - [`SocialError::AlreadyActive`] if the link is active at `date`
    pub fn establish(&mut self, date: NaiveDate) -> Result<()> {
        self.change(LinkChange::Establish, date)
    }

    /// Tear down the link at `date`
    ///
    /// # Errors
    /// - [`SocialError::Uninitialized`] on a placeholder link
    /// - [`SocialError::InvalidDate`] if `date` precedes the recorded history
    /// - [`SocialError::AlreadyInactive`] if the link is inactive at `date`
    pub fn tear_down(&mut self, date: NaiveDate) -> Result<()> {
        self.change(LinkChange::TearDown, date)
    }

    /// Apply a state change at `date`
    ///
    /// Shared decision procedure for establish and tear-down. Nothing is
    /// recorded unless the change is accepted.
    pub fn change(&mut self, change: LinkChange, date: NaiveDate) -> Result<()> {
        self.ensure_valid()?;

        if self.events.len() > 1 && self.precedes_last(date) {
            tracing::trace!(link = %self, %date, "rejected: date precedes history");
            return Err(SocialError::InvalidDate(format!(
                "{} precedes the last recorded event",
                date
            )));
        }

        let active = self.is_active(date)?;
        match (change, active) {
            (LinkChange::Establish, true) => {
                tracing::trace!(link = %self, %date, "rejected: already active");
                return Err(SocialError::AlreadyActive);
            }
            (LinkChange::TearDown, false) => {
                tracing::trace!(link = %self, %date, "rejected: already inactive");
                return Err(SocialError::AlreadyInactive);
            }
            _ => {}
        }

        if !self.accepts(change, date) {
            tracing::trace!(link = %self, %date, ?change, "rejected: out of sequence");
            return Err(SocialError::InvalidDate(format!(
                "{} cannot follow the recorded history",
                date
            )));
        }

        self.events.push(date);
        Ok(())
    }

    /// Whether the link is active at `date`
    ///
    /// A date is active when it equals an establish entry, when the nearest
    /// later entry is a tear-down, or when it falls after the last entry and
    /// that entry is an establish. Entry kind is decided by position only.
    pub fn is_active(&self, date: NaiveDate) -> Result<bool> {
        self.ensure_valid()?;

        for (index, &event) in self.events.iter().enumerate() {
            let establish = is_establish_index(index);
            if event == date && establish {
                return Ok(true);
            }
            if date < event {
                // nearest subsequent boundary decides
                return Ok(!establish);
            }
        }

        Ok(match self.events.last() {
            Some(&last) => date > last && is_establish_index(self.events.len() - 1),
            None => false,
        })
    }

    /// First recorded event, or `None` for an empty history
    pub fn first_event(&self) -> Result<Option<NaiveDate>> {
        self.ensure_valid()?;
        Ok(self.events.first().copied())
    }

    /// Earliest recorded event strictly after `date`
    pub fn next_event(&self, date: NaiveDate) -> Result<Option<NaiveDate>> {
        self.ensure_valid()?;
        Ok(self.events.iter().copied().find(|&event| event > date))
    }

    fn ensure_valid(&self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(SocialError::Uninitialized)
        }
    }

    fn precedes_last(&self, date: NaiveDate) -> bool {
        self.events.last().is_some_and(|&last| date < last)
    }

    /// Parity check for appending `change` at `date`
    fn accepts(&self, change: LinkChange, date: NaiveDate) -> bool {
        let len = self.events.len();
        match change {
            LinkChange::Establish => len == 0 || (len % 2 == 0 && !self.precedes_last(date)),
            LinkChange::TearDown => len % 2 == 1 && !self.precedes_last(date),
        }
    }
}

fn is_establish_index(index: usize) -> bool {
    index % 2 == 0
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.users {
            Some(users) => write!(f, "Link between: {}", users),
            None => f.write_str("Invalid Link: Uninitialized users"),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn base() -> NaiveDate {
        NaiveDate::from_ymd_opt(2014, 1, 1).unwrap()
    }

    fn link() -> Link {
        let mut link = Link::new();
        link.set_users(vec![UserId::new("a").unwrap(), UserId::new("b").unwrap()])
            .unwrap();
        link
    }

    /// With strictly increasing dates the latest event at or before the date decides
    fn reference_active(events: &[NaiveDate], date: NaiveDate) -> bool {
        match events.iter().rposition(|&e| e <= date) {
            Some(i) => i % 2 == 0,
            None => false,
        }
    }

    proptest! {
        /// Property: accepted changes keep dates non-decreasing and alternating
        #[test]
        fn test_alternation_invariant(ops in prop::collection::vec((any::<bool>(), 0i64..60), 0..40)) {
            let mut link = link();
            for (establish, offset) in ops {
                let date = base() + chrono::Duration::days(offset);
                let change = if establish { LinkChange::Establish } else { LinkChange::TearDown };
                let before = link.events().len();
                let was_active = link.is_active(date).unwrap();
                match link.change(change, date) {
                    Ok(()) => {
                        prop_assert_eq!(link.events().len(), before + 1);
                        // append position matches the kind of change
                        prop_assert_eq!(before % 2 == 0, establish);
                        prop_assert_eq!(was_active, !establish);
                    }
                    Err(_) => prop_assert_eq!(link.events().len(), before),
                }
            }
            let events = link.events();
            prop_assert!(events.windows(2).all(|w| w[0] <= w[1]));
        }

        /// Property: a rejected establish never mutates the history
        #[test]
        fn test_idempotent_rejection(offset in 0i64..365) {
            let mut link = link();
            let date = base() + chrono::Duration::days(offset);
            link.establish(date).unwrap();
            let snapshot = link.events().to_vec();
            prop_assert_eq!(link.establish(date), Err(SocialError::AlreadyActive));
            prop_assert_eq!(link.events(), snapshot.as_slice());
        }

        /// Property: activity matches the positional reference definition
        #[test]
        fn test_activity_matches_reference(
            gaps in prop::collection::vec(1i64..10, 0..8),
            probe in 0i64..100,
        ) {
            let mut link = link();
            let mut date = base();
            for (i, gap) in gaps.iter().enumerate() {
                date += chrono::Duration::days(*gap);
                let change = if i % 2 == 0 { LinkChange::Establish } else { LinkChange::TearDown };
                link.change(change, date).unwrap();
            }
            let probe = base() + chrono::Duration::days(probe);
            prop_assert_eq!(link.is_active(probe).unwrap(), reference_active(link.events(), probe));
        }
    }
}
