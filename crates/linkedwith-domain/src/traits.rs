//! Trait definitions for the registry that owns users and links
//!
//! These traits define the boundary between the link/traversal logic and the
//! registry. Implementations live in other crates (linkedwith-network).

use crate::error::{Result, SocialError};
use crate::link::{Link, LinkChange};
use crate::pair::UserPair;
use crate::user::User;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Identity lookups
pub trait Directory {
    /// Whether a user with this id belongs to the network
    fn is_member(&self, id: &str) -> bool;

    /// Look up a user by id
    fn resolve(&self, id: &str) -> Option<&User>;
}

/// Association from an unordered user pair to its link
///
/// Holds at most one link per pair, plus the set of all dates at which any
/// link changed state.
pub trait LinkIndex {
    /// Get the link for a pair
    fn link_for(&self, pair: &UserPair) -> Option<&Link>;

    /// Get the link for a pair for mutation
    fn link_for_mut(&mut self, pair: &UserPair) -> Option<&mut Link>;

    /// Insert a fresh placeholder link for a pair and return it
    ///
    /// Replaces nothing: an existing link for the pair is returned as is.
    fn create_link(&mut self, pair: UserPair) -> &mut Link;

    /// Snapshot of every pair that has a link
    fn pairs(&self) -> Vec<UserPair>;

    /// Number of links
    fn link_count(&self) -> usize;

    /// Every date at which a link changed state
    fn all_event_dates(&self) -> &BTreeSet<NaiveDate>;

    /// Record a date at which a link changed state
    fn record_event_date(&mut self, date: NaiveDate);

    /// Whether a link exists for the pair
    fn contains_pair(&self, pair: &UserPair) -> bool {
        self.link_for(pair).is_some()
    }
}

/// Apply a state change to the link between a pair of users
///
/// The first establish for a pair creates its link. A tear-down for a pair
/// without a link fails with [`SocialError::InvalidUsers`]. The date is
/// recorded in the index only when the change is accepted.
pub fn change_link<I>(index: &mut I, pair: &UserPair, change: LinkChange, date: NaiveDate) -> Result<()>
where
    I: LinkIndex + ?Sized,
{
    if !index.contains_pair(pair) {
        if !change.is_establish() {
            return Err(SocialError::InvalidUsers(format!("no link between {}", pair)));
        }
        index.create_link(pair.clone()).set_users(pair.iter().cloned())?;
    }

    let link = index
        .link_for_mut(pair)
        .ok_or_else(|| SocialError::InvalidUsers(format!("no link between {}", pair)))?;
    link.change(change, date)?;
    tracing::debug!(%pair, %date, ?change, "link changed");

    index.record_event_date(date);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::UserId;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MockIndex {
        links: HashMap<UserPair, Link>,
        dates: BTreeSet<NaiveDate>,
    }

    impl LinkIndex for MockIndex {
        fn link_for(&self, pair: &UserPair) -> Option<&Link> {
            self.links.get(pair)
        }

        fn link_for_mut(&mut self, pair: &UserPair) -> Option<&mut Link> {
            self.links.get_mut(pair)
        }

        fn create_link(&mut self, pair: UserPair) -> &mut Link {
            self.links.entry(pair).or_default()
        }

        fn pairs(&self) -> Vec<UserPair> {
            self.links.keys().cloned().collect()
        }

        fn link_count(&self) -> usize {
            self.links.len()
        }

        fn all_event_dates(&self) -> &BTreeSet<NaiveDate> {
            &self.dates
        }

        fn record_event_date(&mut self, date: NaiveDate) {
            self.dates.insert(date);
        }
    }

    fn pair() -> UserPair {
        UserPair::new(UserId::new("a").unwrap(), UserId::new("b").unwrap()).unwrap()
    }

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2014, 1, day).unwrap()
    }

    #[test]
    fn test_first_establish_creates_link() {
        let mut index = MockIndex::default();
        change_link(&mut index, &pair(), LinkChange::Establish, d(1)).unwrap();

        let link = index.link_for(&pair()).unwrap();
        assert!(link.is_valid());
        assert_eq!(link.events(), &[d(1)]);
        assert!(index.all_event_dates().contains(&d(1)));
    }

    #[test]
    fn test_tear_down_without_link() {
        let mut index = MockIndex::default();
        let result = change_link(&mut index, &pair(), LinkChange::TearDown, d(1));
        assert!(matches!(result, Err(SocialError::InvalidUsers(_))));
        assert_eq!(index.link_count(), 0);
        assert!(index.all_event_dates().is_empty());
    }

    #[test]
    fn test_rejected_change_records_no_date() {
        let mut index = MockIndex::default();
        change_link(&mut index, &pair(), LinkChange::Establish, d(1)).unwrap();
        let result = change_link(&mut index, &pair(), LinkChange::Establish, d(5));
        assert_eq!(result, Err(SocialError::AlreadyActive));
        assert_eq!(index.all_event_dates().len(), 1);
    }

    #[test]
    fn test_reestablish_after_tear_down() {
        let mut index = MockIndex::default();
        change_link(&mut index, &pair(), LinkChange::Establish, d(1)).unwrap();
        change_link(&mut index, &pair(), LinkChange::TearDown, d(2)).unwrap();
        change_link(&mut index, &pair(), LinkChange::Establish, d(3)).unwrap();

        assert_eq!(index.link_count(), 1);
        assert_eq!(index.link_for(&pair()).unwrap().events(), &[d(1), d(2), d(3)]);
        assert_eq!(index.all_event_dates().len(), 3);
    }
}
