//! In-memory registry of users and links
//!
//! Implements the [`Directory`] and [`LinkIndex`] seams over hash maps. The
//! registry holds at most one link per unordered pair and the set of every
//! date at which a link change was accepted.

use chrono::NaiveDate;
use linkedwith_domain::traits::{Directory, LinkIndex};
use linkedwith_domain::{Link, Result, SocialError, User, UserId, UserPair};
use std::collections::{BTreeSet, HashMap};

/// Users, links and event dates of one network
#[derive(Debug, Clone, Default)]
pub struct LinkRegistry {
    users: HashMap<UserId, User>,
    links: HashMap<UserPair, Link>,
    event_dates: BTreeSet<NaiveDate>,
}

impl LinkRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a user
    ///
    /// Returns `false` and stores nothing when the user has no id or a user
    /// with the same id is already present.
    pub fn add_user(&mut self, user: User) -> bool {
        let Some(id) = user.id().cloned() else {
            tracing::debug!("rejected user without id");
            return false;
        };
        if self.users.contains_key(&id) {
            tracing::debug!(%id, "rejected duplicate user");
            return false;
        }
        tracing::debug!(%id, "user added");
        self.users.insert(id, user);
        true
    }

    /// Ids of every member, sorted
    pub fn users(&self) -> Vec<&UserId> {
        let mut ids: Vec<&UserId> = self.users.keys().collect();
        ids.sort();
        ids
    }

    /// Look up a user by id
    pub fn get_user(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }

    /// Canonical pair for a list of member ids
    ///
    /// # Errors
    /// - [`SocialError::InvalidUsers`] if an id is unknown, or the ids do not
    ///   name exactly two distinct members
    pub fn resolve_pair(&self, ids: &[&str]) -> Result<UserPair> {
        let members = ids
            .iter()
            .map(|id| {
                self.users
                    .get_key_value(*id)
                    .map(|(key, _)| key.clone())
                    .ok_or_else(|| SocialError::InvalidUsers(format!("{} is not a member", id)))
            })
            .collect::<Result<Vec<_>>>()?;
        UserPair::from_ids(members)
    }
}

impl Directory for LinkRegistry {
    fn is_member(&self, id: &str) -> bool {
        self.users.contains_key(id)
    }

    fn resolve(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }
}

impl LinkIndex for LinkRegistry {
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
        &self.event_dates
    }

    fn record_event_date(&mut self, date: NaiveDate) {
        self.event_dates.insert(date);
    }
}
