//! Friend module - reachability results of a neighborhood query

use crate::user::UserId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A user reachable from a seed, with its hop distance
///
/// Equality and hashing use the user only, so a set of friends holds each
/// user once regardless of distance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Friend {
    /// The reachable user
    pub user: UserId,

    /// Minimum number of active links from the seed
    pub distance: usize,
}

impl Friend {
    /// Create a new friend record
    pub fn new(user: UserId, distance: usize) -> Self {
        Self { user, distance }
    }
}

impl PartialEq for Friend {
    fn eq(&self, other: &Self) -> bool {
        self.user == other.user
    }
}

impl Eq for Friend {}

impl Hash for Friend {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.user.hash(state);
    }
}

impl fmt::Display for Friend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Friend {} who is {} links away.", self.user, self.distance)
    }
}

/// Users reachable from a seed on one date, keyed by user
///
/// The first distance recorded for a user is kept; later inserts for the
/// same user are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighborhood {
    seed: UserId,
    date: NaiveDate,
    distances: BTreeMap<UserId, usize>,
}

impl Neighborhood {
    /// Create a neighborhood holding only the seed at distance 0
    pub fn new(seed: UserId, date: NaiveDate) -> Self {
        let mut distances = BTreeMap::new();
        distances.insert(seed.clone(), 0);
        Self { seed, date, distances }
    }

    /// Record `user` at `distance` unless it is already present
    ///
    /// Returns whether the user was newly added.
    pub fn insert_if_absent(&mut self, user: UserId, distance: usize) -> bool {
        use std::collections::btree_map::Entry;
        match self.distances.entry(user) {
            Entry::Vacant(slot) => {
                slot.insert(distance);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// The seed user
    pub fn seed(&self) -> &UserId {
        &self.seed
    }

    /// The query date
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Number of users, the seed included
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Always false, the seed is a member
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Whether the user is reachable
    pub fn contains(&self, user: &str) -> bool {
        self.distances.contains_key(user)
    }

    /// Hop distance of a reachable user
    pub fn distance_of(&self, user: &str) -> Option<usize> {
        self.distances.get(user).copied()
    }

    /// Friend records ordered by distance, then by user
    pub fn friends(&self) -> Vec<Friend> {
        let mut friends: Vec<Friend> = self
            .distances
            .iter()
            .map(|(user, &distance)| Friend::new(user.clone(), distance))
            .collect();
        friends.sort_by(|a, b| a.distance.cmp(&b.distance).then_with(|| a.user.cmp(&b.user)));
        friends
    }

    /// Friend records as a set
    pub fn to_friend_set(&self) -> HashSet<Friend> {
        self.friends().into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> UserId {
        UserId::new(s).unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2014, 2, 1).unwrap()
    }

    #[test]
    fn test_friend_equality_ignores_distance() {
        assert_eq!(Friend::new(id("a"), 1), Friend::new(id("a"), 3));
        assert_ne!(Friend::new(id("a"), 1), Friend::new(id("b"), 1));

        let set: HashSet<Friend> = [Friend::new(id("a"), 1), Friend::new(id("a"), 2)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_friend_display() {
        let friend = Friend::new(id("IanAnderson"), 2);
        assert_eq!(friend.to_string(), "Friend IanAnderson who is 2 links away.");
    }

    #[test]
    fn test_friend_serializes_id_as_string() {
        let json = serde_json::to_value(Friend::new(id("a"), 1)).unwrap();
        assert_eq!(json, serde_json::json!({ "user": "a", "distance": 1 }));
    }

    #[test]
    fn test_neighborhood_starts_with_seed() {
        let hood = Neighborhood::new(id("seed"), date());
        assert_eq!(hood.len(), 1);
        assert_eq!(hood.distance_of("seed"), Some(0));
        assert_eq!(hood.seed().as_str(), "seed");
        assert_eq!(hood.date(), date());
    }

    #[test]
    fn test_first_distance_wins() {
        let mut hood = Neighborhood::new(id("seed"), date());
        assert!(hood.insert_if_absent(id("b"), 1));
        assert!(!hood.insert_if_absent(id("b"), 2));
        assert!(!hood.insert_if_absent(id("seed"), 3));

        assert_eq!(hood.distance_of("b"), Some(1));
        assert_eq!(hood.distance_of("seed"), Some(0));
        assert_eq!(hood.len(), 2);
    }

    #[test]
    fn test_friends_ordered_by_distance() {
        let mut hood = Neighborhood::new(id("m"), date());
        hood.insert_if_absent(id("z"), 1);
        hood.insert_if_absent(id("a"), 2);
        hood.insert_if_absent(id("b"), 1);

        let order: Vec<(String, usize)> = hood
            .friends()
            .into_iter()
            .map(|f| (f.user.to_string(), f.distance))
            .collect();
        assert_eq!(
            order,
            vec![
                ("m".to_string(), 0),
                ("b".to_string(), 1),
                ("z".to_string(), 1),
                ("a".to_string(), 2),
            ]
        );
    }
}
