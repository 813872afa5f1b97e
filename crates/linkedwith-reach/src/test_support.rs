//! In-memory registry used by the engine tests

use chrono::NaiveDate;
use linkedwith_domain::date::parse_date;
use linkedwith_domain::traits::{change_link, Directory, LinkIndex};
use linkedwith_domain::{Link, LinkChange, User, UserId, UserPair};
use std::collections::{BTreeSet, HashMap};

pub(crate) fn d(s: &str) -> NaiveDate {
    parse_date(s).unwrap()
}

#[derive(Default)]
pub(crate) struct MockNetwork {
    users: HashMap<UserId, User>,
    links: HashMap<UserPair, Link>,
    dates: BTreeSet<NaiveDate>,
}

impl MockNetwork {
    pub(crate) fn with_users(ids: &[&str]) -> Self {
        let mut net = Self::default();
        for id in ids {
            let user = User::with_id(*id).unwrap();
            net.users.insert(UserId::new(*id).unwrap(), user);
        }
        net
    }

    fn pair(a: &str, b: &str) -> UserPair {
        UserPair::new(UserId::new(a).unwrap(), UserId::new(b).unwrap()).unwrap()
    }

    pub(crate) fn establish(&mut self, a: &str, b: &str, date: NaiveDate) {
        change_link(self, &Self::pair(a, b), LinkChange::Establish, date).unwrap();
    }

    pub(crate) fn tear_down(&mut self, a: &str, b: &str, date: NaiveDate) {
        change_link(self, &Self::pair(a, b), LinkChange::TearDown, date).unwrap();
    }
}

impl Directory for MockNetwork {
    fn is_member(&self, id: &str) -> bool {
        self.users.contains_key(id)
    }

    fn resolve(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }
}

impl LinkIndex for MockNetwork {
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
