//! The social network facade

use crate::registry::LinkRegistry;
use chrono::NaiveDate;
use linkedwith_domain::traits::{change_link, Directory, LinkIndex};
use linkedwith_domain::{Link, LinkChange, Neighborhood, Result, User, UserId};
use linkedwith_reach::{NeighborhoodEngine, ReachConfig, ReachMetrics, TrendCache, TrendSeries};

/// A network of users joined by links with a dated history
///
/// Owns the registry, the neighborhood engine and the per-seed trend cache.
///
/// # Examples
///
/// ```
/// use linkedwith_domain::{date::parse_date, User};
/// use linkedwith_network::SocialNetwork;
///
/// let mut network = SocialNetwork::new();
/// for id in ["A", "B", "C"] {
///     network.add_user(User::with_id(id).unwrap());
/// }
/// let jan = parse_date("1/1/2014").unwrap();
/// network.establish_link(&["A", "B"], jan).unwrap();
/// network.establish_link(&["B", "C"], jan).unwrap();
///
/// let hood = network.neighborhood("A", parse_date("2/1/2014").unwrap(), None).unwrap();
/// assert_eq!(hood.distance_of("C"), Some(2));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SocialNetwork {
    registry: LinkRegistry,
    engine: NeighborhoodEngine,
    trend_cache: TrendCache,
}

impl SocialNetwork {
    /// Create an empty network with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty network with custom configuration
    pub fn with_config(config: ReachConfig) -> Self {
        Self {
            registry: LinkRegistry::new(),
            engine: NeighborhoodEngine::new(config),
            trend_cache: TrendCache::new(),
        }
    }

    /// Add a user; `false` if it has no id or the id is taken
    pub fn add_user(&mut self, user: User) -> bool {
        self.registry.add_user(user)
    }

    /// Whether `id` names a member
    pub fn is_member(&self, id: &str) -> bool {
        self.registry.is_member(id)
    }

    /// Look up a member by id
    pub fn get_user(&self, id: &str) -> Option<&User> {
        self.registry.get_user(id)
    }

    /// Ids of every member, sorted
    pub fn users(&self) -> Vec<&UserId> {
        self.registry.users()
    }

    /// Establish the link between two members at `date`
    ///
    /// Creates the link on its first establish. A link torn down earlier can
    /// be established again at a later date.
    pub fn establish_link(&mut self, ids: &[&str], date: NaiveDate) -> Result<()> {
        self.change(ids, LinkChange::Establish, date)
    }

    /// Tear down the link between two members at `date`
    pub fn tear_down_link(&mut self, ids: &[&str], date: NaiveDate) -> Result<()> {
        self.change(ids, LinkChange::TearDown, date)
    }

    fn change(&mut self, ids: &[&str], change: LinkChange, date: NaiveDate) -> Result<()> {
        let pair = self.registry.resolve_pair(ids)?;
        change_link(&mut self.registry, &pair, change, date)
    }

    /// Whether the link between two members is active at `date`
    ///
    /// `false` when the users are not two distinct members or have no link.
    pub fn is_active(&self, ids: &[&str], date: NaiveDate) -> bool {
        self.link(ids)
            .and_then(|link| link.is_active(date).ok())
            .unwrap_or(false)
    }

    /// The link between two members, if one exists
    pub fn link(&self, ids: &[&str]) -> Option<&Link> {
        let pair = self.registry.resolve_pair(ids).ok()?;
        self.registry.link_for(&pair)
    }

    /// Number of links
    pub fn link_count(&self) -> usize {
        self.registry.link_count()
    }

    /// Users reachable from `id` through links active on `date`
    pub fn neighborhood(
        &mut self,
        id: &str,
        date: NaiveDate,
        max_distance: Option<i64>,
    ) -> Result<Neighborhood> {
        self.engine.neighborhood(&self.registry, id, date, max_distance)
    }

    /// Neighborhood size of `id` at every recorded event date
    pub fn neighborhood_trend(&mut self, id: &str) -> Result<&TrendSeries> {
        self.engine
            .neighborhood_trend(&self.registry, &mut self.trend_cache, id)
    }

    /// The underlying registry
    pub fn registry(&self) -> &LinkRegistry {
        &self.registry
    }

    /// Traversal and trend counters
    pub fn metrics(&self) -> &ReachMetrics {
        self.engine.metrics()
    }

    /// Cached trend series
    pub fn trend_cache(&self) -> &TrendCache {
        &self.trend_cache
    }
}
