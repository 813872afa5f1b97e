//! Breadth-first neighborhood traversal over links active on a date

use crate::{ReachConfig, ReachMetrics};
use chrono::NaiveDate;
use linkedwith_domain::traits::{Directory, LinkIndex};
use linkedwith_domain::{Neighborhood, Result, SocialError, User, UserId, UserPair};
use std::collections::{HashMap, HashSet};

/// Neighborhood engine computing reachability through active links
///
/// Works against any registry implementing [`LinkIndex`] and [`Directory`].
///
/// # Examples
///
/// ```no_run
/// use linkedwith_reach::NeighborhoodEngine;
/// # use linkedwith_domain::{traits::{Directory, LinkIndex}, date::parse_date};
/// # fn demo<I: LinkIndex + Directory>(index: &I) -> linkedwith_domain::Result<()> {
/// let mut engine = NeighborhoodEngine::default_config();
/// let hood = engine.neighborhood(index, "ShaunHoward", parse_date("2/1/2014")?, None)?;
/// for friend in hood.friends() {
///     println!("{}", friend);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct NeighborhoodEngine {
    pub(crate) config: ReachConfig,
    pub(crate) metrics: ReachMetrics,
}

impl NeighborhoodEngine {
    /// Create a new engine with the given configuration
    pub fn new(config: ReachConfig) -> Self {
        Self {
            config,
            metrics: ReachMetrics::new(),
        }
    }

    /// Create an engine with default configuration
    pub fn default_config() -> Self {
        Self::new(ReachConfig::default())
    }

    /// The engine configuration
    pub fn config(&self) -> &ReachConfig {
        &self.config
    }

    /// Get a reference to the current metrics
    pub fn metrics(&self) -> &ReachMetrics {
        &self.metrics
    }

    /// Reset metrics counters
    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }

    /// Users reachable from `seed` through links active on `date`
    ///
    /// `max_distance` bounds the hop count. When omitted, the configured
    /// default applies, or else the number of links (no effective bound).
    ///
    /// # Errors
    /// - [`SocialError::InvalidUsers`] if `seed` is not a member
    /// - [`SocialError::InvalidDistance`] if `max_distance` is negative
    pub fn neighborhood<I>(
        &mut self,
        index: &I,
        seed: &str,
        date: NaiveDate,
        max_distance: Option<i64>,
    ) -> Result<Neighborhood>
    where
        I: LinkIndex + Directory + ?Sized,
    {
        let seed = resolve_seed(index, seed)?;
        let max_distance = match max_distance {
            Some(distance) => {
                usize::try_from(distance).map_err(|_| SocialError::InvalidDistance(distance))?
            }
            None => self
                .config
                .default_max_distance
                .unwrap_or_else(|| index.link_count()),
        };
        self.traverse(index, &seed, date, max_distance)
    }

    /// Layer-by-layer expansion from a resolved seed
    ///
    /// Works on a snapshot of the index keys. Each pair is consumed the first
    /// time one of its endpoints is expanded; the first distance recorded
    /// for a user is final.
    pub(crate) fn traverse<I>(
        &mut self,
        index: &I,
        seed: &UserId,
        date: NaiveDate,
        max_distance: usize,
    ) -> Result<Neighborhood>
    where
        I: LinkIndex + ?Sized,
    {
        let snapshot = index.pairs();
        let mut adjacency: HashMap<&UserId, Vec<&UserPair>> = HashMap::new();
        for pair in &snapshot {
            for member in pair.iter() {
                adjacency.entry(member).or_default().push(pair);
            }
        }

        let mut consumed: HashSet<&UserPair> = HashSet::new();
        let mut hood = Neighborhood::new(seed.clone(), date);
        let mut frontier = vec![seed.clone()];
        let mut consulted = 0;
        let mut followed = 0;
        let mut distance = 1;

        while !frontier.is_empty() && distance <= max_distance {
            if frontier.len() > self.config.frontier_warn_threshold {
                tracing::warn!(
                    %seed,
                    distance,
                    frontier = frontier.len(),
                    "neighborhood frontier exceeds threshold"
                );
            }

            let mut next = Vec::new();
            for user in &frontier {
                let Some(pairs) = adjacency.get(user) else {
                    continue;
                };
                for &pair in pairs {
                    if !consumed.insert(pair) {
                        continue;
                    }
                    let Some(link) = index.link_for(pair) else {
                        continue;
                    };
                    consulted += 1;
                    if !link.is_active(date)? {
                        continue;
                    }
                    followed += 1;
                    if let Some(other) = pair.other(user.as_str()) {
                        if hood.insert_if_absent(other.clone(), distance) {
                            next.push(other.clone());
                        }
                    }
                }
            }

            tracing::debug!(%seed, %date, distance, discovered = next.len(), "layer expanded");
            frontier = next;
            distance += 1;
        }

        self.metrics.record_traversal(consulted, followed);
        Ok(hood)
    }
}

/// Resolve a seed id to a member of the directory
pub(crate) fn resolve_seed<I>(index: &I, seed: &str) -> Result<UserId>
where
    I: Directory + ?Sized,
{
    index
        .resolve(seed)
        .and_then(User::id)
        .cloned()
        .ok_or_else(|| SocialError::InvalidUsers(format!("{} is not a member", seed)))
}
