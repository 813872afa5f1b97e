//! Neighborhood size over time, memoized per seed
//!
//! For a seed, the trend maps every date at which some link in the network
//! changed state to the size of the seed's unbounded neighborhood on that
//! date. Entries are computed once and never replaced: a later call only
//! fills in dates the cache does not yet hold.

use crate::traversal::{resolve_seed, NeighborhoodEngine};
use chrono::NaiveDate;
use linkedwith_domain::traits::{Directory, LinkIndex};
use linkedwith_domain::{Result, UserId};
use std::collections::{BTreeMap, HashMap};

/// Neighborhood size keyed by event date, ascending
pub type TrendSeries = BTreeMap<NaiveDate, usize>;

/// Trend series per seed
#[derive(Debug, Clone, Default)]
pub struct TrendCache {
    series: HashMap<UserId, TrendSeries>,
}

impl TrendCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached series for a seed
    pub fn get(&self, seed: &str) -> Option<&TrendSeries> {
        self.series.get(seed)
    }

    /// Number of seeds with a cached series
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Whether no series has been cached yet
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Drop every cached series
    pub fn clear(&mut self) {
        self.series.clear();
    }
}

impl NeighborhoodEngine {
    /// Neighborhood size of `seed` at every recorded event date
    ///
    /// Dates already present in the seed's cached series are reused as is.
    /// The returned series covers every date in
    /// [`LinkIndex::all_event_dates`] at the time of the call.
    ///
    /// # Errors
    /// - [`linkedwith_domain::SocialError::InvalidUsers`] if `seed` is not a member
    pub fn neighborhood_trend<'c, I>(
        &mut self,
        index: &I,
        cache: &'c mut TrendCache,
        seed: &str,
    ) -> Result<&'c TrendSeries>
    where
        I: LinkIndex + Directory + ?Sized,
    {
        let seed_id = resolve_seed(index, seed)?;
        let max_distance = index.link_count();
        let series = cache.series.entry(seed_id.clone()).or_default();

        let mut computed = 0;
        let mut reused = 0;
        for &date in index.all_event_dates() {
            if series.contains_key(&date) {
                reused += 1;
                self.metrics.record_trend_hit();
                continue;
            }
            let size = self.traverse(index, &seed_id, date, max_distance)?.len();
            series.insert(date, size);
            computed += 1;
            self.metrics.record_trend_computed();
        }

        tracing::info!(
            seed = %seed_id,
            dates = series.len(),
            computed,
            reused,
            "neighborhood trend ready"
        );
        Ok(&*series)
    }
}
