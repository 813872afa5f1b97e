//! Metrics collection for traversal and trend operations

/// Counters collected by the neighborhood engine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReachMetrics {
    /// Neighborhood traversals completed
    pub traversals: usize,

    /// Links examined for activity
    pub links_consulted: usize,

    /// Links found active and followed
    pub links_followed: usize,

    /// Trend entries computed by a traversal
    pub trend_dates_computed: usize,

    /// Trend entries served from the cache
    pub trend_cache_hits: usize,
}

impl ReachMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed traversal
    pub fn record_traversal(&mut self, consulted: usize, followed: usize) {
        self.traversals += 1;
        self.links_consulted += consulted;
        self.links_followed += followed;
    }

    /// Record a trend entry computed by traversal
    pub fn record_trend_computed(&mut self) {
        self.trend_dates_computed += 1;
    }

    /// Record a trend entry reused from the cache
    pub fn record_trend_hit(&mut self) {
        self.trend_cache_hits += 1;
    }

    /// Reset all counters
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Generate a summary report of metrics
    pub fn summary(&self) -> String {
        [
            "Reach Metrics Summary".to_string(),
            "=====================".to_string(),
            format!("Traversals: {}", self.traversals),
            format!(
                "Links consulted: {} (followed: {})",
                self.links_consulted, self.links_followed
            ),
            format!(
                "Trend dates: {} computed, {} cached",
                self.trend_dates_computed, self.trend_cache_hits
            ),
        ]
        .join("\n")
    }
}
