//! LinkedWith Reach
//!
//! Reachability queries over a network whose links switch on and off in time.
//!
//! # Overview
//!
//! The reach layer is responsible for:
//! - **Neighborhoods**: users reachable from a seed through links active on a date
//! - **Trends**: the size of a seed's neighborhood at every recorded event date
//! - **Metrics collection**: counting traversals and trend cache reuse
//!
//! # Traversal
//!
//! A neighborhood grows one layer per hop. Each link is examined at most once
//! per query; a user keeps the distance of the first layer that reached it,
//! which is its shortest hop count over the active links.
//!
//! | Query bound | Effective maximum distance |
//! |-------------|----------------------------|
//! | `Some(d)`, `d >= 0` | `d` |
//! | `Some(d)`, `d < 0` | rejected with invalid distance |
//! | `None` | `default_max_distance`, else the number of links |
//!
//! # Usage
//!
//! ```no_run
//! use linkedwith_reach::{NeighborhoodEngine, ReachConfig, TrendCache};
//! # use linkedwith_domain::traits::{Directory, LinkIndex};
//! # fn demo<I: LinkIndex + Directory>(index: &I) -> linkedwith_domain::Result<()> {
//! let mut engine = NeighborhoodEngine::new(ReachConfig::default());
//! let mut cache = TrendCache::new();
//!
//! for (date, size) in engine.neighborhood_trend(index, &mut cache, "ShaunHoward")? {
//!     println!("{}: {}", date, size);
//! }
//! println!("{}", engine.metrics().summary());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod metrics;
pub mod traversal;
pub mod trend;

#[cfg(test)]
mod test_support;

pub use config::{ConfigError, ReachConfig};
pub use metrics::ReachMetrics;
pub use traversal::NeighborhoodEngine;
pub use trend::{TrendCache, TrendSeries};
