//! LinkedWith Network
//!
//! In-memory social network: the registry of users and links, and the
//! [`SocialNetwork`] facade answering link state changes, activity checks,
//! neighborhood and trend queries.
//!
//! # Architecture
//!
//! - [`LinkRegistry`] owns users, links keyed by unordered pair, and the set
//!   of dates at which any link change was accepted
//! - [`linkedwith_reach::NeighborhoodEngine`] runs traversals against it
//! - A [`linkedwith_reach::TrendCache`] memoizes trend series per seed
//!
//! Every state change returns a [`linkedwith_domain::Result`]; its status code
//! is available through [`linkedwith_domain::Status::of`].
//!
//! # Examples
//!
//! ```
//! use linkedwith_domain::{date::parse_date, Status, User};
//! use linkedwith_network::SocialNetwork;
//!
//! let mut network = SocialNetwork::new();
//! network.add_user(User::with_id("A").unwrap());
//! network.add_user(User::with_id("B").unwrap());
//!
//! let date = parse_date("1/1/2014").unwrap();
//! let first = network.establish_link(&["A", "B"], date);
//! let again = network.establish_link(&["A", "B"], date);
//! assert_eq!(Status::of(&first), Some(Status::Success));
//! assert_eq!(Status::of(&again), Some(Status::AlreadyActive));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod network;
pub mod registry;

pub use network::SocialNetwork;
pub use registry::LinkRegistry;
