//! LinkedWith Domain Layer
//!
//! Core model of a social network whose links carry a temporal activity
//! history. Defines the participants, the link state machine, the status
//! codes reported for every operation, and the trait interfaces the registry
//! implements.
//!
//! ## Key Concepts
//!
//! - **User**: a participant with an immutable id, set exactly once
//! - **Link**: the establish / tear-down history between two users
//! - **Active at D**: decided from the history recorded up to D
//! - **Friend**: a user reachable from a seed, with its hop distance
//! - **Status**: the outcome code of an operation
//!
//! ## Example
//!
//! ```
//! use linkedwith_domain::{date::parse_date, Link, UserId};
//!
//! let mut link = Link::new();
//! link.set_users([UserId::new("a").unwrap(), UserId::new("b").unwrap()]).unwrap();
//! link.establish(parse_date("1/1/2014").unwrap()).unwrap();
//! link.tear_down(parse_date("2/1/2014").unwrap()).unwrap();
//!
//! assert!(link.is_active(parse_date("1/6/2014").unwrap()).unwrap());
//! assert!(!link.is_active(parse_date("2/27/2014").unwrap()).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod date;
pub mod error;
pub mod friend;
pub mod link;
pub mod pair;
pub mod status;
pub mod traits;
pub mod user;

// Re-exports for convenience
pub use error::{Result, SocialError};
pub use friend::{Friend, Neighborhood};
pub use link::{Link, LinkChange};
pub use pair::UserPair;
pub use status::Status;
pub use traits::{change_link, Directory, LinkIndex};
pub use user::{User, UserId};
