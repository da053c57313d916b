//! Listing and concealing gists.
//!
//! - [`lister`] - Paginated listing with description/filename filters
//! - [`concealer`] - Public-to-secret replacement
//! - [`throttle`] - Delay between remote calls

pub mod concealer;
pub mod lister;
pub mod throttle;

pub use concealer::{placeholder_gist, ConcealEvent, Concealer, PLACEHOLDER_CONTENT};
pub use lister::GistLister;
pub use throttle::Throttle;
