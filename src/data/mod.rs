//! Data layer module
//!
//! In-memory records and the bounded collector used to merge feeds:
//! - User / tweet models
//! - Most-recent tweet heap

mod models;
mod recent;

pub use models::*;
pub use recent::RecentTweets;
