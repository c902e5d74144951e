//! Service layer
//!
//! Feed state and the operations over it.

mod feed;
mod shared;

pub use feed::FeedService;
pub use shared::SharedFeedService;
