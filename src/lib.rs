//! feedkata - in-memory micro-blogging feed and skippable sequences
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Service Layer                           │
//! │  - FeedService: post / follow / unfollow / news feed        │
//! │  - SharedFeedService: lock-guarded handle                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Data Layer                              │
//! │  - User / Tweet records                                     │
//! │  - RecentTweets bounded min-heap                            │
//! └─────────────────────────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Sequences                               │
//! │  - SkipSequence: iterator adapter with deferred skips       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - `service`: Feed state and operations
//! - `data`: Records and the top-N collector
//! - `sequence`: Skippable iterator adapter
//! - `config`: Configuration management
//! - `error`: Error types
//! - `metrics`: Prometheus counters

pub mod config;
pub mod data;
pub mod error;
pub mod metrics;
pub mod sequence;
pub mod service;

pub use sequence::{SkipExt, SkipSequence};
pub use service::{FeedService, SharedFeedService};
