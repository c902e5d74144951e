//! Prometheus metrics registry and instruments.
//!
//! Counters are process-wide and shared by every feed service instance;
//! the services themselves keep no global state.

use lazy_static::lazy_static;
use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

use crate::error::{AppError, Result};

lazy_static! {
    /// Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    // Feed Metrics
    pub static ref TWEETS_POSTED_TOTAL: IntCounter = IntCounter::new(
        "feedkata_tweets_posted_total",
        "Total number of tweets posted"
    ).expect("metric can be created");
    pub static ref USERS_CREATED_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("feedkata_users_created_total", "Total number of user records created"),
        &["kind"]
    ).expect("metric can be created");
    pub static ref FOLLOW_CHANGES_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("feedkata_follow_changes_total", "Total number of follow/unfollow calls"),
        &["action"]
    ).expect("metric can be created");
    pub static ref FEED_REQUESTS_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("feedkata_feed_requests_total", "Total number of news feed reads"),
        &["result"]
    ).expect("metric can be created");
    pub static ref MISSING_FOLLOWEES_TOTAL: IntCounter = IntCounter::new(
        "feedkata_missing_followees_total",
        "Followee ids skipped because no user record backs them"
    ).expect("metric can be created");
}

/// Initialize metrics registry.
///
/// Safe to call more than once; already registered collectors are left as is.
pub fn init_metrics() -> Result<()> {
    register(Box::new(TWEETS_POSTED_TOTAL.clone()))?;
    register(Box::new(USERS_CREATED_TOTAL.clone()))?;
    register(Box::new(FOLLOW_CHANGES_TOTAL.clone()))?;
    register(Box::new(FEED_REQUESTS_TOTAL.clone()))?;
    register(Box::new(MISSING_FOLLOWEES_TOTAL.clone()))?;

    tracing::debug!("Metrics registry initialized");
    Ok(())
}

fn register(collector: Box<dyn prometheus::core::Collector>) -> Result<()> {
    match REGISTRY.register(collector) {
        Ok(()) | Err(prometheus::Error::AlreadyReg) => Ok(()),
        Err(error) => Err(error.into()),
    }
}

/// Encode every registered metric in Prometheus text format
pub fn gather_metrics() -> Result<String> {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    encoder.encode(&REGISTRY.gather(), &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| AppError::Metrics(prometheus::Error::Msg(e.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_repeatable_and_gathers_feed_metrics() {
        init_metrics().unwrap();
        init_metrics().unwrap();
        TWEETS_POSTED_TOTAL.inc();

        let text = gather_metrics().unwrap();
        assert!(text.contains("feedkata_tweets_posted_total"));
    }
}
