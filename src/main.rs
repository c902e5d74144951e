//! feedkata binary entry point
//!
//! Replays the reference feed scenario and skip trace, logging each step.

use feedkata::{FeedService, SkipExt, config};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Outcome of the replayed scenarios, printed as JSON
#[derive(Debug, Serialize)]
struct Report {
    feed_max_items: usize,
    news_feed: Vec<i64>,
    emitted: Vec<i64>,
    users: usize,
}

/// Application entry point
///
/// # Setup
/// 1. Load configuration from file and environment
/// 2. Initialize tracing/logging
/// 3. Initialize metrics
/// 4. Replay the feed scenario
/// 5. Replay the skip trace
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration
    let config = config::AppConfig::load()?;

    // 2. Initialize tracing/logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("feedkata={}", config.logging.level).into());

    if config.logging.is_json() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }

    tracing::info!(
        feed_max_items = config.feed.max_items,
        "Configuration loaded"
    );

    // 3. Initialize metrics
    feedkata::metrics::init_metrics()?;

    // 4. Feed scenario
    let mut service = FeedService::from_config(&config.feed);
    service.post_tweet(1, 5);
    service.post_tweet(1, 3);
    service.follow(1, 2);
    service.follow(2, 1);
    service.post_tweet(2, 6);
    let news_feed = service.news_feed(2);
    tracing::info!(user_id = 2, ?news_feed, "Feed scenario finished");

    // 5. Skip trace
    let mut sequence = [5, 6, 7, 5, 6, 8, 9, 5, 5, 6, 8, 6, 5, 2, 1]
        .into_iter()
        .skippable();
    let mut emitted = Vec::new();

    emitted.extend(sequence.next());
    sequence.skip_value(5);
    emitted.extend(sequence.next());
    emitted.extend(sequence.next());
    sequence.skip_value(7);
    sequence.skip_value(9);
    emitted.extend(sequence.next());
    emitted.extend(sequence.next());
    emitted.extend(sequence.next());
    sequence.skip_value(8);
    sequence.skip_value(5);
    emitted.extend(sequence.next());
    emitted.extend(sequence.next());
    sequence.skip_value(1);
    sequence.skip_value(3);
    emitted.extend(sequence);
    tracing::info!(?emitted, "Skip trace finished");

    let report = Report {
        feed_max_items: service.max_items(),
        news_feed,
        emitted,
        users: service.user_count(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    tracing::debug!(metrics = %feedkata::metrics::gather_metrics()?, "Final metrics");

    Ok(())
}
