//! Bounded "most recent" collector
//!
//! A min-heap keyed by timestamp that never holds more than `max_items`
//! tweets. Pushing past capacity evicts the oldest entry, so building it from
//! N candidates costs O(N log max_items) rather than a full sort.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use super::models::{Tweet, TweetId};

/// Upper bound on up-front heap allocation
const PREALLOCATE_LIMIT: usize = 64;

/// Heap entry ordered by timestamp only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ByTimestamp(Tweet);

impl Ord for ByTimestamp {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.timestamp.cmp(&other.0.timestamp)
    }
}

impl PartialOrd for ByTimestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Keeps the newest `max_items` tweets pushed into it
#[derive(Debug)]
pub struct RecentTweets {
    heap: BinaryHeap<Reverse<ByTimestamp>>,
    max_items: usize,
}

impl RecentTweets {
    /// Create an empty collector
    ///
    /// # Arguments
    /// * `max_items` - Capacity; a value of 0 keeps nothing
    pub fn new(max_items: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(max_items.saturating_add(1).min(PREALLOCATE_LIMIT)),
            max_items,
        }
    }

    /// Offer a candidate, evicting the oldest entry on overflow
    pub fn push(&mut self, tweet: Tweet) {
        self.heap.push(Reverse(ByTimestamp(tweet)));
        if self.heap.len() > self.max_items {
            self.heap.pop();
        }
    }

    /// Oldest retained tweet, the next to be evicted
    pub fn oldest(&self) -> Option<&Tweet> {
        self.heap.peek().map(|Reverse(ByTimestamp(tweet))| tweet)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drain into tweet ids, most recent first
    pub fn into_newest_first(mut self) -> Vec<TweetId> {
        let mut ids = Vec::with_capacity(self.heap.len());
        while let Some(Reverse(ByTimestamp(tweet))) = self.heap.pop() {
            ids.push(tweet.id);
        }
        ids.reverse();
        ids
    }
}

impl Extend<Tweet> for RecentTweets {
    fn extend<T: IntoIterator<Item = Tweet>>(&mut self, iter: T) {
        for tweet in iter {
            self.push(tweet);
        }
    }
}
