//! Thread-safe feed handle
//!
//! Serializes access to a single [`FeedService`] so it can be shared across
//! threads. Writers hold the write lock while the timestamp is assigned and
//! the tweet appended, keeping stamps unique and strictly increasing.

use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::feed::FeedService;
use crate::data::{Timestamp, Tweet, TweetId, UserId};

/// Cloneable, shareable feed service
#[derive(Debug, Clone, Default)]
pub struct SharedFeedService {
    inner: Arc<RwLock<FeedService>>,
}

impl SharedFeedService {
    pub fn new(service: FeedService) -> Self {
        Self {
            inner: Arc::new(RwLock::new(service)),
        }
    }

    // Feed operations cannot panic halfway through, so a poisoned lock still
    // guards consistent state.
    fn read(&self) -> RwLockReadGuard<'_, FeedService> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, FeedService> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn post_tweet(&self, user_id: UserId, tweet_id: TweetId) {
        self.write().post_tweet(user_id, tweet_id);
    }

    pub fn news_feed(&self, user_id: UserId) -> Vec<TweetId> {
        self.read().news_feed(user_id)
    }

    pub fn follow(&self, follower_id: UserId, followee_id: UserId) {
        self.write().follow(follower_id, followee_id);
    }

    pub fn unfollow(&self, follower_id: UserId, followee_id: UserId) {
        self.write().unfollow(follower_id, followee_id);
    }

    /// Snapshot of a user's followees
    pub fn followees(&self, user_id: UserId) -> Option<HashSet<UserId>> {
        self.read().followees(user_id).cloned()
    }

    /// Snapshot of a user's tweets, oldest first
    pub fn tweets(&self, user_id: UserId) -> Vec<Tweet> {
        self.read().tweets(user_id).to_vec()
    }

    pub fn user_count(&self) -> usize {
        self.read().user_count()
    }

    pub fn next_timestamp(&self) -> Timestamp {
        self.read().next_timestamp()
    }
}
