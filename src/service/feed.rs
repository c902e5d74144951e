//! Feed service
//!
//! Owns every user, tweet and follow edge, and answers "most recent tweets
//! visible to a user" queries.

use std::collections::{HashMap, HashSet};

use crate::config::{DEFAULT_FEED_MAX_ITEMS, FeedConfig, MAX_FEED_MAX_ITEMS};
use crate::data::{RecentTweets, Timestamp, Tweet, TweetId, User, UserId};
use crate::metrics::{
    FEED_REQUESTS_TOTAL, FOLLOW_CHANGES_TOTAL, MISSING_FOLLOWEES_TOTAL, TWEETS_POSTED_TOTAL,
    USERS_CREATED_TOTAL,
};

/// In-memory micro-blogging state
///
/// Each instance has its own post counter and user table. Every operation
/// is total: unknown users read as empty and unfollowing them is a no-op.
#[derive(Debug)]
pub struct FeedService {
    /// Stamp for the next tweet
    next_timestamp: Timestamp,
    users: HashMap<UserId, User>,
    /// Feed length and per-followee candidate pool size
    max_items: usize,
}

impl FeedService {
    /// Create an empty service with the default feed size of 10
    pub fn new() -> Self {
        Self::with_max_items(DEFAULT_FEED_MAX_ITEMS)
    }

    /// Create an empty service from feed configuration
    pub fn from_config(config: &FeedConfig) -> Self {
        Self::with_max_items(config.max_items)
    }

    /// Create an empty service with an explicit feed size
    ///
    /// The size is clamped to `1..=MAX_FEED_MAX_ITEMS`.
    pub fn with_max_items(max_items: usize) -> Self {
        let clamped = max_items.clamp(1, MAX_FEED_MAX_ITEMS);
        if clamped != max_items {
            tracing::warn!(
                requested = max_items,
                max_items = clamped,
                "Feed size out of range; clamped"
            );
        }

        Self {
            next_timestamp: 0,
            users: HashMap::new(),
            max_items: clamped,
        }
    }

    /// Post a tweet
    ///
    /// An unknown user is created following themself. A known user only
    /// gets the tweet appended, even a followee stub without a self-edge.
    pub fn post_tweet(&mut self, user_id: UserId, tweet_id: TweetId) {
        let tweet = Tweet {
            id: tweet_id,
            timestamp: self.next_timestamp,
        };
        self.next_timestamp += 1;

        let user = self.users.entry(user_id).or_insert_with(|| {
            USERS_CREATED_TOTAL.with_label_values(&["poster"]).inc();
            User::self_following(user_id)
        });
        user.tweets.push(tweet);
        TWEETS_POSTED_TOTAL.inc();

        tracing::trace!(
            user_id,
            tweet_id,
            timestamp = tweet.timestamp,
            "Tweet posted"
        );
    }

    /// Get the news feed of a user
    ///
    /// Returns up to `max_items` tweet ids from the user's followees (self
    /// included when the self-edge exists), most recent first. Each followee
    /// contributes at most `max_items` candidates, so the cost depends on the
    /// number of followees rather than on how much they have posted.
    pub fn news_feed(&self, user_id: UserId) -> Vec<TweetId> {
        let Some(user) = self.users.get(&user_id) else {
            FEED_REQUESTS_TOTAL.with_label_values(&["unknown_user"]).inc();
            return Vec::new();
        };

        let mut recent = RecentTweets::new(self.max_items);

        for followee_id in &user.followees {
            // Unreachable through the public API; `follow` always creates the followee.
            let Some(followee) = self.users.get(followee_id) else {
                MISSING_FOLLOWEES_TOTAL.inc();
                tracing::warn!(
                    user_id,
                    followee_id = *followee_id,
                    "Followee has no user record; skipping"
                );
                continue;
            };

            recent.extend(followee.recent_tweets(self.max_items).copied());
        }

        FEED_REQUESTS_TOTAL.with_label_values(&["ok"]).inc();
        tracing::debug!(
            user_id,
            followees = user.followees.len(),
            entries = recent.len(),
            "News feed computed"
        );

        recent.into_newest_first()
    }

    /// Follow a user
    ///
    /// The follower gains both the followee and itself. An unknown followee
    /// is created as a stub that does not follow itself.
    pub fn follow(&mut self, follower_id: UserId, followee_id: UserId) {
        let follower = self.users.entry(follower_id).or_insert_with(|| {
            USERS_CREATED_TOTAL.with_label_values(&["follower"]).inc();
            User::stub(follower_id)
        });
        follower.followees.insert(follower_id);
        follower.followees.insert(followee_id);

        self.users.entry(followee_id).or_insert_with(|| {
            USERS_CREATED_TOTAL.with_label_values(&["followee_stub"]).inc();
            User::stub(followee_id)
        });

        FOLLOW_CHANGES_TOTAL.with_label_values(&["follow"]).inc();
        tracing::debug!(follower_id, followee_id, "Follow recorded");
    }

    /// Unfollow a user
    ///
    /// Removes only the edge. Removing the self-edge is allowed and hides the
    /// user's own tweets from their feed.
    pub fn unfollow(&mut self, follower_id: UserId, followee_id: UserId) {
        let removed = self
            .users
            .get_mut(&follower_id)
            .is_some_and(|follower| follower.followees.remove(&followee_id));

        FOLLOW_CHANGES_TOTAL.with_label_values(&["unfollow"]).inc();
        tracing::debug!(follower_id, followee_id, removed, "Unfollow processed");
    }

    /// Number of user records, stubs included
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn contains_user(&self, user_id: UserId) -> bool {
        self.users.contains_key(&user_id)
    }

    /// Followees of a user, `None` if the user is unknown
    pub fn followees(&self, user_id: UserId) -> Option<&HashSet<UserId>> {
        self.users.get(&user_id).map(|user| &user.followees)
    }

    /// Number of tweets a user has posted (0 for unknown users)
    pub fn tweet_count(&self, user_id: UserId) -> usize {
        self.users
            .get(&user_id)
            .map(|user| user.tweets.len())
            .unwrap_or(0)
    }

    /// Tweets a user has posted, oldest first (empty for unknown users)
    pub fn tweets(&self, user_id: UserId) -> &[Tweet] {
        self.users
            .get(&user_id)
            .map(|user| user.tweets.as_slice())
            .unwrap_or_default()
    }

    /// Stamp the next posted tweet will receive
    pub fn next_timestamp(&self) -> Timestamp {
        self.next_timestamp
    }

    pub fn max_items(&self) -> usize {
        self.max_items
    }

    #[cfg(test)]
    pub(crate) fn insert_raw_followee(&mut self, user_id: UserId, followee_id: UserId) {
        if let Some(user) = self.users.get_mut(&user_id) {
            user.followees.insert(followee_id);
        }
    }
}

impl Default for FeedService {
    fn default() -> Self {
        Self::new()
    }
}
