//! Data models
//!
//! Plain structs for the users and tweets held by the feed service.
//! Everything lives in memory for the lifetime of the owning service.

use std::collections::HashSet;

// =============================================================================
// ID Types
// =============================================================================

/// Opaque user identifier
pub type UserId = i64;

/// Caller-supplied tweet identifier
///
/// Not guaranteed unique across users or time; treated as payload.
pub type TweetId = i64;

/// Instance-wide post counter value
pub type Timestamp = u64;

// =============================================================================
// Tweet
// =============================================================================

/// A single post, owned by the user that made it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tweet {
    pub id: TweetId,
    /// Ordering key, never displayed
    pub timestamp: Timestamp,
}

// =============================================================================
// User
// =============================================================================

/// A user record
///
/// `tweets` is append-only and ascending by timestamp.
#[derive(Debug, Clone, Default)]
pub struct User {
    pub id: UserId,
    /// Users whose tweets appear in this user's feed
    pub followees: HashSet<UserId>,
    pub tweets: Vec<Tweet>,
}

impl User {
    /// Stub record with no followees, not even itself
    ///
    /// This is what `follow` creates for a previously unknown followee.
    pub fn stub(id: UserId) -> Self {
        Self {
            id,
            followees: HashSet::new(),
            tweets: Vec::new(),
        }
    }

    /// Record that follows itself, as created by a first post
    pub fn self_following(id: UserId) -> Self {
        let mut user = Self::stub(id);
        user.followees.insert(id);
        user
    }

    /// The most recent `limit` tweets, newest first
    pub fn recent_tweets(&self, limit: usize) -> impl Iterator<Item = &Tweet> {
        self.tweets.iter().rev().take(limit)
    }
}
