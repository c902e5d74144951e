//! Common test utilities

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};

use feedkata::FeedService;
use quickcheck::{Arbitrary, Gen};

/// Values of the reference skip trace
pub const SKIP_TRACE_INPUT: [i64; 15] = [5, 6, 7, 5, 6, 8, 9, 5, 5, 6, 8, 6, 5, 2, 1];

/// Service with the posts and follows of the reference feed scenario
///
/// post(1,5), post(1,3), follow(1,2), follow(2,1), post(2,6)
pub fn scenario_service() -> FeedService {
    let mut service = FeedService::new();
    service.post_tweet(1, 5);
    service.post_tweet(1, 3);
    service.follow(1, 2);
    service.follow(2, 1);
    service.post_tweet(2, 6);
    service
}

/// Feed operation used by property tests
#[derive(Debug, Clone, Copy)]
pub enum Op {
    Post(i64, i64),
    Follow(i64, i64),
    Unfollow(i64, i64),
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        // Small id space so follows and posts actually collide.
        let user = |g: &mut Gen| i64::from(u8::arbitrary(g) % 6);
        match u8::arbitrary(g) % 4 {
            0 => Op::Follow(user(g), user(g)),
            1 => Op::Unfollow(user(g), user(g)),
            _ => Op::Post(user(g), i64::from(u16::arbitrary(g))),
        }
    }
}

/// Apply an operation to the service under test
pub fn apply(service: &mut FeedService, op: Op) {
    match op {
        Op::Post(user, tweet) => service.post_tweet(user, tweet),
        Op::Follow(follower, followee) => service.follow(follower, followee),
        Op::Unfollow(follower, followee) => service.unfollow(follower, followee),
    }
}

/// Straightforward model: keep everything, sort on read
#[derive(Debug, Default)]
pub struct NaiveFeed {
    clock: u64,
    followees: HashMap<i64, HashSet<i64>>,
    tweets: HashMap<i64, Vec<(u64, i64)>>,
}

impl NaiveFeed {
    pub fn apply(&mut self, op: Op) {
        match op {
            Op::Post(user, tweet) => {
                if !self.followees.contains_key(&user) {
                    self.followees.insert(user, HashSet::from([user]));
                }
                self.tweets.entry(user).or_default().push((self.clock, tweet));
                self.clock += 1;
            }
            Op::Follow(follower, followee) => {
                let edges = self.followees.entry(follower).or_default();
                edges.insert(follower);
                edges.insert(followee);
                self.followees.entry(followee).or_default();
            }
            Op::Unfollow(follower, followee) => {
                if let Some(edges) = self.followees.get_mut(&follower) {
                    edges.remove(&followee);
                }
            }
        }
    }

    pub fn feed(&self, user: i64, max_items: usize) -> Vec<i64> {
        let Some(edges) = self.followees.get(&user) else {
            return Vec::new();
        };

        let mut visible: Vec<(u64, i64)> = edges
            .iter()
            .filter_map(|followee| self.tweets.get(followee))
            .flatten()
            .copied()
            .collect();
        visible.sort_by(|a, b| b.0.cmp(&a.0));
        visible.into_iter().take(max_items).map(|(_, id)| id).collect()
    }
}
