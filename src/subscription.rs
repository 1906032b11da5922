//! Follower grants and the expiry state they imply.
//!
//! Only the end timestamp is persisted. Whether a grant is active or expired
//! is derived from the ledger clock on every read.

use soroban_sdk::{contracttype, Address, Env};

use crate::storage::{self, FollowModuleKey, DATA_TTL_THRESHOLD};

/// Subscription record for a (profile, follower) pair.
#[contracttype]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FollowerData {
    /// Last second (inclusive) the subscription is valid. Zero if the
    /// follower never paid.
    pub end_timestamp: u64,
}

/// Derived state of a (profile, follower) pair.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubscriptionStatus {
    NoGrant,
    Active,
    Expired,
}

impl FollowerData {
    /// Grant starting at `now`. Previous time left is not carried over.
    ///
    /// A duration reaching past `u64::MAX` clamps to it.
    pub fn starting_at(now: u64, duration: u64) -> Self {
        Self {
            end_timestamp: now.saturating_add(duration),
        }
    }

    pub fn is_granted(&self) -> bool {
        self.end_timestamp != 0
    }

    /// A missing grant is never active, even at timestamp zero.
    pub fn is_active_at(&self, now: u64) -> bool {
        self.is_granted() && now <= self.end_timestamp
    }

    pub fn status_at(&self, now: u64) -> SubscriptionStatus {
        if !self.is_granted() {
            SubscriptionStatus::NoGrant
        } else if self.is_active_at(now) {
            SubscriptionStatus::Active
        } else {
            SubscriptionStatus::Expired
        }
    }
}

pub fn load(env: &Env, profile_id: u64, follower: &Address) -> FollowerData {
    env.storage()
        .persistent()
        .get(&FollowModuleKey::Follower(profile_id, follower.clone()))
        .unwrap_or_default()
}

/// Store a grant, keeping the entry live at least until the grant ends.
pub fn store(env: &Env, profile_id: u64, follower: &Address, data: &FollowerData) {
    let key = FollowModuleKey::Follower(profile_id, follower.clone());
    let remaining = data.end_timestamp.saturating_sub(env.ledger().timestamp());

    env.storage().persistent().set(&key, data);
    env.storage().persistent().extend_ttl(
        &key,
        DATA_TTL_THRESHOLD,
        storage::grant_ttl_extend(env, remaining),
    );
}
