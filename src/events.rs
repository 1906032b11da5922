//! Event emission helpers for the follow module.

use soroban_sdk::{Address, Env, Symbol};

use crate::profile::ProfileData;
use crate::subscription::FollowerData;

/// Emit an event when a profile's fee configuration is (re)written.
pub fn emit_follow_module_initialized(env: &Env, profile_id: u64, data: &ProfileData) {
    let topics = (Symbol::new(env, "follow_module_initialized"), profile_id);
    env.events().publish(topics, data.clone());
}

/// Emit an event when a follower pays for a subscription.
pub fn emit_subscription_paid(
    env: &Env,
    profile_id: u64,
    follower: &Address,
    data: &ProfileData,
    grant: &FollowerData,
) {
    let topics = (Symbol::new(env, "subscription_paid"), profile_id, follower.clone());
    env.events().publish(
        topics,
        (data.currency.clone(), data.amount, grant.end_timestamp),
    );
}
