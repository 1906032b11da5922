//! Per-profile fee configuration and the terms a follower agrees to.

use soroban_sdk::{contracttype, Address, Env};

use crate::storage::{FollowModuleKey, DATA_TTL_EXTEND, DATA_TTL_THRESHOLD};

/// Fee configuration for a profile.
///
/// Written by the hub when the module is attached to a profile; every field
/// is fixed until the hub initializes the profile again.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProfileData {
    /// Account receiving every subscription fee.
    pub recipient: Address,

    /// Token contract the fee is paid in. Whitelisted at configuration time.
    pub currency: Address,

    /// Fee in token units. Never below `BPS_MAX`.
    pub amount: i128,

    /// Seconds a paid subscription stays valid.
    pub subscription_duration: u64,
}

/// Price a follower commits to when following.
///
/// Must equal the stored configuration exactly, so a price change between
/// signing and execution cannot charge the follower a stale amount.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FollowTerms {
    pub currency: Address,
    pub amount: i128,
}

impl ProfileData {
    /// Check whether the follower's declared terms match this configuration.
    pub fn accepts(&self, terms: &FollowTerms) -> bool {
        self.currency == terms.currency && self.amount == terms.amount
    }
}

pub fn load(env: &Env, profile_id: u64) -> Option<ProfileData> {
    env.storage()
        .persistent()
        .get(&FollowModuleKey::Profile(profile_id))
}

pub fn store(env: &Env, profile_id: u64, data: &ProfileData) {
    env.storage()
        .persistent()
        .set(&FollowModuleKey::Profile(profile_id), data);
    extend_ttl(env, profile_id);
}

/// Keep a profile's configuration live. Called on every write and on
/// every follow charged against it.
pub fn extend_ttl(env: &Env, profile_id: u64) {
    env.storage().persistent().extend_ttl(
        &FollowModuleKey::Profile(profile_id),
        DATA_TTL_THRESHOLD,
        DATA_TTL_EXTEND,
    );
}
