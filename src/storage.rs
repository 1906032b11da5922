//! Storage key definitions for the follow module.

use soroban_sdk::{contracttype, panic_with_error, Address, Env};

use crate::FollowModuleError;

/// Storage keys for the follow module contract.
#[contracttype]
#[derive(Clone, Debug)]
pub enum FollowModuleKey {
    /// Hub contract allowed to drive the mutating entry points.
    Hub,

    /// Registry holding the currency whitelist.
    ModuleGlobals,

    /// Maps profile id to its `ProfileData`.
    Profile(u64),

    /// Maps (profile id, follower) to its `FollowerData`.
    Follower(u64, Address),
}

/// Time-to-live for module data in ledgers (5s ledgers).
pub const DATA_TTL_THRESHOLD: u32 = 518400; // ~30 days
pub const DATA_TTL_EXTEND: u32 = 2592000; // ~150 days

/// Nominal ledger close time, used to turn subscription durations into TTLs.
pub const SECONDS_PER_LEDGER: u64 = 5;

pub const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
pub const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days

/// Read the hub address set at deployment.
pub fn read_hub(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&FollowModuleKey::Hub)
        .unwrap_or_else(|| panic_with_error!(env, FollowModuleError::NotInitialized))
}

/// Read the module globals registry address set at deployment.
pub fn read_module_globals(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&FollowModuleKey::ModuleGlobals)
        .unwrap_or_else(|| panic_with_error!(env, FollowModuleError::NotInitialized))
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

/// TTL extension for a grant entry that must stay live for `remaining`
/// seconds. Never shorter than `DATA_TTL_EXTEND`, never past the network max.
pub fn grant_ttl_extend(env: &Env, remaining: u64) -> u32 {
    let ledgers = u32::try_from(remaining / SECONDS_PER_LEDGER).unwrap_or(u32::MAX);
    ledgers
        .max(DATA_TTL_EXTEND)
        .min(env.storage().max_ttl())
}
