//! # Soroban Subscription Follow
//!
//! Time-limited fee follow module for Soroban social-graph hubs.
//!
//! A profile owner attaches this module to their profile through the hub and
//! sets a price, a currency, a recipient and a subscription duration. Every
//! follow pays that price once and buys a subscription that runs for the
//! configured duration from the moment of payment. Once it lapses the
//! follower fails validation until it pays again.
//!
//! - Only the hub can configure profiles and process follows
//! - Followers must declare the exact price they agree to pay
//! - Fees move through the token's allowance (`transfer_from`)
//! - Subscriptions follow the follower account, not the follow NFT
//!
//! ## Usage
//!
//! ```rust,ignore
//! // Hub side: attach the module to a profile
//! let data = ProfileData { recipient, currency, amount, subscription_duration }.to_xdr(&env);
//! module.initialize_follow_module(&profile_id, &data);
//!
//! // Hub side: a follower agreed to the price
//! let terms = FollowTerms { currency, amount }.to_xdr(&env);
//! module.process_follow(&follower, &profile_id, &terms);
//!
//! // Anyone: is this follower still subscribed?
//! module.validate_follow(&profile_id, &follower, &0);
//! ```

#![no_std]

mod access;
mod events;
mod fee;
mod interfaces;
mod profile;
mod storage;
mod subscription;
mod validation;

pub use access::OwnershipProof;
pub use interfaces::{
    FollowHubClient, FollowHubInterface, FollowNftClient, FollowNftInterface,
    ModuleGlobalsClient, ModuleGlobalsInterface,
};
pub use profile::{FollowTerms, ProfileData};
pub use storage::{FollowModuleKey, DATA_TTL_EXTEND};
pub use subscription::{FollowerData, SubscriptionStatus};
pub use validation::{validate_profile_data, BPS_MAX};

use soroban_sdk::{
    contract, contracterror, contractimpl, log, panic_with_error, xdr::FromXdr, Address, Bytes,
    Env,
};

use crate::events::*;

/// Error codes for the follow module contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FollowModuleError {
    /// Profile configuration is malformed or breaks policy.
    InitParamsInvalid = 1,
    /// Follower's declared currency or amount differs from the configuration.
    ModuleDataMismatch = 2,
    /// Follow attempted on a profile that was never configured.
    ProfileNotConfigured = 3,
    /// Follower does not hold the profile's follow NFT.
    FollowInvalid = 4,
    /// Follower holds the follow NFT but its subscription is missing or over.
    SubscriptionExpired = 5,
    /// Contract storage is missing its deployment configuration.
    NotInitialized = 6,
}

#[contract]
pub struct SubscriptionFollowModule;

#[contractimpl]
impl SubscriptionFollowModule {
    // ========== Deployment ==========

    /// Bind the module to its hub and module globals registry.
    pub fn __constructor(env: Env, hub: Address, module_globals: Address) {
        env.storage().instance().set(&FollowModuleKey::Hub, &hub);
        env.storage()
            .instance()
            .set(&FollowModuleKey::ModuleGlobals, &module_globals);
        storage::extend_instance_ttl(&env);
    }

    /// Get the hub address.
    pub fn hub(env: Env) -> Address {
        storage::read_hub(&env)
    }

    /// Get the module globals registry address.
    pub fn module_globals(env: Env) -> Address {
        storage::read_module_globals(&env)
    }

    /// Smallest fee a profile may charge.
    pub fn bps_max(_env: Env) -> i128 {
        BPS_MAX
    }

    // ========== Hub Entry Points ==========

    /// Configure the module for a profile (hub only).
    ///
    /// `data` is the XDR encoding of a `ProfileData`. Any previous
    /// configuration of the profile is replaced.
    ///
    /// # Returns
    /// `data` unchanged, for the hub to record in its own events.
    ///
    /// # Panics
    /// - If the hub did not authorize the call
    /// - `InitParamsInvalid` if `data` does not decode, the currency is not
    ///   whitelisted, the recipient or currency is this module, the amount is
    ///   below `BPS_MAX` or the duration is zero
    pub fn initialize_follow_module(env: Env, profile_id: u64, data: Bytes) -> Bytes {
        Self::require_hub(&env);

        let config = ProfileData::from_xdr(&env, &data)
            .unwrap_or_else(|_| panic_with_error!(&env, FollowModuleError::InitParamsInvalid));

        if !validation::validate_profile_data(&config, &env.current_contract_address()) {
            log!(&env, "init params rejected", profile_id);
            panic_with_error!(&env, FollowModuleError::InitParamsInvalid);
        }

        let globals = storage::read_module_globals(&env);
        if !ModuleGlobalsClient::new(&env, &globals).is_currency_whitelisted(&config.currency) {
            log!(&env, "currency not whitelisted", profile_id, config.currency);
            panic_with_error!(&env, FollowModuleError::InitParamsInvalid);
        }

        profile::store(&env, profile_id, &config);
        storage::extend_instance_ttl(&env);

        emit_follow_module_initialized(&env, profile_id, &config);

        data
    }

    /// Charge a follower and start its subscription (hub only).
    ///
    /// `data` is the XDR encoding of the `FollowTerms` the follower agreed
    /// to. The follower must have approved this module to spend the fee.
    ///
    /// # Panics
    /// - If the hub did not authorize the call
    /// - `ModuleDataMismatch` if the terms do not decode or differ from the
    ///   profile's configuration
    /// - `ProfileNotConfigured` if the profile was never initialized
    /// - With the token's own error if the transfer fails
    pub fn process_follow(env: Env, follower: Address, profile_id: u64, data: Bytes) {
        Self::require_hub(&env);

        let terms = FollowTerms::from_xdr(&env, &data)
            .unwrap_or_else(|_| panic_with_error!(&env, FollowModuleError::ModuleDataMismatch));

        let (config, grant) = fee::charge(&env, profile_id, &follower, &terms)
            .unwrap_or_else(|e| panic_with_error!(&env, e));

        storage::extend_instance_ttl(&env);

        emit_subscription_paid(&env, profile_id, &follower, &config, &grant);
    }

    /// Called by the hub whenever a follow NFT changes hands.
    ///
    /// Subscriptions belong to the follower account, so moving the NFT
    /// neither transfers nor revokes one.
    pub fn follow_module_transfer_hook(
        _env: Env,
        _profile_id: u64,
        _from: Address,
        _to: Address,
        _follow_nft_token_id: u64,
    ) {
    }

    // ========== Queries ==========

    /// Check that `follower` holds a live follow on `profile_id`.
    ///
    /// `follow_nft_token_id` of `0` accepts any token of the profile's
    /// collection; any other value requires that exact token.
    ///
    /// # Panics
    /// - `FollowInvalid` if the profile has no follow NFT or the follower
    ///   does not hold it
    /// - `SubscriptionExpired` if the follower never paid or its
    ///   subscription ended
    pub fn validate_follow(env: Env, profile_id: u64, follower: Address, follow_nft_token_id: u64) {
        let proof = OwnershipProof::from_token_id(follow_nft_token_id);
        if let Err(e) = access::check_follow(&env, profile_id, &follower, proof) {
            panic_with_error!(&env, e);
        }
    }

    /// Get a profile's fee configuration.
    pub fn get_profile_data(env: Env, profile_id: u64) -> Option<ProfileData> {
        profile::load(&env, profile_id)
    }

    /// Get a follower's subscription record. Zeroed if it never paid.
    pub fn get_follower_data(env: Env, profile_id: u64, follower: Address) -> FollowerData {
        subscription::load(&env, profile_id, &follower)
    }

    /// Get the current state of a follower's subscription.
    ///
    /// Only the subscription is considered, not follow NFT ownership.
    pub fn subscription_status(env: Env, profile_id: u64, follower: Address) -> SubscriptionStatus {
        subscription::load(&env, profile_id, &follower).status_at(env.ledger().timestamp())
    }

    // ========== Internal Helpers ==========

    fn require_hub(env: &Env) {
        let hub = storage::read_hub(env);
        hub.require_auth();
    }
}
