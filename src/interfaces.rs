//! Client interfaces for the contracts this module depends on.
//!
//! The module never implements these; it only calls deployed contracts
//! through the generated clients.

use soroban_sdk::{contractclient, Address, Env};

/// The social-graph hub that owns profiles and their follow NFTs.
#[contractclient(name = "FollowHubClient")]
pub trait FollowHubInterface {
    /// Follow NFT collection of a profile, if one has been deployed.
    fn get_follow_nft(env: Env, profile_id: u64) -> Option<Address>;
}

/// A profile's follow NFT collection.
#[contractclient(name = "FollowNftClient")]
pub trait FollowNftInterface {
    fn balance(env: Env, owner: Address) -> u32;

    /// Fails if the token does not exist.
    fn owner_of(env: Env, token_id: u64) -> Address;
}

/// Platform-wide registry shared by all hub modules.
#[contractclient(name = "ModuleGlobalsClient")]
pub trait ModuleGlobalsInterface {
    fn is_currency_whitelisted(env: Env, currency: Address) -> bool;
}
