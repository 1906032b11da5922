//! Read-side follow validation.
//!
//! A follower is valid when it holds the profile's follow NFT and its paid
//! subscription has not run out. Ownership is checked first: a follower
//! without the NFT is `FollowInvalid` whatever its grant says.

use soroban_sdk::{Address, Env};

use crate::interfaces::{FollowHubClient, FollowNftClient};
use crate::storage;
use crate::subscription;
use crate::FollowModuleError;

/// How a follower proves it holds the follow NFT.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OwnershipProof {
    /// Any token of the profile's collection.
    AnyToken,
    /// This exact token.
    Token(u64),
}

impl OwnershipProof {
    /// Token id `0` means the caller did not name a token.
    pub fn from_token_id(token_id: u64) -> Self {
        match token_id {
            0 => OwnershipProof::AnyToken,
            id => OwnershipProof::Token(id),
        }
    }
}

/// Check that `follower` currently holds a valid follow on `profile_id`.
pub fn check_follow(
    env: &Env,
    profile_id: u64,
    follower: &Address,
    proof: OwnershipProof,
) -> Result<(), FollowModuleError> {
    let hub = storage::read_hub(env);
    let follow_nft = FollowHubClient::new(env, &hub)
        .get_follow_nft(&profile_id)
        .ok_or(FollowModuleError::FollowInvalid)?;

    if !holds_follow_nft(env, &follow_nft, follower, proof) {
        return Err(FollowModuleError::FollowInvalid);
    }

    let grant = subscription::load(env, profile_id, follower);
    if !grant.is_active_at(env.ledger().timestamp()) {
        return Err(FollowModuleError::SubscriptionExpired);
    }

    Ok(())
}

fn holds_follow_nft(
    env: &Env,
    follow_nft: &Address,
    follower: &Address,
    proof: OwnershipProof,
) -> bool {
    let nft = FollowNftClient::new(env, follow_nft);

    match proof {
        OwnershipProof::AnyToken => nft.balance(follower) > 0,
        // An unknown token fails the lookup; that is simply not ownership.
        OwnershipProof::Token(token_id) => {
            matches!(nft.try_owner_of(&token_id), Ok(Ok(owner)) if owner == *follower)
        }
    }
}
