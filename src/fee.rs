//! Fee collection for follows.

use soroban_sdk::{log, token, Address, Env};

use crate::profile::{self, FollowTerms, ProfileData};
use crate::subscription::{self, FollowerData};
use crate::FollowModuleError;

/// Charge `follower` the profile's fee and grant a fresh subscription.
///
/// The declared terms must equal the stored configuration. On success the
/// follower's grant runs from now for the configured duration, replacing any
/// earlier grant. Returns the configuration that was charged against.
pub fn charge(
    env: &Env,
    profile_id: u64,
    follower: &Address,
    terms: &FollowTerms,
) -> Result<(ProfileData, FollowerData), FollowModuleError> {
    let profile = profile::load(env, profile_id).ok_or_else(|| {
        log!(env, "follow on unconfigured profile", profile_id);
        FollowModuleError::ProfileNotConfigured
    })?;

    if !profile.accepts(terms) {
        log!(env, "follow terms mismatch", profile_id, terms.amount);
        return Err(FollowModuleError::ModuleDataMismatch);
    }

    profile::extend_ttl(env, profile_id);

    let grant = FollowerData::starting_at(env.ledger().timestamp(), profile.subscription_duration);

    // The grant must be stored before the token call: anything the token
    // contract triggers has to observe the new expiry.
    subscription::store(env, profile_id, follower, &grant);

    token::TokenClient::new(env, &profile.currency).transfer_from(
        &env.current_contract_address(),
        follower,
        &profile.recipient,
        &profile.amount,
    );

    Ok((profile, grant))
}
