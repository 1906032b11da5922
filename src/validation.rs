//! Initialization parameter checks.
//!
//! A profile configuration is accepted when:
//! - the recipient is not the module itself (fees sent there could never leave)
//! - the currency is not the module itself
//! - the amount is at least `BPS_MAX`
//! - the subscription duration is non-zero
//!
//! Whitelist membership is checked separately against the module globals
//! registry, since it needs a cross-contract call.

use soroban_sdk::Address;

use crate::profile::ProfileData;

/// Basis-point denominator used by hub fee splitting. Also the smallest
/// fee a profile may charge.
pub const BPS_MAX: i128 = 10_000;

/// Validate the locally checkable parts of a profile configuration.
///
/// `module` is the address of this contract.
pub fn validate_profile_data(data: &ProfileData, module: &Address) -> bool {
    if data.recipient == *module || data.currency == *module {
        return false;
    }

    if data.amount < BPS_MAX {
        return false;
    }

    data.subscription_duration != 0
}
