//! Code validation.

use super::types::{BonusState, RedeemCode, RedeemResult, REDEEM_CODES};

/// Find the code entry for `input` after trimming surrounding whitespace.
/// Matching is exact and case-sensitive.
pub fn lookup_code(input: &str) -> Option<&'static RedeemCode> {
    let code = input.trim();
    REDEEM_CODES.iter().find(|entry| entry.code == code)
}

/// Redeem `input` against the bonus state. Codes are reusable; each
/// redemption stacks on top of the previous ones.
pub fn redeem_key(input: &str, bonus: &mut BonusState) -> RedeemResult {
    match lookup_code(input) {
        Some(entry) => {
            bonus.apply(&entry.grant);
            log::info!(
                "Redeemed code {:?}: +{} lives, +{} of each item",
                entry.code,
                entry.grant.lives,
                entry.grant.items_each
            );
            RedeemResult::accepted(entry.message)
        }
        None => {
            log::debug!("Rejected redemption code");
            RedeemResult::rejected()
        }
    }
}
