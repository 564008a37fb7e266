//! Withdrawal intents and the notifications emitted for them.

use alloy_primitives::{Address, Bytes, B256, U256};

use crate::hash::withdrawal_digest;

/// A registered withdrawal, keyed in the record store by the owner's signature.
///
/// Lifecycle: `Registered(redeemed = false)` -> `Redeemed(redeemed = true)`. Redeemed is terminal;
/// once the expiry window has passed an unredeemed intent can never be redeemed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WithdrawalIntent {
    pub beneficiary: Address,
    pub amount: U256,
    pub nonce: U256,
    /// Timestamp (seconds) of registration.
    pub registered_at: u64,
    pub redeemed: bool,
}

impl WithdrawalIntent {
    pub fn new(beneficiary: Address, amount: U256, nonce: U256, registered_at: u64) -> Self {
        Self {
            beneficiary,
            amount,
            nonce,
            registered_at,
            redeemed: false,
        }
    }

    pub fn digest(&self) -> B256 {
        withdrawal_digest(self.beneficiary, self.amount, self.nonce)
    }

    /// `true` once strictly more than `expiry_window` seconds have elapsed since registration.
    pub fn is_expired(&self, now: u64, expiry_window: u64) -> bool {
        now.saturating_sub(self.registered_at) > expiry_window
    }

    pub fn is_redeemable(&self, now: u64, expiry_window: u64) -> bool {
        !self.redeemed && !self.is_expired(now, expiry_window)
    }
}

/// Notification produced by a successful state transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WithdrawEvent {
    WithdrawInfoAdded {
        beneficiary: Address,
        amount: U256,
        signature: Bytes,
    },
    WithdrawTokens {
        beneficiary: Address,
        amount: U256,
        signature: Bytes,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intent(registered_at: u64) -> WithdrawalIntent {
        WithdrawalIntent::new(
            Address::repeat_byte(0xab),
            U256::from(14_000_000u64),
            U256::from(50u64),
            registered_at,
        )
    }

    #[test]
    fn expiry_boundary_is_inclusive() {
        let record = intent(1_000);
        assert!(!record.is_expired(1_000, 3600));
        assert!(!record.is_expired(4_600, 3600));
        assert!(record.is_expired(4_601, 3600));
    }

    #[test]
    fn clock_behind_registration_is_not_expired() {
        assert!(!intent(1_000).is_expired(500, 3600));
    }

    #[test]
    fn redeemed_record_is_not_redeemable() {
        let mut record = intent(1_000);
        assert!(record.is_redeemable(1_001, 3600));
        record.redeemed = true;
        assert!(!record.is_redeemable(1_001, 3600));
    }

    #[test]
    fn digest_is_recomputed_from_fields() {
        let record = intent(0);
        assert_eq!(
            record.digest(),
            withdrawal_digest(record.beneficiary, record.amount, record.nonce)
        );
    }
}
