//! External collaborators of the withdrawal engine: the record store and the custodial wallet.

use alloy_primitives::{Address, U256};

use crate::{errors::SettlementError, intent::WithdrawalIntent};

/// Persistent mapping `signature -> WithdrawalIntent`.
///
/// Keys are the raw signature bytes. Implementations may hash the key (as Solidity does for
/// `mapping(bytes => ...)`) but must not truncate or normalise it.
pub trait RecordStore {
    fn load(&self, signature: &[u8]) -> Option<WithdrawalIntent>;

    fn save(&mut self, signature: &[u8], record: WithdrawalIntent);

    fn contains(&self, signature: &[u8]) -> bool {
        self.load(signature).is_some()
    }
}

/// Source of funds for a successful redemption.
pub trait CustodialWallet {
    /// Move `amount` tokens to `to`. Must either complete fully or fail without effect.
    fn transfer(&mut self, amount: U256, to: Address) -> Result<(), SettlementError>;
}
