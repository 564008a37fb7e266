//! Chain-agnostic core of the Safe tokens module.
//!
//! The module releases tokens from a custodial Safe once the configured owner has signed
//! `(beneficiary, amount, nonce)`. Everything here is shared by the Stylus contract and the
//! off-chain signer so that digests, signature handling and the redemption state machine agree
//! byte-for-byte on both sides.
//!
//! Collaborators that differ between environments (signer recovery, record storage, the custodial
//! wallet, caller identity and clock) are expressed as traits or plain data.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod config;
pub mod engine;
pub mod errors;
pub mod hash;
pub mod intent;
pub mod ledger;
pub mod signature;

#[cfg(any(test, feature = "k256"))]
pub mod offchain;

pub use config::{ExecutionContext, ModuleConfig};
pub use engine::WithdrawalEngine;
pub use errors::{SettlementError, WithdrawError};
pub use hash::{signed_message_hash, withdrawal_digest};
pub use intent::{WithdrawEvent, WithdrawalIntent};
pub use ledger::{CustodialWallet, RecordStore};
pub use signature::{verify_signature, RecoverableSignature, SignerRecovery};
