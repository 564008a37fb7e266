//! Withdrawal digest construction.
//!
//! The packed layout is Solidity's `abi.encodePacked(address, uint256, uint256)` in the order
//! beneficiary, amount, nonce. Off-chain signers depend on this exact byte layout.

use alloy_primitives::{keccak256, Address, B256, U256};

/// EIP-191 prefix for a 32-byte personal message.
pub const SIGNED_MESSAGE_PREFIX: &[u8; 28] = b"\x19Ethereum Signed Message:\n32";

/// Length of the packed `(address, uint256, uint256)` encoding.
pub const PACKED_INTENT_LEN: usize = 20 + 32 + 32;

/// Digest of a withdrawal intent: `keccak256(beneficiary || amount || nonce)`.
pub fn withdrawal_digest(beneficiary: Address, amount: U256, nonce: U256) -> B256 {
    let mut buf = [0u8; PACKED_INTENT_LEN];
    buf[0..20].copy_from_slice(beneficiary.as_slice());
    buf[20..52].copy_from_slice(&amount.to_be_bytes::<32>());
    buf[52..84].copy_from_slice(&nonce.to_be_bytes::<32>());
    keccak256(buf)
}

/// Hash actually signed by `personal_sign` / `signMessage` for a 32-byte digest.
pub fn signed_message_hash(digest: B256) -> B256 {
    let mut buf = [0u8; 28 + 32];
    buf[0..28].copy_from_slice(SIGNED_MESSAGE_PREFIX);
    buf[28..60].copy_from_slice(digest.as_slice());
    keccak256(buf)
}
