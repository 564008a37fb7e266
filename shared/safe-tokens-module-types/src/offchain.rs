//! Off-chain implementations of the engine collaborators.
//!
//! Used by the signer tooling and by tests; the contract uses the `ecrecover` precompile and
//! Stylus storage instead.

use alloc::{collections::BTreeMap, vec::Vec};

use alloy_primitives::{keccak256, Address, Bytes, B256, U256};
use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};

use crate::{
    hash::{signed_message_hash, withdrawal_digest},
    intent::WithdrawalIntent,
    ledger::RecordStore,
    signature::{RecoverableSignature, SignerRecovery, SIGNATURE_LEN},
};

/// Signer recovery backed by `k256`.
#[derive(Clone, Copy, Debug, Default)]
pub struct K256Recovery;

impl SignerRecovery for K256Recovery {
    fn recover(&self, prehash: B256, signature: &RecoverableSignature) -> Option<Address> {
        let bytes = signature.to_bytes();
        let sig = Signature::from_slice(&bytes[0..64]).ok()?;
        let recovery_id = RecoveryId::new(signature.y_parity, false);
        let key = VerifyingKey::recover_from_prehash(prehash.as_slice(), &sig, recovery_id).ok()?;
        Some(address_of(&key))
    }
}

/// Ethereum address of a secp256k1 public key.
pub fn address_of(key: &VerifyingKey) -> Address {
    let point = key.to_encoded_point(false);
    let hash = keccak256(&point.as_bytes()[1..]);
    Address::from_slice(&hash.as_slice()[12..32])
}

/// EIP-191 personal-sign of a 32-byte digest. Output is `r || s || v` with `v` in {27, 28}.
pub fn sign_digest(key: &SigningKey, digest: B256) -> Result<Bytes, k256::ecdsa::Error> {
    let prehash = signed_message_hash(digest);
    let (sig, recovery_id) = key.sign_prehash_recoverable(prehash.as_slice())?;

    let mut out = Vec::with_capacity(SIGNATURE_LEN);
    out.extend_from_slice(&sig.to_bytes());
    out.push(27 + recovery_id.to_byte());
    Ok(Bytes::from(out))
}

/// Sign the withdrawal digest of `(beneficiary, amount, nonce)`.
pub fn sign_withdrawal(
    key: &SigningKey,
    beneficiary: Address,
    amount: U256,
    nonce: U256,
) -> Result<Bytes, k256::ecdsa::Error> {
    sign_digest(key, withdrawal_digest(beneficiary, amount, nonce))
}

/// In-memory record store keyed by exact signature bytes.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    records: BTreeMap<Vec<u8>, WithdrawalIntent>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, signature: &[u8]) -> Option<&WithdrawalIntent> {
        self.records.get(signature)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordStore for MemoryStore {
    fn load(&self, signature: &[u8]) -> Option<WithdrawalIntent> {
        self.records.get(signature).copied()
    }

    fn save(&mut self, signature: &[u8], record: WithdrawalIntent) {
        self.records.insert(signature.to_vec(), record);
    }
}
