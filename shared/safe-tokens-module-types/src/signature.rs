//! Recoverable ECDSA signatures and signer verification.
//!
//! Recovery itself is delegated to a [`SignerRecovery`] implementation: the contract uses the EVM
//! `ecrecover` precompile, off-chain code uses `k256`. Both see the same parsed signature and the
//! same EIP-191 prehash, so a signature verifies identically on either side.

use alloy_primitives::{Address, B256, U256};

use crate::hash::signed_message_hash;

/// Length of an `r || s || v` signature.
pub const SIGNATURE_LEN: usize = 65;

/// Half of the secp256k1 group order (EIP-2 upper bound for `s`).
pub const SECP256K1N_HALF: U256 = U256::from_limbs([
    0xDFE9_2F46_681B_20A0,
    0x5D57_6E73_57A4_501D,
    0xFFFF_FFFF_FFFF_FFFF,
    0x7FFF_FFFF_FFFF_FFFF,
]);

/// A canonical 65-byte secp256k1 signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecoverableSignature {
    pub r: B256,
    pub s: B256,
    pub y_parity: bool,
}

impl RecoverableSignature {
    /// Parse `r || s || v`.
    ///
    /// Only `v` in {27, 28} and low-s forms are accepted, so one intent cannot be keyed by two
    /// different byte strings.
    pub fn parse(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != SIGNATURE_LEN {
            return None;
        }

        let y_parity = match bytes[64] {
            27 => false,
            28 => true,
            _ => return None,
        };

        let r = B256::from_slice(&bytes[0..32]);
        let s = B256::from_slice(&bytes[32..64]);
        let s_value = U256::from_be_bytes(s.0);
        if r == B256::ZERO || s_value.is_zero() || s_value > SECP256K1N_HALF {
            return None;
        }

        Some(Self { r, s, y_parity })
    }

    /// Ethereum-style recovery byte (27 or 28).
    pub fn v(&self) -> u8 {
        27 + u8::from(self.y_parity)
    }

    pub fn to_bytes(&self) -> [u8; SIGNATURE_LEN] {
        let mut out = [0u8; SIGNATURE_LEN];
        out[0..32].copy_from_slice(self.r.as_slice());
        out[32..64].copy_from_slice(self.s.as_slice());
        out[64] = self.v();
        out
    }
}

/// Recovers the address that produced `signature` over `prehash`.
///
/// Implementations return `None` for anything that does not recover to a point; they never panic.
pub trait SignerRecovery {
    fn recover(&self, prehash: B256, signature: &RecoverableSignature) -> Option<Address>;
}

/// `true` iff `signature` over the EIP-191 form of `digest` recovers to exactly `claimed_signer`.
///
/// Malformed signatures and failed recoveries are reported as `false`.
pub fn verify_signature<R: SignerRecovery + ?Sized>(
    recovery: &R,
    claimed_signer: Address,
    digest: B256,
    signature: &[u8],
) -> bool {
    let parsed = match RecoverableSignature::parse(signature) {
        Some(sig) => sig,
        None => return false,
    };
    match recovery.recover(signed_message_hash(digest), &parsed) {
        Some(recovered) => recovered != Address::ZERO && recovered == claimed_signer,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(r: u8, s: U256, v: u8) -> [u8; SIGNATURE_LEN] {
        let mut out = [0u8; SIGNATURE_LEN];
        out[0..32].copy_from_slice(&[r; 32]);
        out[32..64].copy_from_slice(&s.to_be_bytes::<32>());
        out[64] = v;
        out
    }

    /// Recovers to a fixed address regardless of input.
    struct FixedRecovery(Option<Address>);

    impl SignerRecovery for FixedRecovery {
        fn recover(&self, _prehash: B256, _signature: &RecoverableSignature) -> Option<Address> {
            self.0
        }
    }

    #[test]
    fn parse_reads_parity_from_v() {
        for (v, parity) in [(27u8, false), (28, true)] {
            let sig = RecoverableSignature::parse(&raw(1, U256::from(5u64), v)).unwrap();
            assert_eq!(sig.y_parity, parity);
            assert_eq!(sig.v(), v);
        }
    }

    #[test]
    fn parse_rejects_raw_parity_v() {
        // 0/1 would alias every 27/28 signature under a second key.
        assert!(RecoverableSignature::parse(&raw(1, U256::from(5u64), 0)).is_none());
        assert!(RecoverableSignature::parse(&raw(1, U256::from(5u64), 1)).is_none());
    }

    #[test]
    fn parse_rejects_bad_v_and_length() {
        assert!(RecoverableSignature::parse(&raw(1, U256::from(5u64), 29)).is_none());
        assert!(RecoverableSignature::parse(&raw(1, U256::from(5u64), 27)[..64]).is_none());
        assert!(RecoverableSignature::parse(&[]).is_none());
    }

    #[test]
    fn parse_rejects_zero_and_high_s() {
        assert!(RecoverableSignature::parse(&raw(0, U256::from(5u64), 27)).is_none());
        assert!(RecoverableSignature::parse(&raw(1, U256::ZERO, 27)).is_none());
        assert!(RecoverableSignature::parse(&raw(1, SECP256K1N_HALF, 27)).is_some());
        assert!(RecoverableSignature::parse(&raw(1, SECP256K1N_HALF + U256::from(1u64), 27)).is_none());
    }

    #[test]
    fn to_bytes_is_canonical() {
        let bytes = raw(3, U256::from(77u64), 28);
        let sig = RecoverableSignature::parse(&bytes).unwrap();
        let out = sig.to_bytes();
        assert_eq!(out[..64], bytes[..64]);
        assert_eq!(out[64], 28);
    }

    #[test]
    fn verify_compares_recovered_address_exactly() {
        let signer = Address::repeat_byte(0x11);
        let sig = raw(1, U256::from(5u64), 27);
        let digest = B256::repeat_byte(0x22);

        assert!(verify_signature(&FixedRecovery(Some(signer)), signer, digest, &sig));
        assert!(!verify_signature(
            &FixedRecovery(Some(signer)),
            Address::repeat_byte(0x12),
            digest,
            &sig
        ));
        assert!(!verify_signature(&FixedRecovery(None), signer, digest, &sig));
    }

    #[test]
    fn verify_never_matches_zero_address() {
        let sig = raw(1, U256::from(5u64), 27);
        assert!(!verify_signature(
            &FixedRecovery(Some(Address::ZERO)),
            Address::ZERO,
            B256::ZERO,
            &sig
        ));
    }

    #[test]
    fn verify_treats_malformed_signature_as_mismatch() {
        let signer = Address::repeat_byte(0x11);
        assert!(!verify_signature(&FixedRecovery(Some(signer)), signer, B256::ZERO, &[0u8; 10]));
    }
}
