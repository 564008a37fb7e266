//! Withdrawal registry and settlement engine.
//!
//! `register` is gated on caller identity only; the cryptographic check happens in `redeem`.
//! `redeem` checks, in order: signature (against the stored nonce and the caller-supplied
//! beneficiary/amount), expiry, reuse. The first failing check is the one reported.

use alloy_primitives::{Address, Bytes, B256, U256};

use crate::{
    config::{ExecutionContext, ModuleConfig},
    errors::WithdrawError,
    hash::withdrawal_digest,
    intent::{WithdrawEvent, WithdrawalIntent},
    ledger::{CustodialWallet, RecordStore},
    signature::{verify_signature, SignerRecovery},
};

/// Stateless engine over an immutable [`ModuleConfig`]; all state lives in the [`RecordStore`].
#[derive(Clone, Debug)]
pub struct WithdrawalEngine<R> {
    config: ModuleConfig,
    recovery: R,
}

impl<R> WithdrawalEngine<R> {
    pub fn new(config: ModuleConfig, recovery: R) -> Self {
        Self { config, recovery }
    }

    pub fn config(&self) -> &ModuleConfig {
        &self.config
    }

    pub fn digest(&self, beneficiary: Address, amount: U256, nonce: U256) -> B256 {
        withdrawal_digest(beneficiary, amount, nonce)
    }

    /// Record an owner-approved intent under `signature`.
    ///
    /// The signature is not verified here. An existing record for the same signature is never
    /// overwritten.
    pub fn register<S: RecordStore>(
        &self,
        store: &mut S,
        ctx: &ExecutionContext,
        beneficiary: Address,
        amount: U256,
        nonce: U256,
        signature: &[u8],
    ) -> Result<WithdrawEvent, WithdrawError> {
        if ctx.caller != self.config.owner {
            return Err(WithdrawError::Unauthorized);
        }
        if store.contains(signature) {
            return Err(WithdrawError::SignatureAlreadyRegistered);
        }

        store.save(
            signature,
            WithdrawalIntent::new(beneficiary, amount, nonce, ctx.timestamp),
        );

        Ok(WithdrawEvent::WithdrawInfoAdded {
            beneficiary,
            amount,
            signature: Bytes::copy_from_slice(signature),
        })
    }
}

impl<R: SignerRecovery> WithdrawalEngine<R> {
    /// `true` iff `signature` is `claimed_signer`'s personal-sign over the intent digest.
    pub fn verify_signature(
        &self,
        claimed_signer: Address,
        beneficiary: Address,
        amount: U256,
        nonce: U256,
        signature: &[u8],
    ) -> bool {
        let digest = withdrawal_digest(beneficiary, amount, nonce);
        verify_signature(&self.recovery, claimed_signer, digest, signature)
    }

    /// Run the redemption checks against `record` without touching any state.
    ///
    /// Returns the record to mark redeemed. Callers that cannot hand the engine both the store and
    /// the wallet at once (the contract) use this and perform the settlement themselves.
    pub fn authorize_redemption(
        &self,
        record: Option<WithdrawalIntent>,
        ctx: &ExecutionContext,
        amount: U256,
        beneficiary: Address,
        signature: &[u8],
    ) -> Result<WithdrawalIntent, WithdrawError> {
        let record = record.ok_or(WithdrawError::CannotVerifySignature)?;

        // Nonce comes from the record; beneficiary and amount from the caller.
        if !self.verify_signature(self.config.owner, beneficiary, amount, record.nonce, signature) {
            return Err(WithdrawError::CannotVerifySignature);
        }
        if record.is_expired(ctx.timestamp, self.config.expiry_window) {
            return Err(WithdrawError::ExpiredSignature);
        }
        if record.redeemed {
            return Err(WithdrawError::SignatureReuse);
        }
        Ok(record)
    }

    /// Redeem a registered intent and settle it through `wallet`.
    ///
    /// The record is marked redeemed before the transfer and restored if the transfer fails, so a
    /// signature is consumed only together with a successful settlement.
    pub fn redeem<S: RecordStore, W: CustodialWallet>(
        &self,
        store: &mut S,
        wallet: &mut W,
        ctx: &ExecutionContext,
        amount: U256,
        beneficiary: Address,
        signature: &[u8],
    ) -> Result<WithdrawEvent, WithdrawError> {
        let mut record =
            self.authorize_redemption(store.load(signature), ctx, amount, beneficiary, signature)?;

        record.redeemed = true;
        store.save(signature, record);

        if let Err(cause) = wallet.transfer(amount, beneficiary) {
            record.redeemed = false;
            store.save(signature, record);
            return Err(WithdrawError::SettlementFailed(cause));
        }

        Ok(WithdrawEvent::WithdrawTokens {
            beneficiary,
            amount,
            signature: Bytes::copy_from_slice(signature),
        })
    }

    /// Whether `signature` could be redeemed right now (ignoring the signature check).
    pub fn is_redeemable<S: RecordStore>(&self, store: &S, signature: &[u8], now: u64) -> bool {
        store
            .load(signature)
            .map(|record| record.is_redeemable(now, self.config.expiry_window))
            .unwrap_or(false)
    }
}
