use core::fmt;

/// Why the custodial wallet could not settle a withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SettlementError {
    /// The call into the wallet reverted.
    CallReverted = 1,
    /// The wallet reported that executing the transfer failed.
    ExecutionFailed = 2,
    /// The token returned `false` from `transfer`.
    TransferRejected = 3,
    /// Return data was malformed or could not be decoded.
    MalformedReturn = 4,
}

impl SettlementError {
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Rejection reasons for `register` / `redeem`. Every rejection leaves state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawError {
    /// `register` called by someone other than the owner.
    Unauthorized,
    /// No record for the signature, or it does not recover to the owner for the supplied
    /// beneficiary/amount.
    CannotVerifySignature,
    /// More than the expiry window has elapsed since registration.
    ExpiredSignature,
    /// The signature has already been redeemed.
    SignatureReuse,
    /// `register` called with a signature that already has a record.
    SignatureAlreadyRegistered,
    /// The wallet transfer failed; the redemption was rolled back.
    SettlementFailed(SettlementError),
}

impl WithdrawError {
    /// Revert reason string.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Unauthorized => "Unauthorized",
            Self::CannotVerifySignature => "Cannot verify signature",
            Self::ExpiredSignature => "Expired signature",
            Self::SignatureReuse => "Cannot reuse signature",
            Self::SignatureAlreadyRegistered => "Signature already registered",
            Self::SettlementFailed(_) => "Settlement failed",
        }
    }
}

impl fmt::Display for WithdrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SettlementFailed(cause) => write!(f, "{} ({:?})", self.reason(), cause),
            _ => f.write_str(self.reason()),
        }
    }
}

impl fmt::Display for SettlementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
