//! Immutable module configuration and per-call execution context.

use alloy_primitives::Address;

/// Module configuration, fixed when the module is constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModuleConfig {
    /// The only identity allowed to register withdrawals and whose signatures are honoured.
    pub owner: Address,
    /// Custodial wallet (Safe) that funds withdrawals.
    pub wallet: Address,
    /// Token transferred out of `wallet`.
    pub token: Address,
    /// Seconds after registration during which a signature can be redeemed.
    pub expiry_window: u64,
}

impl ModuleConfig {
    /// One hour.
    pub const DEFAULT_EXPIRY_WINDOW: u64 = 3600;

    pub fn new(owner: Address, wallet: Address, token: Address, expiry_window: u64) -> Self {
        Self {
            owner,
            wallet,
            token,
            expiry_window,
        }
    }

    /// All addresses set and a non-zero window.
    pub fn is_valid(&self) -> bool {
        self.owner != Address::ZERO
            && self.wallet != Address::ZERO
            && self.token != Address::ZERO
            && self.expiry_window != 0
    }
}

/// Authenticated caller and current timestamp, supplied by the execution environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExecutionContext {
    pub caller: Address,
    pub timestamp: u64,
}

impl ExecutionContext {
    pub fn new(caller: Address, timestamp: u64) -> Self {
        Self { caller, timestamp }
    }
}
