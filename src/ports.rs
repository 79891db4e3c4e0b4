//! Capabilities the fee engine consumes but does not own.
//!
//! Every method takes `&self`: collaborators are shared with the exchange,
//! which may call back into [`TaxToken::transfer`] while a swap is running,
//! so implementations keep their state behind interior mutability.

use anchor_lang::prelude::*;
use crate::engine::TaxToken;

/// Nested save points over a collaborator's state.
///
/// Every `checkpoint` is closed by exactly one `commit` or `rollback`.
pub trait Journal {
    fn checkpoint(&self);

    /// Keep every change since the latest checkpoint.
    fn commit(&self);

    /// Undo every change since the latest checkpoint.
    fn rollback(&self);
}

/// Token balances, total supply and allowances.
pub trait Ledger: Journal {
    fn balance_of(&self, account: &Pubkey) -> u64;

    fn total_supply(&self) -> u64;

    fn credit(&self, account: &Pubkey, amount: u64) -> Result<()>;

    /// Fails with `InsufficientBalance` when `account` holds less than `amount`.
    fn debit(&self, account: &Pubkey, amount: u64) -> Result<()>;

    fn approve(&self, owner: &Pubkey, spender: &Pubkey, amount: u64) -> Result<()>;

    fn allowance(&self, owner: &Pubkey, spender: &Pubkey) -> u64;
}

/// Balances in the reference (native) currency.
pub trait NativeTreasury: Journal {
    fn balance_of(&self, account: &Pubkey) -> u64;

    fn transfer(&self, from: &Pubkey, to: &Pubkey, amount: u64) -> Result<()>;
}

/// The external pool the holding balance is swapped and paired against.
///
/// Failures are expected outcomes; the engine recovers from them locally.
pub trait ExchangePort {
    /// Sell `token_amount` holding tokens for native currency credited to the
    /// holding account. The returned figure is informational only.
    fn swap_to_reference(&self, token: &TaxToken<'_>, token_amount: u64) -> Result<u64>;

    /// Pair holding tokens with holding native currency; LP goes to `recipient`.
    fn add_liquidity(
        &self,
        token: &TaxToken<'_>,
        token_amount: u64,
        native_amount: u64,
        recipient: &Pubkey,
    ) -> Result<()>;
}

/// Pluggable transfer inspection bound to a hook address.
pub trait BotProtectionPort {
    fn inspect(&self, hook: &Pubkey, sender: &Pubkey, receiver: &Pubkey, amount: u64) -> Result<()>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
}

pub trait Authorization {
    /// Fails with `Unauthorized` when `caller` lacks `role`.
    fn require_role(&self, caller: &Pubkey, role: Role) -> Result<()>;
}

/// The whole set of collaborators one [`TaxToken`] is wired to.
#[derive(Clone, Copy)]
pub struct Ports<'a> {
    pub ledger: &'a dyn Ledger,
    pub treasury: &'a dyn NativeTreasury,
    pub exchange: &'a dyn ExchangePort,
    pub bot_protection: &'a dyn BotProtectionPort,
    pub authorization: &'a dyn Authorization,
}
