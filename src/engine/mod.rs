//! Host-side execution of the fee engine.
//!
//! [`TaxToken`] owns the [`TokenConfig`] aggregate and drives transfers, the
//! swap-and-liquidity sequence and the administrative surface against the
//! collaborators in [`Ports`]. Each transfer runs inside a ledger and
//! treasury save point and leaves no balance changed when it fails.

use std::cell::{Cell, Ref, RefCell};
use anchor_lang::prelude::*;
use crate::{
    contexts::TokenConfig,
    ports::Ports,
    reentrancy::{SwapLock, SwapLockStatus},
};

mod admin;
mod swap;
mod transaction;
mod transfer;

#[cfg(test)]
mod test_utils;

pub use swap::{SwapOutcome, SwapReport};
pub use transfer::TransferReceipt;

pub struct TaxToken<'a> {
    config: RefCell<TokenConfig>,
    ports: Ports<'a>,
    swap_lock: Cell<SwapLockStatus>,
}

impl<'a> TaxToken<'a> {
    pub fn new(config: TokenConfig, ports: Ports<'a>) -> Self {
        Self {
            config: RefCell::new(config),
            ports,
            swap_lock: Cell::new(SwapLockStatus::Unlocked),
        }
    }

    pub fn config(&self) -> Ref<'_, TokenConfig> {
        self.config.borrow()
    }

    /// Engine over the state stored in a `TokenConfig` account.
    pub fn from_account_data(data: &[u8], ports: Ports<'a>) -> Result<Self> {
        let config = TokenConfig::try_deserialize(&mut &data[..])?;
        Ok(Self::new(config, ports))
    }

    pub fn ports(&self) -> &Ports<'a> {
        &self.ports
    }

    /// Account accumulating operations fees.
    pub fn holding(&self) -> Pubkey {
        self.config.borrow().holding
    }

    pub fn holding_balance(&self) -> u64 {
        self.ports.ledger.balance_of(&self.holding())
    }

    /// Combined fee rate in parts per thousand; zero while fees are off.
    pub fn total_fees(&self) -> u16 {
        self.config.borrow().fees.total_fee_rate()
    }

    pub fn swap_in_progress(&self) -> bool {
        SwapLock::is_held(&self.swap_lock)
    }

    pub fn is_excluded_from_fee(&self, account: &Pubkey) -> bool {
        self.config.borrow().fees.is_excluded_from_fee(account)
    }

    pub fn is_excluded_from_max_transfer(&self, account: &Pubkey) -> bool {
        self.config.borrow().fees.is_excluded_from_max_transfer(account)
    }
}
