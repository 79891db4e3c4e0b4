//! In-memory ledger and treasury, for host-side simulation and tests.

use anchor_lang::prelude::*;
use std::{cell::RefCell, collections::BTreeMap};
use crate::{
    errors::TaxTokenError,
    ports::{Journal, Ledger, NativeTreasury},
};

type Balances = BTreeMap<Pubkey, u64>;
type Allowances = BTreeMap<(Pubkey, Pubkey), u64>;

/// Fixed-supply token ledger. The whole supply is minted once to `genesis_holder`.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    balances: RefCell<Balances>,
    allowances: RefCell<Allowances>,
    checkpoints: RefCell<Vec<(Balances, Allowances)>>,
    total_supply: u64,
}

impl MemoryLedger {
    pub fn new(genesis_holder: Pubkey, total_supply: u64) -> Self {
        let ledger = Self {
            total_supply,
            ..Self::default()
        };
        ledger.balances.borrow_mut().insert(genesis_holder, total_supply);
        ledger
    }

    /// Sum of every balance; equals `total_supply` while the ledger is consistent.
    pub fn circulating(&self) -> u128 {
        self.balances.borrow().values().map(|balance| *balance as u128).sum()
    }
}

impl Journal for MemoryLedger {
    fn checkpoint(&self) {
        let saved = (self.balances.borrow().clone(), self.allowances.borrow().clone());
        self.checkpoints.borrow_mut().push(saved);
    }

    fn commit(&self) {
        self.checkpoints.borrow_mut().pop();
    }

    fn rollback(&self) {
        if let Some((balances, allowances)) = self.checkpoints.borrow_mut().pop() {
            *self.balances.borrow_mut() = balances;
            *self.allowances.borrow_mut() = allowances;
        }
    }
}

impl Ledger for MemoryLedger {
    fn balance_of(&self, account: &Pubkey) -> u64 {
        self.balances.borrow().get(account).copied().unwrap_or(0)
    }

    fn total_supply(&self) -> u64 {
        self.total_supply
    }

    fn credit(&self, account: &Pubkey, amount: u64) -> Result<()> {
        let mut balances = self.balances.borrow_mut();
        let balance = balances.entry(*account).or_insert(0);
        *balance = balance.checked_add(amount).ok_or(TaxTokenError::MathOverflow)?;
        Ok(())
    }

    fn debit(&self, account: &Pubkey, amount: u64) -> Result<()> {
        let mut balances = self.balances.borrow_mut();
        let balance = balances.entry(*account).or_insert(0);
        *balance = balance.checked_sub(amount).ok_or(TaxTokenError::InsufficientBalance)?;
        Ok(())
    }

    fn approve(&self, owner: &Pubkey, spender: &Pubkey, amount: u64) -> Result<()> {
        self.allowances.borrow_mut().insert((*owner, *spender), amount);
        Ok(())
    }

    fn allowance(&self, owner: &Pubkey, spender: &Pubkey) -> u64 {
        self.allowances.borrow().get(&(*owner, *spender)).copied().unwrap_or(0)
    }
}

/// Native-currency balances.
#[derive(Debug, Default)]
pub struct MemoryTreasury {
    balances: RefCell<Balances>,
    checkpoints: RefCell<Vec<Balances>>,
}

impl MemoryTreasury {
    pub fn fund(&self, account: &Pubkey, amount: u64) -> Result<()> {
        let mut balances = self.balances.borrow_mut();
        let balance = balances.entry(*account).or_insert(0);
        *balance = balance.checked_add(amount).ok_or(TaxTokenError::MathOverflow)?;
        Ok(())
    }
}

impl Journal for MemoryTreasury {
    fn checkpoint(&self) {
        let saved = self.balances.borrow().clone();
        self.checkpoints.borrow_mut().push(saved);
    }

    fn commit(&self) {
        self.checkpoints.borrow_mut().pop();
    }

    fn rollback(&self) {
        if let Some(balances) = self.checkpoints.borrow_mut().pop() {
            *self.balances.borrow_mut() = balances;
        }
    }
}

impl NativeTreasury for MemoryTreasury {
    fn balance_of(&self, account: &Pubkey) -> u64 {
        self.balances.borrow().get(account).copied().unwrap_or(0)
    }

    fn transfer(&self, from: &Pubkey, to: &Pubkey, amount: u64) -> Result<()> {
        if from == to {
            require!(self.balance_of(from) >= amount, TaxTokenError::InsufficientBalance);
            return Ok(());
        }

        // Both sides are validated before either is written
        let remaining = self
            .balance_of(from)
            .checked_sub(amount)
            .ok_or(TaxTokenError::InsufficientBalance)?;
        let credited = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or(TaxTokenError::MathOverflow)?;

        let mut balances = self.balances.borrow_mut();
        balances.insert(*from, remaining);
        balances.insert(*to, credited);
        Ok(())
    }
}
