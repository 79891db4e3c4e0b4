//! Mock collaborators and a launch harness for engine tests.

use std::cell::{Cell, RefCell};
use anchor_lang::prelude::*;
use super::{SwapOutcome, TaxToken};
use crate::{
    contexts::{ConfigAuthority, GenesisWallets, TokenConfig},
    errors::TaxTokenError,
    memory::{MemoryLedger, MemoryTreasury},
    ports::{BotProtectionPort, ExchangePort, Ports},
};

/// Constant-rate pool: `tokens_per_native` tokens buy one native unit.
/// Pulls tokens through `TaxToken::transfer`, like a real router would.
pub struct MockExchange {
    pub pool: Pubkey,
    tokens_per_native: u64,
    fail_swaps: Cell<bool>,
    fail_liquidity: Cell<bool>,
    fail_after_pull: Cell<bool>,
    divert_proceeds: Cell<bool>,
    over_report: Cell<u64>,
    swaps: RefCell<Vec<u64>>,
    liquidity: RefCell<Vec<(u64, u64, Pubkey)>>,
    lock_observed: RefCell<Vec<bool>>,
    inner_outcomes: RefCell<Vec<SwapOutcome>>,
}

impl MockExchange {
    pub fn new(pool: Pubkey, tokens_per_native: u64) -> Self {
        Self {
            pool,
            tokens_per_native,
            fail_swaps: Cell::new(false),
            fail_liquidity: Cell::new(false),
            fail_after_pull: Cell::new(false),
            divert_proceeds: Cell::new(false),
            over_report: Cell::new(0),
            swaps: RefCell::default(),
            liquidity: RefCell::default(),
            lock_observed: RefCell::default(),
            inner_outcomes: RefCell::default(),
        }
    }

    pub fn fail_swaps(&self, fail: bool) {
        self.fail_swaps.set(fail);
    }

    pub fn fail_liquidity(&self, fail: bool) {
        self.fail_liquidity.set(fail);
    }

    /// Take the tokens and pay out, then report failure anyway.
    pub fn fail_after_pull(&self, fail: bool) {
        self.fail_after_pull.set(fail);
    }

    /// Send swap proceeds somewhere other than the holding account.
    pub fn divert_proceeds(&self, divert: bool) {
        self.divert_proceeds.set(divert);
    }

    /// Inflate the amount the swap claims to have delivered.
    pub fn over_report(&self, extra: u64) {
        self.over_report.set(extra);
    }

    pub fn swaps(&self) -> Vec<u64> {
        self.swaps.borrow().clone()
    }

    pub fn liquidity(&self) -> Vec<(u64, u64, Pubkey)> {
        self.liquidity.borrow().clone()
    }

    pub fn lock_observed(&self) -> Vec<bool> {
        self.lock_observed.borrow().clone()
    }

    /// Swap outcomes seen by the transfers this exchange made from inside a swap.
    pub fn inner_outcomes(&self) -> Vec<SwapOutcome> {
        self.inner_outcomes.borrow().clone()
    }

    fn pull_tokens(&self, token: &TaxToken<'_>, amount: u64) -> Result<()> {
        let receipt = token.transfer(token.holding(), self.pool, amount)?;
        self.inner_outcomes.borrow_mut().push(receipt.swap);
        Ok(())
    }
}

impl ExchangePort for MockExchange {
    fn swap_to_reference(&self, token: &TaxToken<'_>, token_amount: u64) -> Result<u64> {
        self.lock_observed.borrow_mut().push(token.swap_in_progress());
        if self.fail_swaps.get() {
            return err!(TaxTokenError::ExternalPortFailure);
        }

        self.pull_tokens(token, token_amount)?;
        let native_out = token_amount / self.tokens_per_native;
        let destination = if self.divert_proceeds.get() {
            Pubkey::new_unique()
        } else {
            token.holding()
        };
        token.ports().treasury.transfer(&self.pool, &destination, native_out)?;
        if self.fail_after_pull.get() {
            return err!(TaxTokenError::ExternalPortFailure);
        }

        self.swaps.borrow_mut().push(token_amount);
        Ok(native_out + self.over_report.get())
    }

    fn add_liquidity(
        &self,
        token: &TaxToken<'_>,
        token_amount: u64,
        native_amount: u64,
        recipient: &Pubkey,
    ) -> Result<()> {
        if self.fail_liquidity.get() {
            return err!(TaxTokenError::ExternalPortFailure);
        }

        self.pull_tokens(token, token_amount)?;
        token.ports().treasury.transfer(&token.holding(), &self.pool, native_amount)?;
        self.liquidity.borrow_mut().push((token_amount, native_amount, *recipient));
        Ok(())
    }
}

#[derive(Default)]
pub struct MockBotProtection {
    blocked: RefCell<Vec<Pubkey>>,
    inspected: RefCell<Vec<Pubkey>>,
}

impl MockBotProtection {
    pub fn block(&self, account: Pubkey) {
        self.blocked.borrow_mut().push(account);
    }

    pub fn inspected_hooks(&self) -> Vec<Pubkey> {
        self.inspected.borrow().clone()
    }
}

impl BotProtectionPort for MockBotProtection {
    fn inspect(&self, hook: &Pubkey, sender: &Pubkey, receiver: &Pubkey, _amount: u64) -> Result<()> {
        self.inspected.borrow_mut().push(*hook);
        let blocked = self.blocked.borrow();
        if blocked.contains(sender) || blocked.contains(receiver) {
            return err!(TaxTokenError::ExternalPortFailure);
        }
        Ok(())
    }
}

/// One token deployment: the admin holds the full supply at genesis.
pub struct Harness {
    pub admin: Pubkey,
    pub pool: Pubkey,
    pub router: Pubkey,
    pub operations_wallet: Pubkey,
    pub rewards_vault: Pubkey,
    pub liquidity_recipient: Pubkey,
    pub ledger: MemoryLedger,
    pub treasury: MemoryTreasury,
    pub exchange: MockExchange,
    pub bot_protection: MockBotProtection,
    authority: ConfigAuthority,
    genesis: TokenConfig,
}

impl Harness {
    pub const SUPPLY: u64 = 1_000_000;
    pub const POOL_TOKENS: u64 = 100_000;
    pub const POOL_NATIVE: u64 = 1_000_000;

    pub fn new() -> Self {
        let admin = Pubkey::new_unique();
        let pool = Pubkey::new_unique();
        let wallets = GenesisWallets {
            operations_wallet: Pubkey::new_unique(),
            rewards_vault: Pubkey::new_unique(),
            liquidity_recipient: Pubkey::new_unique(),
        };
        let genesis = TokenConfig::genesis(
            admin,
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            255,
            Self::SUPPLY,
            wallets,
        )
        .unwrap();

        let treasury = MemoryTreasury::default();
        treasury.fund(&pool, Self::POOL_NATIVE).unwrap();

        Self {
            admin,
            pool,
            router: Pubkey::new_unique(),
            operations_wallet: wallets.operations_wallet,
            rewards_vault: wallets.rewards_vault,
            liquidity_recipient: wallets.liquidity_recipient,
            ledger: MemoryLedger::new(admin, Self::SUPPLY),
            treasury,
            exchange: MockExchange::new(pool, 8),
            bot_protection: MockBotProtection::default(),
            authority: genesis.admin(),
            genesis,
        }
    }

    pub fn ports(&self) -> Ports<'_> {
        Ports {
            ledger: &self.ledger,
            treasury: &self.treasury,
            exchange: &self.exchange,
            bot_protection: &self.bot_protection,
            authorization: &self.authority,
        }
    }

    /// Fresh token at genesis: no pool, no router.
    pub fn token(&self) -> TaxToken<'_> {
        TaxToken::new(self.genesis.clone(), self.ports())
    }

    /// Token with its pool set, router bound and pool seeded with tokens.
    pub fn launch(&self) -> TaxToken<'_> {
        let token = self.token();
        token.set_primary_pool(&self.admin, self.pool).unwrap();
        token.set_exchange_router(&self.admin, self.router).unwrap();
        token.transfer(self.admin, self.pool, Self::POOL_TOKENS).unwrap();
        token
    }

    /// New account funded by the admin without fees.
    pub fn funded_trader(&self, token: &TaxToken<'_>, amount: u64) -> Pubkey {
        let trader = Pubkey::new_unique();
        token.transfer(self.admin, trader, amount).unwrap();
        trader
    }
}
