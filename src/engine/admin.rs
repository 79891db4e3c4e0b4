use anchor_lang::prelude::*;
use super::TaxToken;
use crate::{contexts::TokenConfig, ports::Role};

impl TaxToken<'_> {
    /// Authorize `caller`, apply a validated setter and emit what it returns.
    fn administer<E, F>(&self, caller: &Pubkey, update: F) -> Result<()>
    where
        E: anchor_lang::Event,
        F: FnOnce(&mut TokenConfig) -> Result<E>,
    {
        self.ports.authorization.require_role(caller, Role::Admin)?;
        let event = update(&mut self.config.borrow_mut())?;
        emit!(event);
        Ok(())
    }

    pub fn set_fees(&self, caller: &Pubkey, operations_fee: u16, rewards_fee: u16) -> Result<()> {
        self.administer(caller, |config| config.fees.set_fees(operations_fee, rewards_fee))
    }

    pub fn set_liquidity_share(&self, caller: &Pubkey, liquidity_share: u16) -> Result<()> {
        self.administer(caller, |config| config.fees.set_liquidity_share(liquidity_share))
    }

    pub fn set_fees_enabled(&self, caller: &Pubkey, enabled: bool) -> Result<()> {
        self.administer(caller, |config| Ok(config.fees.set_fees_enabled(enabled)))
    }

    pub fn set_swap_enabled(&self, caller: &Pubkey, enabled: bool) -> Result<()> {
        self.administer(caller, |config| Ok(config.fees.set_swap_enabled(enabled)))
    }

    pub fn set_max_transfer_amount(&self, caller: &Pubkey, amount: u64) -> Result<()> {
        let total_supply = self.ports.ledger.total_supply();
        self.administer(caller, |config| {
            config.fees.set_max_transfer_amount(amount, total_supply)
        })
    }

    pub fn set_swap_threshold(&self, caller: &Pubkey, threshold: u64) -> Result<()> {
        self.administer(caller, |config| config.fees.set_swap_threshold(threshold))
    }

    pub fn set_excluded_from_fee(&self, caller: &Pubkey, account: Pubkey, excluded: bool) -> Result<()> {
        self.administer(caller, |config| config.fees.set_excluded_from_fee(account, excluded))
    }

    pub fn set_excluded_from_max_transfer(
        &self,
        caller: &Pubkey,
        account: Pubkey,
        excluded: bool,
    ) -> Result<()> {
        self.administer(caller, |config| {
            config.fees.set_excluded_from_max_transfer(account, excluded)
        })
    }

    pub fn set_operations_wallet(&self, caller: &Pubkey, wallet: Pubkey) -> Result<()> {
        self.administer(caller, |config| config.fees.set_operations_wallet(wallet))
    }

    pub fn set_rewards_vault(&self, caller: &Pubkey, vault: Pubkey) -> Result<()> {
        self.administer(caller, |config| config.fees.set_rewards_vault(vault))
    }

    pub fn set_liquidity_recipient(&self, caller: &Pubkey, recipient: Pubkey) -> Result<()> {
        self.administer(caller, |config| Ok(config.fees.set_liquidity_recipient(recipient)))
    }

    pub fn set_primary_pool(&self, caller: &Pubkey, pool: Pubkey) -> Result<()> {
        self.administer(caller, |config| config.pair.set_primary_pool(pool))
    }

    /// Bind the router once and give it an unlimited allowance over the holding account.
    pub fn set_exchange_router(&self, caller: &Pubkey, router: Pubkey) -> Result<()> {
        self.administer(caller, |config| config.pair.bind_exchange_router(router))?;
        self.ports.ledger.approve(&self.holding(), &router, u64::MAX)
    }

    pub fn set_bot_protection_hook(&self, caller: &Pubkey, hook: Pubkey) -> Result<()> {
        self.administer(caller, |config| config.bot_protection.bind_hook(hook))
    }

    pub fn set_bot_protection_enabled(&self, caller: &Pubkey, enabled: bool) -> Result<()> {
        self.administer(caller, |config| config.bot_protection.set_enabled(enabled))
    }

    pub fn disable_bot_protection_permanently(&self, caller: &Pubkey) -> Result<()> {
        self.administer(caller, |config| config.bot_protection.disable_permanently())
    }
}
