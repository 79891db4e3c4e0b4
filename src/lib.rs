use anchor_lang::prelude::*;

pub mod constants;
pub mod contexts;
pub mod engine;
pub mod errors;
pub mod events;
pub mod fee_math;
pub mod ixs;
pub mod memory;
pub mod ports;
pub mod reentrancy;

pub use contexts::*;
pub use ixs::*;

declare_id!("BiGyz1fq35QxV357XKBUxVHXaHim9MnEk51J9aRB9FBZ");

#[program]
mod tax_token {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, wallets: GenesisWallets) -> Result<()> {
        ixs::initialize(ctx, wallets)
    }

    pub fn set_fees(ctx: Context<UpdateConfig>, operations_fee: u16, rewards_fee: u16) -> Result<()> {
        ixs::set_fees(ctx, operations_fee, rewards_fee)
    }

    pub fn set_liquidity_share(ctx: Context<UpdateConfig>, liquidity_share: u16) -> Result<()> {
        ixs::set_liquidity_share(ctx, liquidity_share)
    }

    pub fn set_fees_enabled(ctx: Context<UpdateConfig>, enabled: bool) -> Result<()> {
        ixs::set_fees_enabled(ctx, enabled)
    }

    pub fn set_swap_enabled(ctx: Context<UpdateConfig>, enabled: bool) -> Result<()> {
        ixs::set_swap_enabled(ctx, enabled)
    }

    pub fn set_max_transfer_amount(ctx: Context<SetMaxTransferAmount>, amount: u64) -> Result<()> {
        ixs::set_max_transfer_amount(ctx, amount)
    }

    pub fn set_swap_threshold(ctx: Context<UpdateConfig>, threshold: u64) -> Result<()> {
        ixs::set_swap_threshold(ctx, threshold)
    }

    pub fn set_excluded_from_fee(ctx: Context<UpdateConfig>, account: Pubkey, excluded: bool) -> Result<()> {
        ixs::set_excluded_from_fee(ctx, account, excluded)
    }

    pub fn set_excluded_from_max_transfer(
        ctx: Context<UpdateConfig>,
        account: Pubkey,
        excluded: bool,
    ) -> Result<()> {
        ixs::set_excluded_from_max_transfer(ctx, account, excluded)
    }

    pub fn set_operations_wallet(ctx: Context<UpdateConfig>, wallet: Pubkey) -> Result<()> {
        ixs::set_operations_wallet(ctx, wallet)
    }

    pub fn set_rewards_vault(ctx: Context<UpdateConfig>, vault: Pubkey) -> Result<()> {
        ixs::set_rewards_vault(ctx, vault)
    }

    pub fn set_liquidity_recipient(ctx: Context<UpdateConfig>, recipient: Pubkey) -> Result<()> {
        ixs::set_liquidity_recipient(ctx, recipient)
    }

    pub fn set_primary_pool(ctx: Context<UpdateConfig>, pool: Pubkey) -> Result<()> {
        ixs::set_primary_pool(ctx, pool)
    }

    pub fn set_exchange_router(ctx: Context<SetExchangeRouter>) -> Result<()> {
        ixs::set_exchange_router(ctx)
    }

    pub fn set_bot_protection_hook(ctx: Context<UpdateConfig>, hook: Pubkey) -> Result<()> {
        ixs::set_bot_protection_hook(ctx, hook)
    }

    pub fn set_bot_protection_enabled(ctx: Context<UpdateConfig>, enabled: bool) -> Result<()> {
        ixs::set_bot_protection_enabled(ctx, enabled)
    }

    pub fn disable_bot_protection_permanently(ctx: Context<UpdateConfig>) -> Result<()> {
        ixs::disable_bot_protection_permanently(ctx)
    }
}
