use anchor_lang::prelude::*;
use crate::{
    constants::TOKEN_CONFIG_SEED,
    contexts::TokenConfig,
    ports::{Authorization, Role},
};

fn authorize(accounts: &UpdateConfig) -> Result<()> {
    accounts
        .config
        .admin()
        .require_role(&accounts.authority.key(), Role::Admin)
}

pub fn set_fees(ctx: Context<UpdateConfig>, operations_fee: u16, rewards_fee: u16) -> Result<()> {
    authorize(&ctx.accounts)?;
    let event = ctx.accounts.config.fees.set_fees(operations_fee, rewards_fee)?;
    emit!(event);
    msg!("Fees set: operations {} rewards {} (per mille)", operations_fee, rewards_fee);
    Ok(())
}

pub fn set_liquidity_share(ctx: Context<UpdateConfig>, liquidity_share: u16) -> Result<()> {
    authorize(&ctx.accounts)?;
    let event = ctx.accounts.config.fees.set_liquidity_share(liquidity_share)?;
    emit!(event);
    Ok(())
}

pub fn set_fees_enabled(ctx: Context<UpdateConfig>, enabled: bool) -> Result<()> {
    authorize(&ctx.accounts)?;
    let event = ctx.accounts.config.fees.set_fees_enabled(enabled);
    emit!(event);
    Ok(())
}

pub fn set_swap_enabled(ctx: Context<UpdateConfig>, enabled: bool) -> Result<()> {
    authorize(&ctx.accounts)?;
    let event = ctx.accounts.config.fees.set_swap_enabled(enabled);
    emit!(event);
    Ok(())
}

pub fn set_swap_threshold(ctx: Context<UpdateConfig>, threshold: u64) -> Result<()> {
    authorize(&ctx.accounts)?;
    let event = ctx.accounts.config.fees.set_swap_threshold(threshold)?;
    emit!(event);
    Ok(())
}

pub fn set_excluded_from_fee(ctx: Context<UpdateConfig>, account: Pubkey, excluded: bool) -> Result<()> {
    authorize(&ctx.accounts)?;
    let event = ctx.accounts.config.fees.set_excluded_from_fee(account, excluded)?;
    emit!(event);
    Ok(())
}

pub fn set_excluded_from_max_transfer(
    ctx: Context<UpdateConfig>,
    account: Pubkey,
    excluded: bool,
) -> Result<()> {
    authorize(&ctx.accounts)?;
    let event = ctx
        .accounts
        .config
        .fees
        .set_excluded_from_max_transfer(account, excluded)?;
    emit!(event);
    Ok(())
}

pub fn set_operations_wallet(ctx: Context<UpdateConfig>, wallet: Pubkey) -> Result<()> {
    authorize(&ctx.accounts)?;
    let event = ctx.accounts.config.fees.set_operations_wallet(wallet)?;
    emit!(event);
    Ok(())
}

pub fn set_rewards_vault(ctx: Context<UpdateConfig>, vault: Pubkey) -> Result<()> {
    authorize(&ctx.accounts)?;
    let event = ctx.accounts.config.fees.set_rewards_vault(vault)?;
    emit!(event);
    Ok(())
}

pub fn set_liquidity_recipient(ctx: Context<UpdateConfig>, recipient: Pubkey) -> Result<()> {
    authorize(&ctx.accounts)?;
    let event = ctx.accounts.config.fees.set_liquidity_recipient(recipient);
    emit!(event);
    Ok(())
}

pub fn set_primary_pool(ctx: Context<UpdateConfig>, pool: Pubkey) -> Result<()> {
    authorize(&ctx.accounts)?;
    let event = ctx.accounts.config.pair.set_primary_pool(pool)?;
    emit!(event);
    msg!("Primary pool set to {}", pool);
    Ok(())
}

pub fn set_bot_protection_hook(ctx: Context<UpdateConfig>, hook: Pubkey) -> Result<()> {
    authorize(&ctx.accounts)?;
    let event = ctx.accounts.config.bot_protection.bind_hook(hook)?;
    emit!(event);
    Ok(())
}

pub fn set_bot_protection_enabled(ctx: Context<UpdateConfig>, enabled: bool) -> Result<()> {
    authorize(&ctx.accounts)?;
    let event = ctx.accounts.config.bot_protection.set_enabled(enabled)?;
    emit!(event);
    Ok(())
}

pub fn disable_bot_protection_permanently(ctx: Context<UpdateConfig>) -> Result<()> {
    authorize(&ctx.accounts)?;
    let event = ctx.accounts.config.bot_protection.disable_permanently()?;
    emit!(event);
    msg!("Bot protection permanently disabled");
    Ok(())
}

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(
        mut,
        seeds = [TOKEN_CONFIG_SEED, config.mint.as_ref()],
        bump = config.bump
    )]
    pub config: Account<'info, TokenConfig>,

    pub authority: Signer<'info>,
}
