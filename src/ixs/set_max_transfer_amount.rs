use anchor_lang::prelude::*;
use anchor_spl::token::Mint;
use crate::{
    constants::TOKEN_CONFIG_SEED,
    contexts::TokenConfig,
    ports::{Authorization, Role},
};

pub fn set_max_transfer_amount(ctx: Context<SetMaxTransferAmount>, amount: u64) -> Result<()> {
    ctx.accounts
        .config
        .admin()
        .require_role(&ctx.accounts.authority.key(), Role::Admin)?;

    // Checked against the supply as it stands now, not at launch
    let supply = ctx.accounts.mint.supply;
    let event = ctx.accounts.config.fees.set_max_transfer_amount(amount, supply)?;
    emit!(event);
    msg!("Max transfer amount set to {} of {}", amount, supply);

    Ok(())
}

#[derive(Accounts)]
pub struct SetMaxTransferAmount<'info> {
    #[account(
        mut,
        seeds = [TOKEN_CONFIG_SEED, mint.key().as_ref()],
        bump = config.bump,
        has_one = mint
    )]
    pub config: Account<'info, TokenConfig>,

    pub mint: Account<'info, Mint>,

    pub authority: Signer<'info>,
}
