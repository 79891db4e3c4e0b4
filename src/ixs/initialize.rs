use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};
use crate::{
    constants::TOKEN_CONFIG_SEED,
    contexts::{GenesisWallets, TokenConfig},
    events::TokenConfigInitialized,
};

pub fn initialize(ctx: Context<Initialize>, wallets: GenesisWallets) -> Result<()> {
    let mint = &ctx.accounts.mint;
    let authority = ctx.accounts.authority.key();
    let holding = ctx.accounts.holding.key();

    ctx.accounts.config.set_inner(TokenConfig::genesis(
        authority,
        mint.key(),
        holding,
        ctx.bumps.config,
        mint.supply,
        wallets,
    )?);

    emit!(TokenConfigInitialized {
        mint: mint.key(),
        authority,
        holding,
        total_supply: mint.supply,
    });
    msg!("Token config initialized for mint {} with supply {}", mint.key(), mint.supply);

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = authority,
        space = TokenConfig::LEN,
        seeds = [TOKEN_CONFIG_SEED, mint.key().as_ref()],
        bump
    )]
    pub config: Account<'info, TokenConfig>,

    // Fee holding account, owned by the config PDA
    #[account(
        init_if_needed,
        payer = authority,
        associated_token::mint = mint,
        associated_token::authority = config
    )]
    pub holding: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}
