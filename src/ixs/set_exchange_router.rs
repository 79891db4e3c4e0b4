use anchor_lang::prelude::*;
use anchor_spl::token::{self, Approve, Token, TokenAccount};
use crate::{
    constants::TOKEN_CONFIG_SEED,
    contexts::TokenConfig,
    ports::{Authorization, Role},
};

pub fn set_exchange_router(ctx: Context<SetExchangeRouter>) -> Result<()> {
    let router = ctx.accounts.router.key();
    let config = &mut ctx.accounts.config;
    config
        .admin()
        .require_role(&ctx.accounts.authority.key(), Role::Admin)?;

    let event = config.pair.bind_exchange_router(router)?;

    // Unlimited delegate over the holding account, signed by the config PDA
    let mint = config.mint;
    let bump = [config.bump];
    let signer_seeds: &[&[u8]] = &[TOKEN_CONFIG_SEED, mint.as_ref(), &bump];
    token::approve(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Approve {
                to: ctx.accounts.holding.to_account_info(),
                delegate: ctx.accounts.router.to_account_info(),
                authority: config.to_account_info(),
            },
            &[signer_seeds],
        ),
        u64::MAX,
    )?;

    emit!(event);
    msg!("Exchange router bound: {}", router);

    Ok(())
}

#[derive(Accounts)]
pub struct SetExchangeRouter<'info> {
    #[account(
        mut,
        seeds = [TOKEN_CONFIG_SEED, config.mint.as_ref()],
        bump = config.bump,
        has_one = holding
    )]
    pub config: Account<'info, TokenConfig>,

    #[account(mut)]
    pub holding: Account<'info, TokenAccount>,

    /// CHECK: Only recorded and approved as delegate
    pub router: UncheckedAccount<'info>,

    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
}
