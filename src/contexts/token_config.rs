use anchor_lang::prelude::*;
use super::{BotProtectionBinding, FeeConfig, PairBinding};
use crate::{
    errors::TaxTokenError,
    ports::{Authorization, Role},
};

/// Wallets supplied at launch.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug)]
pub struct GenesisWallets {
    pub operations_wallet: Pubkey,
    pub rewards_vault: Pubkey,
    pub liquidity_recipient: Pubkey,
}

#[account]
#[derive(Debug)]
pub struct TokenConfig {
    pub authority: Pubkey,
    pub mint: Pubkey,
    /// Token account accumulating operations fees awaiting conversion.
    pub holding: Pubkey,
    pub bump: u8,
    pub fees: FeeConfig,
    pub pair: PairBinding,
    pub bot_protection: BotProtectionBinding,
}

impl TokenConfig {
    pub const LEN: usize = 8 + // discriminator
        32 + 32 + 32 + // authority, mint, holding
        1 + // bump
        FeeConfig::LEN +
        PairBinding::LEN +
        BotProtectionBinding::LEN;

    pub fn genesis(
        authority: Pubkey,
        mint: Pubkey,
        holding: Pubkey,
        bump: u8,
        total_supply: u64,
        wallets: GenesisWallets,
    ) -> Result<Self> {
        let fees = FeeConfig::genesis(
            total_supply,
            wallets.operations_wallet,
            wallets.rewards_vault,
            wallets.liquidity_recipient,
            &[authority, holding],
        )?;
        Ok(Self {
            authority,
            mint,
            holding,
            bump,
            fees,
            pair: PairBinding::default(),
            bot_protection: BotProtectionBinding::default(),
        })
    }

    pub fn admin(&self) -> ConfigAuthority {
        ConfigAuthority { authority: self.authority }
    }
}

/// Single-key authorization: the config authority holds every role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConfigAuthority {
    pub authority: Pubkey,
}

impl Authorization for ConfigAuthority {
    fn require_role(&self, caller: &Pubkey, role: Role) -> Result<()> {
        match role {
            Role::Admin => {
                require_keys_eq!(*caller, self.authority, TaxTokenError::Unauthorized);
                Ok(())
            }
        }
    }
}
