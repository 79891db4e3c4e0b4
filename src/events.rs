//! Change notifications emitted by the program.

use anchor_lang::prelude::*;

#[event]
pub struct TokenConfigInitialized {
    pub mint: Pubkey,
    pub authority: Pubkey,
    pub holding: Pubkey,
    pub total_supply: u64,
}

#[event]
pub struct FeesUpdated {
    pub operations_fee: u16,
    pub rewards_fee: u16,
}

#[event]
pub struct LiquidityShareUpdated {
    pub liquidity_share: u16,
}

#[event]
pub struct FeesEnabledUpdated {
    pub enabled: bool,
}

#[event]
pub struct SwapEnabledUpdated {
    pub enabled: bool,
}

#[event]
pub struct MaxTransferAmountUpdated {
    pub amount: u64,
}

#[event]
pub struct SwapThresholdUpdated {
    pub threshold: u64,
}

#[event]
pub struct ExcludedFromFeeUpdated {
    pub account: Pubkey,
    pub excluded: bool,
}

#[event]
pub struct ExcludedFromMaxTransferUpdated {
    pub account: Pubkey,
    pub excluded: bool,
}

#[event]
pub struct OperationsWalletUpdated {
    pub wallet: Pubkey,
}

#[event]
pub struct RewardsVaultUpdated {
    pub vault: Pubkey,
}

#[event]
pub struct LiquidityRecipientUpdated {
    pub recipient: Pubkey,
}

#[event]
pub struct PrimaryPoolUpdated {
    pub pool: Pubkey,
}

/// The router is bound and holds an unlimited allowance over the holding account.
#[event]
pub struct ExchangeRouterBound {
    pub router: Pubkey,
}

#[event]
pub struct BotProtectionHookBound {
    pub hook: Pubkey,
}

#[event]
pub struct BotProtectionToggled {
    pub enabled: bool,
}

#[event]
pub struct BotProtectionDisabledPermanently {}

/// Fee taken on a pool trade
#[event]
pub struct FeesCollected {
    pub sender: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    pub operations_fee: u64,
    pub rewards_fee: u64,
}

#[event]
pub struct SwapAndLiquify {
    pub tokens_processed: u64,
    pub tokens_swapped: u64,
    pub native_received: u64,
    pub native_for_operations: u64,
    pub native_for_liquidity: u64,
    pub tokens_for_liquidity: u64,
}

#[event]
pub struct SwapFailed {
    pub token_amount: u64,
}

#[event]
pub struct LiquidityAdded {
    pub token_amount: u64,
    pub native_amount: u64,
    pub recipient: Pubkey,
}

/// Tokens and native currency stay stranded in the holding account.
#[event]
pub struct LiquidityAddFailed {
    pub token_amount: u64,
    pub native_amount: u64,
}
