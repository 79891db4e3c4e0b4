use anchor_lang::prelude::*;
use crate::{
    constants::*,
    errors::TaxTokenError,
    events::*,
    fee_math::{self, FeeSplit},
};

/// Economic parameters read by every transfer. Rates are parts per thousand.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct FeeConfig {
    pub operations_fee: u16,
    pub rewards_fee: u16,
    pub liquidity_share: u16,
    pub fees_enabled: bool,
    pub swap_enabled: bool,
    pub max_transfer_amount: u64,
    pub swap_threshold: u64,
    pub operations_wallet: Pubkey,
    pub rewards_vault: Pubkey,
    pub liquidity_recipient: Pubkey,
    pub excluded_from_fee: Vec<Pubkey>,
    pub excluded_from_max_transfer: Vec<Pubkey>,
}

impl FeeConfig {
    pub const LEN: usize = 2 + 2 + 2 + // rates
        1 + 1 + // toggles
        8 + 8 + // limits
        32 + 32 + 32 + // wallets
        (4 + 32 * MAX_EXCLUDED_ACCOUNTS) * 2; // exclusion lists

    /// Launch parameters: near-maximal fees, 1% transfer cap, 0.05% swap threshold.
    pub fn genesis(
        total_supply: u64,
        operations_wallet: Pubkey,
        rewards_vault: Pubkey,
        liquidity_recipient: Pubkey,
        exempt: &[Pubkey],
    ) -> Result<Self> {
        require_keys_neq!(operations_wallet, Pubkey::default(), TaxTokenError::InvalidParameter);
        require_keys_neq!(rewards_vault, Pubkey::default(), TaxTokenError::InvalidParameter);

        let share_of_supply = |bps: u64| -> Result<u64> {
            let amount = (total_supply as u128 * bps as u128) / BPS_DENOMINATOR as u128;
            u64::try_from(amount).map_err(|_| error!(TaxTokenError::MathOverflow))
        };

        let mut config = Self {
            operations_fee: GENESIS_OPERATIONS_FEE,
            rewards_fee: GENESIS_REWARDS_FEE,
            liquidity_share: GENESIS_LIQUIDITY_SHARE,
            fees_enabled: true,
            swap_enabled: true,
            max_transfer_amount: share_of_supply(GENESIS_MAX_TRANSFER_BPS)?,
            swap_threshold: share_of_supply(GENESIS_SWAP_THRESHOLD_BPS)?.max(1),
            operations_wallet,
            rewards_vault,
            liquidity_recipient,
            excluded_from_fee: Vec::new(),
            excluded_from_max_transfer: Vec::new(),
        };
        for account in exempt {
            config.set_excluded_from_fee(*account, true)?;
            config.set_excluded_from_max_transfer(*account, true)?;
        }
        Ok(config)
    }

    /// Combined fee rate, zero while fees are switched off.
    pub fn total_fee_rate(&self) -> u16 {
        if self.fees_enabled {
            self.operations_fee + self.rewards_fee
        } else {
            0
        }
    }

    pub fn fee_split(&self, amount: u64) -> Result<FeeSplit> {
        fee_math::compute_fee_split(amount, self.operations_fee, self.rewards_fee)
    }

    pub fn is_excluded_from_fee(&self, account: &Pubkey) -> bool {
        self.excluded_from_fee.contains(account)
    }

    pub fn is_excluded_from_max_transfer(&self, account: &Pubkey) -> bool {
        self.excluded_from_max_transfer.contains(account)
    }

    pub fn set_fees(&mut self, operations_fee: u16, rewards_fee: u16) -> Result<FeesUpdated> {
        require!(operations_fee <= MAX_OPERATIONS_FEE, TaxTokenError::InvalidParameter);
        require!(rewards_fee <= MAX_REWARDS_FEE, TaxTokenError::InvalidParameter);
        self.operations_fee = operations_fee;
        self.rewards_fee = rewards_fee;
        Ok(FeesUpdated { operations_fee, rewards_fee })
    }

    pub fn set_liquidity_share(&mut self, liquidity_share: u16) -> Result<LiquidityShareUpdated> {
        require!(liquidity_share <= MAX_LIQUIDITY_SHARE, TaxTokenError::InvalidParameter);
        self.liquidity_share = liquidity_share;
        Ok(LiquidityShareUpdated { liquidity_share })
    }

    pub fn set_fees_enabled(&mut self, enabled: bool) -> FeesEnabledUpdated {
        self.fees_enabled = enabled;
        FeesEnabledUpdated { enabled }
    }

    pub fn set_swap_enabled(&mut self, enabled: bool) -> SwapEnabledUpdated {
        self.swap_enabled = enabled;
        SwapEnabledUpdated { enabled }
    }

    /// The cap must stay at or above 0.1% of `total_supply`.
    pub fn set_max_transfer_amount(
        &mut self,
        amount: u64,
        total_supply: u64,
    ) -> Result<MaxTransferAmountUpdated> {
        require!(
            amount as u128 * MIN_MAX_TRANSFER_DIVISOR as u128 >= total_supply as u128,
            TaxTokenError::InvalidParameter
        );
        self.max_transfer_amount = amount;
        Ok(MaxTransferAmountUpdated { amount })
    }

    pub fn set_swap_threshold(&mut self, threshold: u64) -> Result<SwapThresholdUpdated> {
        require!(threshold > 0, TaxTokenError::InvalidParameter);
        self.swap_threshold = threshold;
        Ok(SwapThresholdUpdated { threshold })
    }

    pub fn set_excluded_from_fee(
        &mut self,
        account: Pubkey,
        excluded: bool,
    ) -> Result<ExcludedFromFeeUpdated> {
        update_membership(&mut self.excluded_from_fee, account, excluded)?;
        Ok(ExcludedFromFeeUpdated { account, excluded })
    }

    pub fn set_excluded_from_max_transfer(
        &mut self,
        account: Pubkey,
        excluded: bool,
    ) -> Result<ExcludedFromMaxTransferUpdated> {
        update_membership(&mut self.excluded_from_max_transfer, account, excluded)?;
        Ok(ExcludedFromMaxTransferUpdated { account, excluded })
    }

    pub fn set_operations_wallet(&mut self, wallet: Pubkey) -> Result<OperationsWalletUpdated> {
        require_keys_neq!(wallet, Pubkey::default(), TaxTokenError::InvalidParameter);
        self.operations_wallet = wallet;
        Ok(OperationsWalletUpdated { wallet })
    }

    pub fn set_rewards_vault(&mut self, vault: Pubkey) -> Result<RewardsVaultUpdated> {
        require_keys_neq!(vault, Pubkey::default(), TaxTokenError::InvalidParameter);
        self.rewards_vault = vault;
        Ok(RewardsVaultUpdated { vault })
    }

    pub fn set_liquidity_recipient(&mut self, recipient: Pubkey) -> LiquidityRecipientUpdated {
        self.liquidity_recipient = recipient;
        LiquidityRecipientUpdated { recipient }
    }
}

fn update_membership(list: &mut Vec<Pubkey>, account: Pubkey, member: bool) -> Result<()> {
    let position = list.iter().position(|key| *key == account);
    match (member, position) {
        (true, None) => {
            require!(list.len() < MAX_EXCLUDED_ACCOUNTS, TaxTokenError::ExclusionListFull);
            list.push(account);
        }
        (false, Some(index)) => {
            list.swap_remove(index);
        }
        _ => {}
    }
    Ok(())
}
