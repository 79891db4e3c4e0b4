use anchor_lang::prelude::*;
use crate::{constants::FEE_DENOMINATOR, errors::TaxTokenError};

/// Fee amounts carved out of a single transfer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeeSplit {
    pub operations_fee: u64,
    pub rewards_fee: u64,
}

impl FeeSplit {
    pub fn total(&self) -> Result<u64> {
        self.operations_fee
            .checked_add(self.rewards_fee)
            .ok_or_else(|| error!(TaxTokenError::MathOverflow))
    }

    /// What the recipient receives when the fee is applied.
    pub fn transfer_amount(&self, amount: u64) -> Result<u64> {
        amount
            .checked_sub(self.total()?)
            .ok_or_else(|| error!(TaxTokenError::MathOverflow))
    }
}

/// How a batch of holding tokens is divided before hitting the exchange.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SwapPlan {
    pub tokens_to_process: u64,
    pub tokens_for_liquidity: u64,
    /// Half of the liquidity tokens, kept as tokens and paired later.
    pub liquidity_token_portion: u64,
    /// Everything except `liquidity_token_portion`.
    pub swap_amount: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProceedsSplit {
    pub for_liquidity: u64,
    pub for_operations: u64,
}

/// amount * rate / 1000, truncating.
pub fn apply_rate(amount: u64, rate: u16) -> Result<u64> {
    let scaled = (amount as u128)
        .checked_mul(rate as u128)
        .ok_or(TaxTokenError::MathOverflow)?
        / FEE_DENOMINATOR as u128;
    u64::try_from(scaled).map_err(|_| error!(TaxTokenError::MathOverflow))
}

pub fn compute_fee_split(amount: u64, operations_fee: u16, rewards_fee: u16) -> Result<FeeSplit> {
    Ok(FeeSplit {
        operations_fee: apply_rate(amount, operations_fee)?,
        rewards_fee: apply_rate(amount, rewards_fee)?,
    })
}

pub fn plan_swap(tokens_to_process: u64, liquidity_share: u16) -> Result<SwapPlan> {
    let tokens_for_liquidity = apply_rate(tokens_to_process, liquidity_share)?;
    let liquidity_token_portion = tokens_for_liquidity / 2;
    let liquidity_token_to_swap = tokens_for_liquidity - liquidity_token_portion;

    let swap_amount = tokens_to_process
        .checked_sub(tokens_for_liquidity)
        .and_then(|rest| rest.checked_add(liquidity_token_to_swap))
        .ok_or(TaxTokenError::MathOverflow)?;

    Ok(SwapPlan {
        tokens_to_process,
        tokens_for_liquidity,
        liquidity_token_portion,
        swap_amount,
    })
}

pub fn split_proceeds(profit: u64, liquidity_share: u16) -> Result<ProceedsSplit> {
    let for_liquidity = apply_rate(profit, liquidity_share)?;
    let for_operations = profit
        .checked_sub(for_liquidity)
        .ok_or(TaxTokenError::MathOverflow)?;
    Ok(ProceedsSplit { for_liquidity, for_operations })
}
