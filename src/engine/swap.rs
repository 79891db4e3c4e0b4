use anchor_lang::prelude::*;
use super::{transaction::Transaction, TaxToken};
use crate::{
    events::{LiquidityAddFailed, LiquidityAdded, SwapAndLiquify, SwapFailed},
    fee_math::{self, ProceedsSplit, SwapPlan},
    reentrancy::SwapLock,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwapOutcome {
    /// Swap disabled, router unbound, or holding balance at or below threshold.
    Skipped,
    /// Another swap is in flight further up the stack.
    Locked,
    /// The exchange refused the swap; holding tokens stay for the next attempt.
    SwapFailed,
    Swapped(SwapReport),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapReport {
    pub plan: SwapPlan,
    /// Measured as the holding account's native balance delta.
    pub native_received: u64,
    pub proceeds: ProceedsSplit,
    pub liquidity_added: bool,
}

struct SwapSettings {
    holding: Pubkey,
    enabled: bool,
    router_bound: bool,
    threshold: u64,
    max_transfer_amount: u64,
    liquidity_share: u16,
    operations_wallet: Pubkey,
    liquidity_recipient: Pubkey,
}

impl TaxToken<'_> {
    fn swap_settings(&self) -> SwapSettings {
        let config = self.config.borrow();
        SwapSettings {
            holding: config.holding,
            enabled: config.fees.swap_enabled,
            router_bound: config.pair.exchange_router.is_set(),
            threshold: config.fees.swap_threshold,
            max_transfer_amount: config.fees.max_transfer_amount,
            liquidity_share: config.fees.liquidity_share,
            operations_wallet: config.fees.operations_wallet,
            liquidity_recipient: config.fees.liquidity_recipient,
        }
    }

    /// Convert one batch of the holding balance and reinvest part of the proceeds.
    ///
    /// Exchange failures are absorbed and their partial effects undone; only a
    /// failed operations payout propagates, failing the enclosing transfer.
    pub(crate) fn maybe_swap(&self) -> Result<SwapOutcome> {
        let _lock = SwapLock::acquire(&self.swap_lock)?;
        let settings = self.swap_settings();

        if !settings.enabled || !settings.router_bound {
            return Ok(SwapOutcome::Skipped);
        }
        let contract_balance = self.ports.ledger.balance_of(&settings.holding);
        if contract_balance <= settings.threshold {
            return Ok(SwapOutcome::Skipped);
        }

        let tokens_to_process = settings.threshold.min(settings.max_transfer_amount);
        let plan = fee_math::plan_swap(tokens_to_process, settings.liquidity_share)?;

        let treasury = self.ports.treasury;
        let native_before = treasury.balance_of(&settings.holding);
        // A refused call leaves nothing behind, even if it moved funds first
        let swap_tx = Transaction::begin(self.ports);
        let reported = match self.ports.exchange.swap_to_reference(self, plan.swap_amount) {
            Ok(reported) => {
                swap_tx.commit();
                reported
            }
            Err(err) => {
                drop(swap_tx);
                msg!("Swap of {} tokens failed: {}", plan.swap_amount, err);
                emit!(SwapFailed { token_amount: plan.swap_amount });
                return Ok(SwapOutcome::SwapFailed);
            }
        };
        let native_received = treasury
            .balance_of(&settings.holding)
            .saturating_sub(native_before);
        if reported != native_received {
            msg!("Exchange reported {} but delivered {}", reported, native_received);
        }

        let proceeds = fee_math::split_proceeds(native_received, settings.liquidity_share)?;
        if proceeds.for_operations > 0 {
            treasury.transfer(&settings.holding, &settings.operations_wallet, proceeds.for_operations)?;
        }

        let mut liquidity_added = false;
        if proceeds.for_liquidity > 0 {
            let liquidity_tx = Transaction::begin(self.ports);
            match self.ports.exchange.add_liquidity(
                self,
                plan.liquidity_token_portion,
                proceeds.for_liquidity,
                &settings.liquidity_recipient,
            ) {
                Ok(()) => {
                    liquidity_tx.commit();
                    liquidity_added = true;
                    emit!(LiquidityAdded {
                        token_amount: plan.liquidity_token_portion,
                        native_amount: proceeds.for_liquidity,
                        recipient: settings.liquidity_recipient,
                    });
                }
                Err(err) => {
                    drop(liquidity_tx);
                    msg!("Add liquidity failed, funds remain in holding: {}", err);
                    emit!(LiquidityAddFailed {
                        token_amount: plan.liquidity_token_portion,
                        native_amount: proceeds.for_liquidity,
                    });
                }
            }
        }

        emit!(SwapAndLiquify {
            tokens_processed: plan.tokens_to_process,
            tokens_swapped: plan.swap_amount,
            native_received,
            native_for_operations: proceeds.for_operations,
            native_for_liquidity: proceeds.for_liquidity,
            tokens_for_liquidity: plan.liquidity_token_portion,
        });

        Ok(SwapOutcome::Swapped(SwapReport {
            plan,
            native_received,
            proceeds,
            liquidity_added,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_utils::Harness;
    use crate::errors::TaxTokenError;
    use crate::ports::{Ledger, NativeTreasury};
    use crate::reentrancy::SwapLock;
    use anchor_lang::error::Error;

    /// Launch, set a 1000-token threshold and park `holding` tokens in the holding account.
    fn primed(harness: &Harness, holding: u64) -> crate::engine::TaxToken<'_> {
        let token = harness.launch();
        token.set_swap_threshold(&harness.admin, 1_000).unwrap();
        token.transfer(harness.admin, token.holding(), holding).unwrap();
        token
    }

    fn swapped(outcome: SwapOutcome) -> SwapReport {
        match outcome {
            SwapOutcome::Swapped(report) => report,
            other => panic!("expected a swap, got {:?}", other),
        }
    }

    #[test]
    fn test_below_threshold_is_a_no_op() {
        let harness = Harness::new();
        let token = primed(&harness, 1_000);
        let native_before = harness.treasury.balance_of(&token.holding());

        for _ in 0..2 {
            assert_eq!(token.maybe_swap().unwrap(), SwapOutcome::Skipped);
            assert_eq!(token.holding_balance(), 1_000);
            assert_eq!(harness.treasury.balance_of(&token.holding()), native_before);
        }
        assert!(harness.exchange.swaps().is_empty());
    }

    #[test]
    fn test_transfer_triggers_swap_and_liquidity() {
        let harness = Harness::new();
        let token = primed(&harness, 1_500);

        let receipt = token.transfer(harness.admin, Pubkey::new_unique(), 10).unwrap();
        let report = swapped(receipt.swap);

        assert_eq!(report.plan.tokens_to_process, 1_000);
        assert_eq!(report.plan.tokens_for_liquidity, 400);
        assert_eq!(report.plan.liquidity_token_portion, 200);
        assert_eq!(report.plan.swap_amount, 800);

        // 800 tokens at 8 tokens per native unit
        assert_eq!(report.native_received, 100);
        assert_eq!(report.proceeds.for_liquidity, 40);
        assert_eq!(report.proceeds.for_operations, 60);
        assert!(report.liquidity_added);

        assert_eq!(harness.treasury.balance_of(&harness.operations_wallet), 60);
        assert_eq!(harness.exchange.liquidity(), vec![(200, 40, harness.liquidity_recipient)]);
        assert_eq!(token.holding_balance(), 500);
        assert_eq!(harness.treasury.balance_of(&token.holding()), 0);
        assert_eq!(harness.ledger.circulating(), Harness::SUPPLY as u128);
    }

    #[test]
    fn test_swap_reenters_transfer_without_nesting() {
        let harness = Harness::new();
        let token = primed(&harness, 5_000);

        token.transfer(harness.admin, Pubkey::new_unique(), 10).unwrap();

        assert_eq!(harness.exchange.swaps(), vec![800]);
        assert_eq!(harness.exchange.lock_observed(), vec![true]);
        // Both exchange pulls (swap and liquidity) saw the lock held
        assert_eq!(harness.exchange.inner_outcomes(), vec![SwapOutcome::Locked, SwapOutcome::Locked]);
        assert!(!token.swap_in_progress());
    }

    #[test]
    fn test_batch_capped_by_max_transfer() {
        let harness = Harness::new();
        let token = primed(&harness, 6_000);
        token.set_max_transfer_amount(&harness.admin, 1_000).unwrap();
        token.set_swap_threshold(&harness.admin, 5_000).unwrap();

        let report = swapped(token.maybe_swap().unwrap());
        assert_eq!(report.plan.tokens_to_process, 1_000);
    }

    #[test]
    fn test_failed_swap_keeps_tokens_and_transfer_succeeds() {
        let harness = Harness::new();
        let token = primed(&harness, 1_500);
        let (alice, bob) = (Pubkey::new_unique(), Pubkey::new_unique());
        harness.exchange.fail_swaps(true);

        let receipt = token.transfer(harness.admin, bob, 10).unwrap();
        assert_eq!(receipt.swap, SwapOutcome::SwapFailed);
        assert_eq!(harness.ledger.balance_of(&bob), 10);
        assert_eq!(token.holding_balance(), 1_500);
        assert!(!token.swap_in_progress());

        // Next eligible transfer retries the same batch
        harness.exchange.fail_swaps(false);
        let receipt = token.transfer(bob, alice, 10).unwrap();
        assert_eq!(swapped(receipt.swap).plan.swap_amount, 800);
    }

    #[test]
    fn test_failed_liquidity_strands_funds() {
        let harness = Harness::new();
        let token = primed(&harness, 1_500);
        harness.exchange.fail_liquidity(true);

        let report = swapped(token.maybe_swap().unwrap());
        assert!(!report.liquidity_added);
        assert_eq!(harness.treasury.balance_of(&harness.operations_wallet), 60);
        // 200 tokens and 40 native units stay behind
        assert_eq!(token.holding_balance(), 700);
        assert_eq!(harness.treasury.balance_of(&token.holding()), 40);
    }

    #[test]
    fn test_exchange_failure_after_pull_is_undone() {
        let harness = Harness::new();
        let token = primed(&harness, 1_500);
        let pool_tokens = harness.ledger.balance_of(&harness.pool);
        harness.exchange.fail_after_pull(true);

        assert_eq!(token.maybe_swap().unwrap(), SwapOutcome::SwapFailed);
        assert_eq!(token.holding_balance(), 1_500);
        assert_eq!(harness.ledger.balance_of(&harness.pool), pool_tokens);
        assert_eq!(harness.treasury.balance_of(&token.holding()), 0);
        assert_eq!(harness.treasury.balance_of(&harness.pool), Harness::POOL_NATIVE);
    }

    #[test]
    fn test_failed_operations_payout_fails_transfer() {
        let harness = Harness::new();
        let token = primed(&harness, 1_500);
        let bob = Pubkey::new_unique();
        let ops_native = u64::MAX - 10;
        harness.treasury.fund(&harness.operations_wallet, ops_native).unwrap();
        let admin_tokens = harness.ledger.balance_of(&harness.admin);
        let pool_tokens = harness.ledger.balance_of(&harness.pool);

        assert_eq!(
            token.transfer(harness.admin, bob, 10).unwrap_err(),
            Error::from(TaxTokenError::MathOverflow)
        );

        // The exchange did swap, and all of it was undone with the transfer
        assert_eq!(harness.exchange.swaps(), vec![800]);
        assert_eq!(token.holding_balance(), 1_500);
        assert_eq!(harness.ledger.balance_of(&harness.admin), admin_tokens);
        assert_eq!(harness.ledger.balance_of(&bob), 0);
        assert_eq!(harness.ledger.balance_of(&harness.pool), pool_tokens);
        assert_eq!(harness.treasury.balance_of(&token.holding()), 0);
        assert_eq!(harness.treasury.balance_of(&harness.pool), Harness::POOL_NATIVE);
        assert_eq!(harness.treasury.balance_of(&harness.operations_wallet), ops_native);
        assert_eq!(harness.ledger.circulating(), Harness::SUPPLY as u128);
        assert!(!token.swap_in_progress());
    }

    #[test]
    fn test_holding_sender_cannot_spend_tokens_its_swap_used() {
        let harness = Harness::new();
        let token = primed(&harness, 1_500);
        let bob = Pubkey::new_unique();
        let pool_tokens = harness.ledger.balance_of(&harness.pool);

        assert_eq!(
            token.transfer(token.holding(), bob, 1_500).unwrap_err(),
            Error::from(TaxTokenError::InsufficientBalance)
        );

        assert_eq!(token.holding_balance(), 1_500);
        assert_eq!(harness.ledger.balance_of(&bob), 0);
        assert_eq!(harness.ledger.balance_of(&harness.pool), pool_tokens);
        assert_eq!(harness.treasury.balance_of(&token.holding()), 0);
        assert_eq!(harness.treasury.balance_of(&harness.operations_wallet), 0);
        assert_eq!(harness.treasury.balance_of(&harness.pool), Harness::POOL_NATIVE);

        // Within what remains after the batch, the same sender succeeds
        let receipt = token.transfer(token.holding(), bob, 500).unwrap();
        assert!(matches!(receipt.swap, SwapOutcome::Swapped(_)));
        assert_eq!(harness.ledger.balance_of(&bob), 500);
        assert_eq!(token.holding_balance(), 0);
    }

    #[test]
    fn test_undelivered_proceeds_pay_nothing() {
        let harness = Harness::new();
        let token = primed(&harness, 1_500);
        harness.exchange.divert_proceeds(true);

        // The exchange reports proceeds it never delivered to the holding account
        let report = swapped(token.maybe_swap().unwrap());
        assert_eq!(report.native_received, 0);
        assert!(!report.liquidity_added);
        assert_eq!(harness.treasury.balance_of(&harness.operations_wallet), 0);
        assert!(harness.exchange.liquidity().is_empty());
    }

    #[test]
    fn test_profit_measured_not_reported() {
        let harness = Harness::new();
        let token = primed(&harness, 1_500);
        harness.exchange.over_report(5_000);

        let report = swapped(token.maybe_swap().unwrap());
        assert_eq!(report.native_received, 100);
        assert_eq!(report.proceeds.for_operations, 60);
    }

    #[test]
    fn test_pool_sells_do_not_trigger() {
        let harness = Harness::new();
        let token = primed(&harness, 1_500);

        let receipt = token.transfer(harness.pool, Pubkey::new_unique(), 100).unwrap();
        assert_eq!(receipt.swap, SwapOutcome::Skipped);
        assert!(harness.exchange.swaps().is_empty());
    }

    #[test]
    fn test_swap_disabled_or_unbound() {
        let harness = Harness::new();
        let token = primed(&harness, 1_500);
        token.set_swap_enabled(&harness.admin, false).unwrap();
        assert_eq!(token.maybe_swap().unwrap(), SwapOutcome::Skipped);

        let unbound = harness.token();
        unbound.set_swap_threshold(&harness.admin, 1_000).unwrap();
        unbound.transfer(harness.admin, unbound.holding(), 1_500).unwrap();
        assert_eq!(unbound.maybe_swap().unwrap(), SwapOutcome::Skipped);
        assert!(harness.exchange.swaps().is_empty());
    }

    #[test]
    fn test_nested_swap_is_refused() {
        let harness = Harness::new();
        let token = primed(&harness, 1_500);

        let _lock = SwapLock::acquire(&token.swap_lock).unwrap();
        assert_eq!(
            token.maybe_swap().unwrap_err(),
            Error::from(TaxTokenError::ReentrancyDetected)
        );
        let receipt = token.transfer(harness.admin, Pubkey::new_unique(), 1).unwrap();
        assert_eq!(receipt.swap, SwapOutcome::Locked);
    }
}
