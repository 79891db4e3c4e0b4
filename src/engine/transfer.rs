use anchor_lang::prelude::*;
use super::{transaction::Transaction, SwapOutcome, TaxToken};
use crate::{errors::TaxTokenError, events::FeesCollected};

/// Where a transfer's value ended up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransferReceipt {
    pub received: u64,
    pub operations_fee: u64,
    pub rewards_fee: u64,
    pub swap: SwapOutcome,
}

impl TaxToken<'_> {
    /// Move `amount` from `sender` to `recipient`, taxing pool trades and
    /// converting previously collected fees when the holding balance allows.
    ///
    /// All or nothing: on error no balance differs from before the call,
    /// including anything a triggered swap already moved.
    pub fn transfer(&self, sender: Pubkey, recipient: Pubkey, amount: u64) -> Result<TransferReceipt> {
        let tx = Transaction::begin(self.ports);
        let receipt = self.apply_transfer(sender, recipient, amount)?;
        tx.commit();
        Ok(receipt)
    }

    fn apply_transfer(&self, sender: Pubkey, recipient: Pubkey, amount: u64) -> Result<TransferReceipt> {
        // 1. Transfer cap, buys and sells only
        {
            let config = self.config.borrow();
            if config.pair.is_pool_trade(&sender, &recipient)
                && !config.fees.is_excluded_from_max_transfer(&sender)
                && !config.fees.is_excluded_from_max_transfer(&recipient)
            {
                require!(
                    amount <= config.fees.max_transfer_amount,
                    TaxTokenError::LimitExceeded
                );
            }
        }

        // 2. Bot protection
        let hook = self.config.borrow().bot_protection.active_hook();
        if let Some(hook) = hook {
            self.ports
                .bot_protection
                .inspect(&hook, &sender, &recipient, amount)
                .map_err(|err| {
                    msg!("Bot protection rejected {} -> {}: {}", sender, recipient, err);
                    error!(TaxTokenError::BotProtectionRejected)
                })?;
        }

        // 3. Fee split, whether or not it ends up applied
        let split = self.config.borrow().fees.fee_split(amount)?;
        let received_after_fee = split.transfer_amount(amount)?;

        require!(
            self.ports.ledger.balance_of(&sender) >= amount,
            TaxTokenError::InsufficientBalance
        );

        // 4. Convert accumulated fees before moving this transfer's value
        let should_swap = {
            let config = self.config.borrow();
            !config.pair.is_pool(&sender) && config.fees.swap_enabled
        };
        let swap = if self.swap_in_progress() {
            SwapOutcome::Locked
        } else if should_swap {
            self.maybe_swap()?
        } else {
            SwapOutcome::Skipped
        };

        // 5. Balance movement. The swap may have spent the sender's tokens
        // when the sender is the holding account; debit fails in that case.
        let (take_fee, holding, rewards_vault) = {
            let config = self.config.borrow();
            let take_fee = config.fees.fees_enabled
                && config.pair.is_pool_trade(&sender, &recipient)
                && !config.fees.is_excluded_from_fee(&sender)
                && !config.fees.is_excluded_from_fee(&recipient);
            (take_fee, config.holding, config.fees.rewards_vault)
        };

        let ledger = self.ports.ledger;
        ledger.debit(&sender, amount)?;

        if !take_fee {
            ledger.credit(&recipient, amount)?;
            return Ok(TransferReceipt {
                received: amount,
                operations_fee: 0,
                rewards_fee: 0,
                swap,
            });
        }

        ledger.credit(&recipient, received_after_fee)?;
        if split.operations_fee > 0 {
            ledger.credit(&holding, split.operations_fee)?;
        }
        if split.rewards_fee > 0 {
            ledger.credit(&rewards_vault, split.rewards_fee)?;
        }

        emit!(FeesCollected {
            sender,
            recipient,
            amount,
            operations_fee: split.operations_fee,
            rewards_fee: split.rewards_fee,
        });

        Ok(TransferReceipt {
            received: received_after_fee,
            operations_fee: split.operations_fee,
            rewards_fee: split.rewards_fee,
            swap,
        })
    }
}
