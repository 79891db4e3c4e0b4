use anchor_lang::prelude::*;
use crate::{errors::TaxTokenError, events::*};

/// Write-once address slot.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Latch {
    Unset,
    Set { key: Pubkey },
}

impl Default for Latch {
    fn default() -> Self {
        Latch::Unset
    }
}

impl Latch {
    pub const LEN: usize = 1 + 32;

    pub fn key(&self) -> Option<Pubkey> {
        match self {
            Latch::Unset => None,
            Latch::Set { key } => Some(*key),
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Latch::Set { .. })
    }

    pub fn bind(&mut self, key: Pubkey) -> Result<()> {
        require_keys_neq!(key, Pubkey::default(), TaxTokenError::InvalidParameter);
        match self {
            Latch::Unset => {
                *self = Latch::Set { key };
                Ok(())
            }
            Latch::Set { .. } => err!(TaxTokenError::AlreadySet),
        }
    }
}

/// Primary trading pair and the exchange router serving it.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PairBinding {
    /// May be moved to a new pool at any time.
    pub primary_pool: Pubkey,
    pub exchange_router: Latch,
}

impl PairBinding {
    pub const LEN: usize = 32 + Latch::LEN;

    pub fn is_pool(&self, account: &Pubkey) -> bool {
        self.primary_pool != Pubkey::default() && *account == self.primary_pool
    }

    /// Exactly one side is the primary pool: a buy or a sell.
    pub fn is_pool_trade(&self, sender: &Pubkey, recipient: &Pubkey) -> bool {
        self.is_pool(sender) != self.is_pool(recipient)
    }

    pub fn set_primary_pool(&mut self, pool: Pubkey) -> Result<PrimaryPoolUpdated> {
        require_keys_neq!(pool, Pubkey::default(), TaxTokenError::InvalidParameter);
        self.primary_pool = pool;
        Ok(PrimaryPoolUpdated { pool })
    }

    /// Caller is responsible for granting the router its allowance.
    pub fn bind_exchange_router(&mut self, router: Pubkey) -> Result<ExchangeRouterBound> {
        self.exchange_router.bind(router)?;
        Ok(ExchangeRouterBound { router })
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProtectionState {
    Disabled,
    Enabled,
    /// Terminal.
    PermanentlyDisabled,
}

impl Default for ProtectionState {
    fn default() -> Self {
        ProtectionState::Disabled
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BotProtectionBinding {
    pub hook: Latch,
    pub state: ProtectionState,
}

impl BotProtectionBinding {
    pub const LEN: usize = Latch::LEN + 1;

    pub fn is_enabled(&self) -> bool {
        self.state == ProtectionState::Enabled
    }

    pub fn is_permanently_disabled(&self) -> bool {
        self.state == ProtectionState::PermanentlyDisabled
    }

    /// Hook to consult on the next transfer, if any.
    pub fn active_hook(&self) -> Option<Pubkey> {
        if self.is_enabled() {
            self.hook.key()
        } else {
            None
        }
    }

    pub fn bind_hook(&mut self, hook: Pubkey) -> Result<BotProtectionHookBound> {
        self.hook.bind(hook)?;
        Ok(BotProtectionHookBound { hook })
    }

    pub fn set_enabled(&mut self, enabled: bool) -> Result<BotProtectionToggled> {
        require!(!self.is_permanently_disabled(), TaxTokenError::BotProtectionLocked);
        self.state = if enabled {
            ProtectionState::Enabled
        } else {
            ProtectionState::Disabled
        };
        Ok(BotProtectionToggled { enabled })
    }

    pub fn disable_permanently(&mut self) -> Result<BotProtectionDisabledPermanently> {
        require!(!self.is_permanently_disabled(), TaxTokenError::AlreadySet);
        self.state = ProtectionState::PermanentlyDisabled;
        Ok(BotProtectionDisabledPermanently {})
    }
}
