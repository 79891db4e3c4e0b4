//! Lock around the swap-and-liquidity sequence.
//!
//! The exchange moves tokens through `transfer` while a swap is in flight, so
//! the lock lives in a `Cell` shared with the transfer path, and release is
//! tied to `Drop` so no exit path can leave it held.

use anchor_lang::prelude::*;
use std::cell::Cell;
use crate::errors::TaxTokenError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SwapLockStatus {
    #[default]
    Unlocked,
    Swapping,
}

/// Scoped guard that holds the swap lock until dropped.
pub struct SwapLock<'a> {
    status: &'a Cell<SwapLockStatus>,
}

impl<'a> SwapLock<'a> {
    pub fn acquire(status: &'a Cell<SwapLockStatus>) -> Result<Self> {
        match status.get() {
            SwapLockStatus::Unlocked => {
                status.set(SwapLockStatus::Swapping);
                Ok(Self { status })
            }
            SwapLockStatus::Swapping => err!(TaxTokenError::ReentrancyDetected),
        }
    }

    pub fn is_held(status: &Cell<SwapLockStatus>) -> bool {
        status.get() != SwapLockStatus::Unlocked
    }
}

impl Drop for SwapLock<'_> {
    fn drop(&mut self) {
        self.status.set(SwapLockStatus::Unlocked);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_lock_lifecycle() {
        let status = Cell::new(SwapLockStatus::Unlocked);

        let guard = SwapLock::acquire(&status).unwrap();
        assert!(SwapLock::is_held(&status));
        assert_eq!(
            SwapLock::acquire(&status).err().unwrap(),
            anchor_lang::error::Error::from(TaxTokenError::ReentrancyDetected)
        );

        drop(guard);
        assert!(!SwapLock::is_held(&status));
        assert!(SwapLock::acquire(&status).is_ok());
    }

    #[test]
    fn test_swap_lock_released_on_early_return() {
        fn failing_section(status: &Cell<SwapLockStatus>) -> Result<()> {
            let _lock = SwapLock::acquire(status)?;
            err!(TaxTokenError::ExternalPortFailure)
        }

        let status = Cell::new(SwapLockStatus::Unlocked);
        assert!(failing_section(&status).is_err());
        assert_eq!(status.get(), SwapLockStatus::Unlocked);
    }
}
