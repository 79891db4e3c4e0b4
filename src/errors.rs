use anchor_lang::prelude::*;

#[error_code]
pub enum TaxTokenError {
    #[msg("The caller is not authorized for this action.")]
    Unauthorized,

    #[msg("A parameter is outside its allowed bounds.")]
    InvalidParameter,

    #[msg("This binding can only be set once.")]
    AlreadySet,

    #[msg("Transfer amount exceeds the maximum transfer amount.")]
    LimitExceeded,

    #[msg("Transfer rejected by bot protection.")]
    BotProtectionRejected,

    #[msg("Insufficient balance")]
    InsufficientBalance,

    #[msg("External exchange call failed")]
    ExternalPortFailure,

    #[msg("Mathematical overflow occurred.")]
    MathOverflow,

    #[msg("Swap already in progress")]
    ReentrancyDetected,

    #[msg("Exclusion list is full")]
    ExclusionListFull,

    #[msg("Bot protection has been permanently disabled.")]
    BotProtectionLocked,
}
