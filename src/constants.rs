/// Divisor for every fee and share rate (parts per thousand).
pub const FEE_DENOMINATOR: u64 = 1_000;

pub const MAX_OPERATIONS_FEE: u16 = 200;
pub const MAX_REWARDS_FEE: u16 = 100;
pub const MAX_LIQUIDITY_SHARE: u16 = 1_000;

/// The transfer cap may never drop below total_supply / MIN_MAX_TRANSFER_DIVISOR (0.1%).
pub const MIN_MAX_TRANSFER_DIVISOR: u64 = 1_000;

pub const MAX_EXCLUDED_ACCOUNTS: usize = 32;

// Genesis defaults, lowered by the authority after launch
pub const GENESIS_OPERATIONS_FEE: u16 = 990;
pub const GENESIS_REWARDS_FEE: u16 = 0;
pub const GENESIS_LIQUIDITY_SHARE: u16 = 400;
pub const GENESIS_MAX_TRANSFER_BPS: u64 = 100; // 1% of supply
pub const GENESIS_SWAP_THRESHOLD_BPS: u64 = 5; // 0.05% of supply
pub const BPS_DENOMINATOR: u64 = 10_000;

pub const TOKEN_CONFIG_SEED: &[u8] = b"token-config";
