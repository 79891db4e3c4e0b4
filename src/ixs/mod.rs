mod initialize;
mod configure;
mod set_max_transfer_amount;
mod set_exchange_router;

// Explicitly export the instruction functions
pub use initialize::*;
pub use configure::*;
pub use set_max_transfer_amount::*;
pub use set_exchange_router::*;
