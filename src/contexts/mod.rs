mod bindings;
mod fee_config;
mod token_config;

pub use bindings::*;
pub use fee_config::*;
pub use token_config::*;
