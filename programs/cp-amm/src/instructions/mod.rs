// Instructions Module
//
// Exports all instruction handlers for the AMM program

pub mod initialize_pool;
pub mod deposit_liquidity;
pub mod withdraw_liquidity;
pub mod swap_tokens;
pub mod lock_pool;
pub mod unlock_pool;

pub use initialize_pool::*;
pub use deposit_liquidity::*;
pub use withdraw_liquidity::*;
pub use swap_tokens::*;
pub use lock_pool::*;
pub use unlock_pool::*;
