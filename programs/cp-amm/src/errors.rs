use anchor_lang::prelude::*;

#[error_code]
pub enum AmmError {
    #[msg("Fee basis points must be below 10000 (100%)")]
    InvalidFee,

    #[msg("Token mints must be different - cannot create pool with same token")]
    IdenticalTokenMints,

    #[msg("Only the pool authority can perform this action")]
    InvalidAuthority,

    #[msg("Pool is currently locked - operations are disabled")]
    PoolLocked,

    #[msg("Transaction deadline has expired")]
    TransactionExpired,

    #[msg("Deadline is too far in the future")]
    ExpirationTooFar,

    #[msg("Deposit amount cannot be zero")]
    ZeroDepositAmount,

    #[msg("Withdrawal amount cannot be zero")]
    ZeroWithdrawAmount,

    #[msg("Swap amount cannot be zero")]
    ZeroSwapAmount,

    #[msg("Caller does not hold enough LP tokens")]
    InsufficientShares,

    #[msg("Pool does not have enough liquidity for this operation")]
    InsufficientLiquidity,

    #[msg("Output is below minimum required (slippage protection)")]
    SlippageExceeded,

    #[msg("Arithmetic overflow occurred")]
    Overflow,

    #[msg("Arithmetic underflow occurred")]
    Underflow,

    #[msg("Division by zero attempted")]
    DivisionByZero,

    #[msg("Constant product invariant decreased - operation aborted")]
    InvariantViolation,
}
