// Constant Product AMM Program
//
// Two-asset liquidity pools (x * y = k) keyed by a creator-chosen seed
// plus the token pair. Fees are taken from swap input and retained by
// the pool. An optional authority can freeze a pool; a pool created
// without one can never be locked.
//
// Instructions:
// - initialize_pool: Create a new pool for a token pair
// - deposit_liquidity: Add tokens, receive LP tokens
// - withdraw_liquidity: Burn LP tokens, receive tokens
// - swap_tokens: Exchange tokens using the constant product formula
// - lock_pool / unlock_pool: Emergency pause mechanism

use anchor_lang::prelude::*;

pub mod constants;
pub mod curve;
pub mod errors;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod cp_amm {
    use super::*;

    pub fn initialize_pool(
        ctx: Context<InitializePool>,
        seed: u64,
        fee_basis_points: u16,
        authority: Option<Pubkey>,
    ) -> Result<()> {
        ctx.accounts
            .initialize_pool(seed, fee_basis_points, authority, &ctx.bumps)
    }

    pub fn deposit_liquidity(
        ctx: Context<DepositLiquidity>,
        desired_x: u64,
        desired_y: u64,
        min_shares_out: u64,
        deadline: i64,
    ) -> Result<()> {
        ctx.accounts
            .deposit_liquidity(desired_x, desired_y, min_shares_out, deadline)
    }

    pub fn withdraw_liquidity(
        ctx: Context<WithdrawLiquidity>,
        shares_in: u64,
        min_x_out: u64,
        min_y_out: u64,
        deadline: i64,
    ) -> Result<()> {
        ctx.accounts
            .withdraw_liquidity(shares_in, min_x_out, min_y_out, deadline)
    }

    pub fn swap_tokens(
        ctx: Context<SwapTokens>,
        x_to_y: bool,
        amount_in: u64,
        min_amount_out: u64,
        deadline: i64,
    ) -> Result<()> {
        ctx.accounts
            .swap_tokens(x_to_y, amount_in, min_amount_out, deadline)
    }

    pub fn lock_pool(ctx: Context<LockPool>) -> Result<()> {
        ctx.accounts.lock_pool()
    }

    pub fn unlock_pool(ctx: Context<UnlockPool>) -> Result<()> {
        ctx.accounts.unlock_pool()
    }
}
