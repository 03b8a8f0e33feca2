// Pool Configuration State
//
// One record per pool, keyed by a creator-chosen seed plus the token
// pair. Reserves and LP supply tracked here are the source of truth
// for pricing; the vaults mirror them. All operation decision logic
// lives on this type - instruction handlers only add account plumbing
// and the custody CPIs implied by the returned amounts.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::curve::{self, DepositAmounts, WithdrawAmounts};
use crate::errors::*;

/// Amounts moved by a completed swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapAmounts {
    pub amount_in: u64,
    pub amount_out: u64,
}

#[account]
#[derive(InitSpace)]
pub struct PoolConfig {
    pub seed: u64,                  // Distinguishes pools over the same pair
    pub authority: Option<Pubkey>,  // Can lock/unlock; None = never lockable
    pub mint_x: Pubkey,             // Token X mint
    pub mint_y: Pubkey,             // Token Y mint
    pub lp_mint: Pubkey,            // LP token mint
    pub fee_basis_points: u16,      // Swap fee (e.g., 30 = 0.30%)
    pub locked: bool,               // Emergency pause state
    pub reserve_x: u64,             // Custodied balance of token X
    pub reserve_y: u64,             // Custodied balance of token Y
    pub lp_supply: u64,             // Outstanding LP tokens
    pub config_bump: u8,            // PDA bump for config
    pub authority_bump: u8,         // PDA bump for pool authority
    pub lp_mint_bump: u8,           // PDA bump for LP mint
}

impl PoolConfig {
    #[allow(clippy::too_many_arguments)]
    pub fn init(
        &mut self,
        seed: u64,
        authority: Option<Pubkey>,
        mint_x: Pubkey,
        mint_y: Pubkey,
        lp_mint: Pubkey,
        fee_basis_points: u16,
        config_bump: u8,
        authority_bump: u8,
        lp_mint_bump: u8,
    ) -> Result<()> {
        require!(fee_basis_points < BPS_DENOMINATOR, AmmError::InvalidFee);
        require!(mint_x != mint_y, AmmError::IdenticalTokenMints);

        self.seed = seed;
        self.authority = authority;
        self.mint_x = mint_x;
        self.mint_y = mint_y;
        self.lp_mint = lp_mint;
        self.fee_basis_points = fee_basis_points;
        self.locked = false;
        self.reserve_x = 0;
        self.reserve_y = 0;
        self.lp_supply = 0;
        self.config_bump = config_bump;
        self.authority_bump = authority_bump;
        self.lp_mint_bump = lp_mint_bump;

        Ok(())
    }

    pub fn assert_is_authority(&self, caller: &Pubkey) -> Result<()> {
        match self.authority {
            Some(authority) if authority == *caller => Ok(()),
            _ => err!(AmmError::InvalidAuthority),
        }
    }

    pub fn assert_not_locked(&self) -> Result<()> {
        require!(!self.locked, AmmError::PoolLocked);
        Ok(())
    }

    // Deadline guard, evaluated once at operation entry. A deadline
    // equal to the current time still executes.
    pub fn assert_not_expired(deadline: i64, now: i64) -> Result<()> {
        require!(now <= deadline, AmmError::TransactionExpired);

        let time_until_deadline = deadline.checked_sub(now).ok_or(AmmError::Underflow)?;
        require!(
            time_until_deadline <= MAX_EXPIRATION_SECONDS,
            AmmError::ExpirationTooFar
        );

        Ok(())
    }

    // Lock is idempotent: locking an already-locked pool succeeds.
    pub fn lock(&mut self, caller: &Pubkey) -> Result<()> {
        self.assert_is_authority(caller)?;
        self.locked = true;
        Ok(())
    }

    pub fn unlock(&mut self, caller: &Pubkey) -> Result<()> {
        self.assert_is_authority(caller)?;
        self.locked = false;
        Ok(())
    }

    // Validate and apply a deposit. Returns the amounts the custody
    // layer must debit from the depositor and the LP tokens to mint.
    pub fn deposit(
        &mut self,
        desired_x: u64,
        desired_y: u64,
        min_shares_out: u64,
        deadline: i64,
        now: i64,
    ) -> Result<DepositAmounts> {
        self.assert_not_locked()?;
        Self::assert_not_expired(deadline, now)?;

        require!(desired_x > 0, AmmError::ZeroDepositAmount);
        require!(desired_y > 0, AmmError::ZeroDepositAmount);

        let amounts = curve::quote_deposit(
            self.reserve_x,
            self.reserve_y,
            self.lp_supply,
            desired_x,
            desired_y,
        )?;

        require!(amounts.shares >= min_shares_out, AmmError::SlippageExceeded);
        require!(amounts.shares > 0, AmmError::InsufficientLiquidity);

        self.reserve_x = self
            .reserve_x
            .checked_add(amounts.amount_x)
            .ok_or(AmmError::Overflow)?;
        self.reserve_y = self
            .reserve_y
            .checked_add(amounts.amount_y)
            .ok_or(AmmError::Overflow)?;
        self.lp_supply = self
            .lp_supply
            .checked_add(amounts.shares)
            .ok_or(AmmError::Overflow)?;

        Ok(amounts)
    }

    // Validate and apply a withdrawal. `caller_share_balance` is the
    // caller's LP token balance as reported by the custody layer.
    // Returns the amounts the custody layer must credit back.
    pub fn withdraw(
        &mut self,
        shares_in: u64,
        min_x_out: u64,
        min_y_out: u64,
        deadline: i64,
        now: i64,
        caller_share_balance: u64,
    ) -> Result<WithdrawAmounts> {
        self.assert_not_locked()?;
        Self::assert_not_expired(deadline, now)?;

        require!(shares_in > 0, AmmError::ZeroWithdrawAmount);
        require!(
            shares_in <= caller_share_balance,
            AmmError::InsufficientShares
        );
        require!(shares_in <= self.lp_supply, AmmError::InsufficientLiquidity);

        let amounts =
            curve::quote_withdraw(self.reserve_x, self.reserve_y, self.lp_supply, shares_in)?;

        require!(amounts.amount_x >= min_x_out, AmmError::SlippageExceeded);
        require!(amounts.amount_y >= min_y_out, AmmError::SlippageExceeded);

        self.reserve_x = self
            .reserve_x
            .checked_sub(amounts.amount_x)
            .ok_or(AmmError::Underflow)?;
        self.reserve_y = self
            .reserve_y
            .checked_sub(amounts.amount_y)
            .ok_or(AmmError::Underflow)?;
        self.lp_supply = self
            .lp_supply
            .checked_sub(shares_in)
            .ok_or(AmmError::Underflow)?;

        Ok(amounts)
    }

    // Validate and apply a one-directional swap. The input reserve
    // grows by the full input (fee included); the output reserve must
    // stay strictly positive. The constant product check runs last,
    // before anything is considered committed.
    pub fn swap(
        &mut self,
        x_to_y: bool,
        amount_in: u64,
        min_amount_out: u64,
        deadline: i64,
        now: i64,
    ) -> Result<SwapAmounts> {
        self.assert_not_locked()?;
        Self::assert_not_expired(deadline, now)?;

        require!(amount_in > 0, AmmError::ZeroSwapAmount);
        require!(
            self.reserve_x > 0 && self.reserve_y > 0,
            AmmError::InsufficientLiquidity
        );

        let (reserve_in, reserve_out) = if x_to_y {
            (self.reserve_x, self.reserve_y)
        } else {
            (self.reserve_y, self.reserve_x)
        };

        let amount_out =
            curve::quote_swap_output(reserve_in, reserve_out, amount_in, self.fee_basis_points)?;

        require!(amount_out >= min_amount_out, AmmError::SlippageExceeded);
        require!(amount_out > 0, AmmError::InsufficientLiquidity);
        require!(amount_out < reserve_out, AmmError::InsufficientLiquidity);

        let (reserve_x_before, reserve_y_before) = (self.reserve_x, self.reserve_y);

        let new_reserve_in = reserve_in.checked_add(amount_in).ok_or(AmmError::Overflow)?;
        let new_reserve_out = reserve_out
            .checked_sub(amount_out)
            .ok_or(AmmError::Underflow)?;

        if x_to_y {
            self.reserve_x = new_reserve_in;
            self.reserve_y = new_reserve_out;
        } else {
            self.reserve_y = new_reserve_in;
            self.reserve_x = new_reserve_out;
        }

        curve::check_invariant_non_decreasing(
            reserve_x_before,
            reserve_y_before,
            self.reserve_x,
            self.reserve_y,
        )?;

        Ok(SwapAmounts {
            amount_in,
            amount_out,
        })
    }
}
