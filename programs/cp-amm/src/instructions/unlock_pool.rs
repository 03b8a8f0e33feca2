// Unlock Pool Instruction
//
// Re-enables pool operations. Only the pool authority can unlock.

use anchor_lang::prelude::*;

use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct UnlockPool<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [
            POOL_CONFIG_SEED,
            pool_config.seed.to_le_bytes().as_ref(),
            pool_config.mint_x.as_ref(),
            pool_config.mint_y.as_ref(),
        ],
        bump = pool_config.config_bump,
    )]
    pub pool_config: Account<'info, PoolConfig>,
}

impl<'info> UnlockPool<'info> {
    pub fn unlock_pool(&mut self) -> Result<()> {
        self.pool_config.unlock(&self.authority.key())?;

        msg!("Pool unlocked by {}", self.authority.key());

        Ok(())
    }
}
