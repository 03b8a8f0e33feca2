// Lock Pool Instruction
//
// Emergency pause mechanism. Only the pool authority can lock.

use anchor_lang::prelude::*;

use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct LockPool<'info> {
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

impl<'info> LockPool<'info> {
    pub fn lock_pool(&mut self) -> Result<()> {
        self.pool_config.lock(&self.authority.key())?;

        msg!("Pool locked by {}", self.authority.key());

        Ok(())
    }
}
