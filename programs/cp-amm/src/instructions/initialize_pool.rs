// Initialize Pool Instruction
//
// Creates a new pool for a token pair: the config record, the LP mint,
// and the two vaults. The config PDA is keyed by a creator-chosen seed
// plus both mints, so creating a second pool with the same seed and
// pair fails at account initialization (already exists).

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, state::*};

#[derive(Accounts)]
#[instruction(seed: u64)]
pub struct InitializePool<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    pub mint_x: Box<Account<'info, Mint>>,
    pub mint_y: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = creator,
        space = ANCHOR_DISCRIMINATOR + PoolConfig::INIT_SPACE,
        seeds = [
            POOL_CONFIG_SEED,
            seed.to_le_bytes().as_ref(),
            mint_x.key().as_ref(),
            mint_y.key().as_ref(),
        ],
        bump
    )]
    pub pool_config: Box<Account<'info, PoolConfig>>,

    /// CHECK: PDA signer for vault operations
    #[account(
        seeds = [POOL_AUTHORITY_SEED, pool_config.key().as_ref()],
        bump
    )]
    pub pool_authority: UncheckedAccount<'info>,

    #[account(
        init,
        payer = creator,
        seeds = [LP_MINT_SEED, pool_config.key().as_ref()],
        bump,
        mint::decimals = 9,
        mint::authority = pool_authority,
    )]
    pub lp_mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = creator,
        associated_token::mint = mint_x,
        associated_token::authority = pool_authority,
    )]
    pub vault_x: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = creator,
        associated_token::mint = mint_y,
        associated_token::authority = pool_authority,
    )]
    pub vault_y: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> InitializePool<'info> {
    pub fn initialize_pool(
        &mut self,
        seed: u64,
        fee_basis_points: u16,
        authority: Option<Pubkey>,
        bumps: &InitializePoolBumps,
    ) -> Result<()> {
        self.pool_config.init(
            seed,
            authority,
            self.mint_x.key(),
            self.mint_y.key(),
            self.lp_mint.key(),
            fee_basis_points,
            bumps.pool_config,
            bumps.pool_authority,
            bumps.lp_mint,
        )?;

        msg!(
            "Pool initialized: {} / {}",
            self.mint_x.key(),
            self.mint_y.key()
        );
        msg!("Fee: {} basis points", fee_basis_points);

        Ok(())
    }
}
