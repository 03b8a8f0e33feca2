// Swap Tokens Instruction
//
// One-directional exchange using the constant product formula.
// The fee is deducted from the input before pricing and stays in the
// pool, so reserve_x * reserve_y never decreases across a swap.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{transfer, Mint, Token, TokenAccount, Transfer},
};

use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct SwapTokens<'info> {
    #[account(mut)]
    pub swapper: Signer<'info>,

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
    pub pool_config: Box<Account<'info, PoolConfig>>,

    /// CHECK: PDA signer
    #[account(
        seeds = [POOL_AUTHORITY_SEED, pool_config.key().as_ref()],
        bump = pool_config.authority_bump,
    )]
    pub pool_authority: UncheckedAccount<'info>,

    #[account(address = pool_config.mint_x)]
    pub mint_x: Box<Account<'info, Mint>>,

    #[account(address = pool_config.mint_y)]
    pub mint_y: Box<Account<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = swapper,
        associated_token::mint = mint_x,
        associated_token::authority = swapper,
    )]
    pub swapper_token_x: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = swapper,
        associated_token::mint = mint_y,
        associated_token::authority = swapper,
    )]
    pub swapper_token_y: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = mint_x,
        token::authority = pool_authority,
    )]
    pub vault_x: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = mint_y,
        token::authority = pool_authority,
    )]
    pub vault_y: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> SwapTokens<'info> {
    pub fn swap_tokens(
        &mut self,
        x_to_y: bool,
        amount_in: u64,
        min_amount_out: u64,
        deadline: i64,
    ) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;

        let amounts = self
            .pool_config
            .swap(x_to_y, amount_in, min_amount_out, deadline, now)?;

        if x_to_y {
            self.transfer_in_x(amounts.amount_in)?;
            self.transfer_out_y(amounts.amount_out)?;
            msg!("Swapped {} X -> {} Y", amounts.amount_in, amounts.amount_out);
        } else {
            self.transfer_in_y(amounts.amount_in)?;
            self.transfer_out_x(amounts.amount_out)?;
            msg!("Swapped {} Y -> {} X", amounts.amount_in, amounts.amount_out);
        }

        Ok(())
    }

    fn transfer_in_x(&self, amount: u64) -> Result<()> {
        transfer(
            CpiContext::new(
                self.token_program.to_account_info(),
                Transfer {
                    from: self.swapper_token_x.to_account_info(),
                    to: self.vault_x.to_account_info(),
                    authority: self.swapper.to_account_info(),
                },
            ),
            amount,
        )
    }

    fn transfer_in_y(&self, amount: u64) -> Result<()> {
        transfer(
            CpiContext::new(
                self.token_program.to_account_info(),
                Transfer {
                    from: self.swapper_token_y.to_account_info(),
                    to: self.vault_y.to_account_info(),
                    authority: self.swapper.to_account_info(),
                },
            ),
            amount,
        )
    }

    fn transfer_out_x(&self, amount: u64) -> Result<()> {
        let pool_config_key = self.pool_config.key();
        let authority_seeds = &[
            POOL_AUTHORITY_SEED,
            pool_config_key.as_ref(),
            &[self.pool_config.authority_bump],
        ];
        let signer_seeds = &[&authority_seeds[..]];

        transfer(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                Transfer {
                    from: self.vault_x.to_account_info(),
                    to: self.swapper_token_x.to_account_info(),
                    authority: self.pool_authority.to_account_info(),
                },
                signer_seeds,
            ),
            amount,
        )
    }

    fn transfer_out_y(&self, amount: u64) -> Result<()> {
        let pool_config_key = self.pool_config.key();
        let authority_seeds = &[
            POOL_AUTHORITY_SEED,
            pool_config_key.as_ref(),
            &[self.pool_config.authority_bump],
        ];
        let signer_seeds = &[&authority_seeds[..]];

        transfer(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                Transfer {
                    from: self.vault_y.to_account_info(),
                    to: self.swapper_token_y.to_account_info(),
                    authority: self.pool_authority.to_account_info(),
                },
                signer_seeds,
            ),
            amount,
        )
    }
}
