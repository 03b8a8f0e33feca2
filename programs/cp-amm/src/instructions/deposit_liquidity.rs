// Deposit Liquidity Instruction
//
// Adds tokens to the pool and mints LP tokens.
// First deposit: shares = sqrt(x * y), fixing the initial price.
// Subsequent deposits are scaled to the current reserve ratio.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{mint_to, transfer, Mint, MintTo, Token, TokenAccount, Transfer},
};

use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct DepositLiquidity<'info> {
    #[account(mut)]
    pub depositor: Signer<'info>,

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

    #[account(
        mut,
        seeds = [LP_MINT_SEED, pool_config.key().as_ref()],
        bump = pool_config.lp_mint_bump,
        mint::authority = pool_authority,
    )]
    pub lp_mint: Box<Account<'info, Mint>>,

    #[account(address = pool_config.mint_x)]
    pub mint_x: Box<Account<'info, Mint>>,

    #[account(address = pool_config.mint_y)]
    pub mint_y: Box<Account<'info, Mint>>,

    #[account(
        mut,
        token::mint = mint_x,
        token::authority = depositor,
    )]
    pub depositor_token_x: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = mint_y,
        token::authority = depositor,
    )]
    pub depositor_token_y: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = depositor,
        associated_token::mint = lp_mint,
        associated_token::authority = depositor,
    )]
    pub depositor_lp_token: Box<Account<'info, TokenAccount>>,

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

impl<'info> DepositLiquidity<'info> {
    pub fn deposit_liquidity(
        &mut self,
        desired_x: u64,
        desired_y: u64,
        min_shares_out: u64,
        deadline: i64,
    ) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;

        // Validate, quote, and update reserves/supply. A failed CPI
        // below aborts the transaction and rolls this back with it.
        let amounts = self
            .pool_config
            .deposit(desired_x, desired_y, min_shares_out, deadline, now)?;

        self.transfer_x_to_vault(amounts.amount_x)?;
        self.transfer_y_to_vault(amounts.amount_y)?;
        self.mint_lp_tokens(amounts.shares)?;

        msg!(
            "Deposited: {} X, {} Y -> {} LP",
            amounts.amount_x,
            amounts.amount_y,
            amounts.shares
        );

        Ok(())
    }

    fn transfer_x_to_vault(&self, amount: u64) -> Result<()> {
        transfer(
            CpiContext::new(
                self.token_program.to_account_info(),
                Transfer {
                    from: self.depositor_token_x.to_account_info(),
                    to: self.vault_x.to_account_info(),
                    authority: self.depositor.to_account_info(),
                },
            ),
            amount,
        )
    }

    fn transfer_y_to_vault(&self, amount: u64) -> Result<()> {
        transfer(
            CpiContext::new(
                self.token_program.to_account_info(),
                Transfer {
                    from: self.depositor_token_y.to_account_info(),
                    to: self.vault_y.to_account_info(),
                    authority: self.depositor.to_account_info(),
                },
            ),
            amount,
        )
    }

    fn mint_lp_tokens(&self, amount: u64) -> Result<()> {
        let pool_config_key = self.pool_config.key();
        let authority_seeds = &[
            POOL_AUTHORITY_SEED,
            pool_config_key.as_ref(),
            &[self.pool_config.authority_bump],
        ];
        let signer_seeds = &[&authority_seeds[..]];

        mint_to(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                MintTo {
                    mint: self.lp_mint.to_account_info(),
                    to: self.depositor_lp_token.to_account_info(),
                    authority: self.pool_authority.to_account_info(),
                },
                signer_seeds,
            ),
            amount,
        )
    }
}
