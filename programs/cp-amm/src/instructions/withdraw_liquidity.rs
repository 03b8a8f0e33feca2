// Withdraw Liquidity Instruction
//
// Burns LP tokens and returns the proportional share of both reserves.
// Burning the entire supply drains the reserves exactly, leaving an
// empty pool that a later deposit can re-fund.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{burn, transfer, Burn, Mint, Token, TokenAccount, Transfer},
};

use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct WithdrawLiquidity<'info> {
    #[account(mut)]
    pub withdrawer: Signer<'info>,

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
    )]
    pub lp_mint: Box<Account<'info, Mint>>,

    #[account(address = pool_config.mint_x)]
    pub mint_x: Box<Account<'info, Mint>>,

    #[account(address = pool_config.mint_y)]
    pub mint_y: Box<Account<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = withdrawer,
        associated_token::mint = mint_x,
        associated_token::authority = withdrawer,
    )]
    pub withdrawer_token_x: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = withdrawer,
        associated_token::mint = mint_y,
        associated_token::authority = withdrawer,
    )]
    pub withdrawer_token_y: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = lp_mint,
        token::authority = withdrawer,
    )]
    pub withdrawer_lp_token: Box<Account<'info, TokenAccount>>,

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

impl<'info> WithdrawLiquidity<'info> {
    pub fn withdraw_liquidity(
        &mut self,
        shares_in: u64,
        min_x_out: u64,
        min_y_out: u64,
        deadline: i64,
    ) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let caller_share_balance = self.withdrawer_lp_token.amount;

        let amounts = self.pool_config.withdraw(
            shares_in,
            min_x_out,
            min_y_out,
            deadline,
            now,
            caller_share_balance,
        )?;

        self.burn_lp_tokens(shares_in)?;
        self.transfer_x_from_vault(amounts.amount_x)?;
        self.transfer_y_from_vault(amounts.amount_y)?;

        msg!(
            "Withdrawn: {} LP -> {} X, {} Y",
            shares_in,
            amounts.amount_x,
            amounts.amount_y
        );

        Ok(())
    }

    fn burn_lp_tokens(&self, amount: u64) -> Result<()> {
        burn(
            CpiContext::new(
                self.token_program.to_account_info(),
                Burn {
                    mint: self.lp_mint.to_account_info(),
                    from: self.withdrawer_lp_token.to_account_info(),
                    authority: self.withdrawer.to_account_info(),
                },
            ),
            amount,
        )
    }

    fn transfer_x_from_vault(&self, amount: u64) -> Result<()> {
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
                    to: self.withdrawer_token_x.to_account_info(),
                    authority: self.pool_authority.to_account_info(),
                },
                signer_seeds,
            ),
            amount,
        )
    }

    fn transfer_y_from_vault(&self, amount: u64) -> Result<()> {
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
                    to: self.withdrawer_token_y.to_account_info(),
                    authority: self.pool_authority.to_account_info(),
                },
                signer_seeds,
            ),
            amount,
        )
    }
}
