// Test utilities for the AMM core

use anchor_lang::prelude::Pubkey;
use cp_amm::errors::AmmError;
use cp_amm::state::PoolConfig;

// Fixed logical clock for deadline checks
pub const NOW: i64 = 1_700_000_000;

pub const FEE_30_BPS: u16 = 30;

pub fn deadline() -> i64 {
    NOW + 60
}

pub fn test_pubkey(byte: u8) -> Pubkey {
    Pubkey::new_from_array([byte; 32])
}

pub fn mint_x() -> Pubkey {
    test_pubkey(1)
}

pub fn mint_y() -> Pubkey {
    test_pubkey(2)
}

pub fn lp_mint() -> Pubkey {
    test_pubkey(3)
}

pub fn blank_pool() -> PoolConfig {
    PoolConfig {
        seed: 0,
        authority: None,
        mint_x: Pubkey::default(),
        mint_y: Pubkey::default(),
        lp_mint: Pubkey::default(),
        fee_basis_points: 0,
        locked: false,
        reserve_x: 0,
        reserve_y: 0,
        lp_supply: 0,
        config_bump: 0,
        authority_bump: 0,
        lp_mint_bump: 0,
    }
}

// Initialized, empty pool
pub fn new_pool(fee_basis_points: u16, authority: Option<Pubkey>) -> PoolConfig {
    let mut pool = blank_pool();
    pool.init(
        42,
        authority,
        mint_x(),
        mint_y(),
        lp_mint(),
        fee_basis_points,
        255,
        254,
        253,
    )
    .expect("pool init should succeed");
    pool
}

// Initialized pool funded with a first deposit
pub fn funded_pool(fee_basis_points: u16, authority: Option<Pubkey>, x: u64, y: u64) -> PoolConfig {
    let mut pool = new_pool(fee_basis_points, authority);
    pool.deposit(x, y, 0, deadline(), NOW)
        .expect("first deposit should succeed");
    pool
}

pub fn assert_amm_err<T: std::fmt::Debug>(result: anchor_lang::Result<T>, expected: AmmError) {
    match result {
        Err(actual) => assert_eq!(actual, expected.into()),
        Ok(value) => panic!("expected {:?}, got Ok({:?})", expected, value),
    }
}
