// AMM Program Constants

pub const POOL_CONFIG_SEED: &[u8] = b"pool_config";
pub const POOL_AUTHORITY_SEED: &[u8] = b"pool_authority";
pub const LP_MINT_SEED: &[u8] = b"lp_mint";
pub const BPS_DENOMINATOR: u16 = 10_000; // 100%
pub const MAX_EXPIRATION_SECONDS: i64 = 31_536_000; // 1 year
pub const ANCHOR_DISCRIMINATOR: usize = 8;
