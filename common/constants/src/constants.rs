#![no_std]

pub const RAY: u128 = 1_000_000_000_000_000_000_000_000_000;
pub const RAY_PRECISION: usize = 27;

pub const WAD: u128 = 1_000_000_000_000_000_000;
pub const WAD_PRECISION: usize = 18;

pub const BPS: u64 = 10_000; // 100%
pub const BPS_PRECISION: usize = 4;

pub const SECONDS_PER_YEAR: u64 = 31_556_926;

/// Ceiling on the debt fraction repayable through a redemption (90%);
/// a redeemed loan always survives with residual debt.
pub const REDEEM_MAX_REPAY_BPS: u64 = 9_000;

/// Default freshness window for collateral configuration, in seconds.
/// Borrows against a collection whose config is older than this are refused.
pub const DEFAULT_CONFIG_TIMEFRAME: u64 = 86_400;

/// Loan identifiers start at 1; 0 marks "no active loan" in the NFT index.
pub const NO_LOAN: u64 = 0;
