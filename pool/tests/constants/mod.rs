use multiversx_sc::types::{BigUint, EgldOrEsdtTokenIdentifier, TestAddress, TestTokenIdentifier};
use multiversx_sc_scenario::{api::StaticApi, imports::MxscPath};

pub const POOL_PATH: MxscPath = MxscPath::new("output/pool.mxsc.json");

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
pub const POOL_ADMIN_ADDRESS: TestAddress = TestAddress::new("pool-admin");
pub const EMERGENCY_ADMIN_ADDRESS: TestAddress = TestAddress::new("emergency-admin");
pub const LTV_MANAGER_ADDRESS: TestAddress = TestAddress::new("ltv-manager");
pub const PRICE_MANAGER_ADDRESS: TestAddress = TestAddress::new("price-manager");
pub const RESCUER_ADDRESS: TestAddress = TestAddress::new("rescuer");

pub const USDC_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("USDC-abcdef");
pub const USDC_DECIMALS: usize = 6;

pub const WEGLD_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("WEGLD-abcdef");
pub const WEGLD_DECIMALS: usize = 18;

pub const NFT_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("NFTC-abcdef");
pub const NFT2_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("NFTB-abcdef");

// rate model, RAY per second so accrual numbers stay round in tests
pub const BASE_RATE_PERCENT: u64 = 1;
pub const SLOPE1_PERCENT: u64 = 4;
pub const SLOPE2_PERCENT: u64 = 60;
pub const OPTIMAL_UTILIZATION_PERCENT: u64 = 80;
pub const MAX_RATE_PERCENT: u64 = 50;
pub const RESERVE_FACTOR_BPS: u64 = 1_000; // 10%

// collateral risk, BPS
pub const LTV_BPS: u64 = 4_000;
pub const LIQ_THRESHOLD_BPS: u64 = 5_000;
pub const LIQ_BONUS_BPS: u64 = 500;

// auction behavior
pub const REDEEM_DURATION: u64 = 1_800;
pub const AUCTION_DURATION: u64 = 3_600;
pub const REDEEM_FINE_BPS: u64 = 500; // 5% of the auctioned debt
pub const REDEEM_THRESHOLD_BPS: u64 = 4_000; // must repay at least 40%
pub const MIN_BID_FINE_BPS: u64 = 100; // 1% of collateral value

pub const NFT_PRICE_USDC: u64 = 2_000;
pub const INITIAL_BALANCE_USDC: u64 = 10_000;

pub fn ray() -> BigUint<StaticApi> {
    BigUint::from(10u64).pow(27)
}

pub fn ray_percent(percent: u64) -> BigUint<StaticApi> {
    ray() * BigUint::from(percent) / BigUint::from(100u64)
}

pub fn ray_permille(permille: u64) -> BigUint<StaticApi> {
    ray() * BigUint::from(permille) / BigUint::from(1_000u64)
}

pub fn usdc(amount: u64) -> BigUint<StaticApi> {
    BigUint::from(amount) * BigUint::from(10u64).pow(USDC_DECIMALS as u32)
}

pub fn usdc_id() -> EgldOrEsdtTokenIdentifier<StaticApi> {
    EgldOrEsdtTokenIdentifier::esdt(USDC_TOKEN.to_token_identifier())
}

pub fn wegld_id() -> EgldOrEsdtTokenIdentifier<StaticApi> {
    EgldOrEsdtTokenIdentifier::esdt(WEGLD_TOKEN.to_token_identifier())
}
