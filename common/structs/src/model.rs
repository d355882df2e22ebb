#![no_std]

use multiversx_sc::derive_imports::*;
use multiversx_sc::imports::*;

/// Lifecycle of a loan. `Repaid` and `Defaulted` are terminal; records in a
/// terminal state are kept for history and only the active-loan index is
/// cleared.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum LoanState {
    None,
    Created,
    Active,
    Auction,
    Repaid,
    Defaulted,
}

impl LoanState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, LoanState::Repaid | LoanState::Defaulted)
    }
}

/// One loan per (collection, token nonce) at a time. `scaled_amount` is the
/// debt principal divided by the borrow index at draw time, RAY precision;
/// the current debt is always `scaled_amount * borrow_index`.
///
/// The bid fields are meaningful only while `state == Auction`.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone)]
pub struct Loan<M: ManagedTypeApi> {
    pub loan_id: u64,
    pub state: LoanState,
    pub borrower: ManagedAddress<M>,
    pub reserve_asset: EgldOrEsdtTokenIdentifier<M>,
    pub nft_asset: TokenIdentifier<M>,
    pub nft_token_nonce: u64,
    pub scaled_amount: ManagedDecimal<M, NumDecimals>,
    pub bidder: ManagedAddress<M>,
    pub bid_price: ManagedDecimal<M, NumDecimals>,
    pub bid_borrow_amount: ManagedDecimal<M, NumDecimals>,
    pub first_bidder: ManagedAddress<M>,
    pub bid_start_timestamp: u64,
}

impl<M: ManagedTypeApi> Loan<M> {
    pub fn new(
        loan_id: u64,
        borrower: ManagedAddress<M>,
        reserve_asset: EgldOrEsdtTokenIdentifier<M>,
        nft_asset: TokenIdentifier<M>,
        nft_token_nonce: u64,
        asset_decimals: NumDecimals,
    ) -> Self {
        Loan {
            loan_id,
            state: LoanState::Created,
            borrower,
            reserve_asset,
            nft_asset,
            nft_token_nonce,
            scaled_amount: ManagedDecimal::from_raw_units(
                BigUint::zero(),
                common_constants::RAY_PRECISION,
            ),
            bidder: ManagedAddress::zero(),
            bid_price: ManagedDecimal::from_raw_units(BigUint::zero(), asset_decimals),
            bid_borrow_amount: ManagedDecimal::from_raw_units(BigUint::zero(), asset_decimals),
            first_bidder: ManagedAddress::zero(),
            bid_start_timestamp: 0,
        }
    }

    /// Drops all auction bookkeeping, used when a redemption pulls the loan
    /// back to `Active`.
    pub fn clear_bid(&mut self, asset_decimals: NumDecimals) {
        self.bidder = ManagedAddress::zero();
        self.bid_price = ManagedDecimal::from_raw_units(BigUint::zero(), asset_decimals);
        self.bid_borrow_amount = ManagedDecimal::from_raw_units(BigUint::zero(), asset_decimals);
        self.first_bidder = ManagedAddress::zero();
        self.bid_start_timestamp = 0;
    }
}

/// Interest rate model parameters for one reserve. Rates are RAY-scaled and
/// applied at whatever time scale the deployer configured (per-second here);
/// the model never rescales them. `reserve_factor` is BPS.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone)]
pub struct MarketParams<M: ManagedTypeApi> {
    pub base_borrow_rate: ManagedDecimal<M, NumDecimals>,
    pub slope1: ManagedDecimal<M, NumDecimals>,
    pub slope2: ManagedDecimal<M, NumDecimals>,
    pub optimal_utilization: ManagedDecimal<M, NumDecimals>,
    pub max_borrow_rate: ManagedDecimal<M, NumDecimals>,
    pub reserve_factor: ManagedDecimal<M, NumDecimals>,
    pub asset_decimals: NumDecimals,
}

/// Risk and auction configuration for one NFT collection, optionally
/// overridden per token nonce. All ratio fields are BPS; durations are
/// seconds.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone)]
pub struct NftCollateralConfig<M: ManagedTypeApi> {
    pub ltv: ManagedDecimal<M, NumDecimals>,
    pub liquidation_threshold: ManagedDecimal<M, NumDecimals>,
    pub liquidation_bonus: ManagedDecimal<M, NumDecimals>,
    pub redeem_threshold: ManagedDecimal<M, NumDecimals>,
    pub redeem_fine: ManagedDecimal<M, NumDecimals>,
    pub min_bid_fine: ManagedDecimal<M, NumDecimals>,
    pub redeem_duration: u64,
    pub auction_duration: u64,
    pub is_active: bool,
    pub is_frozen: bool,
    pub config_timestamp: u64,
}

/// Price feed entry for a collection (floor) or a single token nonce.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone)]
pub struct NftPriceData<M: ManagedTypeApi> {
    pub price: BigUint<M>,
    pub timestamp: u64,
}
