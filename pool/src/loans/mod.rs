multiversx_sc::imports!();

pub mod auction;
pub mod borrow;
pub mod repay;

use crate::cache::Cache;
use common_constants::{NO_LOAN, RAY_PRECISION};
use common_errors::ERROR_NOT_USED_AS_COLLATERAL;
use common_structs::NftCollateralConfig;

/// Shared loan arithmetic: debt valuation, health factor, bid minimums and
/// the escrow bookkeeping for auction bids.
#[multiversx_sc::module]
pub trait LoanHelpersModule:
    crate::storage::Storage
    + crate::oracle::OracleModule
    + crate::guard::GuardModule
    + crate::utils::UtilsModule
    + multiversx_sc_modules::pause::PauseModule
    + common_math::SharedMathModule
    + common_events::EventsModule
{
    fn get_active_loan_id(&self, nft_asset: &TokenIdentifier, nft_token_nonce: u64) -> u64 {
        let loan_id = self.loan_id_by_nft(nft_asset, nft_token_nonce).get();
        require!(loan_id != NO_LOAN, ERROR_NOT_USED_AS_COLLATERAL);
        loan_id
    }

    /// Oracle price of the token, expressed at the reserve's decimals.
    fn collateral_value(
        &self,
        cache: &Cache<Self>,
        nft_asset: &TokenIdentifier,
        nft_token_nonce: u64,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let price = self.price_of(nft_asset, nft_token_nonce);
        cache.get_decimal_value(&price)
    }

    /// `percentMul(collateral, threshold) / debt`, RAY. Saturates at a
    /// practically-infinite value when there is no debt.
    fn health_factor(
        &self,
        collateral_value: &ManagedDecimal<Self::Api, NumDecimals>,
        config: &NftCollateralConfig<Self::Api>,
        debt: &ManagedDecimal<Self::Api, NumDecimals>,
        zero: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if debt == zero {
            return self.to_decimal(BigUint::from(u128::MAX), RAY_PRECISION);
        }

        let risk_adjusted = self.percent_mul(collateral_value, &config.liquidation_threshold);
        self.div_half_up(&risk_adjusted, debt, RAY_PRECISION)
    }

    /// First bids must clear the debt plus a margin derived from the
    /// collateral value, so a redemption can always fund the bid fine.
    fn min_bid_required(
        &self,
        debt: &ManagedDecimal<Self::Api, NumDecimals>,
        collateral_value: &ManagedDecimal<Self::Api, NumDecimals>,
        config: &NftCollateralConfig<Self::Api>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        debt.clone() + self.percent_mul(collateral_value, &config.min_bid_fine)
    }

    fn required_redeem_fine(
        &self,
        bid_borrow_amount: &ManagedDecimal<Self::Api, NumDecimals>,
        collateral_value: &ManagedDecimal<Self::Api, NumDecimals>,
        config: &NftCollateralConfig<Self::Api>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.get_max(
            self.percent_mul(bid_borrow_amount, &config.redeem_fine),
            self.percent_mul(collateral_value, &config.min_bid_fine),
        )
    }

    fn escrow_add(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
    ) {
        self.bid_escrow(asset)
            .update(|escrow| *escrow += amount.into_raw_units());
    }

    fn escrow_sub(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
    ) {
        self.bid_escrow(asset)
            .update(|escrow| *escrow -= amount.into_raw_units());
    }
}
