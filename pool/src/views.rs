multiversx_sc::imports!();

use common_constants::{NO_LOAN, RAY_PRECISION};
use common_errors::ERROR_INVALID_LOAN_STATE;
use common_structs::{Loan, LoanState};

/// Read-only projections. Debt figures include interest accrued since the
/// last on-chain sync, computed against a projected index so views never
/// write state.
#[multiversx_sc::module]
pub trait ViewsModule:
    crate::storage::Storage
    + crate::collateral::CollateralModule
    + crate::oracle::OracleModule
    + crate::guard::GuardModule
    + crate::utils::UtilsModule
    + crate::loans::LoanHelpersModule
    + multiversx_sc_modules::pause::PauseModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + common_events::EventsModule
{
    fn projected_borrow_index(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let index = self.borrow_index(asset).get();
        let delta = self.blockchain().get_block_timestamp() - self.last_timestamp(asset).get();
        if delta == 0 {
            return index;
        }
        let factor = self.accrual_factor(&self.borrow_rate(asset).get(), delta);
        self.compound_index(&index, &factor)
    }

    #[view(getLoanByNft)]
    fn get_loan_by_nft(&self, nft_asset: TokenIdentifier, nft_token_nonce: u64) -> Loan<Self::Api> {
        let loan_id = self.get_active_loan_id(&nft_asset, nft_token_nonce);
        self.loans(loan_id).get()
    }

    /// Current debt of the loan on this NFT, raw units of the reserve asset.
    #[view(getLoanDebt)]
    fn get_loan_debt(&self, nft_asset: TokenIdentifier, nft_token_nonce: u64) -> BigUint {
        let loan_id = self.get_active_loan_id(&nft_asset, nft_token_nonce);
        let loan = self.loans(loan_id).get();
        self.current_debt_of(&loan).into_raw_units().clone()
    }

    /// RAY health factor of the loan on this NFT.
    #[view(getHealthFactor)]
    fn get_health_factor(&self, nft_asset: TokenIdentifier, nft_token_nonce: u64) -> BigUint {
        let loan_id = self.get_active_loan_id(&nft_asset, nft_token_nonce);
        let loan = self.loans(loan_id).get();
        let params = self.reserve_params(&loan.reserve_asset).get();

        let config = self.effective_collateral_config(&nft_asset, nft_token_nonce);
        let price = self.price_of(&nft_asset, nft_token_nonce);
        let collateral_value = self.to_decimal(price, params.asset_decimals);
        let debt = self.current_debt_of(&loan);
        let zero = self.to_decimal(BigUint::zero(), params.asset_decimals);

        self.health_factor(&collateral_value, &config, &debt, &zero)
            .into_raw_units()
            .clone()
    }

    /// Headroom left under the collection's LTV for borrowing `asset`
    /// against this token, raw units.
    #[view(getAvailableBorrows)]
    fn get_available_borrows(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        nft_asset: TokenIdentifier,
        nft_token_nonce: u64,
    ) -> BigUint {
        let params = self.reserve_params(&asset).get();
        let config = self.effective_collateral_config(&nft_asset, nft_token_nonce);
        let price = self.price_of(&nft_asset, nft_token_nonce);
        let collateral_value = self.to_decimal(price, params.asset_decimals);

        let limit = self.percent_mul(&collateral_value, &config.ltv);

        let loan_id = self.loan_id_by_nft(&nft_asset, nft_token_nonce).get();
        let debt = if loan_id == NO_LOAN {
            self.to_decimal(BigUint::zero(), params.asset_decimals)
        } else {
            self.current_debt_of(&self.loans(loan_id).get())
        };

        if debt >= limit {
            BigUint::zero()
        } else {
            (limit - debt).into_raw_units().clone()
        }
    }

    /// `debt / (available + debt)` for one reserve, RAY.
    #[view(getUtilization)]
    fn get_utilization(&self, asset: EgldOrEsdtTokenIdentifier) -> BigUint {
        let params = self.reserve_params(&asset).get();
        let index = self.projected_borrow_index(&asset);
        let debt = self.scaled_to_actual(
            &self.borrowed_scaled(&asset).get(),
            &index,
            params.asset_decimals,
        );
        let available = self.available_liquidity(&asset).get();
        let total = available + debt.clone();

        if total == self.to_decimal(BigUint::zero(), params.asset_decimals) {
            BigUint::zero()
        } else {
            self.div_half_up(&debt, &total, RAY_PRECISION)
                .into_raw_units()
                .clone()
        }
    }

    /// The fine a redemption of this auctioned loan must pay, raw units.
    #[view(getBidFineQuote)]
    fn get_bid_fine_quote(&self, nft_asset: TokenIdentifier, nft_token_nonce: u64) -> BigUint {
        let loan_id = self.get_active_loan_id(&nft_asset, nft_token_nonce);
        let loan = self.loans(loan_id).get();
        require!(loan.state == LoanState::Auction, ERROR_INVALID_LOAN_STATE);

        let params = self.reserve_params(&loan.reserve_asset).get();
        let config = self.effective_collateral_config(&nft_asset, nft_token_nonce);
        let price = self.price_of(&nft_asset, nft_token_nonce);
        let collateral_value = self.to_decimal(price, params.asset_decimals);

        self.required_redeem_fine(&loan.bid_borrow_amount, &collateral_value, &config)
            .into_raw_units()
            .clone()
    }

    #[view(getAuctionData)]
    fn get_auction_data(
        &self,
        nft_asset: TokenIdentifier,
        nft_token_nonce: u64,
    ) -> MultiValue4<ManagedAddress, BigUint, BigUint, u64> {
        let loan_id = self.get_active_loan_id(&nft_asset, nft_token_nonce);
        let loan = self.loans(loan_id).get();
        require!(loan.state == LoanState::Auction, ERROR_INVALID_LOAN_STATE);

        (
            loan.bidder,
            loan.bid_price.into_raw_units().clone(),
            loan.bid_borrow_amount.into_raw_units().clone(),
            loan.bid_start_timestamp,
        )
            .into()
    }

    fn current_debt_of(&self, loan: &Loan<Self::Api>) -> ManagedDecimal<Self::Api, NumDecimals> {
        let params = self.reserve_params(&loan.reserve_asset).get();
        let index = self.projected_borrow_index(&loan.reserve_asset);
        self.scaled_to_actual(&loan.scaled_amount, &index, params.asset_decimals)
    }
}
