multiversx_sc::imports!();

use crate::cache::Cache;
use common_constants::REDEEM_MAX_REPAY_BPS;
use common_errors::{
    ERROR_AMOUNT_GREATER_THAN_MAX_REPAY, ERROR_AMOUNT_LESS_THAN_REDEEM_THRESHOLD,
    ERROR_BID_AUCTION_DURATION_HAS_END, ERROR_BID_AUCTION_DURATION_NOT_END,
    ERROR_BID_INVALID_BID_FINE, ERROR_BID_PRICE_LESS_THAN_HIGHEST_PRICE,
    ERROR_BID_PRICE_LESS_THAN_LIQUIDATION_PRICE, ERROR_BID_PRICE_LESS_THAN_MIN_BID_REQUIRED,
    ERROR_BID_REDEEM_DURATION_HAS_END, ERROR_CONSECUTIVE_BIDS_NOT_ALLOWED,
    ERROR_HEALTH_FACTOR_HIGHER_THAN_LIQUIDATION_THRESHOLD, ERROR_INSUFFICIENT_SHORTFALL_PAYMENT,
    ERROR_INVALID_AMOUNT, ERROR_INVALID_ASSET, ERROR_INVALID_CONFIGURATION,
    ERROR_INVALID_LOAN_STATE,
};
use common_structs::LoanState;

/// The auction leg of the state machine: English-auction bids on unhealthy
/// loans, borrower redemption inside the redeem window, and settlement to
/// the winning bidder once the auction runs out.
#[multiversx_sc::module]
pub trait AuctionModule:
    crate::storage::Storage
    + crate::reserve::ReserveModule
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
    fn internal_auction(
        &self,
        bidder: &ManagedAddress,
        nft_asset: &TokenIdentifier,
        nft_token_nonce: u64,
    ) {
        let loan_id = self.get_active_loan_id(nft_asset, nft_token_nonce);
        let mut loan = self.loans(loan_id).get();

        let mut cache = Cache::new(self, loan.reserve_asset.clone());
        self.global_sync(&mut cache);

        let bid = self.get_reserve_payment(&cache);
        let config = self.effective_collateral_config(nft_asset, nft_token_nonce);
        require!(config.auction_duration > 0, ERROR_INVALID_CONFIGURATION);

        let previous_bidder = loan.bidder.clone();

        match loan.state {
            LoanState::Active => {
                let collateral_value =
                    self.collateral_value(&cache, nft_asset, nft_token_nonce);
                let debt = cache.original_borrow(&loan.scaled_amount);

                let health_factor =
                    self.health_factor(&collateral_value, &config, &debt, &cache.zero);
                require!(
                    health_factor < self.ray(),
                    ERROR_HEALTH_FACTOR_HIGHER_THAN_LIQUIDATION_THRESHOLD
                );
                require!(bid >= debt, ERROR_BID_PRICE_LESS_THAN_LIQUIDATION_PRICE);

                let min_required = self.min_bid_required(&debt, &collateral_value, &config);
                require!(bid >= min_required, ERROR_BID_PRICE_LESS_THAN_MIN_BID_REQUIRED);

                loan.state = LoanState::Auction;
                loan.bidder = bidder.clone();
                loan.bid_price = bid.clone();
                loan.bid_borrow_amount = debt;
                loan.first_bidder = bidder.clone();
                loan.bid_start_timestamp = cache.timestamp;

                self.escrow_add(&cache.asset, &bid);
            },
            LoanState::Auction => {
                require!(
                    cache.timestamp < loan.bid_start_timestamp + config.auction_duration,
                    ERROR_BID_AUCTION_DURATION_HAS_END
                );
                require!(bid > loan.bid_price, ERROR_BID_PRICE_LESS_THAN_HIGHEST_PRICE);
                require!(*bidder != loan.bidder, ERROR_CONSECUTIVE_BIDS_NOT_ALLOWED);

                // evict the previous bid before recording the new one
                self.send_asset(&cache.asset.clone(), &loan.bid_price, &loan.bidder);
                self.escrow_sub(&cache.asset, &loan.bid_price);
                self.escrow_add(&cache.asset, &bid);

                loan.bidder = bidder.clone();
                loan.bid_price = bid.clone();
            },
            _ => sc_panic!(ERROR_INVALID_LOAN_STATE),
        }

        self.loans(loan_id).set(&loan);
        self.emit_reserve_update(&cache);
        self.auction_event(loan_id, bidder, bid.into_raw_units(), &previous_bidder);
    }

    /// Pulls an auctioned loan back to `Active`: part of the debt is repaid,
    /// the current bidder is refunded and the first bidder is compensated
    /// with the fine.
    fn internal_redeem(
        &self,
        nft_asset: &TokenIdentifier,
        nft_token_nonce: u64,
        amount_raw: &BigUint,
    ) {
        require!(*amount_raw > 0, ERROR_INVALID_AMOUNT);

        let loan_id = self.get_active_loan_id(nft_asset, nft_token_nonce);
        let mut loan = self.loans(loan_id).get();
        require!(loan.state == LoanState::Auction, ERROR_INVALID_LOAN_STATE);

        let config = self.effective_collateral_config(nft_asset, nft_token_nonce);

        let mut cache = Cache::new(self, loan.reserve_asset.clone());
        self.global_sync(&mut cache);
        require!(
            cache.timestamp < loan.bid_start_timestamp + config.redeem_duration,
            ERROR_BID_REDEEM_DURATION_HAS_END
        );

        let payment = self.get_reserve_payment(&cache);
        let amount = cache.get_decimal_value(amount_raw);
        require!(payment >= amount, ERROR_INVALID_AMOUNT);
        let fine_paid = payment - amount.clone();

        let collateral_value = self.collateral_value(&cache, nft_asset, nft_token_nonce);
        let required_fine =
            self.required_redeem_fine(&loan.bid_borrow_amount, &collateral_value, &config);
        require!(fine_paid >= required_fine, ERROR_BID_INVALID_BID_FINE);

        let debt = cache.original_borrow(&loan.scaled_amount);
        require!(
            amount >= self.percent_mul(&debt, &config.redeem_threshold),
            ERROR_AMOUNT_LESS_THAN_REDEEM_THRESHOLD
        );
        let max_repay = self.percent_mul(
            &debt,
            &self.to_decimal_bps(BigUint::from(REDEEM_MAX_REPAY_BPS)),
        );
        require!(amount <= max_repay, ERROR_AMOUNT_GREATER_THAN_MAX_REPAY);

        let (scaled_repaid, amount_repaid, _over_paid) =
            self.internal_repay_in(&mut cache, &loan.scaled_amount, &amount);
        loan.scaled_amount -= scaled_repaid;

        // refund the standing bid and hand the fine to the first bidder
        self.send_asset(&cache.asset.clone(), &loan.bid_price, &loan.bidder);
        self.escrow_sub(&cache.asset, &loan.bid_price);
        if fine_paid > cache.zero {
            self.send_asset(&cache.asset.clone(), &fine_paid, &loan.first_bidder);
        }

        let borrower = loan.borrower.clone();
        loan.clear_bid(cache.params.asset_decimals);
        loan.state = LoanState::Active;
        self.loans(loan_id).set(&loan);

        self.update_rates(&mut cache);
        self.emit_reserve_update(&cache);
        self.redeem_event(
            loan_id,
            &borrower,
            amount_repaid.into_raw_units(),
            fine_paid.into_raw_units(),
        );
    }

    /// Settles an expired auction: the debt is repaid out of the winning bid
    /// (plus an extra payment when the bid falls short), the NFT goes to the
    /// winner and any surplus to the borrower.
    fn internal_liquidate(
        &self,
        caller: &ManagedAddress,
        nft_asset: &TokenIdentifier,
        nft_token_nonce: u64,
    ) {
        let loan_id = self.get_active_loan_id(nft_asset, nft_token_nonce);
        let mut loan = self.loans(loan_id).get();
        require!(loan.state == LoanState::Auction, ERROR_INVALID_LOAN_STATE);

        let config = self.effective_collateral_config(nft_asset, nft_token_nonce);

        let mut cache = Cache::new(self, loan.reserve_asset.clone());
        self.global_sync(&mut cache);
        require!(
            cache.timestamp >= loan.bid_start_timestamp + config.auction_duration,
            ERROR_BID_AUCTION_DURATION_NOT_END
        );

        let extra = self.get_optional_reserve_payment(&cache);
        let debt = cache.original_borrow(&loan.scaled_amount);

        // the bid covers the debt, or the caller tops up the shortfall
        let shortfall = if debt > loan.bid_price {
            debt.clone() - loan.bid_price.clone()
        } else {
            cache.zero.clone()
        };
        require!(extra >= shortfall, ERROR_INSUFFICIENT_SHORTFALL_PAYMENT);

        let (scaled_repaid, _amount_repaid, _over_paid) =
            self.internal_repay_in(&mut cache, &loan.scaled_amount, &debt);
        loan.scaled_amount -= scaled_repaid;

        let refund_extra = extra - shortfall;
        if refund_extra > cache.zero {
            self.send_asset(&cache.asset.clone(), &refund_extra, caller);
        }
        if loan.bid_price > debt {
            let surplus = loan.bid_price.clone() - debt.clone();
            self.send_asset(&cache.asset.clone(), &surplus, &loan.borrower);
        }
        self.escrow_sub(&cache.asset, &loan.bid_price);

        self.send_nft(nft_asset, nft_token_nonce, &loan.bidder);

        loan.state = LoanState::Defaulted;
        self.loan_id_by_nft(nft_asset, nft_token_nonce).clear();
        self.loans(loan_id).set(&loan);

        self.update_rates(&mut cache);
        self.emit_reserve_update(&cache);
        self.liquidate_event(
            loan_id,
            &loan.bidder,
            loan.bid_price.into_raw_units(),
            debt.into_raw_units(),
        );
    }

    /// Zero-or-one fungible payment in the reserve asset.
    fn get_optional_reserve_payment(
        &self,
        cache: &Cache<Self>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let (asset, amount) = self.call_value().egld_or_single_fungible_esdt();
        if amount == 0 {
            return cache.zero.clone();
        }
        require!(cache.is_same_asset(&asset), ERROR_INVALID_ASSET);
        cache.get_decimal_value(&amount)
    }
}
