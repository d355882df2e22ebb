multiversx_sc::imports!();

use crate::cache::Cache;
use common_constants::NO_LOAN;
use common_errors::{
    ERROR_CALLER_NOT_ON_BEHALF_OF_OR_WHITELISTED, ERROR_COLLATERAL_CANNOT_COVER_NEW_BORROW,
    ERROR_INVALID_AMOUNT, ERROR_INVALID_ASSET, ERROR_INVALID_LOAN_STATE,
    ERROR_NFT_USED_AS_COLLATERAL, ERROR_RESERVE_FROZEN, ERROR_RESERVE_INACTIVE,
};
use common_structs::{Loan, LoanState};

/// Draws debt against an NFT. The first borrow takes custody of the token
/// and opens the loan; later borrows only grow the position.
#[multiversx_sc::module]
pub trait BorrowModule:
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
    fn internal_borrow(
        &self,
        caller: &ManagedAddress,
        asset: EgldOrEsdtTokenIdentifier,
        amount_raw: &BigUint,
        nft_asset: &TokenIdentifier,
        nft_token_nonce: u64,
        on_behalf_of: &ManagedAddress,
    ) {
        require!(*amount_raw > 0, ERROR_INVALID_AMOUNT);

        let mut cache = Cache::new(self, asset);
        require!(self.reserve_active(&cache.asset).get(), ERROR_RESERVE_INACTIVE);
        require!(!self.reserve_frozen(&cache.asset).get(), ERROR_RESERVE_FROZEN);

        self.global_sync(&mut cache);

        let config = self.effective_collateral_config(nft_asset, nft_token_nonce);
        self.require_collateral_usable(&config);
        self.require_config_fresh(&config);

        self.authorize_borrow(caller, on_behalf_of, &cache.asset, amount_raw);

        let amount = cache.get_decimal_value(amount_raw);
        let mut loan = self.load_or_open_loan(&cache, nft_asset, nft_token_nonce, on_behalf_of);

        let collateral_value = self.collateral_value(&cache, nft_asset, nft_token_nonce);
        let current_debt = cache.original_borrow(&loan.scaled_amount);
        let borrow_limit = self.percent_mul(&collateral_value, &config.ltv);
        require!(
            current_debt.clone() + amount.clone() <= borrow_limit,
            ERROR_COLLATERAL_CANNOT_COVER_NEW_BORROW
        );

        let scaled = self.internal_borrow_out(&mut cache, &amount);
        loan.scaled_amount += scaled;
        loan.state = LoanState::Active;
        self.loans(loan.loan_id).set(&loan);

        self.update_rates(&mut cache);
        self.emit_reserve_update(&cache);
        self.borrow_event(
            loan.loan_id,
            on_behalf_of,
            &cache.asset,
            amount.into_raw_units(),
            nft_asset,
            nft_token_nonce,
        );

        // funds go to the initiator, the debt to the position owner
        self.send_asset(&cache.asset.clone(), &amount, caller);
    }

    /// The caller either owns the position, is a whitelisted gateway, or
    /// spends a matching borrow allowance.
    fn authorize_borrow(
        &self,
        caller: &ManagedAddress,
        on_behalf_of: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        amount_raw: &BigUint,
    ) {
        if caller == on_behalf_of || self.whitelisted_gateways().contains(caller) {
            return;
        }

        let allowance_mapper = self.borrow_allowance(on_behalf_of, caller, asset);
        let allowance = allowance_mapper.get();
        require!(
            allowance >= *amount_raw,
            ERROR_CALLER_NOT_ON_BEHALF_OF_OR_WHITELISTED
        );
        allowance_mapper.set(allowance - amount_raw);
    }

    fn load_or_open_loan(
        &self,
        cache: &Cache<Self>,
        nft_asset: &TokenIdentifier,
        nft_token_nonce: u64,
        on_behalf_of: &ManagedAddress,
    ) -> Loan<Self::Api> {
        let loan_id = self.loan_id_by_nft(nft_asset, nft_token_nonce).get();

        if loan_id == NO_LOAN {
            // first borrow, the NFT itself must come in with the call
            self.require_nft_payment(nft_asset, nft_token_nonce);

            let new_id = self.loan_count().get() + 1;
            self.loan_count().set(new_id);
            self.loan_id_by_nft(nft_asset, nft_token_nonce).set(new_id);

            Loan::new(
                new_id,
                on_behalf_of.clone(),
                cache.asset.clone(),
                nft_asset.clone(),
                nft_token_nonce,
                cache.params.asset_decimals,
            )
        } else {
            self.require_no_payment();

            let loan = self.loans(loan_id).get();
            require!(loan.state == LoanState::Active, ERROR_INVALID_LOAN_STATE);
            require!(loan.borrower == *on_behalf_of, ERROR_NFT_USED_AS_COLLATERAL);
            require!(loan.reserve_asset == cache.asset, ERROR_INVALID_ASSET);

            loan
        }
    }
}
