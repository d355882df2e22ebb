multiversx_sc::imports!();

use crate::cache::Cache;
use common_errors::ERROR_INVALID_LOAN_STATE;
use common_structs::LoanState;

/// Repayments. A payment covering the whole debt closes the loan and
/// returns the NFT; anything less just shrinks the position. Loans under
/// auction cannot be repaid, only redeemed.
#[multiversx_sc::module]
pub trait RepayModule:
    crate::storage::Storage
    + crate::reserve::ReserveModule
    + crate::oracle::OracleModule
    + crate::guard::GuardModule
    + crate::utils::UtilsModule
    + crate::loans::LoanHelpersModule
    + multiversx_sc_modules::pause::PauseModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + common_events::EventsModule
{
    fn internal_repay(
        &self,
        caller: &ManagedAddress,
        nft_asset: &TokenIdentifier,
        nft_token_nonce: u64,
    ) {
        let loan_id = self.get_active_loan_id(nft_asset, nft_token_nonce);
        let mut loan = self.loans(loan_id).get();
        require!(loan.state == LoanState::Active, ERROR_INVALID_LOAN_STATE);

        let mut cache = Cache::new(self, loan.reserve_asset.clone());
        self.global_sync(&mut cache);

        let payment = self.get_reserve_payment(&cache);
        let (scaled_repaid, amount_repaid, over_paid) =
            self.internal_repay_in(&mut cache, &loan.scaled_amount, &payment);

        loan.scaled_amount -= scaled_repaid;
        let remaining_debt = cache.original_borrow(&loan.scaled_amount);

        if loan.scaled_amount == self.ray_zero() {
            loan.state = LoanState::Repaid;
            self.loan_id_by_nft(nft_asset, nft_token_nonce).clear();

            self.send_nft(nft_asset, nft_token_nonce, &loan.borrower);
            if over_paid > cache.zero {
                self.send_asset(&cache.asset.clone(), &over_paid, caller);
            }
        }

        self.loans(loan_id).set(&loan);

        self.update_rates(&mut cache);
        self.emit_reserve_update(&cache);
        self.repay_event(
            loan_id,
            caller,
            amount_repaid.into_raw_units(),
            remaining_debt.into_raw_units(),
        );
    }
}
