multiversx_sc::imports!();

use crate::cache::Cache;
use common_errors::{ERROR_INSUFFICIENT_LIQUIDITY, ERROR_INVALID_AMOUNT};

/// Reserve accounting: index accrual, deposits, withdrawals and the debt
/// side used by the loan ledger. All operations work on a `Cache` snapshot
/// that the endpoint commits by dropping it.
#[multiversx_sc::module]
pub trait ReserveModule:
    crate::storage::Storage
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + common_events::EventsModule
{
    /// Brings the indices up to the cache timestamp at the stored rates.
    /// A second call within the same block is a no-op. Must run before any
    /// balance math in the calling endpoint.
    fn global_sync(&self, cache: &mut Cache<Self>) {
        let delta = cache.timestamp - cache.last_timestamp;

        if delta > 0 {
            let old_debt = cache.total_debt();

            let borrow_factor = self.accrual_factor(&cache.borrow_rate, delta);
            let liquidity_factor = self.accrual_factor(&cache.liquidity_rate, delta);

            cache.borrow_index = self.compound_index(&cache.borrow_index, &borrow_factor);
            cache.liquidity_index = self.compound_index(&cache.liquidity_index, &liquidity_factor);

            // reserve-factor share of the interest accrued over this period
            let new_debt = cache.total_debt();
            if new_debt > old_debt {
                let interest = new_debt - old_debt;
                let fee = self.percent_mul(&interest, &cache.params.reserve_factor);
                cache.revenue += fee;
            }

            cache.last_timestamp = cache.timestamp;
        }
    }

    /// Recomputes the stored rates for the cache's current balances. Runs
    /// after every balance change so the next accrual period uses rates that
    /// match the utilization it starts from.
    fn update_rates(&self, cache: &mut Cache<Self>) {
        let utilization = cache.get_utilization();
        cache.borrow_rate = self.calc_borrow_rate(utilization.clone(), &cache.params);
        cache.liquidity_rate = self.calc_liquidity_rate(
            utilization,
            cache.borrow_rate.clone(),
            &cache.params.reserve_factor,
        );
    }

    fn emit_reserve_update(&self, cache: &Cache<Self>) {
        self.update_reserve_state_event(
            &cache.asset,
            cache.timestamp,
            cache.liquidity_index.into_raw_units(),
            cache.borrow_index.into_raw_units(),
            cache.available.into_raw_units(),
            cache.borrowed_scaled.into_raw_units(),
            cache.liquidity_rate.into_raw_units(),
            cache.borrow_rate.into_raw_units(),
        );
    }

    fn internal_deposit(
        &self,
        cache: &mut Cache<Self>,
        caller: &ManagedAddress,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
    ) {
        require!(*amount > cache.zero, ERROR_INVALID_AMOUNT);

        let scaled = cache.scaled_supply(amount);
        let position_mapper = self.supply_scaled(&cache.asset, caller);
        let position_scaled = if position_mapper.is_empty() {
            self.ray_zero()
        } else {
            position_mapper.get()
        };
        position_mapper.set(position_scaled + scaled.clone());
        cache.supplied_scaled += scaled;
        cache.available += amount.clone();
    }

    /// Withdraws up to the caller's current balance. Returns the actual
    /// amount leaving the reserve.
    fn internal_withdraw(
        &self,
        cache: &mut Cache<Self>,
        caller: &ManagedAddress,
        requested: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        require!(*requested > cache.zero, ERROR_INVALID_AMOUNT);

        let position_mapper = self.supply_scaled(&cache.asset, caller);
        let position_scaled = if position_mapper.is_empty() {
            self.ray_zero()
        } else {
            position_mapper.get()
        };
        let current_balance = cache.original_supply(&position_scaled);

        let (scaled_out, amount_out) = if *requested >= current_balance {
            (position_scaled.clone(), current_balance)
        } else {
            (cache.scaled_supply(requested), requested.clone())
        };

        require!(amount_out <= cache.available, ERROR_INSUFFICIENT_LIQUIDITY);

        position_mapper.set(position_scaled - scaled_out.clone());
        cache.supplied_scaled -= scaled_out;
        cache.available -= amount_out.clone();

        amount_out
    }

    /// Draws `amount` out of the reserve as new debt, returning the scaled
    /// amount to be recorded on the loan.
    fn internal_borrow_out(
        &self,
        cache: &mut Cache<Self>,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        require!(*amount <= cache.available, ERROR_INSUFFICIENT_LIQUIDITY);

        let scaled = cache.scaled_borrow(amount);
        cache.borrowed_scaled += &scaled;
        cache.available -= amount.clone();

        scaled
    }

    /// Applies a payment against a loan's scaled debt. Clamps at the
    /// outstanding amount and reports any overpayment for refunding.
    ///
    /// Returns `(scaled_repaid, amount_repaid, over_paid)`.
    fn internal_repay_in(
        &self,
        cache: &mut Cache<Self>,
        loan_scaled: &ManagedDecimal<Self::Api, NumDecimals>,
        payment: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> (
        ManagedDecimal<Self::Api, NumDecimals>,
        ManagedDecimal<Self::Api, NumDecimals>,
        ManagedDecimal<Self::Api, NumDecimals>,
    ) {
        let current_debt = cache.original_borrow(loan_scaled);

        let (scaled_repaid, amount_repaid, over_paid) = if *payment >= current_debt {
            let over_paid = payment.clone() - current_debt.clone();
            (loan_scaled.clone(), current_debt, over_paid)
        } else {
            (cache.scaled_borrow(payment), payment.clone(), cache.zero.clone())
        };

        cache.borrowed_scaled -= &scaled_repaid;
        cache.available += &amount_repaid;

        (scaled_repaid, amount_repaid, over_paid)
    }
}
