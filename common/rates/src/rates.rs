#![no_std]

use common_constants::RAY_PRECISION;
use common_structs::MarketParams;

multiversx_sc::imports!();

/// Two-slope interest rate model and index accrual helpers.
///
/// Rates are RAY-scaled and already expressed at the time unit the deployer
/// configured (per-second in this protocol); nothing here rescales them to a
/// year. Indices grow by a linear factor `1 + rate * dt` compounded
/// multiplicatively, so they never decrease.
#[multiversx_sc::module]
pub trait InterestRates: common_math::SharedMathModule {
    /// Utilization of a reserve: `borrowed / (available + borrowed)`, RAY.
    /// Returns zero when the reserve holds no liquidity at all.
    fn calc_utilization(
        &self,
        borrowed: &ManagedDecimal<Self::Api, NumDecimals>,
        available: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let total_liquidity = available.clone().rescale(RAY_PRECISION) + borrowed.clone().rescale(RAY_PRECISION);
        if total_liquidity == self.ray_zero() {
            return self.ray_zero();
        }
        self.div_half_up(borrowed, &total_liquidity, RAY_PRECISION)
    }

    /// Borrow rate for a given utilization:
    /// - below `optimal_utilization`: `base + slope1 * U / optimal`
    /// - at or above:                 `base + slope1 + slope2 * (U - optimal) / (1 - optimal)`
    ///
    /// The result is capped at `max_borrow_rate`.
    fn calc_borrow_rate(
        &self,
        utilization: ManagedDecimal<Self::Api, NumDecimals>,
        params: &MarketParams<Self::Api>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let rate = if utilization < params.optimal_utilization {
            let slope_contribution = self.div_half_up(
                &self.mul_half_up(&utilization, &params.slope1, RAY_PRECISION),
                &params.optimal_utilization,
                RAY_PRECISION,
            );
            params.base_borrow_rate.clone() + slope_contribution
        } else {
            let excess_utilization = utilization - params.optimal_utilization.clone();
            let excess_span = self.ray() - params.optimal_utilization.clone();
            let slope_contribution = self.div_half_up(
                &self.mul_half_up(&excess_utilization, &params.slope2, RAY_PRECISION),
                &excess_span,
                RAY_PRECISION,
            );
            params.base_borrow_rate.clone() + params.slope1.clone() + slope_contribution
        };

        self.get_min(rate, params.max_borrow_rate.clone())
    }

    /// Liquidity (deposit) rate: `U * borrow_rate * (1 - reserve_factor)`,
    /// with the reserve factor applied in BPS. Exactly zero at zero
    /// utilization.
    fn calc_liquidity_rate(
        &self,
        utilization: ManagedDecimal<Self::Api, NumDecimals>,
        borrow_rate: ManagedDecimal<Self::Api, NumDecimals>,
        reserve_factor: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if utilization == self.ray_zero() {
            return self.ray_zero();
        }

        let gross = self.mul_half_up(&utilization, &borrow_rate, RAY_PRECISION);
        let net_share = self.bps() - reserve_factor.clone();
        self.div_half_up(
            &self.mul_half_up(&gross, &net_share, RAY_PRECISION),
            &self.bps(),
            RAY_PRECISION,
        )
    }

    /// Linear accrual factor `1 + rate * dt`, RAY.
    fn accrual_factor(
        &self,
        rate: &ManagedDecimal<Self::Api, NumDecimals>,
        time_passed: u64,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let interest = self.mul_half_up(
            rate,
            &self.to_decimal(BigUint::from(time_passed), 0),
            RAY_PRECISION,
        );

        self.ray() + interest
    }

    /// Compounds an accrual factor into an index. Factors are `>= 1`, so the
    /// index is non-decreasing.
    fn compound_index(
        &self,
        index: &ManagedDecimal<Self::Api, NumDecimals>,
        factor: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.mul_half_up(index, factor, RAY_PRECISION)
    }

    /// Converts a RAY-scaled principal into the current actual amount at the
    /// reserve's decimal precision.
    fn scaled_to_actual(
        &self,
        scaled_amount: &ManagedDecimal<Self::Api, NumDecimals>,
        index: &ManagedDecimal<Self::Api, NumDecimals>,
        asset_decimals: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let actual = self.mul_half_up(scaled_amount, index, RAY_PRECISION);
        self.rescale_half_up(&actual, asset_decimals)
    }

    /// Normalizes an actual amount by an index, producing the RAY-scaled
    /// principal recorded in positions.
    fn actual_to_scaled(
        &self,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
        index: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.div_half_up(amount, index, RAY_PRECISION)
    }
}
