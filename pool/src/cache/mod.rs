use common_constants::RAY_PRECISION;
use common_errors::ERROR_RESERVE_NOT_FOUND;
use common_structs::MarketParams;

multiversx_sc::imports!();

/// In-memory snapshot of one reserve, read from storage on construction and
/// committed back when dropped. Every reserve mutation goes through a cache
/// so a single endpoint performs one read and one write per field no matter
/// how many adjustments it makes.
///
/// Monetary fields are in asset decimals; scaled totals, indices and rates
/// are RAY.
pub struct Cache<'a, C>
where
    C: crate::storage::Storage,
{
    sc_ref: &'a C,
    pub asset: EgldOrEsdtTokenIdentifier<C::Api>,
    pub params: MarketParams<C::Api>,
    pub available: ManagedDecimal<C::Api, NumDecimals>,
    pub borrowed_scaled: ManagedDecimal<C::Api, NumDecimals>,
    pub supplied_scaled: ManagedDecimal<C::Api, NumDecimals>,
    pub revenue: ManagedDecimal<C::Api, NumDecimals>,
    pub borrow_index: ManagedDecimal<C::Api, NumDecimals>,
    pub liquidity_index: ManagedDecimal<C::Api, NumDecimals>,
    pub borrow_rate: ManagedDecimal<C::Api, NumDecimals>,
    pub liquidity_rate: ManagedDecimal<C::Api, NumDecimals>,
    pub timestamp: u64,
    pub last_timestamp: u64,
    pub zero: ManagedDecimal<C::Api, NumDecimals>,
}

impl<'a, C> Cache<'a, C>
where
    C: crate::storage::Storage + common_math::SharedMathModule,
{
    pub fn new(sc_ref: &'a C, asset: EgldOrEsdtTokenIdentifier<C::Api>) -> Self {
        if sc_ref.reserve_params(&asset).is_empty() {
            multiversx_sc::contract_base::ErrorHelper::<C::Api>::signal_error_with_message(
                ERROR_RESERVE_NOT_FOUND,
            );
        }
        let params = sc_ref.reserve_params(&asset).get();

        Cache {
            zero: sc_ref.to_decimal(BigUint::zero(), params.asset_decimals),
            available: sc_ref.available_liquidity(&asset).get(),
            borrowed_scaled: sc_ref.borrowed_scaled(&asset).get(),
            supplied_scaled: sc_ref.supplied_scaled(&asset).get(),
            revenue: sc_ref.revenue(&asset).get(),
            borrow_index: sc_ref.borrow_index(&asset).get(),
            liquidity_index: sc_ref.liquidity_index(&asset).get(),
            borrow_rate: sc_ref.borrow_rate(&asset).get(),
            liquidity_rate: sc_ref.liquidity_rate(&asset).get(),
            timestamp: sc_ref.blockchain().get_block_timestamp(),
            last_timestamp: sc_ref.last_timestamp(&asset).get(),
            params,
            asset,
            sc_ref,
        }
    }
}

impl<C> Drop for Cache<'_, C>
where
    C: crate::storage::Storage,
{
    fn drop(&mut self) {
        // commit changes to storage for the mutable fields
        self.sc_ref
            .available_liquidity(&self.asset)
            .set(&self.available);
        self.sc_ref
            .borrowed_scaled(&self.asset)
            .set(&self.borrowed_scaled);
        self.sc_ref
            .supplied_scaled(&self.asset)
            .set(&self.supplied_scaled);
        self.sc_ref.revenue(&self.asset).set(&self.revenue);
        self.sc_ref.borrow_index(&self.asset).set(&self.borrow_index);
        self.sc_ref
            .liquidity_index(&self.asset)
            .set(&self.liquidity_index);
        self.sc_ref.borrow_rate(&self.asset).set(&self.borrow_rate);
        self.sc_ref
            .liquidity_rate(&self.asset)
            .set(&self.liquidity_rate);
        self.sc_ref
            .last_timestamp(&self.asset)
            .set(self.last_timestamp);
    }
}

impl<C> Cache<'_, C>
where
    C: crate::storage::Storage + common_math::SharedMathModule,
{
    pub fn get_decimal_value(
        &self,
        value: &BigUint<C::Api>,
    ) -> ManagedDecimal<C::Api, NumDecimals> {
        self.sc_ref
            .to_decimal(value.clone(), self.params.asset_decimals)
    }

    pub fn is_same_asset(&self, asset: &EgldOrEsdtTokenIdentifier<C::Api>) -> bool {
        self.asset == *asset
    }

    /// Current total variable debt in asset decimals.
    pub fn total_debt(&self) -> ManagedDecimal<C::Api, NumDecimals> {
        self.original_borrow(&self.borrowed_scaled)
    }

    /// `debt / (available + debt)`, RAY. Zero for an empty reserve.
    pub fn get_utilization(&self) -> ManagedDecimal<C::Api, NumDecimals> {
        let debt = self.total_debt();
        let total_liquidity = self.available.clone() + debt.clone();

        if total_liquidity == self.zero {
            self.sc_ref.ray_zero()
        } else {
            self.sc_ref
                .div_half_up(&debt, &total_liquidity, RAY_PRECISION)
        }
    }

    pub fn scaled_borrow(
        &self,
        amount: &ManagedDecimal<C::Api, NumDecimals>,
    ) -> ManagedDecimal<C::Api, NumDecimals> {
        self.sc_ref
            .div_half_up(amount, &self.borrow_index, RAY_PRECISION)
    }

    pub fn original_borrow(
        &self,
        scaled_amount: &ManagedDecimal<C::Api, NumDecimals>,
    ) -> ManagedDecimal<C::Api, NumDecimals> {
        let amount = self
            .sc_ref
            .mul_half_up(scaled_amount, &self.borrow_index, RAY_PRECISION);
        self.sc_ref
            .rescale_half_up(&amount, self.params.asset_decimals)
    }

    pub fn scaled_supply(
        &self,
        amount: &ManagedDecimal<C::Api, NumDecimals>,
    ) -> ManagedDecimal<C::Api, NumDecimals> {
        self.sc_ref
            .div_half_up(amount, &self.liquidity_index, RAY_PRECISION)
    }

    pub fn original_supply(
        &self,
        scaled_amount: &ManagedDecimal<C::Api, NumDecimals>,
    ) -> ManagedDecimal<C::Api, NumDecimals> {
        let amount =
            self.sc_ref
                .mul_half_up(scaled_amount, &self.liquidity_index, RAY_PRECISION);
        self.sc_ref
            .rescale_half_up(&amount, self.params.asset_decimals)
    }
}
