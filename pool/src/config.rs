multiversx_sc::imports!();

use crate::cache::Cache;
use common_constants::{BPS, RAY};
use common_errors::{
    ERROR_INVALID_CONFIGURATION, ERROR_RESERVE_ALREADY_EXISTS, ERROR_RESERVE_NOT_FOUND,
};
use common_structs::MarketParams;

/// Governance surface: reserve registration and switches, role membership,
/// gateway whitelist, debt delegation and revenue claims.
#[multiversx_sc::module]
pub trait ConfigModule:
    crate::storage::Storage
    + crate::guard::GuardModule
    + crate::reserve::ReserveModule
    + crate::utils::UtilsModule
    + multiversx_sc_modules::pause::PauseModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + common_events::EventsModule
{
    /// Creates a reserve for a lendable asset. Rates are RAY per second,
    /// `reserve_factor` is BPS. Indices start at RAY and the reserve starts
    /// active and unfrozen.
    #[endpoint(registerReserve)]
    fn register_reserve(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        base_borrow_rate: BigUint,
        slope1: BigUint,
        slope2: BigUint,
        optimal_utilization: BigUint,
        max_borrow_rate: BigUint,
        reserve_factor: BigUint,
        asset_decimals: usize,
    ) {
        self.require_pool_admin();
        require!(
            self.reserve_params(&asset).is_empty(),
            ERROR_RESERVE_ALREADY_EXISTS
        );

        let ray = BigUint::from(RAY);
        require!(
            optimal_utilization > 0 && optimal_utilization < ray,
            ERROR_INVALID_CONFIGURATION
        );
        require!(
            reserve_factor < BigUint::from(BPS),
            ERROR_INVALID_CONFIGURATION
        );
        require!(base_borrow_rate <= max_borrow_rate, ERROR_INVALID_CONFIGURATION);

        let params = MarketParams {
            base_borrow_rate: self.to_decimal_ray(base_borrow_rate.clone()),
            slope1: self.to_decimal_ray(slope1.clone()),
            slope2: self.to_decimal_ray(slope2.clone()),
            optimal_utilization: self.to_decimal_ray(optimal_utilization.clone()),
            max_borrow_rate: self.to_decimal_ray(max_borrow_rate),
            reserve_factor: self.to_decimal_bps(reserve_factor.clone()),
            asset_decimals,
        };

        let zero = self.to_decimal(BigUint::zero(), asset_decimals);
        let now = self.blockchain().get_block_timestamp();

        self.reserve_params(&asset).set(&params);
        self.available_liquidity(&asset).set(&zero);
        self.borrowed_scaled(&asset).set(self.ray_zero());
        self.supplied_scaled(&asset).set(self.ray_zero());
        self.revenue(&asset).set(&zero);
        self.borrow_index(&asset).set(self.ray());
        self.liquidity_index(&asset).set(self.ray());
        // zero utilization at creation
        self.borrow_rate(&asset).set(&params.base_borrow_rate);
        self.liquidity_rate(&asset).set(self.ray_zero());
        self.last_timestamp(&asset).set(now);
        self.reserve_active(&asset).set(true);
        self.reserve_frozen(&asset).set(false);
        self.reserve_assets().insert(asset.clone());

        self.create_reserve_event(
            &asset,
            &base_borrow_rate,
            &slope1,
            &slope2,
            &optimal_utilization,
            &reserve_factor,
        );
    }

    #[endpoint(setReserveActive)]
    fn set_reserve_active(&self, asset: EgldOrEsdtTokenIdentifier, is_active: bool) {
        self.require_pool_admin();
        require!(!self.reserve_params(&asset).is_empty(), ERROR_RESERVE_NOT_FOUND);
        self.reserve_active(&asset).set(is_active);
    }

    /// A frozen reserve keeps accepting deposits and repayments; only new
    /// borrows are blocked.
    #[endpoint(setReserveFreeze)]
    fn set_reserve_freeze(&self, asset: EgldOrEsdtTokenIdentifier, is_frozen: bool) {
        self.require_pool_admin();
        require!(!self.reserve_params(&asset).is_empty(), ERROR_RESERVE_NOT_FOUND);
        self.reserve_frozen(&asset).set(is_frozen);
    }

    #[only_owner]
    #[endpoint(setConfigTimeframe)]
    fn set_config_timeframe(&self, timeframe: u64) {
        require!(timeframe > 0, ERROR_INVALID_CONFIGURATION);
        self.config_timeframe().set(timeframe);
    }

    // role membership, owner-managed

    #[only_owner]
    #[endpoint(addPoolAdmins)]
    fn add_pool_admins(&self, admins: MultiValueEncoded<ManagedAddress>) {
        let mut mapper = self.pool_admins();
        for admin in admins {
            mapper.insert(admin);
        }
    }

    #[only_owner]
    #[endpoint(removePoolAdmins)]
    fn remove_pool_admins(&self, admins: MultiValueEncoded<ManagedAddress>) {
        let mut mapper = self.pool_admins();
        for admin in admins {
            mapper.swap_remove(&admin);
        }
    }

    #[only_owner]
    #[endpoint(addEmergencyAdmins)]
    fn add_emergency_admins(&self, admins: MultiValueEncoded<ManagedAddress>) {
        let mut mapper = self.emergency_admins();
        for admin in admins {
            mapper.insert(admin);
        }
    }

    #[only_owner]
    #[endpoint(removeEmergencyAdmins)]
    fn remove_emergency_admins(&self, admins: MultiValueEncoded<ManagedAddress>) {
        let mut mapper = self.emergency_admins();
        for admin in admins {
            mapper.swap_remove(&admin);
        }
    }

    #[only_owner]
    #[endpoint(addLtvManagers)]
    fn add_ltv_managers(&self, managers: MultiValueEncoded<ManagedAddress>) {
        let mut mapper = self.ltv_managers();
        for manager in managers {
            mapper.insert(manager);
        }
    }

    #[only_owner]
    #[endpoint(removeLtvManagers)]
    fn remove_ltv_managers(&self, managers: MultiValueEncoded<ManagedAddress>) {
        let mut mapper = self.ltv_managers();
        for manager in managers {
            mapper.swap_remove(&manager);
        }
    }

    #[only_owner]
    #[endpoint(addPriceManagers)]
    fn add_price_managers(&self, managers: MultiValueEncoded<ManagedAddress>) {
        let mut mapper = self.price_managers();
        for manager in managers {
            mapper.insert(manager);
        }
    }

    #[only_owner]
    #[endpoint(removePriceManagers)]
    fn remove_price_managers(&self, managers: MultiValueEncoded<ManagedAddress>) {
        let mut mapper = self.price_managers();
        for manager in managers {
            mapper.swap_remove(&manager);
        }
    }

    #[only_owner]
    #[endpoint(addRescuers)]
    fn add_rescuers(&self, rescuers: MultiValueEncoded<ManagedAddress>) {
        let mut mapper = self.rescuers();
        for rescuer in rescuers {
            mapper.insert(rescuer);
        }
    }

    #[only_owner]
    #[endpoint(removeRescuers)]
    fn remove_rescuers(&self, rescuers: MultiValueEncoded<ManagedAddress>) {
        let mut mapper = self.rescuers();
        for rescuer in rescuers {
            mapper.swap_remove(&rescuer);
        }
    }

    #[only_owner]
    #[endpoint(addWhitelistedGateways)]
    fn add_whitelisted_gateways(&self, gateways: MultiValueEncoded<ManagedAddress>) {
        let mut mapper = self.whitelisted_gateways();
        for gateway in gateways {
            mapper.insert(gateway);
        }
    }

    #[only_owner]
    #[endpoint(removeWhitelistedGateways)]
    fn remove_whitelisted_gateways(&self, gateways: MultiValueEncoded<ManagedAddress>) {
        let mut mapper = self.whitelisted_gateways();
        for gateway in gateways {
            mapper.swap_remove(&gateway);
        }
    }

    /// Lets `delegate` draw debt against the caller's collateral, up to
    /// `amount` of `asset`. Overwrites any previous allowance.
    #[endpoint(approveDelegation)]
    fn approve_delegation(
        &self,
        delegate: ManagedAddress,
        asset: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
    ) {
        let caller = self.blockchain().get_caller();
        self.borrow_allowance(&caller, &delegate, &asset).set(amount);
    }

    /// Transfers accumulated protocol revenue to the owner, bounded by what
    /// the reserve can spare.
    #[only_owner]
    #[endpoint(claimRevenue)]
    fn claim_revenue(&self, asset: EgldOrEsdtTokenIdentifier) {
        let mut cache = Cache::new(self, asset);
        self.global_sync(&mut cache);

        let claimable = self.get_min(cache.revenue.clone(), cache.available.clone());
        if claimable == cache.zero {
            return;
        }

        cache.revenue -= &claimable;
        cache.available -= &claimable;
        self.update_rates(&mut cache);
        self.emit_reserve_update(&cache);

        let owner = self.blockchain().get_owner_address();
        self.send_asset(&cache.asset.clone(), &claimable, &owner);
    }
}
