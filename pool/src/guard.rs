multiversx_sc::imports!();

use common_errors::{
    ERROR_CALLER_NOT_EMERGENCY_ADMIN, ERROR_CALLER_NOT_LTV_MANAGER, ERROR_CALLER_NOT_POOL_ADMIN,
    ERROR_CALLER_NOT_PRICE_MANAGER, ERROR_CALLER_NOT_RESCUER, ERROR_INVALID_AMOUNT,
    ERROR_POOL_PAUSED, ERROR_REENTRANT_CALL,
};

/// Access control and call gating: role checks on top of the owner, the
/// pause switch for user operations, the reentrancy flag and the rescue
/// sweep for stray tokens.
#[multiversx_sc::module]
pub trait GuardModule:
    crate::storage::Storage
    + crate::utils::UtilsModule
    + multiversx_sc_modules::pause::PauseModule
    + common_math::SharedMathModule
    + common_events::EventsModule
{
    fn require_pool_active(&self) {
        require!(self.not_paused(), ERROR_POOL_PAUSED);
    }

    /// Taken at the top of every mutating endpoint, released at the bottom.
    /// The flag stays set across all token transfers the endpoint performs,
    /// so a transfer callback re-entering the pool fails here.
    fn reentrancy_enter(&self) {
        require!(!self.reentrancy_guard().get(), ERROR_REENTRANT_CALL);
        self.reentrancy_guard().set(true);
    }

    fn reentrancy_exit(&self) {
        self.reentrancy_guard().set(false);
    }

    fn require_pool_admin(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            self.pool_admins().contains(&caller),
            ERROR_CALLER_NOT_POOL_ADMIN
        );
    }

    fn require_emergency_admin(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            self.emergency_admins().contains(&caller),
            ERROR_CALLER_NOT_EMERGENCY_ADMIN
        );
    }

    fn require_ltv_manager(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            self.ltv_managers().contains(&caller),
            ERROR_CALLER_NOT_LTV_MANAGER
        );
    }

    fn require_price_manager(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            self.price_managers().contains(&caller),
            ERROR_CALLER_NOT_PRICE_MANAGER
        );
    }

    fn require_rescuer(&self) {
        let caller = self.blockchain().get_caller();
        require!(self.rescuers().contains(&caller), ERROR_CALLER_NOT_RESCUER);
    }

    /// Pause switch available to the emergency-admin role; the owner keeps
    /// the `pause`/`unpause` endpoints from the pause module.
    #[endpoint(emergencyPause)]
    fn emergency_pause(&self) {
        self.require_emergency_admin();
        self.set_paused(true);
    }

    #[endpoint(emergencyUnpause)]
    fn emergency_unpause(&self) {
        self.require_emergency_admin();
        self.set_paused(false);
    }

    /// Sweeps tokens that were transferred to the contract by mistake.
    /// Tracked reserve liquidity, accrued revenue and escrowed auction bids
    /// are off limits.
    #[endpoint(rescue)]
    fn rescue(&self, token: EgldOrEsdtTokenIdentifier, amount: BigUint, to: ManagedAddress) {
        self.require_rescuer();
        require!(amount > 0, ERROR_INVALID_AMOUNT);

        let balance = self.blockchain().get_sc_balance(&token, 0);
        let tracked = self.tracked_balance(&token);
        let free = if balance > tracked {
            balance - tracked
        } else {
            BigUint::zero()
        };
        require!(amount <= free, ERROR_INVALID_AMOUNT);

        self.send_asset_raw(&token, &amount, &to);
        self.rescue_event(&token, &amount, &to);
    }

    fn tracked_balance(&self, token: &EgldOrEsdtTokenIdentifier) -> BigUint {
        let mut tracked = self.bid_escrow(token).get();
        if !self.reserve_params(token).is_empty() {
            tracked += self.available_liquidity(token).get().into_raw_units();
            tracked += self.revenue(token).get().into_raw_units();
        }
        tracked
    }
}
