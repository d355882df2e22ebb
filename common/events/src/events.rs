#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub use common_structs::*;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("create_reserve")]
    fn create_reserve_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] base_borrow_rate: &BigUint,
        #[indexed] slope1: &BigUint,
        #[indexed] slope2: &BigUint,
        #[indexed] optimal_utilization: &BigUint,
        #[indexed] reserve_factor: &BigUint,
    );

    /// Snapshot of a reserve after any balance-affecting operation.
    #[event("update_reserve_state")]
    fn update_reserve_state_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] timestamp: u64,
        #[indexed] liquidity_index: &BigUint,
        #[indexed] borrow_index: &BigUint,
        #[indexed] available_liquidity: &BigUint,
        #[indexed] borrowed_scaled: &BigUint,
        #[indexed] liquidity_rate: &BigUint,
        #[indexed] borrow_rate: &BigUint,
    );

    #[event("configure_collateral")]
    fn configure_collateral_event(
        &self,
        #[indexed] nft_asset: &TokenIdentifier,
        #[indexed] nft_token_nonce: u64,
        #[indexed] ltv: &BigUint,
        #[indexed] liquidation_threshold: &BigUint,
        #[indexed] liquidation_bonus: &BigUint,
    );

    #[event("deposit")]
    fn deposit_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] amount: &BigUint,
    );

    #[event("withdraw")]
    fn withdraw_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] amount: &BigUint,
    );

    #[event("borrow")]
    fn borrow_event(
        &self,
        #[indexed] loan_id: u64,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] amount: &BigUint,
        #[indexed] nft_asset: &TokenIdentifier,
        #[indexed] nft_token_nonce: u64,
    );

    #[event("repay")]
    fn repay_event(
        &self,
        #[indexed] loan_id: u64,
        #[indexed] caller: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] remaining_debt: &BigUint,
    );

    #[event("auction")]
    fn auction_event(
        &self,
        #[indexed] loan_id: u64,
        #[indexed] bidder: &ManagedAddress,
        #[indexed] bid_price: &BigUint,
        #[indexed] previous_bidder: &ManagedAddress,
    );

    #[event("redeem")]
    fn redeem_event(
        &self,
        #[indexed] loan_id: u64,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] repay_amount: &BigUint,
        #[indexed] bid_fine: &BigUint,
    );

    #[event("liquidate")]
    fn liquidate_event(
        &self,
        #[indexed] loan_id: u64,
        #[indexed] winner: &ManagedAddress,
        #[indexed] bid_price: &BigUint,
        #[indexed] debt_settled: &BigUint,
    );

    #[event("set_nft_price")]
    fn set_nft_price_event(
        &self,
        #[indexed] nft_asset: &TokenIdentifier,
        #[indexed] nft_token_nonce: u64,
        #[indexed] price: &BigUint,
    );

    #[event("rescue")]
    fn rescue_event(
        &self,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] amount: &BigUint,
        #[indexed] to: &ManagedAddress,
    );
}
