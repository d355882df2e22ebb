#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod cache;
pub mod collateral;
pub mod config;
pub mod guard;
pub mod loans;
pub mod oracle;
pub mod reserve;
pub mod storage;
pub mod utils;
pub mod views;

pub use common_events::*;

use cache::Cache;
use common_constants::DEFAULT_CONFIG_TIMEFRAME;
use common_errors::ERROR_RESERVE_INACTIVE;

/// NFT-collateralized lending pool. Suppliers fund per-asset reserves and
/// earn through a liquidity index; borrowers lock one NFT per loan and draw
/// debt against its oracle price; unhealthy loans settle through an English
/// auction with a borrower redemption window.
///
/// Every user endpoint follows the same discipline: pause check, reentrancy
/// guard, index sync before any balance math, then the operation, events and
/// guard release.
#[multiversx_sc::contract]
pub trait NftLendingPool:
    storage::Storage
    + guard::GuardModule
    + utils::UtilsModule
    + reserve::ReserveModule
    + collateral::CollateralModule
    + oracle::OracleModule
    + config::ConfigModule
    + loans::LoanHelpersModule
    + loans::borrow::BorrowModule
    + loans::repay::RepayModule
    + loans::auction::AuctionModule
    + views::ViewsModule
    + multiversx_sc_modules::pause::PauseModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + common_events::EventsModule
{
    #[init]
    fn init(&self) {
        self.config_timeframe().set_if_empty(DEFAULT_CONFIG_TIMEFRAME);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Supplies liquidity to the reserve of the paid asset.
    #[payable("*")]
    #[endpoint(deposit)]
    fn deposit(&self) {
        self.require_pool_active();
        self.reentrancy_enter();

        let caller = self.blockchain().get_caller();
        let (asset, amount_raw) = self.call_value().egld_or_single_fungible_esdt();
        {
            let mut cache = Cache::new(self, asset);
            require!(
                self.reserve_active(&cache.asset).get(),
                ERROR_RESERVE_INACTIVE
            );
            self.global_sync(&mut cache);

            let amount = cache.get_decimal_value(&amount_raw);
            self.internal_deposit(&mut cache, &caller, &amount);

            self.update_rates(&mut cache);
            self.emit_reserve_update(&cache);
            self.deposit_event(&caller, &cache.asset, &amount_raw);
        }

        self.reentrancy_exit();
    }

    /// Withdraws supplied liquidity, capped at the caller's balance.
    #[endpoint(withdraw)]
    fn withdraw(&self, asset: EgldOrEsdtTokenIdentifier, amount: BigUint) {
        self.require_pool_active();
        self.reentrancy_enter();

        let caller = self.blockchain().get_caller();
        {
            let mut cache = Cache::new(self, asset);
            self.global_sync(&mut cache);

            let requested = cache.get_decimal_value(&amount);
            let withdrawn = self.internal_withdraw(&mut cache, &caller, &requested);

            self.update_rates(&mut cache);
            self.emit_reserve_update(&cache);
            self.withdraw_event(&caller, &cache.asset, withdrawn.into_raw_units());

            self.send_asset(&cache.asset.clone(), &withdrawn, &caller);
        }

        self.reentrancy_exit();
    }

    /// Draws `amount` of `asset` against the NFT. The first borrow must pay
    /// the NFT in; later borrows carry no payment.
    #[payable("*")]
    #[endpoint(borrow)]
    fn borrow(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
        nft_asset: TokenIdentifier,
        nft_token_nonce: u64,
        opt_on_behalf_of: OptionalValue<ManagedAddress>,
    ) {
        self.require_pool_active();
        self.reentrancy_enter();

        let caller = self.blockchain().get_caller();
        let on_behalf_of = match opt_on_behalf_of {
            OptionalValue::Some(address) => address,
            OptionalValue::None => caller.clone(),
        };
        self.internal_borrow(
            &caller,
            asset,
            &amount,
            &nft_asset,
            nft_token_nonce,
            &on_behalf_of,
        );

        self.reentrancy_exit();
    }

    /// Pays down the loan on this NFT. Covering the full debt closes the
    /// loan and returns the NFT; excess payment is refunded.
    #[payable("*")]
    #[endpoint(repay)]
    fn repay(&self, nft_asset: TokenIdentifier, nft_token_nonce: u64) {
        self.require_pool_active();
        self.reentrancy_enter();

        let caller = self.blockchain().get_caller();
        self.internal_repay(&caller, &nft_asset, nft_token_nonce);

        self.reentrancy_exit();
    }

    /// Opens or outbids the auction on an unhealthy loan; the payment is the
    /// bid, escrowed until settlement.
    #[payable("*")]
    #[endpoint(auction)]
    fn auction(
        &self,
        nft_asset: TokenIdentifier,
        nft_token_nonce: u64,
        opt_on_behalf_of: OptionalValue<ManagedAddress>,
    ) {
        self.require_pool_active();
        self.reentrancy_enter();

        let bidder = match opt_on_behalf_of {
            OptionalValue::Some(address) => address,
            OptionalValue::None => self.blockchain().get_caller(),
        };
        self.internal_auction(&bidder, &nft_asset, nft_token_nonce);

        self.reentrancy_exit();
    }

    /// Rescues an auctioned loan inside the redeem window. The payment is
    /// `amount` plus the bid fine.
    #[payable("*")]
    #[endpoint(redeem)]
    fn redeem(&self, nft_asset: TokenIdentifier, nft_token_nonce: u64, amount: BigUint) {
        self.require_pool_active();
        self.reentrancy_enter();

        self.internal_redeem(&nft_asset, nft_token_nonce, &amount);

        self.reentrancy_exit();
    }

    /// Settles an auction whose duration has passed. An optional payment
    /// covers any debt shortfall beyond the winning bid.
    #[payable("*")]
    #[endpoint(liquidate)]
    fn liquidate(&self, nft_asset: TokenIdentifier, nft_token_nonce: u64) {
        self.require_pool_active();
        self.reentrancy_enter();

        let caller = self.blockchain().get_caller();
        self.internal_liquidate(&caller, &nft_asset, nft_token_nonce);

        self.reentrancy_exit();
    }
}
