multiversx_sc::imports!();

use common_constants::{BPS, REDEEM_MAX_REPAY_BPS};
use common_errors::{
    ERROR_INVALID_CONFIGURATION, ERROR_NFT_FROZEN, ERROR_NFT_INACTIVE, ERROR_TIMEFRAME_EXCEEDED,
};
use common_structs::NftCollateralConfig;

/// Collateral registry: risk parameters per collection with optional
/// per-token overrides. Collateral params and auction params are separate
/// surfaces with separate roles.
#[multiversx_sc::module]
pub trait CollateralModule:
    crate::storage::Storage
    + crate::guard::GuardModule
    + crate::utils::UtilsModule
    + multiversx_sc_modules::pause::PauseModule
    + common_math::SharedMathModule
    + common_events::EventsModule
{
    /// Risk parameters, LTV-manager only. Also stamps `config_timestamp`;
    /// borrows are refused once the stamp is older than the configured
    /// timeframe.
    #[endpoint(setCollateralParams)]
    fn set_collateral_params(
        &self,
        nft_asset: TokenIdentifier,
        ltv: BigUint,
        liquidation_threshold: BigUint,
        liquidation_bonus: BigUint,
        opt_nft_token_nonce: OptionalValue<u64>,
    ) {
        self.require_ltv_manager();
        self.validate_collateral_params(&ltv, &liquidation_threshold, &liquidation_bonus);

        let nonce = match opt_nft_token_nonce {
            OptionalValue::Some(nonce) => nonce,
            OptionalValue::None => 0,
        };
        let mut config = self.load_config_or_default(&nft_asset, nonce);

        config.ltv = self.to_decimal_bps(ltv.clone());
        config.liquidation_threshold = self.to_decimal_bps(liquidation_threshold.clone());
        config.liquidation_bonus = self.to_decimal_bps(liquidation_bonus.clone());
        config.config_timestamp = self.blockchain().get_block_timestamp();

        self.store_config(&nft_asset, nonce, &config);
        self.configure_collateral_event(
            &nft_asset,
            nonce,
            &ltv,
            &liquidation_threshold,
            &liquidation_bonus,
        );
    }

    /// Auction behavior, pool-admin only.
    #[endpoint(setAuctionParams)]
    fn set_auction_params(
        &self,
        nft_asset: TokenIdentifier,
        redeem_duration: u64,
        auction_duration: u64,
        redeem_fine: BigUint,
        redeem_threshold: BigUint,
        min_bid_fine: BigUint,
        opt_nft_token_nonce: OptionalValue<u64>,
    ) {
        self.require_pool_admin();
        require!(
            auction_duration > 0 && redeem_duration <= auction_duration,
            ERROR_INVALID_CONFIGURATION
        );
        let bps = BigUint::from(BPS);
        require!(
            redeem_threshold <= BigUint::from(REDEEM_MAX_REPAY_BPS)
                && redeem_fine < bps
                && min_bid_fine < bps,
            ERROR_INVALID_CONFIGURATION
        );

        let nonce = match opt_nft_token_nonce {
            OptionalValue::Some(nonce) => nonce,
            OptionalValue::None => 0,
        };
        let mut config = self.load_config_or_default(&nft_asset, nonce);

        config.redeem_duration = redeem_duration;
        config.auction_duration = auction_duration;
        config.redeem_fine = self.to_decimal_bps(redeem_fine);
        config.redeem_threshold = self.to_decimal_bps(redeem_threshold);
        config.min_bid_fine = self.to_decimal_bps(min_bid_fine);

        self.store_config(&nft_asset, nonce, &config);
    }

    #[endpoint(setCollateralActive)]
    fn set_collateral_active(&self, nft_asset: TokenIdentifier, is_active: bool) {
        self.require_pool_admin();
        let mapper = self.collection_config(&nft_asset);
        require!(!mapper.is_empty(), ERROR_NFT_INACTIVE);
        mapper.update(|config| config.is_active = is_active);
    }

    #[endpoint(setCollateralFreeze)]
    fn set_collateral_freeze(&self, nft_asset: TokenIdentifier, is_frozen: bool) {
        self.require_pool_admin();
        let mapper = self.collection_config(&nft_asset);
        require!(!mapper.is_empty(), ERROR_NFT_INACTIVE);
        mapper.update(|config| config.is_frozen = is_frozen);
    }

    /// Token override first, collection config otherwise. Unconfigured
    /// collections are treated as inactive collateral.
    fn effective_collateral_config(
        &self,
        nft_asset: &TokenIdentifier,
        nft_token_nonce: u64,
    ) -> NftCollateralConfig<Self::Api> {
        let token_mapper = self.token_config(nft_asset, nft_token_nonce);
        if !token_mapper.is_empty() {
            return token_mapper.get();
        }

        let collection_mapper = self.collection_config(nft_asset);
        require!(!collection_mapper.is_empty(), ERROR_NFT_INACTIVE);
        collection_mapper.get()
    }

    fn require_collateral_usable(&self, config: &NftCollateralConfig<Self::Api>) {
        require!(config.is_active, ERROR_NFT_INACTIVE);
        require!(!config.is_frozen, ERROR_NFT_FROZEN);
    }

    fn require_config_fresh(&self, config: &NftCollateralConfig<Self::Api>) {
        let now = self.blockchain().get_block_timestamp();
        require!(
            now - config.config_timestamp <= self.config_timeframe().get(),
            ERROR_TIMEFRAME_EXCEEDED
        );
    }

    fn validate_collateral_params(
        &self,
        ltv: &BigUint,
        liquidation_threshold: &BigUint,
        liquidation_bonus: &BigUint,
    ) {
        let bps = BigUint::from(BPS);
        require!(*ltv < bps, ERROR_INVALID_CONFIGURATION);
        require!(
            *liquidation_threshold > *ltv && *liquidation_threshold < bps,
            ERROR_INVALID_CONFIGURATION
        );
        // a liquidation at threshold plus bonus must still be coverable
        require!(
            liquidation_threshold * &(bps.clone() + liquidation_bonus) <= &bps * &bps,
            ERROR_INVALID_CONFIGURATION
        );
    }

    fn load_config_or_default(
        &self,
        nft_asset: &TokenIdentifier,
        nft_token_nonce: u64,
    ) -> NftCollateralConfig<Self::Api> {
        let mapper = if nft_token_nonce == 0 {
            self.collection_config(nft_asset)
        } else {
            self.token_config(nft_asset, nft_token_nonce)
        };

        if mapper.is_empty() {
            NftCollateralConfig {
                ltv: self.bps_zero(),
                liquidation_threshold: self.bps_zero(),
                liquidation_bonus: self.bps_zero(),
                redeem_threshold: self.bps_zero(),
                redeem_fine: self.bps_zero(),
                min_bid_fine: self.bps_zero(),
                redeem_duration: 0,
                auction_duration: 0,
                is_active: true,
                is_frozen: false,
                config_timestamp: 0,
            }
        } else {
            mapper.get()
        }
    }

    fn store_config(
        &self,
        nft_asset: &TokenIdentifier,
        nft_token_nonce: u64,
        config: &NftCollateralConfig<Self::Api>,
    ) {
        if nft_token_nonce == 0 {
            self.collection_config(nft_asset).set(config);
        } else {
            self.token_config(nft_asset, nft_token_nonce).set(config);
        }
    }
}
