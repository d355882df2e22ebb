multiversx_sc::imports!();

use common_errors::{ERROR_NFT_PAUSED, ERROR_NON_EXISTING_COLLECTION, ERROR_PRICE_IS_ZERO};
use common_structs::NftPriceData;

/// Push price store for NFT collateral. The price-manager role submits a
/// floor price per collection and optional per-nonce overrides, denominated
/// in the reserve asset the collection borrows against.
#[multiversx_sc::module]
pub trait OracleModule:
    crate::storage::Storage
    + crate::guard::GuardModule
    + crate::utils::UtilsModule
    + multiversx_sc_modules::pause::PauseModule
    + common_math::SharedMathModule
    + common_events::EventsModule
{
    /// Submits a collection floor price. First submission registers the
    /// collection.
    #[endpoint(setNftPrice)]
    fn set_nft_price(&self, nft_asset: TokenIdentifier, price: BigUint) {
        self.require_price_manager();

        let timestamp = self.blockchain().get_block_timestamp();
        self.known_collections().insert(nft_asset.clone());
        self.collection_price(&nft_asset).set(NftPriceData {
            price: price.clone(),
            timestamp,
        });

        self.set_nft_price_event(&nft_asset, 0, &price);
    }

    /// Per-nonce override; wins over the collection floor until cleared by
    /// submitting a zero price.
    #[endpoint(setNftTokenPrice)]
    fn set_nft_token_price(&self, nft_asset: TokenIdentifier, nft_token_nonce: u64, price: BigUint) {
        self.require_price_manager();
        require!(
            self.known_collections().contains(&nft_asset),
            ERROR_NON_EXISTING_COLLECTION
        );

        if price == 0 {
            self.token_price(&nft_asset, nft_token_nonce).clear();
        } else {
            let timestamp = self.blockchain().get_block_timestamp();
            self.token_price(&nft_asset, nft_token_nonce).set(NftPriceData {
                price: price.clone(),
                timestamp,
            });
        }

        self.set_nft_price_event(&nft_asset, nft_token_nonce, &price);
    }

    #[endpoint(pauseCollection)]
    fn pause_collection(&self, nft_asset: TokenIdentifier) {
        self.require_price_manager();
        require!(
            self.known_collections().contains(&nft_asset),
            ERROR_NON_EXISTING_COLLECTION
        );
        self.paused_collections().insert(nft_asset);
    }

    #[endpoint(unpauseCollection)]
    fn unpause_collection(&self, nft_asset: TokenIdentifier) {
        self.require_price_manager();
        self.paused_collections().swap_remove(&nft_asset);
    }

    /// Current price of one token, override first, then the collection
    /// floor. Fails closed on unknown, paused or unpriced collateral.
    #[view(priceOf)]
    fn price_of(&self, nft_asset: &TokenIdentifier, nft_token_nonce: u64) -> BigUint {
        require!(
            self.known_collections().contains(nft_asset),
            ERROR_NON_EXISTING_COLLECTION
        );
        require!(
            !self.paused_collections().contains(nft_asset),
            ERROR_NFT_PAUSED
        );

        let token_mapper = self.token_price(nft_asset, nft_token_nonce);
        let data = if token_mapper.is_empty() {
            self.collection_price(nft_asset).get()
        } else {
            token_mapper.get()
        };

        require!(data.price > 0, ERROR_PRICE_IS_ZERO);

        data.price
    }
}
