multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_structs::{Loan, MarketParams, NftCollateralConfig, NftPriceData};

/// On-chain state of the pool: reserves keyed by asset, loans keyed by id
/// with an active-loan index on the NFT, collateral configuration and the
/// push price store, plus role sets and the reentrancy flag.
#[multiversx_sc::module]
pub trait Storage {
    // ------------------------------ reserves ------------------------------

    #[view(getReserveAssets)]
    #[storage_mapper("reserve_assets")]
    fn reserve_assets(&self) -> UnorderedSetMapper<EgldOrEsdtTokenIdentifier>;

    #[view(getReserveParams)]
    #[storage_mapper("reserve_params")]
    fn reserve_params(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<MarketParams<Self::Api>>;

    /// Liquidity held for this reserve, in asset decimals. Bid escrow is
    /// deliberately not part of this figure.
    #[view(getAvailableLiquidity)]
    #[storage_mapper("available_liquidity")]
    fn available_liquidity(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    #[view(getBorrowedScaled)]
    #[storage_mapper("borrowed_scaled")]
    fn borrowed_scaled(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    #[view(getSuppliedScaled)]
    #[storage_mapper("supplied_scaled")]
    fn supplied_scaled(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    #[view(getBorrowIndex)]
    #[storage_mapper("borrow_index")]
    fn borrow_index(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    #[view(getLiquidityIndex)]
    #[storage_mapper("liquidity_index")]
    fn liquidity_index(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    #[view(getBorrowRate)]
    #[storage_mapper("borrow_rate")]
    fn borrow_rate(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    #[view(getLiquidityRate)]
    #[storage_mapper("liquidity_rate")]
    fn liquidity_rate(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    #[view(getLastTimestamp)]
    #[storage_mapper("last_timestamp")]
    fn last_timestamp(&self, asset: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<u64>;

    /// Protocol share of accrued interest and auction fines, asset decimals.
    #[view(getProtocolRevenue)]
    #[storage_mapper("revenue")]
    fn revenue(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    #[view(isReserveActive)]
    #[storage_mapper("reserve_active")]
    fn reserve_active(&self, asset: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<bool>;

    #[view(isReserveFrozen)]
    #[storage_mapper("reserve_frozen")]
    fn reserve_frozen(&self, asset: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<bool>;

    /// Scaled supply balance of one supplier for one reserve, RAY.
    #[view(getSupplyScaled)]
    #[storage_mapper("supply_scaled")]
    fn supply_scaled(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        supplier: &ManagedAddress,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Total auction bids currently escrowed per asset, raw units. Held by
    /// the contract but outside `available_liquidity`.
    #[view(getBidEscrow)]
    #[storage_mapper("bid_escrow")]
    fn bid_escrow(&self, asset: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<BigUint>;

    // ------------------------------- loans --------------------------------

    #[view(getLoan)]
    #[storage_mapper("loans")]
    fn loans(&self, loan_id: u64) -> SingleValueMapper<Loan<Self::Api>>;

    #[view(getLoanCount)]
    #[storage_mapper("loan_count")]
    fn loan_count(&self) -> SingleValueMapper<u64>;

    /// Active loan on an NFT; 0 when the token is uncollateralized. Terminal
    /// loans stay in `loans` but are dropped from this index.
    #[view(getLoanIdByNft)]
    #[storage_mapper("loan_id_by_nft")]
    fn loan_id_by_nft(
        &self,
        nft_asset: &TokenIdentifier,
        nft_token_nonce: u64,
    ) -> SingleValueMapper<u64>;

    // ----------------------------- collateral -----------------------------

    #[view(getCollectionConfig)]
    #[storage_mapper("collection_config")]
    fn collection_config(
        &self,
        nft_asset: &TokenIdentifier,
    ) -> SingleValueMapper<NftCollateralConfig<Self::Api>>;

    /// Per-token override; wins over the collection config when present.
    #[view(getTokenConfig)]
    #[storage_mapper("token_config")]
    fn token_config(
        &self,
        nft_asset: &TokenIdentifier,
        nft_token_nonce: u64,
    ) -> SingleValueMapper<NftCollateralConfig<Self::Api>>;

    // ----------------------------- price store ----------------------------

    #[view(getKnownCollections)]
    #[storage_mapper("known_collections")]
    fn known_collections(&self) -> UnorderedSetMapper<TokenIdentifier>;

    #[storage_mapper("collection_price")]
    fn collection_price(
        &self,
        nft_asset: &TokenIdentifier,
    ) -> SingleValueMapper<NftPriceData<Self::Api>>;

    #[storage_mapper("token_price")]
    fn token_price(
        &self,
        nft_asset: &TokenIdentifier,
        nft_token_nonce: u64,
    ) -> SingleValueMapper<NftPriceData<Self::Api>>;

    #[view(getPausedCollections)]
    #[storage_mapper("paused_collections")]
    fn paused_collections(&self) -> UnorderedSetMapper<TokenIdentifier>;

    // ------------------------------- roles --------------------------------

    #[view(getPoolAdmins)]
    #[storage_mapper("pool_admins")]
    fn pool_admins(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[view(getEmergencyAdmins)]
    #[storage_mapper("emergency_admins")]
    fn emergency_admins(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[view(getLtvManagers)]
    #[storage_mapper("ltv_managers")]
    fn ltv_managers(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[view(getPriceManagers)]
    #[storage_mapper("price_managers")]
    fn price_managers(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[view(getRescuers)]
    #[storage_mapper("rescuers")]
    fn rescuers(&self) -> UnorderedSetMapper<ManagedAddress>;

    /// Gateway contracts allowed to borrow on behalf of any address without
    /// an explicit allowance.
    #[view(getWhitelistedGateways)]
    #[storage_mapper("whitelisted_gateways")]
    fn whitelisted_gateways(&self) -> UnorderedSetMapper<ManagedAddress>;

    // ---------------------------- debt delegation -------------------------

    #[view(borrowAllowance)]
    #[storage_mapper("borrow_allowance")]
    fn borrow_allowance(
        &self,
        owner: &ManagedAddress,
        delegate: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<BigUint>;

    // ------------------------------- misc ---------------------------------

    /// Freshness window for collateral configuration, seconds.
    #[view(getConfigTimeframe)]
    #[storage_mapper("config_timeframe")]
    fn config_timeframe(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("reentrancy_guard")]
    fn reentrancy_guard(&self) -> SingleValueMapper<bool>;
}
