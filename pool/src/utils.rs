multiversx_sc::imports!();

use crate::cache::Cache;
use common_errors::{ERROR_INVALID_AMOUNT, ERROR_INVALID_ASSET};

/// Payment intake and transfer helpers shared by the user endpoints.
#[multiversx_sc::module]
pub trait UtilsModule: crate::storage::Storage + common_math::SharedMathModule {
    /// Sends `amount` of a reserve asset, skipping empty transfers.
    fn send_asset(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
        to: &ManagedAddress,
    ) -> EgldOrEsdtTokenPayment<Self::Api> {
        let payment =
            EgldOrEsdtTokenPayment::new(asset.clone(), 0, amount.into_raw_units().clone());

        self.tx().to(to).payment(&payment).transfer_if_not_empty();

        payment
    }

    fn send_asset_raw(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
        to: &ManagedAddress,
    ) {
        let payment = EgldOrEsdtTokenPayment::new(asset.clone(), 0, amount.clone());

        self.tx().to(to).payment(&payment).transfer_if_not_empty();
    }

    fn send_nft(&self, nft_asset: &TokenIdentifier, nft_token_nonce: u64, to: &ManagedAddress) {
        self.tx()
            .to(to)
            .single_esdt(nft_asset, nft_token_nonce, &BigUint::from(1u64))
            .transfer();
    }

    /// Single fungible payment in the reserve's asset, as a decimal amount.
    fn get_reserve_payment(&self, cache: &Cache<Self>) -> ManagedDecimal<Self::Api, NumDecimals> {
        let (asset, amount) = self.call_value().egld_or_single_fungible_esdt();

        require!(cache.is_same_asset(&asset), ERROR_INVALID_ASSET);
        require!(amount > 0, ERROR_INVALID_AMOUNT);

        cache.get_decimal_value(&amount)
    }

    /// The exact NFT named by the loan, quantity one, and nothing else.
    fn require_nft_payment(&self, nft_asset: &TokenIdentifier, nft_token_nonce: u64) {
        let transfers = self.call_value().all_esdt_transfers();
        require!(transfers.len() == 1, ERROR_INVALID_ASSET);

        let payment = transfers.get(0);
        require!(
            payment.token_identifier == *nft_asset
                && payment.token_nonce == nft_token_nonce
                && payment.amount == BigUint::from(1u64),
            ERROR_INVALID_ASSET
        );
    }

    fn require_no_payment(&self) {
        let egld = self.call_value().egld_direct_non_strict().clone_value();
        require!(egld == 0, ERROR_INVALID_ASSET);
        require!(
            self.call_value().all_esdt_transfers().is_empty(),
            ERROR_INVALID_ASSET
        );
    }
}
