use crate::constants::*;
use common_proxies::proxy_pool;
use common_structs::Loan;
use multiversx_sc::codec::multi_types::OptionalValue;
use multiversx_sc::types::{
    BigUint, EgldOrEsdtTokenIdentifier, EsdtTokenPayment, ManagedAddress, ManagedBuffer,
    MultiValueEncoded, ReturnsNewManagedAddress, ReturnsResult, TestEsdtTransfer,
    TestTokenIdentifier,
};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{ExpectMessage, TestAddress},
    ScenarioTxRun, ScenarioWorld,
};

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(POOL_PATH, pool::ContractBuilder);

    blockchain
}

pub struct PoolTestState {
    pub world: ScenarioWorld,
    pub pool_sc: ManagedAddress<StaticApi>,
}

impl PoolTestState {
    /// Deploys the pool, wires every role to its own address and opens a
    /// USDC reserve with a priced, borrowable NFT collection.
    pub fn new() -> Self {
        let mut world = world();
        world.current_block().block_timestamp(0);

        world.account(OWNER_ADDRESS).nonce(1);
        world.account(POOL_ADMIN_ADDRESS).nonce(1);
        world.account(EMERGENCY_ADMIN_ADDRESS).nonce(1);
        world.account(LTV_MANAGER_ADDRESS).nonce(1);
        world.account(PRICE_MANAGER_ADDRESS).nonce(1);
        world.account(RESCUER_ADDRESS).nonce(1);

        let pool_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_pool::NftLendingPoolProxy)
            .init()
            .code(POOL_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        let mut state = Self { world, pool_sc };

        state.grant_roles();
        state.register_usdc_reserve();
        state.configure_nft_collection();

        state
    }

    fn grant_roles(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.pool_sc)
            .typed(proxy_pool::NftLendingPoolProxy)
            .add_pool_admins(single_address(POOL_ADMIN_ADDRESS))
            .run();
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.pool_sc)
            .typed(proxy_pool::NftLendingPoolProxy)
            .add_emergency_admins(single_address(EMERGENCY_ADMIN_ADDRESS))
            .run();
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.pool_sc)
            .typed(proxy_pool::NftLendingPoolProxy)
            .add_ltv_managers(single_address(LTV_MANAGER_ADDRESS))
            .run();
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.pool_sc)
            .typed(proxy_pool::NftLendingPoolProxy)
            .add_price_managers(single_address(PRICE_MANAGER_ADDRESS))
            .run();
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.pool_sc)
            .typed(proxy_pool::NftLendingPoolProxy)
            .add_rescuers(single_address(RESCUER_ADDRESS))
            .run();
    }

    fn register_usdc_reserve(&mut self) {
        self.register_reserve_for(USDC_TOKEN, USDC_DECIMALS, None);
    }

    pub fn register_reserve_for(
        &mut self,
        token: TestTokenIdentifier,
        decimals: usize,
        error_message: Option<&[u8]>,
    ) {
        let call = self
            .world
            .tx()
            .from(POOL_ADMIN_ADDRESS)
            .to(&self.pool_sc)
            .typed(proxy_pool::NftLendingPoolProxy)
            .register_reserve(
                EgldOrEsdtTokenIdentifier::esdt(token.to_token_identifier()),
                ray_percent(BASE_RATE_PERCENT),
                ray_percent(SLOPE1_PERCENT),
                ray_percent(SLOPE2_PERCENT),
                ray_percent(OPTIMAL_UTILIZATION_PERCENT),
                ray_percent(MAX_RATE_PERCENT),
                BigUint::from(RESERVE_FACTOR_BPS),
                decimals,
            );
        if let Some(error) = error_message {
            call.returns(ExpectMessage(core::str::from_utf8(error).unwrap()))
                .run();
        } else {
            call.run();
        }
    }

    fn configure_nft_collection(&mut self) {
        self.set_collateral_params(NFT_TOKEN, LTV_BPS, LIQ_THRESHOLD_BPS, LIQ_BONUS_BPS, None);
        self.set_auction_params(NFT_TOKEN, REDEEM_DURATION, AUCTION_DURATION, None);
        self.set_nft_price(NFT_TOKEN, usdc(NFT_PRICE_USDC), None);
    }

    pub fn set_collateral_params(
        &mut self,
        collection: TestTokenIdentifier,
        ltv: u64,
        liquidation_threshold: u64,
        liquidation_bonus: u64,
        error_message: Option<&[u8]>,
    ) {
        let call = self
            .world
            .tx()
            .from(LTV_MANAGER_ADDRESS)
            .to(&self.pool_sc)
            .typed(proxy_pool::NftLendingPoolProxy)
            .set_collateral_params(
                collection.to_token_identifier(),
                BigUint::from(ltv),
                BigUint::from(liquidation_threshold),
                BigUint::from(liquidation_bonus),
                OptionalValue::<u64>::None,
            );
        if let Some(error) = error_message {
            call.returns(ExpectMessage(core::str::from_utf8(error).unwrap()))
                .run();
        } else {
            call.run();
        }
    }

    pub fn set_auction_params(
        &mut self,
        collection: TestTokenIdentifier,
        redeem_duration: u64,
        auction_duration: u64,
        error_message: Option<&[u8]>,
    ) {
        let call = self
            .world
            .tx()
            .from(POOL_ADMIN_ADDRESS)
            .to(&self.pool_sc)
            .typed(proxy_pool::NftLendingPoolProxy)
            .set_auction_params(
                collection.to_token_identifier(),
                redeem_duration,
                auction_duration,
                BigUint::from(REDEEM_FINE_BPS),
                BigUint::from(REDEEM_THRESHOLD_BPS),
                BigUint::from(MIN_BID_FINE_BPS),
                OptionalValue::<u64>::None,
            );
        if let Some(error) = error_message {
            call.returns(ExpectMessage(core::str::from_utf8(error).unwrap()))
                .run();
        } else {
            call.run();
        }
    }

    pub fn set_nft_price(
        &mut self,
        collection: TestTokenIdentifier,
        price: BigUint<StaticApi>,
        error_message: Option<&[u8]>,
    ) {
        let call = self
            .world
            .tx()
            .from(PRICE_MANAGER_ADDRESS)
            .to(&self.pool_sc)
            .typed(proxy_pool::NftLendingPoolProxy)
            .set_nft_price(collection.to_token_identifier(), price);
        if let Some(error) = error_message {
            call.returns(ExpectMessage(core::str::from_utf8(error).unwrap()))
                .run();
        } else {
            call.run();
        }
    }

    pub fn set_nft_token_price(&mut self, collection: TestTokenIdentifier, nonce: u64, price: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(PRICE_MANAGER_ADDRESS)
            .to(&self.pool_sc)
            .typed(proxy_pool::NftLendingPoolProxy)
            .set_nft_token_price(collection.to_token_identifier(), nonce, price)
            .run();
    }

    // ------------------------------ user flows ------------------------------

    pub fn deposit(
        &mut self,
        from: &TestAddress,
        amount: BigUint<StaticApi>,
        error_message: Option<&[u8]>,
    ) {
        self.deposit_token(from, USDC_TOKEN, amount, error_message);
    }

    pub fn deposit_token(
        &mut self,
        from: &TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        error_message: Option<&[u8]>,
    ) {
        let call = self
            .world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pool_sc)
            .typed(proxy_pool::NftLendingPoolProxy)
            .deposit()
            .esdt(EsdtTokenPayment::new(token.to_token_identifier(), 0, amount));
        if let Some(error) = error_message {
            call.returns(ExpectMessage(core::str::from_utf8(error).unwrap()))
                .run();
        } else {
            call.run();
        }
    }

    pub fn withdraw(
        &mut self,
        from: &TestAddress,
        amount: BigUint<StaticApi>,
        error_message: Option<&[u8]>,
    ) {
        let call = self
            .world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pool_sc)
            .typed(proxy_pool::NftLendingPoolProxy)
            .withdraw(usdc_id(), amount);
        if let Some(error) = error_message {
            call.returns(ExpectMessage(core::str::from_utf8(error).unwrap()))
                .run();
        } else {
            call.run();
        }
    }

    /// First draw against an NFT; the token itself travels with the call.
    pub fn borrow_with_nft(
        &mut self,
        from: &TestAddress,
        amount: BigUint<StaticApi>,
        collection: TestTokenIdentifier,
        nonce: u64,
        error_message: Option<&[u8]>,
    ) {
        let call = self
            .world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pool_sc)
            .typed(proxy_pool::NftLendingPoolProxy)
            .borrow(
                usdc_id(),
                amount,
                collection.to_token_identifier(),
                nonce,
                OptionalValue::<ManagedAddress<StaticApi>>::None,
            )
            .esdt(TestEsdtTransfer(collection, nonce, 1u64));
        if let Some(error) = error_message {
            call.returns(ExpectMessage(core::str::from_utf8(error).unwrap()))
                .run();
        } else {
            call.run();
        }
    }

    /// Further draw on an open loan; no payment.
    pub fn borrow_more(
        &mut self,
        from: &TestAddress,
        amount: BigUint<StaticApi>,
        nonce: u64,
        error_message: Option<&[u8]>,
    ) {
        let call = self
            .world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pool_sc)
            .typed(proxy_pool::NftLendingPoolProxy)
            .borrow(
                usdc_id(),
                amount,
                NFT_TOKEN.to_token_identifier(),
                nonce,
                OptionalValue::<ManagedAddress<StaticApi>>::None,
            );
        if let Some(error) = error_message {
            call.returns(ExpectMessage(core::str::from_utf8(error).unwrap()))
                .run();
        } else {
            call.run();
        }
    }

    pub fn borrow_on_behalf(
        &mut self,
        caller: &TestAddress,
        amount: BigUint<StaticApi>,
        nonce: u64,
        on_behalf_of: &TestAddress,
        error_message: Option<&[u8]>,
    ) {
        let call = self
            .world
            .tx()
            .from(caller.to_managed_address())
            .to(&self.pool_sc)
            .typed(proxy_pool::NftLendingPoolProxy)
            .borrow(
                usdc_id(),
                amount,
                NFT_TOKEN.to_token_identifier(),
                nonce,
                OptionalValue::Some(on_behalf_of.to_managed_address()),
            );
        if let Some(error) = error_message {
            call.returns(ExpectMessage(core::str::from_utf8(error).unwrap()))
                .run();
        } else {
            call.run();
        }
    }

    pub fn borrow_other_asset(
        &mut self,
        from: &TestAddress,
        amount: BigUint<StaticApi>,
        nonce: u64,
        error_message: Option<&[u8]>,
    ) {
        let call = self
            .world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pool_sc)
            .typed(proxy_pool::NftLendingPoolProxy)
            .borrow(
                wegld_id(),
                amount,
                NFT_TOKEN.to_token_identifier(),
                nonce,
                OptionalValue::<ManagedAddress<StaticApi>>::None,
            );
        if let Some(error) = error_message {
            call.returns(ExpectMessage(core::str::from_utf8(error).unwrap()))
                .run();
        } else {
            call.run();
        }
    }

    pub fn repay(
        &mut self,
        from: &TestAddress,
        payment: BigUint<StaticApi>,
        nonce: u64,
        error_message: Option<&[u8]>,
    ) {
        let call = self
            .world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pool_sc)
            .typed(proxy_pool::NftLendingPoolProxy)
            .repay(NFT_TOKEN.to_token_identifier(), nonce)
            .esdt(EsdtTokenPayment::new(
                USDC_TOKEN.to_token_identifier(),
                0,
                payment,
            ));
        if let Some(error) = error_message {
            call.returns(ExpectMessage(core::str::from_utf8(error).unwrap()))
                .run();
        } else {
            call.run();
        }
    }

    pub fn bid(
        &mut self,
        from: &TestAddress,
        amount: BigUint<StaticApi>,
        nonce: u64,
        error_message: Option<&[u8]>,
    ) {
        let call = self
            .world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pool_sc)
            .typed(proxy_pool::NftLendingPoolProxy)
            .auction(
                NFT_TOKEN.to_token_identifier(),
                nonce,
                OptionalValue::<ManagedAddress<StaticApi>>::None,
            )
            .esdt(EsdtTokenPayment::new(
                USDC_TOKEN.to_token_identifier(),
                0,
                amount,
            ));
        if let Some(error) = error_message {
            call.returns(ExpectMessage(core::str::from_utf8(error).unwrap()))
                .run();
        } else {
            call.run();
        }
    }

    /// Redeems `repay_amount` of debt; `payment` carries the amount plus the
    /// bid fine.
    pub fn redeem(
        &mut self,
        from: &TestAddress,
        repay_amount: BigUint<StaticApi>,
        payment: BigUint<StaticApi>,
        nonce: u64,
        error_message: Option<&[u8]>,
    ) {
        let call = self
            .world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pool_sc)
            .typed(proxy_pool::NftLendingPoolProxy)
            .redeem(NFT_TOKEN.to_token_identifier(), nonce, repay_amount)
            .esdt(EsdtTokenPayment::new(
                USDC_TOKEN.to_token_identifier(),
                0,
                payment,
            ));
        if let Some(error) = error_message {
            call.returns(ExpectMessage(core::str::from_utf8(error).unwrap()))
                .run();
        } else {
            call.run();
        }
    }

    pub fn liquidate(
        &mut self,
        from: &TestAddress,
        payment: Option<BigUint<StaticApi>>,
        nonce: u64,
        error_message: Option<&[u8]>,
    ) {
        if let Some(amount) = payment {
            let call = self
                .world
                .tx()
                .from(from.to_managed_address())
                .to(&self.pool_sc)
                .typed(proxy_pool::NftLendingPoolProxy)
                .liquidate(NFT_TOKEN.to_token_identifier(), nonce)
                .esdt(EsdtTokenPayment::new(
                    USDC_TOKEN.to_token_identifier(),
                    0,
                    amount,
                ));
            if let Some(error) = error_message {
                call.returns(ExpectMessage(core::str::from_utf8(error).unwrap()))
                    .run();
            } else {
                call.run();
            }
        } else {
            let call = self
                .world
                .tx()
                .from(from.to_managed_address())
                .to(&self.pool_sc)
                .typed(proxy_pool::NftLendingPoolProxy)
                .liquidate(NFT_TOKEN.to_token_identifier(), nonce);
            if let Some(error) = error_message {
                call.returns(ExpectMessage(core::str::from_utf8(error).unwrap()))
                    .run();
            } else {
                call.run();
            }
        }
    }

    pub fn approve_delegation(
        &mut self,
        from: &TestAddress,
        delegate: &TestAddress,
        amount: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pool_sc)
            .typed(proxy_pool::NftLendingPoolProxy)
            .approve_delegation(delegate.to_managed_address(), usdc_id(), amount)
            .run();
    }

    pub fn set_paused(&mut self, from: &TestAddress, paused: bool, error_message: Option<&[u8]>) {
        let tx = self
            .world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pool_sc)
            .typed(proxy_pool::NftLendingPoolProxy);
        if paused {
            let call = tx.emergency_pause();
            if let Some(error) = error_message {
                call.returns(ExpectMessage(core::str::from_utf8(error).unwrap()))
                    .run();
            } else {
                call.run();
            }
        } else {
            let call = tx.emergency_unpause();
            if let Some(error) = error_message {
                call.returns(ExpectMessage(core::str::from_utf8(error).unwrap()))
                    .run();
            } else {
                call.run();
            }
        }
    }

    pub fn set_reserve_freeze(&mut self, is_frozen: bool) {
        self.world
            .tx()
            .from(POOL_ADMIN_ADDRESS)
            .to(&self.pool_sc)
            .typed(proxy_pool::NftLendingPoolProxy)
            .set_reserve_freeze(usdc_id(), is_frozen)
            .run();
    }

    pub fn set_reserve_active(&mut self, is_active: bool) {
        self.world
            .tx()
            .from(POOL_ADMIN_ADDRESS)
            .to(&self.pool_sc)
            .typed(proxy_pool::NftLendingPoolProxy)
            .set_reserve_active(usdc_id(), is_active)
            .run();
    }

    pub fn claim_revenue(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.pool_sc)
            .typed(proxy_pool::NftLendingPoolProxy)
            .claim_revenue(usdc_id())
            .run();
    }

    pub fn add_whitelisted_gateway(&mut self, gateway: &TestAddress) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.pool_sc)
            .typed(proxy_pool::NftLendingPoolProxy)
            .add_whitelisted_gateways(single_address(*gateway))
            .run();
    }

    // -------------------------------- views ---------------------------------

    pub fn loan(&mut self, loan_id: u64) -> Loan<StaticApi> {
        self.world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_pool::NftLendingPoolProxy)
            .get_loan(loan_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn loan_debt(&mut self, nonce: u64) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_pool::NftLendingPoolProxy)
            .get_loan_debt(NFT_TOKEN.to_token_identifier(), nonce)
            .returns(ReturnsResult)
            .run()
    }

    pub fn health_factor(&mut self, nonce: u64) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_pool::NftLendingPoolProxy)
            .get_health_factor(NFT_TOKEN.to_token_identifier(), nonce)
            .returns(ReturnsResult)
            .run()
    }

    pub fn loan_by_nft(&mut self, nonce: u64) -> Loan<StaticApi> {
        self.world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_pool::NftLendingPoolProxy)
            .get_loan_by_nft(NFT_TOKEN.to_token_identifier(), nonce)
            .returns(ReturnsResult)
            .run()
    }

    pub fn loan_id_by_nft(&mut self, nonce: u64) -> u64 {
        self.world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_pool::NftLendingPoolProxy)
            .get_loan_id_by_nft(NFT_TOKEN.to_token_identifier(), nonce)
            .returns(ReturnsResult)
            .run()
    }

    pub fn available_borrows(&mut self, nonce: u64) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_pool::NftLendingPoolProxy)
            .get_available_borrows(usdc_id(), NFT_TOKEN.to_token_identifier(), nonce)
            .returns(ReturnsResult)
            .run()
    }

    pub fn utilization(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_pool::NftLendingPoolProxy)
            .get_utilization(usdc_id())
            .returns(ReturnsResult)
            .run()
    }

    pub fn borrow_rate(&mut self) -> BigUint<StaticApi> {
        let rate = self
            .world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_pool::NftLendingPoolProxy)
            .get_borrow_rate(usdc_id())
            .returns(ReturnsResult)
            .run();
        rate.into_raw_units().clone()
    }

    pub fn liquidity_rate(&mut self) -> BigUint<StaticApi> {
        let rate = self
            .world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_pool::NftLendingPoolProxy)
            .get_liquidity_rate(usdc_id())
            .returns(ReturnsResult)
            .run();
        rate.into_raw_units().clone()
    }

    pub fn borrow_index(&mut self) -> BigUint<StaticApi> {
        let index = self
            .world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_pool::NftLendingPoolProxy)
            .get_borrow_index(usdc_id())
            .returns(ReturnsResult)
            .run();
        index.into_raw_units().clone()
    }

    pub fn available_liquidity(&mut self) -> BigUint<StaticApi> {
        let available = self
            .world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_pool::NftLendingPoolProxy)
            .get_available_liquidity(usdc_id())
            .returns(ReturnsResult)
            .run();
        available.into_raw_units().clone()
    }

    pub fn protocol_revenue(&mut self) -> BigUint<StaticApi> {
        let revenue = self
            .world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_pool::NftLendingPoolProxy)
            .get_protocol_revenue(usdc_id())
            .returns(ReturnsResult)
            .run();
        revenue.into_raw_units().clone()
    }

    pub fn bid_escrow(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_pool::NftLendingPoolProxy)
            .get_bid_escrow(usdc_id())
            .returns(ReturnsResult)
            .run()
    }

    pub fn bid_fine_quote(&mut self, nonce: u64) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_pool::NftLendingPoolProxy)
            .get_bid_fine_quote(NFT_TOKEN.to_token_identifier(), nonce)
            .returns(ReturnsResult)
            .run()
    }

    pub fn borrow_allowance_of(
        &mut self,
        owner: &TestAddress,
        delegate: &TestAddress,
    ) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_pool::NftLendingPoolProxy)
            .borrow_allowance(
                owner.to_managed_address(),
                delegate.to_managed_address(),
                usdc_id(),
            )
            .returns(ReturnsResult)
            .run()
    }
}

/// Funds a supplier and a borrower; the borrower also holds the collateral
/// NFTs (nonces 1 and 2) plus one token of the second collection.
pub fn setup_accounts(state: &mut PoolTestState, supplier: TestAddress, borrower: TestAddress) {
    state
        .world
        .account(supplier)
        .nonce(1)
        .esdt_balance(USDC_TOKEN, usdc(INITIAL_BALANCE_USDC))
        .esdt_balance(WEGLD_TOKEN, BigUint::from(10u64).pow(WEGLD_DECIMALS as u32));

    state
        .world
        .account(borrower)
        .nonce(1)
        .esdt_balance(USDC_TOKEN, usdc(INITIAL_BALANCE_USDC))
        .esdt_nft_balance(NFT_TOKEN, 1, BigUint::from(1u64), ManagedBuffer::<StaticApi>::new())
        .esdt_nft_balance(NFT_TOKEN, 2, BigUint::from(1u64), ManagedBuffer::<StaticApi>::new())
        .esdt_nft_balance(NFT2_TOKEN, 1, BigUint::from(1u64), ManagedBuffer::<StaticApi>::new());
}

pub fn setup_bidder(state: &mut PoolTestState, bidder: TestAddress) {
    state
        .world
        .account(bidder)
        .nonce(1)
        .esdt_balance(USDC_TOKEN, usdc(INITIAL_BALANCE_USDC));
}

fn single_address(address: TestAddress) -> MultiValueEncoded<StaticApi, ManagedAddress<StaticApi>> {
    let mut addresses = MultiValueEncoded::new();
    addresses.push(address.to_managed_address());
    addresses
}
