#![no_std]

// Validation
pub static ERROR_INVALID_AMOUNT: &[u8] = b"Amount must be greater than zero.";

pub static ERROR_INVALID_CONFIGURATION: &[u8] = b"Invalid collateral configuration.";

pub static ERROR_INCONSISTENT_PARAMS: &[u8] = b"Inconsistent parameters.";

pub static ERROR_INVALID_ASSET: &[u8] = b"Invalid asset provided.";

// State
pub static ERROR_INVALID_LOAN_STATE: &[u8] = b"Invalid loan state for this operation.";

pub static ERROR_NFT_USED_AS_COLLATERAL: &[u8] = b"Token is already used as collateral.";

pub static ERROR_NOT_USED_AS_COLLATERAL: &[u8] = b"Token is not used as collateral.";

pub static ERROR_RESERVE_NOT_FOUND: &[u8] = b"No reserve found for this asset.";

pub static ERROR_RESERVE_ALREADY_EXISTS: &[u8] = b"Reserve already exists for this asset.";

pub static ERROR_RESERVE_INACTIVE: &[u8] = b"Reserve is inactive.";

pub static ERROR_RESERVE_FROZEN: &[u8] = b"Reserve is frozen.";

pub static ERROR_NFT_INACTIVE: &[u8] = b"Collateral collection is inactive.";

pub static ERROR_NFT_FROZEN: &[u8] = b"Collateral collection is frozen.";

pub static ERROR_POOL_PAUSED: &[u8] = b"Pool is paused.";

// Authorization
pub static ERROR_CALLER_NOT_POOL_ADMIN: &[u8] = b"Caller is not a pool admin.";

pub static ERROR_CALLER_NOT_LTV_MANAGER: &[u8] = b"Caller is not an LTV manager.";

pub static ERROR_CALLER_NOT_PRICE_MANAGER: &[u8] = b"Caller is not a price manager.";

pub static ERROR_CALLER_NOT_EMERGENCY_ADMIN: &[u8] = b"Caller is not an emergency admin.";

pub static ERROR_CALLER_NOT_RESCUER: &[u8] = b"Caller is not a rescuer.";

pub static ERROR_CALLER_NOT_ON_BEHALF_OF_OR_WHITELISTED: &[u8] =
    b"Caller is not the position owner, has no borrow allowance and is not whitelisted.";

// Economic / domain
pub static ERROR_COLLATERAL_CANNOT_COVER_NEW_BORROW: &[u8] =
    b"Collateral cannot cover the new borrow.";

pub static ERROR_HEALTH_FACTOR_LOWER_THAN_LIQUIDATION_THRESHOLD: &[u8] =
    b"Health factor is lower than the liquidation threshold.";

pub static ERROR_HEALTH_FACTOR_HIGHER_THAN_LIQUIDATION_THRESHOLD: &[u8] =
    b"Health factor is not below the liquidation threshold.";

pub static ERROR_BID_PRICE_LESS_THAN_LIQUIDATION_PRICE: &[u8] =
    b"Bid price is less than the liquidation price.";

pub static ERROR_BID_PRICE_LESS_THAN_HIGHEST_PRICE: &[u8] =
    b"Bid price is less than the highest bid.";

pub static ERROR_BID_PRICE_LESS_THAN_MIN_BID_REQUIRED: &[u8] =
    b"Bid price is less than the minimum bid required.";

pub static ERROR_CONSECUTIVE_BIDS_NOT_ALLOWED: &[u8] =
    b"Highest bidder cannot outbid themselves.";

pub static ERROR_BID_REDEEM_DURATION_HAS_END: &[u8] = b"Redeem window has ended.";

pub static ERROR_BID_AUCTION_DURATION_NOT_END: &[u8] = b"Auction is still running.";

pub static ERROR_BID_AUCTION_DURATION_HAS_END: &[u8] = b"Auction has ended.";

pub static ERROR_BID_INVALID_BID_FINE: &[u8] = b"Bid fine is below the required fine.";

pub static ERROR_AMOUNT_LESS_THAN_REDEEM_THRESHOLD: &[u8] =
    b"Redeem amount is below the redeem threshold.";

pub static ERROR_AMOUNT_GREATER_THAN_MAX_REPAY: &[u8] =
    b"Redeem amount is above the maximum repayable.";

pub static ERROR_TIMEFRAME_EXCEEDED: &[u8] =
    b"Collateral configuration is older than the allowed timeframe.";

pub static ERROR_INSUFFICIENT_LIQUIDITY: &[u8] = b"Insufficient liquidity.";

pub static ERROR_INSUFFICIENT_SHORTFALL_PAYMENT: &[u8] =
    b"Payment does not cover the debt shortfall.";

// Oracle
pub static ERROR_NON_EXISTING_COLLECTION: &[u8] = b"No price feed for this collection.";

pub static ERROR_PRICE_IS_ZERO: &[u8] = b"Price is zero.";

pub static ERROR_NFT_PAUSED: &[u8] = b"Price feed for this collection is paused.";

// Concurrency
pub static ERROR_REENTRANT_CALL: &[u8] = b"Reentrant call.";
