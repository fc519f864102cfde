//! Prelude module for omniex-exchange
//!
//! Re-exports commonly used types and traits

pub use crate::normalizer::CurrencyNormalizer;
pub use crate::params::{
    BalanceParams, CancelOfferParams, CancelOrderParams, FeeParams, LendBookParams,
    OfferParams, OpenOrdersParams, OrderBookParams, PlaceOrderParams, RateParams, TickerParams,
    TradesParams, TransactionsParams,
};
pub use crate::properties::{
    ApiAccess, CredentialField, Instrument, MethodSupport, Operation, Properties,
};
pub use crate::traits::ExchangeAdapter;

// Re-export common types from core
pub use omniex_core::prelude::*;
