//! Per-operation parameter structs.
//!
//! Each operation takes its own struct so required fields are explicit
//! in the signature instead of hiding in a free-form options map.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickerParams {
    pub pair: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateParams {
    pub pair: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderBookParams {
    pub pair: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradesParams {
    pub pair: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeeParams {
    pub pair: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionsParams {
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BalanceParams {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpenOrdersParams {
    pub pair: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceOrderParams {
    pub pair: String,
    pub amount: Decimal,
    pub rate: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CancelOrderParams {
    pub order_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LendBookParams {
    /// Currency in the normalized vocabulary (e.g. `XBT`).
    pub currency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OfferParams {
    /// Currency in the normalized vocabulary (e.g. `XBT`).
    pub currency: String,
    pub amount: Decimal,
    /// Offer duration in days.
    pub period: u32,
    pub auto_renew: bool,
    /// Native per-period interest rate as a fraction, e.g. `0.0002`.
    pub rate: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CancelOfferParams {
    pub offer_id: u64,
}
