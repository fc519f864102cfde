use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One entry of the lending order book.
///
/// `rate` is annualized and expressed in percent; `period` is the loan
/// duration in days. `frr` marks flash-return-rate offers on exchanges
/// that have them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LendOrder {
    pub rate: Decimal,
    pub amount: Decimal,
    pub period: u32,
    pub created_at: DateTime<Utc>,
    pub frr: bool,
}

/// The lending order book for a single currency, split into asks
/// (outstanding offers to lend) and bids (demand to borrow).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LendBook {
    pub currency: String,
    pub asks: Vec<LendOrder>,
    pub bids: Vec<LendOrder>,
}

/// Acknowledgement for a placed loan offer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OfferReceipt {
    pub offer_id: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CancelOutcome {
    pub success: bool,
}

/// A loan offer of the account that has not been taken yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanOffer {
    pub offer_id: u64,
    pub currency: String,
    pub rate: Decimal,
    pub amount: Decimal,
    pub period: u32,
    pub auto_renew: bool,
    pub created_at: DateTime<Utc>,
}

/// A running loan, either provided to the market or used as margin
/// funding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub loan_id: u64,
    pub currency: String,
    pub rate: Decimal,
    pub amount: Decimal,
    pub period: u32,
    pub auto_renew: bool,
    pub fees: Decimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Loans {
    pub provided: Vec<Loan>,
    pub used: Vec<Loan>,
}

/// Combined view of the account's lending activity: open offers plus
/// running loans.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActiveOffers {
    pub offers: Vec<LoanOffer>,
    pub loans: Loans,
}
