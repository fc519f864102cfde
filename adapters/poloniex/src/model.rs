//! Native Poloniex API response shapes.
//!
//! Decimal quantities arrive as strings and stay strings here; parsing
//! into `Decimal` happens when the adapter maps a response into the
//! normalized model, so a malformed field is a reportable mapping
//! failure instead of a deserialization dead end.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One entry of `returnLoanOrders`. `rate` is the per-day interest rate
/// as a fraction; `range_min`/`range_max` bound the duration in days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanOrder {
    pub rate: String,
    pub amount: String,
    #[serde(rename = "rangeMin")]
    pub range_min: u32,
    #[serde(rename = "rangeMax")]
    pub range_max: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoanOrderBook {
    #[serde(default)]
    pub offers: Vec<LoanOrder>,
    #[serde(default)]
    pub demands: Vec<LoanOrder>,
}

/// `returnAvailableAccountBalances`: account -> currency -> amount.
/// Sorted maps keep the reshaped output deterministic.
pub type AvailableAccountBalances = BTreeMap<String, BTreeMap<String, String>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateLoanOfferResponse {
    pub success: i64,
    #[serde(default)]
    pub message: String,
    #[serde(rename = "orderID")]
    pub order_id: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancelLoanOfferResponse {
    pub success: i64,
    #[serde(default)]
    pub message: String,
}

/// One entry of `returnOpenLoanOffers`, keyed by currency in the
/// enclosing map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenLoanOffer {
    pub id: u64,
    pub rate: String,
    pub amount: String,
    pub duration: u32,
    #[serde(rename = "autoRenew", default)]
    pub auto_renew: i64,
    pub date: String,
}

pub type OpenLoanOffers = BTreeMap<String, Vec<OpenLoanOffer>>;

/// One entry of `returnActiveLoans`. `range` is the duration in days;
/// `autoRenew` is only present on provided loans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveLoan {
    pub id: u64,
    pub currency: String,
    pub rate: String,
    pub amount: String,
    pub range: u32,
    #[serde(rename = "autoRenew", default)]
    pub auto_renew: i64,
    #[serde(default)]
    pub fees: Option<String>,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActiveLoans {
    #[serde(default)]
    pub provided: Vec<ActiveLoan>,
    #[serde(default)]
    pub used: Vec<ActiveLoan>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_loan_order_book() {
        let json = r#"{
            "offers": [
                {"rate": "0.00200000", "amount": "64.66305732", "rangeMin": 2, "rangeMax": 8}
            ],
            "demands": [
                {"rate": "0.00170000", "amount": "26.54848841", "rangeMin": 2, "rangeMax": 2}
            ]
        }"#;

        let book: LoanOrderBook = serde_json::from_str(json).unwrap();
        assert_eq!(book.offers.len(), 1);
        assert_eq!(book.offers[0].rate, "0.00200000");
        assert_eq!(book.offers[0].range_min, 2);
        assert_eq!(book.demands[0].amount, "26.54848841");
    }

    #[test]
    fn parses_available_account_balances() {
        let json = r#"{
            "exchange": {"BTC": "1.19042859", "LTC": "3.29234914"},
            "margin": {"BTC": "3.90015637"},
            "lending": {"BTC": "0.01174765"}
        }"#;

        let balances: AvailableAccountBalances = serde_json::from_str(json).unwrap();
        assert_eq!(balances.len(), 3);
        assert_eq!(balances["exchange"]["LTC"], "3.29234914");
    }

    #[test]
    fn parses_create_loan_offer_response() {
        let json = r#"{"success": 1, "message": "Loan order placed.", "orderID": 10590}"#;

        let response: CreateLoanOfferResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.success, 1);
        assert_eq!(response.order_id, 10590);
    }

    #[test]
    fn parses_open_loan_offers() {
        let json = r#"{
            "BTC": [
                {"id": 10595, "rate": "0.00020000", "amount": "3.00000000",
                 "duration": 2, "autoRenew": 1, "date": "2015-05-10 23:33:50"}
            ]
        }"#;

        let offers: OpenLoanOffers = serde_json::from_str(json).unwrap();
        assert_eq!(offers["BTC"][0].id, 10595);
        assert_eq!(offers["BTC"][0].auto_renew, 1);
    }

    #[test]
    fn parses_active_loans_without_auto_renew() {
        let json = r#"{
            "provided": [
                {"id": 75073, "currency": "LTC", "rate": "0.00020000",
                 "amount": "0.72234880", "range": 2, "autoRenew": 0,
                 "fees": "0.00006000", "date": "2015-05-10 23:45:05"}
            ],
            "used": [
                {"id": 75238, "currency": "BTC", "rate": "0.00020000",
                 "amount": "0.04843834", "range": 2,
                 "date": "2015-05-10 23:51:12"}
            ]
        }"#;

        let loans: ActiveLoans = serde_json::from_str(json).unwrap();
        assert_eq!(loans.provided[0].fees.as_deref(), Some("0.00006000"));
        assert_eq!(loans.used[0].auto_renew, 0);
        assert!(loans.used[0].fees.is_none());
    }
}
