use std::time::{Duration, SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use hmac::{Hmac, Mac};
use reqwest::Client as HttpClient;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde_json::Value;
use sha2::Sha512;
use tracing::debug;

use crate::error::{PoloniexError, Result};
use crate::model::{
    ActiveLoans, AvailableAccountBalances, CancelLoanOfferResponse, CreateLoanOfferResponse,
    LoanOrderBook, OpenLoanOffers,
};

const PUBLIC_API_URL: &str = "https://poloniex.com/public";
const TRADING_API_URL: &str = "https://poloniex.com/tradingApi";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Native API surface the adapter consumes.
///
/// Split out as a trait so the adapter can hold independent public and
/// private handles and tests can substitute their own transport.
#[async_trait]
pub trait PoloniexApi: Send + Sync {
    async fn loan_orders(&self, currency: &str) -> Result<LoanOrderBook>;
    async fn available_account_balances(&self) -> Result<AvailableAccountBalances>;
    async fn create_loan_offer(
        &self,
        currency: &str,
        amount: Decimal,
        duration: u32,
        auto_renew: bool,
        lending_rate: Decimal,
    ) -> Result<CreateLoanOfferResponse>;
    async fn cancel_loan_offer(&self, order_number: u64) -> Result<CancelLoanOfferResponse>;
    async fn open_loan_offers(&self) -> Result<OpenLoanOffers>;
    async fn active_loans(&self) -> Result<ActiveLoans>;
}

pub struct PoloniexClient {
    http: HttpClient,
    api_key: Option<String>,
    api_secret: Option<String>,
    public_url: String,
    trading_url: String,
}

impl PoloniexClient {
    pub fn new() -> Self {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| HttpClient::new());

        Self {
            http,
            api_key: None,
            api_secret: None,
            public_url: PUBLIC_API_URL.to_string(),
            trading_url: TRADING_API_URL.to_string(),
        }
    }

    pub fn with_auth(api_key: String, api_secret: String) -> Self {
        let mut client = Self::new();
        client.api_key = Some(api_key);
        client.api_secret = Some(api_secret);
        client
    }

    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some() && self.api_secret.is_some()
    }

    fn nonce() -> String {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_millis()
            .to_string()
    }

    /// Lowercase-hex HMAC-SHA512 of the form body, keyed by the API
    /// secret. Poloniex expects this in the `Sign` header.
    fn sign(&self, body: &str) -> Result<String> {
        let secret = self.api_secret.as_ref().ok_or_else(|| {
            PoloniexError::Authentication("API secret not configured".to_string())
        })?;

        let mut mac = Hmac::<Sha512>::new_from_slice(secret.as_bytes())
            .map_err(|e| PoloniexError::Authentication(e.to_string()))?;
        mac.update(body.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }

    /// Poloniex reports application-level failures as an `error` field
    /// inside an otherwise-successful payload.
    fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
        if let Some(message) = value.get("error").and_then(Value::as_str) {
            return Err(PoloniexError::Api(message.to_string()));
        }
        Ok(serde_json::from_value(value)?)
    }

    async fn public_get<T: DeserializeOwned>(
        &self,
        command: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        debug!(command, "poloniex public API call");

        let mut query: Vec<(&str, &str)> = vec![("command", command)];
        query.extend_from_slice(params);

        let value = self
            .http
            .get(&self.public_url)
            .query(&query)
            .send()
            .await?
            .json::<Value>()
            .await?;

        Self::decode(value)
    }

    async fn trading_post<T: DeserializeOwned>(
        &self,
        command: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let api_key = self.api_key.as_ref().ok_or_else(|| {
            PoloniexError::Authentication("API key not configured".to_string())
        })?;

        debug!(command, "poloniex trading API call");

        // Body is built by hand because the signature covers the exact
        // encoded bytes. All values are plain tokens that need no
        // percent-encoding.
        let mut form: Vec<(&str, String)> = vec![
            ("command", command.to_string()),
            ("nonce", Self::nonce()),
        ];
        form.extend(params.iter().map(|(k, v)| (*k, v.clone())));

        let body = form
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");
        let signature = self.sign(&body)?;

        let value = self
            .http
            .post(&self.trading_url)
            .header("Key", api_key)
            .header("Sign", signature)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await?
            .json::<Value>()
            .await?;

        Self::decode(value)
    }
}

impl Default for PoloniexClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PoloniexApi for PoloniexClient {
    async fn loan_orders(&self, currency: &str) -> Result<LoanOrderBook> {
        self.public_get("returnLoanOrders", &[("currency", currency)])
            .await
    }

    async fn available_account_balances(&self) -> Result<AvailableAccountBalances> {
        self.trading_post("returnAvailableAccountBalances", &[]).await
    }

    async fn create_loan_offer(
        &self,
        currency: &str,
        amount: Decimal,
        duration: u32,
        auto_renew: bool,
        lending_rate: Decimal,
    ) -> Result<CreateLoanOfferResponse> {
        self.trading_post(
            "createLoanOffer",
            &[
                ("currency", currency.to_string()),
                ("amount", amount.to_string()),
                ("duration", duration.to_string()),
                ("autoRenew", if auto_renew { "1" } else { "0" }.to_string()),
                ("lendingRate", lending_rate.to_string()),
            ],
        )
        .await
    }

    async fn cancel_loan_offer(&self, order_number: u64) -> Result<CancelLoanOfferResponse> {
        self.trading_post("cancelLoanOffer", &[("orderNumber", order_number.to_string())])
            .await
    }

    async fn open_loan_offers(&self) -> Result<OpenLoanOffers> {
        self.trading_post("returnOpenLoanOffers", &[]).await
    }

    async fn active_loans(&self) -> Result<ActiveLoans> {
        self.trading_post("returnActiveLoans", &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sign_matches_known_vector() {
        let client =
            PoloniexClient::with_auth("apikey".to_string(), "topsecret".to_string());
        let signature = client
            .sign("command=returnOpenLoanOffers&nonce=1424834035557")
            .unwrap();

        assert_eq!(
            signature,
            "573355b98893aebe7bff53bb2dc1e748ac3b4946162e64d5fa11e8151e5cd77d\
             ea473349e3b83af5e4f52eca02cfbfc0d8621aa4a0b8a0f8ce23397df2eb1f41"
        );
    }

    #[test]
    fn sign_requires_secret() {
        let client = PoloniexClient::new();
        assert!(matches!(
            client.sign("command=x&nonce=1"),
            Err(PoloniexError::Authentication(_))
        ));
    }

    #[test]
    fn decode_surfaces_embedded_error() {
        let result: Result<LoanOrderBook> =
            PoloniexClient::decode(json!({"error": "Invalid currency."}));
        match result {
            Err(PoloniexError::Api(message)) => assert_eq!(message, "Invalid currency."),
            other => panic!("expected API error, got {:?}", other),
        }
    }

    #[test]
    fn decode_passes_through_success_payload() {
        let book: LoanOrderBook = PoloniexClient::decode(json!({
            "offers": [], "demands": []
        }))
        .unwrap();
        assert!(book.offers.is_empty());
    }

    #[test]
    fn nonce_is_millisecond_epoch() {
        let nonce: u128 = PoloniexClient::nonce().parse().unwrap();
        // 2020-01-01 in milliseconds
        assert!(nonce > 1_577_836_800_000);
    }
}
