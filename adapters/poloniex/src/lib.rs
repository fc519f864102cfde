//! Poloniex Exchange Adapter
//!
//! Maps the normalized exchange vocabulary onto Poloniex's native REST
//! API. The lending market (lend book, loan offers, active loans) and
//! account balances are implemented; the spot-trading operations are
//! deliberate "not implemented" stubs, as published in the adapter's
//! capability descriptor.

pub mod client;
pub mod error;
pub mod model;

pub use client::{PoloniexApi, PoloniexClient};
pub use error::PoloniexError;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use lazy_static::lazy_static;
use tracing::debug;

use omniex_core::prelude::*;
use omniex_exchange::prelude::*;

lazy_static! {
    static ref PROPERTIES: Properties = Properties {
        name: "Poloniex".to_string(),
        slug: "poloniex".to_string(),
        methods: MethodSupport {
            not_implemented: vec![
                Operation::GetRate,
                Operation::GetTicker,
                Operation::GetOrderBook,
                Operation::GetTrades,
                Operation::GetFee,
                Operation::GetTransactions,
                Operation::GetOpenOrders,
                Operation::PlaceSellOrder,
                Operation::PlaceBuyOrder,
                Operation::CancelOrder,
            ],
            not_supported: vec![],
        },
        instruments: [
            "USDBTC", "RURBTC", "EURBTC", "BTCLTC", "USDLTC", "RURLTC", "EURLTC", "BTCNMC",
            "USDNMC", "BTCNVC", "USDNVC", "RURUSD", "USDEUR", "BTCTRC", "BTCPPC", "USDPPC",
            "BTCFTC", "BTCXPM",
        ]
        .iter()
        .map(|pair| Instrument {
            pair: (*pair).to_string(),
        })
        .collect(),
        public_api: ApiAccess {
            supported: true,
            requires: vec![],
        },
        private_api: ApiAccess {
            supported: true,
            requires: vec![CredentialField::Key, CredentialField::Secret],
        },
        market_order: false,
        infinity_order: false,
        monitor_error: String::new(),
        trade_error: String::new(),
    };
}

/// Adapter instance holding two native handles: one for public calls
/// and one for private (authenticated) calls. Without credentials the
/// private handle is the public one and authenticated operations fail
/// locally.
pub struct PoloniexAdapter {
    public: Arc<dyn PoloniexApi>,
    private: Arc<dyn PoloniexApi>,
    currencies: CurrencyNormalizer,
}

impl PoloniexAdapter {
    pub fn new() -> Self {
        let public: Arc<dyn PoloniexApi> = Arc::new(PoloniexClient::new());
        Self::from_parts(public.clone(), public)
    }

    pub fn with_credentials(api_key: String, api_secret: String) -> Self {
        let public: Arc<dyn PoloniexApi> = Arc::new(PoloniexClient::new());
        let private: Arc<dyn PoloniexApi> = Arc::new(PoloniexClient::with_auth(api_key, api_secret));
        Self::from_parts(public, private)
    }

    /// Build an adapter over explicit native handles; pass the public
    /// handle twice when no credentials are available.
    pub fn from_parts(public: Arc<dyn PoloniexApi>, private: Arc<dyn PoloniexApi>) -> Self {
        Self {
            public,
            private,
            currencies: CurrencyNormalizer::new().with_mapping("XBT", "BTC"),
        }
    }
}

impl Default for PoloniexAdapter {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_decimal(value: &str, field: &str) -> Result<Decimal> {
    value
        .trim()
        .parse()
        .map_err(|_| OmniexError::Mapping(format!("invalid decimal {:?} in {}", value, field)))
}

fn parse_native_date(value: &str) -> Result<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|_| OmniexError::Mapping(format!("invalid date {:?}", value)))
}

/// Native lending rates are per-day fractions; the normalized book
/// carries annualized percentages. Linear, no compounding.
fn annualize(rate: Decimal) -> Decimal {
    rate * Decimal::from(100) * Decimal::from(365)
}

fn map_lend_order(native: &model::LoanOrder) -> Result<LendOrder> {
    Ok(LendOrder {
        rate: annualize(parse_decimal(&native.rate, "rate")?),
        amount: parse_decimal(&native.amount, "amount")?,
        period: native.range_min,
        created_at: Utc::now(),
        frr: false,
    })
}

fn map_lend_book(currency: String, native: model::LoanOrderBook) -> Result<LendBook> {
    let asks = native
        .offers
        .iter()
        .map(map_lend_order)
        .collect::<Result<Vec<_>>>()?;
    let bids = native
        .demands
        .iter()
        .map(map_lend_order)
        .collect::<Result<Vec<_>>>()?;

    Ok(LendBook {
        currency,
        asks,
        bids,
    })
}

fn map_balances(native: model::AvailableAccountBalances) -> Result<Vec<AccountBalance>> {
    native
        .into_iter()
        .map(|(account_id, currencies)| {
            let available = currencies
                .into_iter()
                .map(|(currency, amount)| {
                    Ok(AssetAmount {
                        amount: parse_decimal(&amount, &currency)?,
                        currency,
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            Ok(AccountBalance {
                account_id,
                available,
            })
        })
        .collect()
}

fn map_open_offers(native: model::OpenLoanOffers) -> Result<Vec<LoanOffer>> {
    let mut offers = Vec::new();
    for (currency, entries) in native {
        for entry in entries {
            offers.push(LoanOffer {
                offer_id: entry.id,
                currency: currency.clone(),
                rate: parse_decimal(&entry.rate, "rate")?,
                amount: parse_decimal(&entry.amount, "amount")?,
                period: entry.duration,
                auto_renew: entry.auto_renew != 0,
                created_at: parse_native_date(&entry.date)?,
            });
        }
    }
    Ok(offers)
}

fn map_loan(native: &model::ActiveLoan) -> Result<Loan> {
    let fees = match native.fees.as_deref() {
        Some(fees) => parse_decimal(fees, "fees")?,
        None => Decimal::ZERO,
    };

    Ok(Loan {
        loan_id: native.id,
        currency: native.currency.clone(),
        rate: parse_decimal(&native.rate, "rate")?,
        amount: parse_decimal(&native.amount, "amount")?,
        period: native.range,
        auto_renew: native.auto_renew != 0,
        fees,
        created_at: parse_native_date(&native.date)?,
    })
}

fn map_active_offers(
    open: model::OpenLoanOffers,
    loans: model::ActiveLoans,
) -> Result<ActiveOffers> {
    let provided = loans
        .provided
        .iter()
        .map(map_loan)
        .collect::<Result<Vec<_>>>()?;
    let used = loans.used.iter().map(map_loan).collect::<Result<Vec<_>>>()?;

    Ok(ActiveOffers {
        offers: map_open_offers(open)?,
        loans: Loans { provided, used },
    })
}

#[async_trait]
impl ExchangeAdapter for PoloniexAdapter {
    fn properties(&self) -> &Properties {
        &PROPERTIES
    }

    async fn get_ticker(&self, _params: TickerParams) -> Envelope<Vec<Ticker>> {
        Envelope::not_implemented()
    }

    /// Composes `get_ticker`; while the ticker is unimplemented this
    /// always propagates its error.
    async fn get_rate(&self, params: RateParams) -> Envelope<Vec<Rate>> {
        let ticker = self.get_ticker(TickerParams { pair: params.pair }).await;
        if !ticker.is_ok() {
            return Envelope {
                timestamp: ticker.timestamp,
                error: ticker.error,
                data: Vec::new(),
            };
        }

        let data = ticker
            .data
            .first()
            .map(|entry| Rate {
                pair: entry.pair.clone(),
                rate: entry.last,
            })
            .into_iter()
            .collect();

        Envelope {
            timestamp: ticker.timestamp,
            error: String::new(),
            data,
        }
    }

    async fn get_order_book(&self, _params: OrderBookParams) -> Envelope<Vec<OrderBook>> {
        Envelope::not_implemented()
    }

    async fn get_trades(&self, _params: TradesParams) -> Envelope<Vec<Trade>> {
        Envelope::not_implemented()
    }

    async fn get_fee(&self, _params: FeeParams) -> Envelope<Vec<Fee>> {
        Envelope::not_implemented()
    }

    async fn get_transactions(&self, _params: TransactionsParams) -> Envelope<Vec<Transaction>> {
        Envelope::not_implemented()
    }

    async fn get_balance(&self, _params: BalanceParams) -> Envelope<Vec<AccountBalance>> {
        let native = match self.private.available_account_balances().await {
            Ok(native) => native,
            Err(err) => return Envelope::failure(err),
        };

        match map_balances(native) {
            Ok(accounts) => Envelope::success(accounts),
            Err(err) => Envelope::failure(err),
        }
    }

    async fn get_open_orders(&self, _params: OpenOrdersParams) -> Envelope<Vec<Order>> {
        Envelope::not_implemented()
    }

    async fn place_sell_order(&self, _params: PlaceOrderParams) -> Envelope<Vec<OrderReceipt>> {
        Envelope::not_implemented()
    }

    async fn place_buy_order(&self, _params: PlaceOrderParams) -> Envelope<Vec<OrderReceipt>> {
        Envelope::not_implemented()
    }

    async fn cancel_order(&self, _params: CancelOrderParams) -> Envelope<Vec<OrderReceipt>> {
        Envelope::not_implemented()
    }

    async fn get_lend_book(&self, params: LendBookParams) -> Envelope<Vec<LendBook>> {
        let native_currency = self.currencies.to_native(&params.currency);
        debug!(currency = %native_currency, "fetching lend book");

        let native = match self.public.loan_orders(&native_currency).await {
            Ok(native) => native,
            Err(err) => return Envelope::failure(err),
        };

        let currency = self.currencies.to_normalized(&native_currency);
        match map_lend_book(currency, native) {
            Ok(book) => Envelope::success(vec![book]),
            Err(err) => Envelope::failure(err),
        }
    }

    async fn place_offer(&self, params: OfferParams) -> Envelope<OfferReceipt> {
        let currency = self.currencies.to_native(&params.currency);

        match self
            .private
            .create_loan_offer(
                &currency,
                params.amount,
                params.period,
                params.auto_renew,
                params.rate,
            )
            .await
        {
            Ok(response) => Envelope::success(OfferReceipt {
                offer_id: response.order_id,
            }),
            Err(err) => Envelope::failure(err),
        }
    }

    async fn cancel_offer(&self, params: CancelOfferParams) -> Envelope<CancelOutcome> {
        match self.private.cancel_loan_offer(params.offer_id).await {
            Ok(response) => Envelope::success(CancelOutcome {
                success: response.success != 0,
            }),
            Err(err) => Envelope::failure(err),
        }
    }

    /// Two sequential native calls; the second is only issued after the
    /// first succeeds.
    async fn get_active_offers(&self) -> Envelope<ActiveOffers> {
        let open = match self.private.open_loan_offers().await {
            Ok(open) => open,
            Err(err) => return Envelope::failure(err),
        };

        let loans = match self.private.active_loans().await {
            Ok(loans) => loans,
            Err(err) => return Envelope::failure(err),
        };

        match map_active_offers(open, loans) {
            Ok(data) => Envelope::success(data),
            Err(err) => Envelope::failure(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn annualize_is_linear_daily() {
        assert_eq!(annualize(dec!(0.0002)), dec!(7.3));
        assert_eq!(annualize(dec!(0.0001)), dec!(3.65));
        assert_eq!(annualize(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn lend_order_mapping_keeps_range_min_as_period() {
        let native = model::LoanOrder {
            rate: "0.0002".to_string(),
            amount: "10".to_string(),
            range_min: 2,
            range_max: 8,
        };

        let order = map_lend_order(&native).unwrap();
        assert_eq!(order.rate, dec!(7.3));
        assert_eq!(order.amount, dec!(10));
        assert_eq!(order.period, 2);
        assert!(!order.frr);
    }

    #[test]
    fn lend_order_mapping_rejects_bad_decimal() {
        let native = model::LoanOrder {
            rate: "not-a-rate".to_string(),
            amount: "10".to_string(),
            range_min: 2,
            range_max: 2,
        };

        assert!(matches!(
            map_lend_order(&native),
            Err(OmniexError::Mapping(_))
        ));
    }

    #[test]
    fn balances_reshape_account_by_account() {
        let mut exchange = std::collections::BTreeMap::new();
        exchange.insert("BTC".to_string(), "1.5".to_string());
        exchange.insert("ETH".to_string(), "2".to_string());
        let mut native = model::AvailableAccountBalances::new();
        native.insert("acct1".to_string(), exchange);

        let accounts = map_balances(native).unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].account_id, "acct1");
        assert_eq!(
            accounts[0].available,
            vec![
                AssetAmount {
                    currency: "BTC".to_string(),
                    amount: dec!(1.5),
                },
                AssetAmount {
                    currency: "ETH".to_string(),
                    amount: dec!(2),
                },
            ]
        );
    }

    #[test]
    fn native_dates_parse_as_utc() {
        let parsed = parse_native_date("2015-05-10 23:33:50").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2015-05-10T23:33:50+00:00");
        assert!(parse_native_date("10/05/2015").is_err());
    }

    #[test]
    fn properties_match_descriptor() {
        let adapter = PoloniexAdapter::new();
        let properties = adapter.properties();

        assert_eq!(properties.name, "Poloniex");
        assert_eq!(properties.slug, "poloniex");
        assert_eq!(properties.instruments.len(), 18);
        assert!(properties.has_instrument("USDBTC"));
        assert!(!properties.is_implemented(Operation::GetTicker));
        assert!(properties.is_implemented(Operation::GetLendBook));
        assert!(properties.is_implemented(Operation::GetBalance));
        assert_eq!(
            properties.private_api.requires,
            vec![CredentialField::Key, CredentialField::Secret]
        );
    }
}
