use async_trait::async_trait;
use omniex_core::{
    AccountBalance, ActiveOffers, CancelOutcome, Envelope, Fee, LendBook, OfferReceipt, Order,
    OrderBook, OrderReceipt, Rate, Ticker, Trade, Transaction,
};

use crate::params::*;
use crate::properties::Properties;

/// Normalized surface every exchange adapter exposes, one operation per
/// method.
///
/// Every operation resolves to an [`Envelope`]: failures are reported in
/// the envelope's `error` field and never cross this boundary as a panic
/// or an `Err`. Operations the adapter does not implement resolve to a
/// "Method not implemented" envelope without touching the network; which
/// ones those are is published in [`Properties::methods`].
#[async_trait]
pub trait ExchangeAdapter: Send + Sync {
    /// Static capability descriptor consumed by the calling framework.
    fn properties(&self) -> &Properties;

    async fn get_ticker(&self, params: TickerParams) -> Envelope<Vec<Ticker>>;
    async fn get_rate(&self, params: RateParams) -> Envelope<Vec<Rate>>;
    async fn get_order_book(&self, params: OrderBookParams) -> Envelope<Vec<OrderBook>>;
    async fn get_trades(&self, params: TradesParams) -> Envelope<Vec<Trade>>;
    async fn get_fee(&self, params: FeeParams) -> Envelope<Vec<Fee>>;
    async fn get_transactions(&self, params: TransactionsParams) -> Envelope<Vec<Transaction>>;
    async fn get_balance(&self, params: BalanceParams) -> Envelope<Vec<AccountBalance>>;
    async fn get_open_orders(&self, params: OpenOrdersParams) -> Envelope<Vec<Order>>;
    async fn place_sell_order(&self, params: PlaceOrderParams) -> Envelope<Vec<OrderReceipt>>;
    async fn place_buy_order(&self, params: PlaceOrderParams) -> Envelope<Vec<OrderReceipt>>;
    async fn cancel_order(&self, params: CancelOrderParams) -> Envelope<Vec<OrderReceipt>>;
    async fn get_lend_book(&self, params: LendBookParams) -> Envelope<Vec<LendBook>>;
    async fn place_offer(&self, params: OfferParams) -> Envelope<OfferReceipt>;
    async fn cancel_offer(&self, params: CancelOfferParams) -> Envelope<CancelOutcome>;
    async fn get_active_offers(&self) -> Envelope<ActiveOffers>;
}
