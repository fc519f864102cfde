//! Static capability descriptors.
//!
//! Each adapter publishes one [`Properties`] value describing which
//! operations it implements, which instruments it trades, and which
//! credential fields its private API needs. The calling framework reads
//! this for routing and feature detection; adapters never mutate it.

use serde::{Deserialize, Serialize};

/// Normalized operation vocabulary shared by all adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    GetRate,
    GetTicker,
    GetOrderBook,
    GetTrades,
    GetFee,
    GetTransactions,
    GetBalance,
    GetOpenOrders,
    PlaceSellOrder,
    PlaceBuyOrder,
    CancelOrder,
    GetLendBook,
    PlaceOffer,
    CancelOffer,
    GetActiveOffers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialField {
    Key,
    Secret,
    Username,
    Passphrase,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MethodSupport {
    /// Operations the adapter deliberately leaves unimplemented.
    pub not_implemented: Vec<Operation>,
    /// Operations the exchange itself cannot structurally support.
    pub not_supported: Vec<Operation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    pub pair: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiAccess {
    pub supported: bool,
    pub requires: Vec<CredentialField>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Properties {
    pub name: String,
    pub slug: String,
    pub methods: MethodSupport,
    pub instruments: Vec<Instrument>,
    pub public_api: ApiAccess,
    pub private_api: ApiAccess,
    pub market_order: bool,
    pub infinity_order: bool,
    /// URL explaining why the exchange cannot be monitored, or empty.
    pub monitor_error: String,
    /// URL explaining why the exchange cannot be traded, or empty.
    pub trade_error: String,
}

impl Properties {
    pub fn is_implemented(&self, operation: Operation) -> bool {
        !self.methods.not_implemented.contains(&operation)
            && !self.methods.not_supported.contains(&operation)
    }

    pub fn is_supported(&self, operation: Operation) -> bool {
        !self.methods.not_supported.contains(&operation)
    }

    pub fn has_instrument(&self, pair: &str) -> bool {
        self.instruments.iter().any(|i| i.pair == pair)
    }
}
