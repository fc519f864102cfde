pub use omniex_core::prelude::*;
pub use omniex_exchange::prelude::*;

// Re-export exchange adapters
pub use omniex_poloniex::{PoloniexAdapter, PoloniexApi, PoloniexClient};
