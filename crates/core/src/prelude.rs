//! Prelude module - re-exports commonly used types for convenience

pub use crate::config::{Credentials, LoggingConfig, OmniexConfig, VenueConfig};
pub use crate::error::{OmniexError, Result};
pub use crate::types::{account::*, envelope::*, lending::*, market::*, order::*};

// Re-export commonly used external types
pub use chrono::{DateTime, Utc};
pub use rust_decimal::Decimal;
