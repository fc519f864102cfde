pub mod config;
pub mod error;
pub mod prelude;
pub mod types;

pub use error::{OmniexError, Result};
pub use types::*;
