use std::collections::HashMap;

/// Bidirectional currency-code translation between the normalized
/// vocabulary and one exchange's native symbols.
///
/// Adapters only declare the aliases that differ (e.g. normalized `XBT`
/// vs. native `BTC`); unknown codes pass through unchanged apart from
/// uppercasing.
#[derive(Debug, Clone, Default)]
pub struct CurrencyNormalizer {
    native_mappings: HashMap<String, String>,
    normalized_mappings: HashMap<String, String>,
}

impl CurrencyNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mapping(mut self, normalized: &str, native: &str) -> Self {
        self.add_mapping(normalized, native);
        self
    }

    pub fn add_mapping(&mut self, normalized: &str, native: &str) {
        let normalized = normalized.to_uppercase();
        let native = native.to_uppercase();
        self.native_mappings.insert(normalized.clone(), native.clone());
        self.normalized_mappings.insert(native, normalized);
    }

    /// Translate a normalized currency code into the exchange's native
    /// symbol.
    pub fn to_native(&self, currency: &str) -> String {
        let currency = currency.to_uppercase();
        self.native_mappings
            .get(&currency)
            .cloned()
            .unwrap_or(currency)
    }

    /// Translate a native exchange symbol back into the normalized
    /// vocabulary.
    pub fn to_normalized(&self, currency: &str) -> String {
        let currency = currency.to_uppercase();
        self.normalized_mappings
            .get(&currency)
            .cloned()
            .unwrap_or(currency)
    }
}
