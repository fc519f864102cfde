use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OmniexConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub exchanges: HashMap<String, VenueConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub credentials: Option<Credentials>,
}

fn default_enabled() -> bool {
    true
}

/// Credential fields named after the capability descriptor's
/// `private_api.requires` list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub key: String,
    pub secret: String,
}

impl OmniexConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(Environment::with_prefix("OMNIEX").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    pub fn from_files<P: AsRef<Path>>(paths: &[P]) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        for path in paths {
            builder = builder.add_source(File::from(path.as_ref()).required(false));
        }

        let settings = builder
            .add_source(Environment::with_prefix("OMNIEX").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    pub fn venue(&self, slug: &str) -> Option<&VenueConfig> {
        self.exchanges.get(slug).filter(|venue| venue.enabled)
    }

    /// Credentials for an enabled venue, if configured.
    pub fn credentials(&self, slug: &str) -> Option<&Credentials> {
        self.venue(slug).and_then(|venue| venue.credentials.as_ref())
    }
}

impl Default for OmniexConfig {
    fn default() -> Self {
        let mut exchanges = HashMap::new();
        exchanges.insert(
            "poloniex".to_string(),
            VenueConfig {
                enabled: true,
                credentials: None,
            },
        );

        Self {
            logging: LoggingConfig::default(),
            exchanges,
        }
    }
}
