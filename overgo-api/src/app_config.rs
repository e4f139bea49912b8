use overgo_catalog::ProviderKind;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub provider: ProviderConfig,
    pub booking: BookingConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    /// Used when a search request does not name a provider
    pub default: ProviderKind,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BookingConfig {
    /// Origin booking deep links are built against (white-label or affiliate)
    pub affiliate_base: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    /// Destination assumed when the chat names none
    pub default_destination: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .set_default("server.port", 7000)?
            .set_default("provider.default", "affiliate")?
            .set_default("booking.affiliate_base", overgo_catalog::booking::DEFAULT_AFFILIATE_BASE)?
            .set_default("search.default_destination", overgo_core::intent::DEFAULT_DESTINATION)?
            .add_source(config::File::with_name("config/default").required(false))
            // Per-environment overrides, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `OVERGO__PROVIDER__DEFAULT=mock`
            .add_source(config::Environment::with_prefix("OVERGO").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
