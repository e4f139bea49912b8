use std::sync::Arc;

use anyhow::Context;
use overgo_catalog::{BookingLinkBuilder, ProviderDispatcher, ProviderKind};
use overgo_core::IntentExtractor;

use crate::app_config::Config;

#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<IntentExtractor>,
    pub dispatcher: Arc<ProviderDispatcher>,
    pub default_provider: ProviderKind,
}

impl AppState {
    /// Validates the booking origin up front so link building cannot fail per request.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let links = BookingLinkBuilder::new(&config.booking.affiliate_base)
            .context("Invalid booking configuration")?;
        let extractor = IntentExtractor::new(config.search.default_destination.clone())
            .context("Failed to build intent extractor")?;

        tracing::info!(
            "Booking links target {}, default destination {}",
            links.base(),
            extractor.default_destination()
        );

        Ok(Self {
            extractor: Arc::new(extractor),
            dispatcher: Arc::new(ProviderDispatcher::new(links)),
            default_provider: config.provider.default,
        })
    }
}
