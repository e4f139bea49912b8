use std::fmt;
use std::str::FromStr;

use overgo_core::Query;
use serde::{Deserialize, Serialize};

use crate::booking::BookingLinkBuilder;
use crate::hotel::{demo_catalog, HotelResult};

/// Source of hotel inventory and booking links
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ProviderKind {
    /// Demo catalog with affiliate deep links
    Affiliate,
    /// Demo catalog, same listings as `Affiliate`
    Mock,
    /// Live Hotelbeds inventory (not integrated yet)
    Hotelbeds,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 3] = [Self::Affiliate, Self::Mock, Self::Hotelbeds];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Affiliate => "affiliate",
            Self::Mock => "mock",
            Self::Hotelbeds => "hotelbeds",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| ProviderError::UnknownProvider(s.to_string()))
    }
}

impl TryFrom<String> for ProviderKind {
    type Error = ProviderError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    #[error("Provider {provider} is unavailable: {reason}")]
    Unavailable {
        provider: ProviderKind,
        reason: String,
    },
}

/// Routes a search to the handler of the selected provider.
///
/// The provider is chosen per call; the dispatcher itself holds only
/// immutable configuration and can be shared across requests.
#[derive(Debug, Clone)]
pub struct ProviderDispatcher {
    links: BookingLinkBuilder,
}

impl ProviderDispatcher {
    pub fn new(links: BookingLinkBuilder) -> Self {
        Self { links }
    }

    pub fn search(
        &self,
        query: &Query,
        provider: ProviderKind,
    ) -> Result<Vec<HotelResult>, ProviderError> {
        let results = match provider {
            ProviderKind::Affiliate | ProviderKind::Mock => self.search_demo(query),
            ProviderKind::Hotelbeds => self.search_hotelbeds(query)?,
        };

        tracing::info!(
            provider = %provider,
            destination = %query.destination,
            results = results.len(),
            "Hotel search completed"
        );
        Ok(results)
    }

    fn search_demo(&self, query: &Query) -> Vec<HotelResult> {
        // One link per response, shared by every listing
        let booking = self.links.build(
            &query.destination,
            query.check_in,
            query.check_out,
            query.guests.adults,
        );
        demo_catalog(&query.destination, &booking)
    }

    fn search_hotelbeds(&self, _query: &Query) -> Result<Vec<HotelResult>, ProviderError> {
        // TODO: sign requests with SHA-256(api key + secret + unix timestamp) once partner keys are issued
        Err(ProviderError::Unavailable {
            provider: ProviderKind::Hotelbeds,
            reason: "Hotelbeds shopping and booking are not integrated until partner keys are available"
                .to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::DEFAULT_AFFILIATE_BASE;
    use chrono::NaiveDate;
    use overgo_core::SortMode;

    fn dispatcher() -> ProviderDispatcher {
        ProviderDispatcher::new(BookingLinkBuilder::new(DEFAULT_AFFILIATE_BASE).unwrap())
    }

    fn lagos_query() -> Query {
        let mut query = Query::new(
            "Lagos",
            NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 12).unwrap(),
        );
        query.guests.adults = 3;
        query
    }

    #[test]
    fn test_affiliate_search_scenario() {
        let results = dispatcher().search(&lagos_query(), ProviderKind::Affiliate).unwrap();

        assert_eq!(results.len(), 2);
        for result in &results {
            assert_eq!(result.destination, "Lagos");
            assert!(result.booking.url.contains("group_adults=3"));
            assert!(result.booking.url.contains("checkin=2025-01-10"));
            assert!(result.booking.url.contains("checkout=2025-01-12"));
        }
    }

    #[test]
    fn test_mock_matches_affiliate() {
        let query = lagos_query();
        let mock = dispatcher().search(&query, ProviderKind::Mock).unwrap();
        let affiliate = dispatcher().search(&query, ProviderKind::Affiliate).unwrap();
        assert_eq!(mock, affiliate);
    }

    #[test]
    fn test_all_results_share_one_link() {
        let results = dispatcher().search(&lagos_query(), ProviderKind::Mock).unwrap();
        let first = &results[0].booking;
        assert!(results.iter().all(|r| &r.booking == first));
    }

    #[test]
    fn test_filters_do_not_change_demo_results() {
        let plain = dispatcher().search(&lagos_query(), ProviderKind::Affiliate).unwrap();

        let mut filtered = lagos_query();
        filtered.budget_max = Some(100);
        filtered.amenities.insert("spa".to_string());
        filtered.sort = SortMode::Price;
        let results = dispatcher().search(&filtered, ProviderKind::Affiliate).unwrap();

        assert_eq!(results, plain);
    }

    #[test]
    fn test_hotelbeds_always_fails() {
        let err = dispatcher()
            .search(&lagos_query(), ProviderKind::Hotelbeds)
            .unwrap_err();
        assert!(matches!(
            err,
            ProviderError::Unavailable { provider: ProviderKind::Hotelbeds, .. }
        ));
        assert!(err.to_string().contains("hotelbeds"));
    }

    #[test]
    fn test_selector_parsing() {
        assert_eq!("affiliate".parse::<ProviderKind>().unwrap(), ProviderKind::Affiliate);
        assert_eq!(" Mock ".parse::<ProviderKind>().unwrap(), ProviderKind::Mock);
        assert_eq!("HOTELBEDS".parse::<ProviderKind>().unwrap(), ProviderKind::Hotelbeds);

        let err = "expedia".parse::<ProviderKind>().unwrap_err();
        assert!(matches!(&err, ProviderError::UnknownProvider(s) if s == "expedia"));
        assert_eq!(err.to_string(), "Unknown provider: expedia");

        for kind in ProviderKind::ALL {
            assert_eq!(kind.to_string().parse::<ProviderKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_selector_deserialization_matches_parsing() {
        let kind: ProviderKind = serde_json::from_str(r#""Mock""#).unwrap();
        assert_eq!(kind, ProviderKind::Mock);
        let kind: ProviderKind = serde_json::from_str(r#"" HOTELBEDS ""#).unwrap();
        assert_eq!(kind, ProviderKind::Hotelbeds);

        let err = serde_json::from_str::<ProviderKind>(r#""expedia""#).unwrap_err();
        assert!(err.to_string().contains("Unknown provider: expedia"));

        assert_eq!(serde_json::to_string(&ProviderKind::Affiliate).unwrap(), r#""affiliate""#);
    }
}
