use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use url::Url;

pub const DEFAULT_AFFILIATE_BASE: &str = "https://www.booking.com";
pub const BOOKING_LABEL: &str = "Book on Booking.com";

/// Outbound link to complete a booking on an external surface
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingLink {
    pub label: String,
    pub url: String,
    pub white_label: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    #[error("Invalid booking base origin {base:?}: {reason}")]
    InvalidBase { base: String, reason: String },
}

/// Builds destination search deep links against a fixed base origin.
///
/// The base is validated once, on construction, so [`BookingLinkBuilder::build`]
/// cannot fail.
#[derive(Debug, Clone)]
pub struct BookingLinkBuilder {
    base: Url,
}

impl BookingLinkBuilder {
    pub fn new(base: &str) -> Result<Self, LinkError> {
        let invalid = |reason: String| LinkError::InvalidBase {
            base: base.to_string(),
            reason,
        };

        let url = Url::parse(base).map_err(|e| invalid(e.to_string()))?;
        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(invalid("expected an http(s) origin".into()));
        }

        Ok(Self { base: url })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn build(
        &self,
        destination: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
        adults: u32,
    ) -> BookingLink {
        let mut url = self.base.clone();
        url.set_query(None);
        url.set_fragment(None);

        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("searchresults.html");
        }

        url.query_pairs_mut()
            .append_pair("ss", destination)
            .append_pair("checkin", &check_in.to_string())
            .append_pair("checkout", &check_out.to_string())
            .append_pair("group_adults", &adults.to_string())
            .append_pair("no_rooms", "1")
            .append_pair("group_children", "0");

        BookingLink {
            label: BOOKING_LABEL.to_string(),
            url: url.into(),
            white_label: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_search_results_link() {
        let builder = BookingLinkBuilder::new(DEFAULT_AFFILIATE_BASE).unwrap();
        let link = builder.build("Lagos", date(2025, 1, 10), date(2025, 1, 12), 3);

        assert_eq!(
            link.url,
            "https://www.booking.com/searchresults.html?ss=Lagos&checkin=2025-01-10\
             &checkout=2025-01-12&group_adults=3&no_rooms=1&group_children=0"
        );
        assert_eq!(link.label, "Book on Booking.com");
        assert!(link.white_label);
    }

    #[test]
    fn test_destination_is_encoded() {
        let builder = BookingLinkBuilder::new(DEFAULT_AFFILIATE_BASE).unwrap();
        let link = builder.build("São Paulo & Co", date(2025, 1, 10), date(2025, 1, 12), 2);

        let parsed = Url::parse(&link.url).unwrap();
        let ss = parsed
            .query_pairs()
            .find(|(k, _)| k == "ss")
            .map(|(_, v)| v.into_owned());
        assert_eq!(ss.as_deref(), Some("São Paulo & Co"));
        assert_eq!(parsed.query_pairs().count(), 6);
    }

    #[test]
    fn test_white_label_base_keeps_path() {
        let builder = BookingLinkBuilder::new("https://stays.example.com/partner/").unwrap();
        let link = builder.build("Accra", date(2025, 2, 7), date(2025, 2, 9), 1);
        assert!(link
            .url
            .starts_with("https://stays.example.com/partner/searchresults.html?ss=Accra&"));

        let builder = BookingLinkBuilder::new("https://stays.example.com/partner").unwrap();
        let link = builder.build("Accra", date(2025, 2, 7), date(2025, 2, 9), 1);
        assert!(link
            .url
            .starts_with("https://stays.example.com/partner/searchresults.html?"));
    }

    #[test]
    fn test_invalid_base_rejected() {
        for base in ["", "booking.com", "mailto:bookings@example.com", "ftp://example.com"] {
            assert!(
                matches!(BookingLinkBuilder::new(base), Err(LinkError::InvalidBase { .. })),
                "base: {:?}",
                base
            );
        }
    }
}
