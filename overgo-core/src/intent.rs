//! Heuristic chat-to-query extraction.
//!
//! Each rule is an independent, optional pattern match over the joined user
//! text. A rule that finds nothing leaves its field at the default, so
//! extraction always yields a complete [`Query`].

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use regex::Regex;

use crate::chat::{user_text, ChatTurn};
use crate::query::Query;
use crate::{CoreError, CoreResult};

pub const DEFAULT_DESTINATION: &str = "Lagos";

/// Stay length assigned to extracted queries (Friday to Sunday)
const DEFAULT_NIGHTS: i64 = 2;

/// Capitalized words that follow "in"/"to" without naming a place.
const CALENDAR_WORDS: &[&str] = &[
    "January", "February", "March", "April", "May", "June", "July", "August",
    "September", "October", "November", "December",
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
];

pub struct IntentExtractor {
    destination_pattern: Regex,
    budget_pattern: Regex,
    default_destination: String,
}

impl IntentExtractor {
    pub fn new(default_destination: impl Into<String>) -> CoreResult<Self> {
        let destination_pattern =
            Regex::new(r"\b(?:[Ii]n|[Tt]o)\s+(\p{Lu}[\p{L}'-]*(?:[ \t]+\p{Lu}[\p{L}'-]*)*)")
                .map_err(|e| CoreError::InternalError(format!("destination pattern: {}", e)))?;
        let budget_pattern = Regex::new(r"(?i)\b(?:under|max)\s*\$?\s*(\d+)")
            .map_err(|e| CoreError::InternalError(format!("budget pattern: {}", e)))?;

        Ok(Self {
            destination_pattern,
            budget_pattern,
            default_destination: default_destination.into(),
        })
    }

    pub fn default_destination(&self) -> &str {
        &self.default_destination
    }

    /// Derive a fully populated query from the user turns of a conversation.
    /// Dates come from `today`, never from the text.
    pub fn extract(&self, history: &[ChatTurn], today: NaiveDate) -> Query {
        let text = user_text(history);

        let destination = self
            .match_destination(&text)
            .unwrap_or_else(|| self.default_destination.clone());
        let (check_in, check_out) = next_weekend(today);
        let budget_max = self.match_budget(&text);

        tracing::debug!(
            destination = %destination,
            budget_max = ?budget_max,
            turns = history.len(),
            "Extracted query from chat"
        );

        let mut query = Query::new(destination, check_in, check_out);
        query.budget_max = budget_max;
        query
    }

    /// Capitalized phrase after "in"/"to"; the mention nearest the end wins.
    fn match_destination(&self, text: &str) -> Option<String> {
        self.destination_pattern
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|phrase| !CALENDAR_WORDS.contains(&phrase.as_str()))
            .last()
    }

    /// First "under N" / "max N" ceiling.
    fn match_budget(&self, text: &str) -> Option<u32> {
        self.budget_pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }
}

/// Upcoming Friday-to-Sunday stay. On a Friday this rolls to next week.
pub fn next_weekend(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let from_monday = today.weekday().num_days_from_monday() as i64;
    let friday = Weekday::Fri.num_days_from_monday() as i64;

    let mut ahead = (friday - from_monday).rem_euclid(7);
    if ahead == 0 {
        ahead = 7;
    }

    let check_in = today + Duration::days(ahead);
    (check_in, check_in + Duration::days(DEFAULT_NIGHTS))
}
