use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

fn default_adults() -> u32 { 2 }

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GuestCounts {
    #[serde(default = "default_adults")]
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
}

impl Default for GuestCounts {
    fn default() -> Self {
        Self { adults: default_adults(), children: 0 }
    }
}

/// Result ordering requested by the guest
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    #[default]
    Recommended,
    Price,
    Distance,
}

/// Structured hotel search request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Query {
    #[serde(alias = "city")]
    pub destination: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[serde(default)]
    pub guests: GuestCounts,
    #[serde(default)]
    pub budget_min: Option<u32>,
    #[serde(default)]
    pub budget_max: Option<u32>,
    #[serde(default)]
    pub amenities: BTreeSet<String>, // e.g. "pool", "spa", "oceanfront", "wifi"
    #[serde(default)]
    pub sort: SortMode,
}

impl Query {
    /// A query with every optional field at its default.
    pub fn new(destination: impl Into<String>, check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self {
            destination: destination.into(),
            check_in,
            check_out,
            guests: GuestCounts::default(),
            budget_min: None,
            budget_max: None,
            amenities: BTreeSet::new(),
            sort: SortMode::default(),
        }
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.destination.trim().is_empty() {
            return Err(CoreError::ValidationError("destination must not be empty".into()));
        }
        if self.check_out <= self.check_in {
            return Err(CoreError::ValidationError(format!(
                "check_out ({}) must be after check_in ({})",
                self.check_out, self.check_in
            )));
        }
        if self.guests.adults < 1 {
            return Err(CoreError::ValidationError("at least one adult is required".into()));
        }
        if let (Some(min), Some(max)) = (self.budget_min, self.budget_max) {
            if max < min {
                return Err(CoreError::ValidationError(format!(
                    "budget_max ({}) must not be below budget_min ({})",
                    max, min
                )));
            }
        }
        Ok(())
    }

    /// Replaces each field for which an override is present.
    pub fn apply_overrides(mut self, overrides: &QueryOverrides) -> Self {
        if let Some(destination) = overrides.destination() {
            self.destination = destination.to_string();
        }
        if let Some(check_in) = overrides.check_in {
            self.check_in = check_in;
        }
        if let Some(check_out) = overrides.check_out {
            self.check_out = check_out;
        }
        if let Some(adults) = overrides.adults.filter(|n| *n > 0) {
            self.guests.adults = adults;
        }
        if let Some(budget_max) = overrides.budget_max.filter(|n| *n > 0) {
            self.budget_max = Some(budget_max);
        }
        self
    }
}

/// Explicit trip details entered beside the chat. Blank destinations and zero
/// counts mean "not set".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryOverrides {
    #[serde(default, alias = "city")]
    pub destination: Option<String>,
    #[serde(default)]
    pub check_in: Option<NaiveDate>,
    #[serde(default)]
    pub check_out: Option<NaiveDate>,
    #[serde(default)]
    pub adults: Option<u32>,
    #[serde(default)]
    pub budget_max: Option<u32>,
}

impl QueryOverrides {
    fn destination(&self) -> Option<&str> {
        self.destination
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}
