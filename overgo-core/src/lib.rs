pub mod chat;
pub mod intent;
pub mod query;

pub use chat::{ChatTurn, Role};
pub use intent::IntentExtractor;
pub use query::{GuestCounts, Query, QueryOverrides, SortMode};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Internal service error: {0}")]
    InternalError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
