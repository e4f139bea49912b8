use axum::{
    extract::{Query, State},
    routing::post,
    Json, Router,
};
use overgo_catalog::{HotelResult, ProviderKind};
use overgo_core::Query as HotelQuery;
use serde::{Deserialize, Serialize};

use crate::{error::AppError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Provider selector; the configured default applies when absent
    pub provider: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<HotelResult>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/search", post(search_hotels))
}

/// POST /search?provider=affiliate
async fn search_hotels(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
    Json(query): Json<HotelQuery>,
) -> Result<Json<SearchResponse>, AppError> {
    let provider = match params.provider.as_deref() {
        Some(selector) => selector.parse::<ProviderKind>()?,
        None => state.default_provider,
    };

    query.validate()?;

    let results = state.dispatcher.search(&query, provider).map_err(|e| {
        tracing::warn!("Search via {} failed: {}", provider, e);
        e
    })?;

    Ok(Json(SearchResponse { results }))
}
