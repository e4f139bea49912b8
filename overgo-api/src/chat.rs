use axum::{extract::State, routing::post, Json, Router};
use chrono::Utc;
use overgo_core::{ChatTurn, Query as HotelQuery, QueryOverrides};
use serde::Deserialize;

use crate::{error::AppError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct ChatToQueryRequest {
    pub history: Vec<ChatTurn>,
    /// Trip details set explicitly beside the chat; win over extracted values
    #[serde(default)]
    pub overrides: Option<QueryOverrides>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/chat-to-query", post(chat_to_query))
}

/// POST /chat-to-query
/// Turn a conversation into a fully populated search query
async fn chat_to_query(
    State(state): State<AppState>,
    Json(req): Json<ChatToQueryRequest>,
) -> Result<Json<HotelQuery>, AppError> {
    let today = Utc::now().date_naive();
    let mut query = state.extractor.extract(&req.history, today);

    if let Some(overrides) = &req.overrides {
        query = query.apply_overrides(overrides);
    }

    // Overrides can leave the stay inverted
    query.validate()?;

    Ok(Json(query))
}
