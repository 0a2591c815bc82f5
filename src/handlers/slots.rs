use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::parse_date;
use crate::services::availability;
use crate::state::AppState;

// GET /api/slots?date=YYYY-MM-DD
#[derive(Deserialize)]
pub struct SlotsQuery {
    pub date: String,
}

#[derive(Serialize)]
pub struct SlotResponse {
    time: String,
    blocked: bool,
}

pub async fn get_slots(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<Vec<SlotResponse>>, AppError> {
    let date = parse_date(&query.date).map_err(|e| AppError::InvalidInput(e.to_string()))?;
    let blocks = state.blocks.list()?;

    let response: Vec<SlotResponse> = availability::available_slots(date, &blocks)
        .into_iter()
        .map(|slot| SlotResponse {
            time: slot.time.to_string(),
            blocked: slot.blocked,
        })
        .collect();

    Ok(Json(response))
}
