//! Income endpoint.
use api_types::income::{IncomeAdded, IncomeNew};
use axum::{Json, extract::State};

use crate::{ServerError, server::ServerState};

/// Handle `POST /api/income`
pub async fn add_income(
    State(state): State<ServerState>,
    Json(payload): Json<IncomeNew>,
) -> Result<Json<IncomeAdded>, ServerError> {
    if !payload.amount.is_finite() {
        return Err(ServerError::Validation("amount must be finite".to_string()));
    }

    let new_modifier = state.ledger.write().await.record_income(payload.amount);
    tracing::info!(amount = payload.amount, new_modifier, "income added");

    Ok(Json(IncomeAdded {
        message: "Income added".to_string(),
        new_modifier,
    }))
}
