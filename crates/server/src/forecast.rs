//! Forecast endpoint.
use api_types::forecast::{ForecastEntry, ForecastResponse};
use axum::{Json, extract::State};
use chrono::Local;

use crate::{ledger::DailyBalance, server::ServerState};

/// Handle `GET /api/forecast`
pub async fn get_forecast(State(state): State<ServerState>) -> Json<ForecastResponse> {
    let today = Local::now().date_naive();
    let projection = state.ledger.read().await.projection(today);
    Json(ForecastResponse {
        forecast: projection.iter().map(to_entry).collect(),
    })
}

fn to_entry(day: &DailyBalance) -> ForecastEntry {
    ForecastEntry {
        date: day.date.format("%Y-%m-%d").to_string(),
        balance: day.balance,
    }
}
