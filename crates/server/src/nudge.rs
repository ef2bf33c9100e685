//! Nudge endpoint. The advice is derived from the current projection.
use api_types::nudge::Nudge;
use axum::{Json, extract::State};
use chrono::Local;

use crate::{ledger::DailyBalance, server::ServerState};

pub const CRITICAL: &str = "Critical";
pub const WARNING: &str = "Warning";
pub const LOW: &str = "Low";

/// Handle `GET /api/nudge`
pub async fn get_nudge(State(state): State<ServerState>) -> Json<Nudge> {
    let today = Local::now().date_naive();
    let projection = state.ledger.read().await.projection(today);
    Json(assess(&projection))
}

/// Picks the nudge for a projection:
///
/// - `Critical` when any day goes negative,
/// - `Warning` when the lowest day drops under a quarter of today's balance,
/// - `Low` otherwise.
pub fn assess(projection: &[DailyBalance]) -> Nudge {
    if let Some(day) = projection.iter().find(|day| day.balance < 0.0) {
        return nudge(
            format!(
                "🚨 Your balance is projected to hit ₹{:.0} on {}. Skip the food delivery today and keep that cash for the bills that are coming.",
                day.balance,
                day.date.format("%A"),
            ),
            CRITICAL,
        );
    }

    let today = projection.first().map(|day| day.balance).unwrap_or(0.0);
    let lowest = projection
        .iter()
        .min_by(|a, b| a.balance.total_cmp(&b.balance));
    if let Some(lowest) = lowest
        && lowest.balance < today * 0.25
    {
        return nudge(
            format!(
                "⚠️ Your balance dips to ₹{:.0} on {}. Go easy on discretionary spending this week.",
                lowest.balance,
                lowest.date.format("%A"),
            ),
            WARNING,
        );
    }

    nudge(
        "✅ You're on track this week. Consider moving a little into savings.".to_string(),
        LOW,
    )
}

fn nudge(message: String, risk_level: &str) -> Nudge {
    Nudge {
        message: Some(message),
        risk_level: Some(risk_level.to_string()),
    }
}
