use axum::{Json, http::StatusCode, response::IntoResponse};

use api_types::ErrorBody;
pub use ledger::{BASE_PROJECTION, DailyBalance, Ledger};
pub use server::{ServerState, router, run_with_listener, spawn_with_listener};

mod forecast;
mod income;
mod ledger;
mod nudge;
mod server;

pub use nudge::assess;

pub enum ServerError {
    Validation(String),
    Generic(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Validation(err) => (StatusCode::UNPROCESSABLE_ENTITY, err),
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}
