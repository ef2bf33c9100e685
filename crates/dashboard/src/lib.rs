//! Data synchronisation core of the FinAgent dashboard.
//!
//! [`SyncController`] owns the [`DashboardState`] observed by the presentation
//! layer. It pulls the balance forecast and the nudge from the backend through a
//! [`DashboardApi`], runs them through the [`adapter`] and falls back to a fixed
//! demo dataset whenever the backend cannot be read.
pub use client::{Client, DashboardApi};
pub use reqwest::StatusCode;
pub use error::{ClientError, IncomeError, SyncError};
pub use state::{DashboardState, DataSource, ForecastPoint};
pub use sync::{LiveData, SyncController, SyncOutcome, parse_amount};

pub mod adapter;
pub mod fallback;

mod client;
mod error;
mod state;
mod sync;
