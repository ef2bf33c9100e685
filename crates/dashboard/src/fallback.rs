//! Demo dataset shown when the backend cannot be read.
use crate::state::ForecastPoint;

pub const DEMO_BALANCE: f64 = 850.0;

pub const DEMO_NUDGE: &str = "This is a demo nudge.";

const DEMO_FORECAST: [(&str, f64); 5] = [
    ("Mon", 120.0),
    ("Tue", 90.0),
    ("Wed", 40.0),
    ("Thu", 200.0),
    ("Fri", 350.0),
];

pub fn demo_forecast() -> Vec<ForecastPoint> {
    DEMO_FORECAST
        .iter()
        .map(|(day, amount)| ForecastPoint::new(*day, *amount))
        .collect()
}
