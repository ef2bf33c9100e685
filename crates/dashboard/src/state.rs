use chrono::{DateTime, Local};

/// Risk level that drives the presentation's alert styling.
pub const CRITICAL_RISK: &str = "Critical";

/// One bar of the weekly forecast, as shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastPoint {
    /// Short weekday label, e.g. `Mon`.
    pub day: String,
    pub amount: f64,
}

impl ForecastPoint {
    pub fn new(day: impl Into<String>, amount: f64) -> Self {
        Self {
            day: day.into(),
            amount,
        }
    }
}

/// Which dataset the last settled refresh adopted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Live,
    Fallback,
}

/// Everything the presentation layer reads.
///
/// Only [`SyncController`](crate::SyncController) writes it; each refresh
/// replaces the data fields in a single transition.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    /// `None` until the first refresh settles.
    pub balance: Option<f64>,
    pub forecast: Vec<ForecastPoint>,
    pub nudge_text: String,
    pub risk_level: Option<String>,
    pub is_loading: bool,
    pub source: Option<DataSource>,
    pub last_refresh: Option<DateTime<Local>>,
}

impl Default for DashboardState {
    /// Startup state: nothing known yet, the mount refresh is pending.
    fn default() -> Self {
        Self {
            balance: None,
            forecast: Vec::new(),
            nudge_text: String::new(),
            risk_level: None,
            is_loading: true,
            source: None,
            last_refresh: None,
        }
    }
}

impl DashboardState {
    pub fn is_critical(&self) -> bool {
        self.risk_level.as_deref() == Some(CRITICAL_RISK)
    }

    pub fn is_fallback(&self) -> bool {
        self.source == Some(DataSource::Fallback)
    }
}
