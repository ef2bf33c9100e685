//! Request and response bodies exchanged between the dashboard client and the
//! forecast backend.
use serde::{Deserialize, Serialize};

/// Body returned alongside every non-2xx response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

pub mod forecast {
    use super::*;

    /// Projected balance for a single day.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct ForecastEntry {
        /// ISO-8601 calendar date (`YYYY-MM-DD`).
        pub date: String,
        pub balance: f64,
    }

    /// `GET /api/forecast`
    ///
    /// Entries are in ascending date order and the first one is today.
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    pub struct ForecastResponse {
        #[serde(default)]
        pub forecast: Vec<ForecastEntry>,
    }
}

pub mod nudge {
    use super::*;

    /// `GET /api/nudge`
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    pub struct Nudge {
        #[serde(default)]
        pub message: Option<String>,
        /// Categorical severity, e.g. `Critical`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub risk_level: Option<String>,
    }
}

pub mod income {
    use super::*;

    /// `POST /api/income`
    #[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
    pub struct IncomeNew {
        pub amount: f64,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct IncomeAdded {
        pub message: String,
        pub new_modifier: f64,
    }
}
