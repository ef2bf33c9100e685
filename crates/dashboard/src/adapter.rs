//! Translation from backend response bodies into the presentation model.
//!
//! Everything here is pure: missing optional fields resolve to defaults and no
//! input is an error.
use api_types::{forecast::ForecastEntry, nudge::Nudge};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::state::ForecastPoint;

/// Text and severity of a nudge, as displayed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NudgeView {
    pub text: String,
    pub risk: Option<String>,
}

/// Maps every entry to a [`ForecastPoint`], keeping order and length.
pub fn adapt_forecast(entries: &[ForecastEntry]) -> Vec<ForecastPoint> {
    entries
        .iter()
        .map(|entry| ForecastPoint {
            day: weekday_label(&entry.date),
            amount: entry.balance,
        })
        .collect()
}

/// Balance of the first entry, today's by the backend's ordering contract.
pub fn current_balance(entries: &[ForecastEntry]) -> f64 {
    entries.first().map(|entry| entry.balance).unwrap_or(0.0)
}

/// Empty strings count as absent, for both fields.
pub fn extract_nudge(nudge: Option<&Nudge>) -> NudgeView {
    let Some(nudge) = nudge else {
        return NudgeView::default();
    };

    NudgeView {
        text: nudge.message.clone().unwrap_or_default(),
        risk: nudge
            .risk_level
            .as_ref()
            .filter(|risk| !risk.is_empty())
            .cloned(),
    }
}

/// English short weekday (`Mon`..`Sun`) of an ISO-8601 date.
///
/// Plain dates are read as calendar dates, date-times use the date in their own
/// offset. Anything unparseable is returned unchanged.
pub fn weekday_label(date: &str) -> String {
    match parse_date(date.trim()) {
        Some(date) => date.format("%a").to_string(),
        None => date.to_string(),
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|stamp| stamp.date())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: &str, balance: f64) -> ForecastEntry {
        ForecastEntry {
            date: date.to_string(),
            balance,
        }
    }

    #[test]
    fn adapts_in_order_and_renames_balance() {
        let entries = vec![
            entry("2024-01-01", 35000.0),
            entry("2024-01-02", 20000.0),
            entry("2024-01-03", -5000.0),
        ];

        let points = adapt_forecast(&entries);

        assert_eq!(
            points,
            vec![
                ForecastPoint::new("Mon", 35000.0),
                ForecastPoint::new("Tue", 20000.0),
                ForecastPoint::new("Wed", -5000.0),
            ]
        );
    }

    #[test]
    fn keeps_backend_order_even_when_unsorted() {
        let entries = vec![entry("2024-01-07", 1.0), entry("2024-01-06", 2.0)];
        let days: Vec<_> = adapt_forecast(&entries).into_iter().map(|p| p.day).collect();
        assert_eq!(days, ["Sun", "Sat"]);
    }

    #[test]
    fn empty_series() {
        assert!(adapt_forecast(&[]).is_empty());
        assert_eq!(current_balance(&[]), 0.0);
    }

    #[test]
    fn current_balance_is_first_entry() {
        let entries = vec![entry("2024-01-01", 1000.0), entry("2024-01-02", 10.0)];
        assert_eq!(current_balance(&entries), 1000.0);
    }

    #[test]
    fn weekday_of_plain_date_has_no_timezone_shift() {
        assert_eq!(weekday_label("2024-01-01"), "Mon");
        assert_eq!(weekday_label("2024-02-29"), "Thu");
    }

    #[test]
    fn weekday_of_datetime_uses_its_own_offset() {
        assert_eq!(weekday_label("2024-01-01T23:30:00-05:00"), "Mon");
        assert_eq!(weekday_label("2024-01-01T00:15:00+09:00"), "Mon");
        assert_eq!(weekday_label("2024-01-05T08:00:00"), "Fri");
    }

    #[test]
    fn unparseable_date_is_kept_verbatim() {
        assert_eq!(weekday_label("someday"), "someday");
        let points = adapt_forecast(&[entry("", 5.0)]);
        assert_eq!(points, vec![ForecastPoint::new("", 5.0)]);
    }

    #[test]
    fn nudge_passes_risk_through() {
        let view = extract_nudge(Some(&Nudge {
            message: Some("Careful".to_string()),
            risk_level: Some("Critical".to_string()),
        }));
        assert_eq!(view.text, "Careful");
        assert_eq!(view.risk.as_deref(), Some("Critical"));
    }

    #[test]
    fn nudge_without_risk_has_none() {
        let view = extract_nudge(Some(&Nudge {
            message: Some("ok".to_string()),
            risk_level: None,
        }));
        assert_eq!(view.text, "ok");
        assert_eq!(view.risk, None);
    }

    #[test]
    fn missing_nudge_fields_default() {
        assert_eq!(extract_nudge(None), NudgeView::default());

        let view = extract_nudge(Some(&Nudge {
            message: None,
            risk_level: Some(String::new()),
        }));
        assert_eq!(view, NudgeView::default());
    }
}
