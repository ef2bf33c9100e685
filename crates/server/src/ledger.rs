//! In-memory running total of posted income and the balance projection built
//! on top of it.
use chrono::{Days, NaiveDate};

/// Projected balance for the next seven days before any income is posted.
pub const BASE_PROJECTION: [f64; 7] = [
    35000.0, 20000.0, 10000.0, -5000.0, -5000.0, -5000.0, -5000.0,
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyBalance {
    pub date: NaiveDate,
    pub balance: f64,
}

#[derive(Debug)]
pub struct Ledger {
    base: Vec<f64>,
    balance_modifier: f64,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::with_base(BASE_PROJECTION.to_vec())
    }
}

impl Ledger {
    pub fn with_base(base: Vec<f64>) -> Self {
        Self {
            base,
            balance_modifier: 0.0,
        }
    }

    pub fn balance_modifier(&self) -> f64 {
        self.balance_modifier
    }

    /// Adds `amount` to every projected day. Returns the new running total.
    pub fn record_income(&mut self, amount: f64) -> f64 {
        self.balance_modifier += amount;
        self.balance_modifier
    }

    /// One entry per day starting at `today`, ascending.
    pub fn projection(&self, today: NaiveDate) -> Vec<DailyBalance> {
        self.base
            .iter()
            .enumerate()
            .filter_map(|(offset, base)| {
                let date = today.checked_add_days(Days::new(offset as u64))?;
                Some(DailyBalance {
                    date,
                    balance: base + self.balance_modifier,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn projection_starts_today_and_ascends() {
        let ledger = Ledger::default();
        let projection = ledger.projection(day(2024, 12, 29));

        assert_eq!(projection.len(), 7);
        assert_eq!(projection[0].date, day(2024, 12, 29));
        assert_eq!(projection[3].date, day(2025, 1, 1));
        assert!(projection.windows(2).all(|w| w[0].date < w[1].date));
        assert_eq!(projection[0].balance, 35000.0);
        assert_eq!(projection[6].balance, -5000.0);
    }

    #[test]
    fn income_shifts_every_day() {
        let mut ledger = Ledger::default();
        assert_eq!(ledger.record_income(1000.0), 1000.0);
        assert_eq!(ledger.record_income(500.5), 1500.5);

        let projection = ledger.projection(day(2024, 1, 1));
        assert_eq!(projection[0].balance, 36500.5);
        assert_eq!(projection[3].balance, -3499.5);
    }
}
