use api_types::{forecast::ForecastResponse, nudge::Nudge};
use chrono::Local;
use tokio::sync::watch;

use crate::{
    adapter::{self, NudgeView},
    client::DashboardApi,
    error::{ClientError, IncomeError, SyncError},
    fallback,
    state::{DashboardState, DataSource, ForecastPoint},
};

/// Adapted data from one successful pair of reads.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveData {
    pub balance: f64,
    pub forecast: Vec<ForecastPoint>,
    pub nudge: NudgeView,
}

impl LiveData {
    fn adapt(forecast: &ForecastResponse, nudge: &Nudge) -> Self {
        Self {
            balance: adapter::current_balance(&forecast.forecast),
            forecast: adapter::adapt_forecast(&forecast.forecast),
            nudge: adapter::extract_nudge(Some(nudge)),
        }
    }
}

/// Result of the read phase of a refresh.
#[derive(Debug)]
pub enum SyncOutcome {
    Live(LiveData),
    Fallback(SyncError),
}

impl SyncOutcome {
    /// Both reads must succeed for the live data to be adopted.
    pub fn join(
        forecast: Result<ForecastResponse, ClientError>,
        nudge: Result<Nudge, ClientError>,
    ) -> Self {
        match (forecast, nudge) {
            (Ok(forecast), Ok(nudge)) => Self::Live(LiveData::adapt(&forecast, &nudge)),
            (Err(err), Ok(_)) => Self::Fallback(SyncError::Forecast(err)),
            (Ok(_), Err(err)) => Self::Fallback(SyncError::Nudge(err)),
            (Err(forecast), Err(nudge)) => Self::Fallback(SyncError::Both { forecast, nudge }),
        }
    }

    pub fn source(&self) -> DataSource {
        match self {
            Self::Live(_) => DataSource::Live,
            Self::Fallback(_) => DataSource::Fallback,
        }
    }

    /// Writes the outcome's data fields into `state`. Every outcome yields a
    /// complete, displayable state.
    fn apply(self, state: &mut DashboardState) {
        match self {
            Self::Live(data) => {
                state.balance = Some(data.balance);
                state.forecast = data.forecast;
                state.nudge_text = data.nudge.text;
                state.risk_level = data.nudge.risk;
                state.source = Some(DataSource::Live);
            }
            Self::Fallback(_) => {
                state.balance = Some(fallback::DEMO_BALANCE);
                state.forecast = fallback::demo_forecast();
                state.nudge_text = fallback::DEMO_NUDGE.to_string();
                state.risk_level = None;
                state.source = Some(DataSource::Fallback);
            }
        }
        state.last_refresh = Some(Local::now());
    }
}

/// Clears `is_loading` when dropped, unless the refresh settled first.
struct LoadingGuard<'a> {
    state: &'a watch::Sender<DashboardState>,
    armed: bool,
}

impl<'a> LoadingGuard<'a> {
    fn begin(state: &'a watch::Sender<DashboardState>) -> Self {
        state.send_modify(|state| state.is_loading = true);
        Self { state, armed: true }
    }

    fn settle(mut self, outcome: SyncOutcome) {
        self.armed = false;
        self.state.send_modify(|state| {
            outcome.apply(state);
            state.is_loading = false;
        });
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.state.send_modify(|state| state.is_loading = false);
        }
    }
}

/// Sole writer of the [`DashboardState`].
///
/// Built once at startup; the presentation layer observes the state through
/// [`subscribe`](Self::subscribe) and drives it with [`refresh`](Self::refresh)
/// and [`submit_income`](Self::submit_income). Operations are expected one at
/// a time; overlapping refreshes are not serialised and the last to settle
/// wins.
pub struct SyncController<A> {
    api: A,
    state: watch::Sender<DashboardState>,
}

impl<A: DashboardApi> SyncController<A> {
    pub fn new(api: A) -> Self {
        let (state, _) = watch::channel(DashboardState::default());
        Self { api, state }
    }

    pub fn subscribe(&self) -> watch::Receiver<DashboardState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> DashboardState {
        self.state.borrow().clone()
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Reloads forecast and nudge together.
    ///
    /// Never fails: if either read fails the demo dataset is adopted instead
    /// and the cause is logged. `is_loading` is cleared on every exit path.
    pub async fn refresh(&self) -> DataSource {
        let guard = LoadingGuard::begin(&self.state);
        tracing::debug!("refreshing dashboard");

        let (forecast, nudge) = tokio::join!(self.api.forecast(), self.api.nudge());
        let outcome = SyncOutcome::join(forecast, nudge);

        match &outcome {
            SyncOutcome::Live(data) => {
                tracing::info!(points = data.forecast.len(), "adopted live dashboard data");
            }
            SyncOutcome::Fallback(err) => {
                tracing::warn!("backend unavailable, showing demo data: {err}");
            }
        }

        let source = outcome.source();
        guard.settle(outcome);
        source
    }

    /// Validates `raw`, records it as income and resynchronises.
    ///
    /// The balance is never bumped locally; it is whatever the follow-up
    /// refresh reads back.
    pub async fn submit_income(&self, raw: &str) -> Result<DataSource, IncomeError> {
        let amount = parse_amount(raw).inspect_err(|err| tracing::info!("{err}"))?;
        self.write_income(amount).await
    }

    /// Same as [`submit_income`](Self::submit_income) for a numeric amount.
    pub async fn record_income(&self, amount: f64) -> Result<DataSource, IncomeError> {
        if !amount.is_finite() {
            let err = IncomeError::InvalidAmount {
                input: amount.to_string(),
            };
            tracing::info!("{err}");
            return Err(err);
        }
        self.write_income(amount).await
    }

    async fn write_income(&self, amount: f64) -> Result<DataSource, IncomeError> {
        if let Err(err) = self.api.add_income(amount).await {
            tracing::warn!(amount, "income not recorded: {err}");
            return Err(err.into());
        }

        tracing::info!(amount, "income recorded");
        Ok(self.refresh().await)
    }
}

/// Parses user input into a finite amount.
pub fn parse_amount(raw: &str) -> Result<f64, IncomeError> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(IncomeError::InvalidAmount {
            input: trimmed.to_string(),
        }),
    }
}
