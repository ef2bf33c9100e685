use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use dashboard::{
    Client, ClientError, DashboardState, DataSource, IncomeError, SyncController,
};
use tokio::sync::{mpsc, watch};

use crate::{
    config::AppConfig,
    error::{AppError, Result},
    ui::{
        self,
        keymap::{AppAction, map_key},
    },
};

const TOAST_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    IncomeInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct ToastState {
    pub message: String,
    pub level: ToastLevel,
    shown_at: Instant,
}

impl ToastState {
    fn new(message: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            message: message.into(),
            level,
            shown_at: Instant::now(),
        }
    }
}

/// Presentation-only state; the dashboard data lives in the controller.
#[derive(Debug)]
pub struct UiState {
    pub mode: Mode,
    pub income_input: String,
    pub toast: Option<ToastState>,
    /// A refresh or income submission is in flight.
    pub busy: bool,
    pub base_url: String,
}

#[derive(Debug)]
enum OpResult {
    Refreshed(DataSource),
    Income(std::result::Result<DataSource, IncomeError>),
}

pub struct App {
    controller: Arc<SyncController<Client>>,
    dashboard: watch::Receiver<DashboardState>,
    pub ui: UiState,
    results_tx: mpsc::UnboundedSender<OpResult>,
    results_rx: mpsc::UnboundedReceiver<OpResult>,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = Client::new(&config.base_url, config.timeout())?;
        let controller = Arc::new(SyncController::new(client));
        let dashboard = controller.subscribe();
        let (results_tx, results_rx) = mpsc::unbounded_channel();

        Ok(Self {
            controller,
            dashboard,
            ui: UiState {
                mode: Mode::Normal,
                income_input: String::new(),
                toast: None,
                busy: false,
                base_url: config.base_url,
            },
            results_tx,
            results_rx,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        tracing::info!(base_url = %self.ui.base_url, "starting dashboard");
        let mut terminal = ui::setup_terminal()?;
        self.spawn_refresh();
        let result = self.event_loop(&mut terminal).await;
        ui::restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit {
            while let Ok(result) = self.results_rx.try_recv() {
                self.on_result(result);
            }
            if self
                .ui
                .toast
                .as_ref()
                .is_some_and(|toast| toast.shown_at.elapsed() > TOAST_TTL)
            {
                self.ui.toast = None;
            }

            let snapshot = self.dashboard.borrow().clone();
            terminal
                .draw(|frame| ui::render(frame, &snapshot, &self.ui))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                    _ => {}
                }
            }
            tokio::task::yield_now().await;
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match (self.ui.mode, map_key(key)) {
            (_, AppAction::Quit) => self.should_quit = true,
            (Mode::Normal, AppAction::Input('q' | 'Q')) => self.should_quit = true,
            (Mode::Normal, AppAction::Input('r' | 'R')) => self.spawn_refresh(),
            (Mode::Normal, AppAction::Input('a' | 'A')) => {
                if !self.ui.busy {
                    self.ui.mode = Mode::IncomeInput;
                    self.ui.income_input.clear();
                }
            }
            (Mode::IncomeInput, AppAction::Input(ch)) => self.ui.income_input.push(ch),
            (Mode::IncomeInput, AppAction::Backspace) => {
                self.ui.income_input.pop();
            }
            (Mode::IncomeInput, AppAction::Cancel) => self.ui.mode = Mode::Normal,
            (Mode::IncomeInput, AppAction::Submit) => {
                self.ui.mode = Mode::Normal;
                let raw = std::mem::take(&mut self.ui.income_input);
                self.spawn_income(raw);
            }
            _ => {}
        }
    }

    fn spawn_refresh(&mut self) {
        if self.ui.busy {
            return;
        }
        self.ui.busy = true;

        let controller = self.controller.clone();
        let results = self.results_tx.clone();
        tokio::spawn(async move {
            let source = controller.refresh().await;
            let _ = results.send(OpResult::Refreshed(source));
        });
    }

    fn spawn_income(&mut self, raw: String) {
        if self.ui.busy {
            return;
        }
        self.ui.busy = true;

        let controller = self.controller.clone();
        let results = self.results_tx.clone();
        tokio::spawn(async move {
            let outcome = controller.submit_income(&raw).await;
            let _ = results.send(OpResult::Income(outcome));
        });
    }

    fn on_result(&mut self, result: OpResult) {
        self.ui.busy = false;
        self.ui.toast = match result {
            OpResult::Refreshed(DataSource::Live) => None,
            OpResult::Refreshed(DataSource::Fallback) => Some(ToastState::new(
                "Backend unreachable, showing demo data",
                ToastLevel::Info,
            )),
            OpResult::Income(Ok(_)) => Some(ToastState::new("Income added", ToastLevel::Success)),
            OpResult::Income(Err(err)) => {
                tracing::debug!("income submission failed: {err}");
                Some(ToastState::new(income_message(&err), ToastLevel::Error))
            }
        };
    }
}

pub fn income_message(err: &IncomeError) -> &'static str {
    match err {
        IncomeError::InvalidAmount { .. } => "Please enter a valid number",
        IncomeError::Write(ClientError::Status { .. }) => "Failed to add income",
        IncomeError::Write(_) => "Error connecting to backend",
    }
}
