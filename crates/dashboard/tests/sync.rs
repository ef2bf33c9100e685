use std::{
    net::SocketAddr,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use api_types::{
    ErrorBody,
    forecast::{ForecastEntry, ForecastResponse},
    income::IncomeNew,
    nudge::Nudge,
};
use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};
use dashboard::{Client, ClientError, DataSource, IncomeError, SyncController, fallback};
use tokio::net::TcpListener;

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

async fn serve(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

async fn finagent_backend() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    server::spawn_with_listener(server::ServerState::default(), listener).unwrap()
}

fn controller_for(addr: SocketAddr) -> SyncController<Client> {
    let client = Client::new(&format!("http://{addr}"), None).unwrap();
    SyncController::new(client)
}

/// Backend with a fixed one-day forecast that records every read and income.
#[derive(Clone, Default)]
struct Recorder {
    reads: Arc<AtomicUsize>,
    incomes: Arc<Mutex<Vec<f64>>>,
}

fn fixed_backend(recorder: &Recorder, income_status: StatusCode) -> Router {
    let forecast_reads = recorder.reads.clone();
    let nudge_reads = recorder.reads.clone();
    let incomes = recorder.incomes.clone();

    Router::new()
        .route(
            "/api/forecast",
            get(move || async move {
                forecast_reads.fetch_add(1, Ordering::SeqCst);
                Json(ForecastResponse {
                    forecast: vec![ForecastEntry {
                        date: "2024-01-01".to_string(),
                        balance: 1000.0,
                    }],
                })
            }),
        )
        .route(
            "/api/nudge",
            get(move || async move {
                nudge_reads.fetch_add(1, Ordering::SeqCst);
                Json(Nudge {
                    message: Some("Nice".to_string()),
                    risk_level: None,
                })
            }),
        )
        .route(
            "/api/income",
            post(move |Json(body): Json<IncomeNew>| async move {
                incomes.lock().unwrap().push(body.amount);
                (
                    income_status,
                    Json(ErrorBody {
                        error: "ledger closed".to_string(),
                    }),
                )
            }),
        )
}

async fn unreachable_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

fn assert_demo(controller: &SyncController<Client>) {
    let state = controller.snapshot();
    assert_eq!(state.balance, Some(fallback::DEMO_BALANCE));
    assert_eq!(state.forecast, fallback::demo_forecast());
    assert_eq!(state.nudge_text, fallback::DEMO_NUDGE);
    assert_eq!(state.risk_level, None);
    assert!(!state.is_loading);
}

#[tokio::test]
async fn refresh_adopts_the_backend_week() {
    let controller = controller_for(finagent_backend().await);

    assert_eq!(controller.refresh().await, DataSource::Live);

    let state = controller.snapshot();
    assert_eq!(state.balance, Some(35000.0));
    assert_eq!(state.forecast.len(), 7);
    assert!(state.forecast.iter().all(|p| WEEKDAYS.contains(&p.day.as_str())));
    assert_eq!(state.forecast[0].amount, 35000.0);
    assert!(!state.nudge_text.is_empty());
    assert!(state.is_critical());
    assert!(!state.is_loading);
}

#[tokio::test]
async fn income_round_trip_reads_the_new_balance() {
    let controller = controller_for(finagent_backend().await);
    controller.refresh().await;

    let source = controller.submit_income("150.5").await.unwrap();

    assert_eq!(source, DataSource::Live);
    assert_eq!(controller.snapshot().balance, Some(35150.5));
}

#[tokio::test]
async fn balance_comes_from_the_resync_not_local_arithmetic() {
    let recorder = Recorder::default();
    let controller = controller_for(serve(fixed_backend(&recorder, StatusCode::OK)).await);

    controller.submit_income("150.5").await.unwrap();

    assert_eq!(*recorder.incomes.lock().unwrap(), vec![150.5]);
    assert_eq!(recorder.reads.load(Ordering::SeqCst), 2);
    let state = controller.snapshot();
    assert_eq!(state.balance, Some(1000.0));
    assert_eq!(state.forecast[0].day, "Mon");
    assert_eq!(state.nudge_text, "Nice");
}

#[tokio::test]
async fn rejected_income_is_reported_without_resync() {
    let recorder = Recorder::default();
    let controller = controller_for(
        serve(fixed_backend(&recorder, StatusCode::UNPROCESSABLE_ENTITY)).await,
    );
    let before = controller.snapshot();

    let err = controller.submit_income("42").await.unwrap_err();

    match err {
        IncomeError::Write(ClientError::Status { status, message }) => {
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
            assert_eq!(message, "ledger closed");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(recorder.reads.load(Ordering::SeqCst), 0);
    assert_eq!(controller.snapshot(), before);
}

#[tokio::test]
async fn invalid_income_never_reaches_the_backend() {
    let recorder = Recorder::default();
    let controller = controller_for(serve(fixed_backend(&recorder, StatusCode::OK)).await);

    let err = controller.submit_income("abc").await.unwrap_err();

    assert!(matches!(err, IncomeError::InvalidAmount { .. }));
    assert!(recorder.incomes.lock().unwrap().is_empty());
    assert_eq!(recorder.reads.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unreachable_backend_shows_demo_data() {
    let controller = controller_for(unreachable_addr().await);

    assert_eq!(controller.refresh().await, DataSource::Fallback);
    assert_demo(&controller);
}

#[tokio::test]
async fn income_to_unreachable_backend_is_a_transport_error() {
    let controller = controller_for(unreachable_addr().await);
    let before = controller.snapshot();

    let err = controller.submit_income("10").await.unwrap_err();

    assert!(matches!(err, IncomeError::Write(ClientError::Transport(_))));
    assert_eq!(controller.snapshot(), before);
}

#[tokio::test]
async fn failing_nudge_discards_a_good_forecast() {
    let router = Router::new()
        .route(
            "/api/forecast",
            get(|| async {
                Json(ForecastResponse {
                    forecast: vec![ForecastEntry {
                        date: "2024-01-01".to_string(),
                        balance: 12.0,
                    }],
                })
            }),
        )
        .route(
            "/api/nudge",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
    let controller = controller_for(serve(router).await);

    assert_eq!(controller.refresh().await, DataSource::Fallback);
    assert_demo(&controller);
}

#[tokio::test]
async fn malformed_body_falls_back() {
    let router = Router::new()
        .route("/api/forecast", get(|| async { "<html>oops</html>" }))
        .route(
            "/api/nudge",
            get(|| async {
                Json(Nudge {
                    message: Some("fine".to_string()),
                    risk_level: Some("Low".to_string()),
                })
            }),
        );
    let controller = controller_for(serve(router).await);

    assert_eq!(controller.refresh().await, DataSource::Fallback);
    assert_demo(&controller);
}
