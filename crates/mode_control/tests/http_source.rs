use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use mode_control::{
    FailurePolicy, FetchOutcome, HttpModeSource, Lifecycle, Mode, ModeControl, ModeControlConfig,
    ModeError, ModeSource, resolve_endpoint,
};
use tokio::net::TcpListener;

#[derive(Clone)]
struct ServerState {
    status: StatusCode,
    body: &'static str,
    hits: Arc<AtomicUsize>,
}

async fn handle_state(State(state): State<ServerState>) -> impl IntoResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);
    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body,
    )
}

/// Serve `body` with `status` on `GET /state`. Returns the base URL and a hit counter.
async fn spawn_state_server(status: StatusCode, body: &'static str) -> (String, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    let hits = Arc::new(AtomicUsize::new(0));
    let state = ServerState {
        status,
        body,
        hits: hits.clone(),
    };
    let app = Router::new()
        .route("/state", get(handle_state))
        .with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (format!("http://{addr}"), hits)
}

fn source_for(base_url: &str) -> HttpModeSource {
    let config = ModeControlConfig::builder().base_url(base_url).build();
    let url = resolve_endpoint(&config.endpoint, config.base_url.as_deref()).expect("valid endpoint");
    // Keep test traffic away from any proxy configured in the environment.
    let client = reqwest::Client::builder().no_proxy().build().expect("build client");
    HttpModeSource::with_client(client, url)
}

#[tokio::test]
async fn fetches_mode_and_ignores_extra_fields() {
    let (base_url, hits) = spawn_state_server(
        StatusCode::OK,
        r#"{"mode":"capture","destination":".","usage":{"counters":{}}}"#,
    )
    .await;

    let response = source_for(&base_url).fetch_current_mode().await.unwrap();

    assert_eq!(response.mode, Mode::Capture);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn unknown_mode_is_kept_verbatim() {
    let (base_url, _) = spawn_state_server(StatusCode::OK, r#"{"mode":"observe"}"#).await;

    let response = source_for(&base_url).fetch_current_mode().await.unwrap();

    assert_eq!(response.mode, Mode::Other("observe".to_string()));
}

#[tokio::test]
async fn server_error_maps_to_status() {
    let (base_url, _) =
        spawn_state_server(StatusCode::INTERNAL_SERVER_ERROR, r#"{"error":"boom"}"#).await;

    let err = source_for(&base_url).fetch_current_mode().await.unwrap_err();

    assert_eq!(err, ModeError::Status { status: 500 });
}

#[tokio::test]
async fn missing_mode_field_maps_to_decode() {
    let (base_url, _) = spawn_state_server(StatusCode::OK, r#"{"destination":"."}"#).await;

    let err = source_for(&base_url).fetch_current_mode().await.unwrap_err();

    assert!(matches!(err, ModeError::Decode { .. }), "got {err:?}");
}

#[tokio::test]
async fn unreachable_endpoint_maps_to_transport() {
    // Bind then drop to get a port nothing listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = source_for(&format!("http://{addr}"))
        .fetch_current_mode()
        .await
        .unwrap_err();

    assert!(matches!(err, ModeError::Transport { .. }), "got {err:?}");
}

#[tokio::test]
async fn control_settles_from_http_source() {
    let (base_url, hits) = spawn_state_server(StatusCode::OK, r#"{"mode":"simulate"}"#).await;
    let control = ModeControl::new(|_: &Mode| {});

    let fetch = control.activate(&source_for(&base_url));
    assert_eq!(control.mode(), Some(Mode::Virtualize));

    assert_eq!(fetch.await, Ok(FetchOutcome::Applied(Mode::Simulate)));
    assert_eq!(control.lifecycle(), Lifecycle::Settled);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn control_keeps_default_when_server_fails() {
    let (base_url, _) = spawn_state_server(StatusCode::SERVICE_UNAVAILABLE, "").await;
    let control = ModeControl::with_policy(|_: &Mode| {}, FailurePolicy::KeepDefault);

    let outcome = control.activate(&source_for(&base_url)).await;

    assert_eq!(outcome, Ok(FetchOutcome::KeptDefault));
    assert_eq!(control.mode(), Some(Mode::Virtualize));
}

#[tokio::test]
async fn control_propagates_server_failure() {
    let (base_url, _) = spawn_state_server(StatusCode::NOT_FOUND, "").await;
    let control = ModeControl::new(|_: &Mode| {});

    let outcome = control.activate(&source_for(&base_url)).await;

    assert_eq!(outcome, Err(ModeError::Status { status: 404 }));
}
