//! PUBG Central web server - JSON API over the mock site.
//!
//! This server:
//! - Resolves site paths to pages
//! - Serves the static lobby listing
//! - Opens match detail pages, each with its own mock roster that appears
//!   after a simulated fetch delay
//! - Validates form submissions and queues toasts for the client to poll

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use central_pages::{
    Lobby, LobbyTab, Route, submit_host_game, submit_login, submit_onboarding, submit_signup,
};
use central_roster::{GamePage, RosterAction};
use central_server::{
    OpenPageError, PageError, PageServer, PageStatus, PageToken, ServerConfig, ToastBuffer,
    ToastCursor,
};
use central_types::{
    ErrorResponse, FieldErrors, FormOutcome, HostGameForm, ListPagesResult, LoginForm,
    OnboardingForm, OpenPageResult, PageSnapshot, PageSummary, PollToastsResult,
    RosterActionRequest, SequencedToast, SignupForm, ToastInfo,
};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::{net::TcpListener, sync::Mutex};
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "central-web")]
#[command(about = "JSON API for the PUBG Central mock site")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Simulated fetch delay before a match page has data
    #[arg(long, default_value = "1000")]
    load_delay_ms: u64,

    /// Maximum number of concurrently open match pages
    #[arg(long, default_value = "256")]
    max_pages: usize,

    /// Number of toasts kept for polling clients
    #[arg(long, default_value = "64")]
    toast_capacity: usize,

    /// Fixed seed for mock data, for reproducible rosters
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            load_delay: Duration::from_millis(self.load_delay_ms),
            max_pages: self.max_pages,
            toast_capacity: self.toast_capacity,
            seed: self.seed,
        }
    }
}

struct AppState {
    pages: PageServer<GamePage>,
    lobby: Lobby,
    toasts: Mutex<ToastBuffer<ToastInfo>>,
    /// Draws ids for hosted games.
    rng: Mutex<StdRng>,
}

impl AppState {
    fn new(config: ServerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            toasts: Mutex::new(ToastBuffer::new(config.toast_capacity)),
            pages: PageServer::new(config),
            lobby: Lobby::mock(),
            rng: Mutex::new(rng),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = args.server_config();
    tracing::info!(
        load_delay_ms = args.load_delay_ms,
        max_pages = config.max_pages,
        seed = ?config.seed,
        "starting"
    );

    let state = Arc::new(AppState::new(config));
    let app = router(state.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("PUBG Central listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    state.pages.shutdown().await;
    tracing::info!("shut down");

    Ok(())
}

fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/route", get(resolve_route))
        .route("/api/lobby", get(lobby_listing))
        .route("/api/lobby/{tab}", get(lobby_tab))
        .route("/api/games/{id}/pages", post(open_page))
        .route("/api/pages", get(list_pages))
        .route("/api/pages/{token}", get(page_snapshot).delete(close_page))
        .route("/api/pages/{token}/actions", post(apply_action))
        .route("/api/forms/login", post(login))
        .route("/api/forms/signup", post(signup))
        .route("/api/forms/onboarding", post(onboarding))
        .route("/api/forms/host-game", post(host_game))
        .route("/api/toasts", get(poll_toasts))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn error(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

/// 425 Too Early.
fn too_early() -> StatusCode {
    StatusCode::from_u16(425).unwrap_or(StatusCode::SERVICE_UNAVAILABLE)
}

fn page_error_status(e: &PageError) -> StatusCode {
    match e {
        PageError::NotFound => StatusCode::NOT_FOUND,
        PageError::Loading => too_early(),
        PageError::Rejected(_) => StatusCode::CONFLICT,
    }
}

fn page_error(e: PageError) -> Response {
    error(page_error_status(&e), e.to_string())
}

// ---------------------------------------------------------------------------
// Routes and lobby
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct RouteQuery {
    path: String,
}

async fn resolve_route(Query(query): Query<RouteQuery>) -> impl IntoResponse {
    Json(Route::resolve(&query.path).info())
}

async fn lobby_listing(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.lobby.listing())
}

async fn lobby_tab(State(state): State<Arc<AppState>>, Path(tab): Path<String>) -> Response {
    match tab.parse::<LobbyTab>() {
        Ok(tab) => Json(state.lobby.tab_info(tab)).into_response(),
        Err(e) => error(StatusCode::NOT_FOUND, e.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Match detail pages
// ---------------------------------------------------------------------------

async fn open_page(State(state): State<Arc<AppState>>, Path(match_id): Path<String>) -> Response {
    match state.pages.open_page(match_id.clone()).await {
        Ok(token) => Json(OpenPageResult {
            page_token: token.0,
            match_id,
        })
        .into_response(),
        Err(e @ OpenPageError::TooManyPages) => {
            tracing::warn!(match_id = %match_id, "refusing to open page: {}", e);
            error(StatusCode::SERVICE_UNAVAILABLE, e.to_string())
        }
    }
}

async fn list_pages(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let pages = state
        .pages
        .list_pages()
        .await
        .into_iter()
        .map(|info| PageSummary {
            page_token: info.token.0,
            match_id: info.params,
            loading: info.status == PageStatus::Loading,
        })
        .collect();
    Json(ListPagesResult { pages })
}

#[derive(Deserialize)]
struct SnapshotQuery {
    /// Hold the request until the page loads, up to this many milliseconds.
    #[serde(default)]
    wait_ms: u64,
}

async fn page_snapshot(
    State(state): State<Arc<AppState>>,
    Path(token): Path<u64>,
    Query(query): Query<SnapshotQuery>,
) -> Response {
    let token = PageToken(token);

    if query.wait_ms > 0 {
        if let Err(e) = state
            .pages
            .wait_ready(token, Duration::from_millis(query.wait_ms))
            .await
        {
            return page_error(e);
        }
    }

    match state.pages.view(token).await {
        Ok(page) => Json(PageSnapshot {
            page_token: token.0,
            loading: page.is_none(),
            page,
        })
        .into_response(),
        Err(e) => page_error(e),
    }
}

async fn apply_action(
    State(state): State<Arc<AppState>>,
    Path(token): Path<u64>,
    Json(request): Json<RosterActionRequest>,
) -> Response {
    match state
        .pages
        .apply(PageToken(token), RosterAction::from(request))
        .await
    {
        Ok(view) => Json(view).into_response(),
        Err(e) => page_error(e),
    }
}

async fn close_page(State(state): State<Arc<AppState>>, Path(token): Path<u64>) -> Response {
    match state.pages.close_page(PageToken(token)).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => page_error(e),
    }
}

// ---------------------------------------------------------------------------
// Forms and toasts
// ---------------------------------------------------------------------------

/// Queue the outcome's toast and reply with the outcome, or 422 with field errors.
async fn form_response(state: &AppState, result: Result<FormOutcome, FieldErrors>) -> Response {
    match result {
        Ok(outcome) => {
            state.toasts.lock().await.push(outcome.toast.clone());
            Json(outcome).into_response()
        }
        Err(errors) => (StatusCode::UNPROCESSABLE_ENTITY, Json(errors)).into_response(),
    }
}

async fn login(State(state): State<Arc<AppState>>, Json(form): Json<LoginForm>) -> Response {
    form_response(&state, submit_login(&form)).await
}

async fn signup(State(state): State<Arc<AppState>>, Json(form): Json<SignupForm>) -> Response {
    form_response(&state, submit_signup(&form)).await
}

async fn onboarding(
    State(state): State<Arc<AppState>>,
    Json(form): Json<OnboardingForm>,
) -> Response {
    form_response(&state, submit_onboarding(&form)).await
}

async fn host_game(
    State(state): State<Arc<AppState>>,
    Json(form): Json<HostGameForm>,
) -> Response {
    let result = {
        let mut rng = state.rng.lock().await;
        submit_host_game(&form, &mut *rng)
    };
    form_response(&state, result).await
}

#[derive(Deserialize)]
struct ToastQuery {
    #[serde(default)]
    cursor: u64,
}

async fn poll_toasts(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ToastQuery>,
) -> impl IntoResponse {
    let (notices, cursor) = state
        .toasts
        .lock()
        .await
        .get_from_cursor(ToastCursor(query.cursor));

    Json(PollToastsResult {
        toasts: notices
            .into_iter()
            .map(|n| SequencedToast {
                sequence: n.sequence,
                toast: n.notice,
            })
            .collect(),
        cursor: cursor.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tower::ServiceExt;

    #[test]
    fn test_page_error_status() {
        assert_eq!(page_error_status(&PageError::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(page_error_status(&PageError::Loading).as_u16(), 425);
        assert_eq!(
            page_error_status(&PageError::Rejected("team slot 3 is empty".to_string())),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_args_to_config() {
        let args = Args::parse_from(["central-web", "--load-delay-ms", "250", "--seed", "9"]);
        let config = args.server_config();
        assert_eq!(config.load_delay, Duration::from_millis(250));
        assert_eq!(config.max_pages, 256);
        assert_eq!(config.toast_capacity, 64);
        assert_eq!(config.seed, Some(9));
        assert_eq!(args.port, 8080);
    }

    #[tokio::test]
    async fn test_form_outcome_queues_toast() {
        let state = AppState::new(ServerConfig {
            seed: Some(1),
            ..ServerConfig::default()
        });

        let form = OnboardingForm {
            pubg_username: "ShroudFan123".to_string(),
            platform: "pc".to_string(),
            twitch_username: None,
        };
        let response = form_response(&state, submit_onboarding(&form)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let bad = OnboardingForm {
            pubg_username: "ab".to_string(),
            platform: "pc".to_string(),
            twitch_username: None,
        };
        let response = form_response(&state, submit_onboarding(&bad)).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let (notices, cursor) = state.toasts.lock().await.get_from_cursor(ToastCursor(0));
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].notice.title, "Profile updated!");
        assert_eq!(cursor.0, 1);
    }

    fn test_state(load_delay: Duration) -> Arc<AppState> {
        Arc::new(AppState::new(ServerConfig {
            load_delay,
            seed: Some(3),
            ..ServerConfig::default()
        }))
    }

    async fn send(state: &Arc<AppState>, method: &str, uri: &str, body: Option<&str>) -> StatusCode {
        let mut request = axum::http::Request::builder().method(method).uri(uri);
        if body.is_some() {
            request = request.header("content-type", "application/json");
        }
        let request = request
            .body(axum::body::Body::from(body.unwrap_or_default().to_string()))
            .unwrap();

        router(state.clone()).oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_router_lobby_tabs() {
        let state = test_state(Duration::ZERO);

        assert_eq!(send(&state, "GET", "/api/lobby/ongoing", None).await, StatusCode::OK);
        assert_eq!(
            send(&state, "GET", "/api/lobby/upcoming", None).await,
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn test_router_action_while_loading() {
        let state = test_state(Duration::from_secs(60));

        assert_eq!(send(&state, "POST", "/api/games/7/pages", None).await, StatusCode::OK);
        let status = send(&state, "POST", "/api/pages/1/actions", Some(r#"{"type":"start"}"#)).await;
        assert_eq!(status.as_u16(), 425);

        assert_eq!(send(&state, "DELETE", "/api/pages/1", None).await, StatusCode::NO_CONTENT);
        assert_eq!(send(&state, "GET", "/api/pages/1", None).await, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_router_rejected_action() {
        let state = test_state(Duration::ZERO);

        assert_eq!(send(&state, "POST", "/api/games/7/pages", None).await, StatusCode::OK);
        assert!(state
            .pages
            .wait_ready(PageToken(1), Duration::from_secs(5))
            .await
            .unwrap());

        let status = send(
            &state,
            "POST",
            "/api/pages/1/actions",
            Some(r#"{"type":"remove_team","index":9999}"#),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);

        let status = send(&state, "POST", "/api/pages/42/actions", Some(r#"{"type":"end"}"#)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
