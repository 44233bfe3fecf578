//! JSON HTTP API over the page-stability engine
//!
//! Routes are organized into modules:
//! - routes::transactions: record list, detail and creation
//! - routes::pages: current page and navigation commands
//!
//! One [`PageCoordinator`] per server is shared behind a write lock. Every
//! command and every refresh takes that lock for its whole read-modify-write,
//! so page checks always see the collection they apply to.

pub mod error;
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::{
    http::Method,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tower_http::cors::{Any, CorsLayer};
use txpager_config::Config;
use txpager_core::{
    CoreResult, DefaultErrorLogger, ErrorContext, ErrorLogger, PageCoordinator, Record, RecordSource,
    RefreshOutcome,
};

pub use error::{ApiError, ApiResult};

/// Coordinator shared between handlers and the refresh task
pub type SharedCoordinator = Arc<RwLock<PageCoordinator<Record>>>;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub coordinator: SharedCoordinator,
    pub source: Arc<dyn RecordSource>,
    pub config: Config,
}

impl AppState {
    /// Build state with an empty session sized from the config
    pub fn new(config: Config, source: Arc<dyn RecordSource>) -> CoreResult<Self> {
        let coordinator = PageCoordinator::new(
            config.pagination.records_per_page,
            config.pagination.sort_direction,
        )?;
        Ok(Self {
            coordinator: Arc::new(RwLock::new(coordinator)),
            source,
            config,
        })
    }
}

/// Pull the full collection and apply it to the session
///
/// The fetch happens before the lock is taken so slow sources never block
/// navigation.
pub async fn refresh_from_source(state: &AppState) -> CoreResult<RefreshOutcome> {
    let records = state.source.fetch_all().await?;
    let mut coordinator = state.coordinator.write().await;
    Ok(coordinator.refresh(&records))
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::pages::{
        api_go_to_item, api_go_to_page, api_next_page, api_page, api_previous_page, api_set_direction,
        api_set_page_size,
    };
    use routes::transactions::{api_create_transaction, api_transaction_detail, api_transactions};

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/transactions", get(api_transactions).post(api_create_transaction))
        .route("/api/transactions/:id", get(api_transaction_detail))
        .route("/api/page", get(api_page))
        .route("/api/page/next", post(api_next_page))
        .route("/api/page/previous", post(api_previous_page))
        .route("/api/page/:number", post(api_go_to_page))
        .route("/api/page/item/:id", post(api_go_to_item))
        .route("/api/page/size/:size", post(api_set_page_size))
        .route("/api/page/sort/:direction", post(api_set_direction))
        .route("/api/refresh", post(api_refresh))
        .layer(cors)
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Pull from the source now instead of waiting for the next tick
async fn api_refresh(state: axum::extract::State<AppState>) -> ApiResult<Json<RefreshOutcome>> {
    let outcome = refresh_from_source(&state).await?;
    Ok(Json(outcome))
}

/// Poll the source on a fixed interval until aborted
pub fn spawn_refresh_task(state: AppState, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let logger = DefaultErrorLogger;
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        // the first tick fires immediately and start-up already refreshed
        ticker.tick().await;

        loop {
            ticker.tick().await;
            match refresh_from_source(&state).await {
                Ok(outcome) => log::trace!(
                    "Refreshed: {} records, page {}/{}",
                    outcome.total_items,
                    outcome.current_page,
                    outcome.total_pages
                ),
                Err(err) => {
                    let coordinator = state.coordinator.read().await;
                    let context = ErrorContext::new("refresh")
                        .with_current_page(coordinator.current_page())
                        .with_total_items(coordinator.ordered_items().len());
                    logger.log_error(&err, &context);
                }
            }
        }
    })
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => log::info!("Shutdown signal received"),
        Err(err) => log::error!("Failed to listen for shutdown signal: {}", err),
    }
}

/// Start the HTTP server
///
/// Loads the initial collection, starts the refresh task if enabled and
/// serves until Ctrl-C.
pub async fn start_server(config: Config, source: Arc<dyn RecordSource>) -> anyhow::Result<()> {
    let addr = config.bind_address();
    let state = AppState::new(config, source)?;

    let outcome = refresh_from_source(&state)
        .await
        .context("initial load from record source failed")?;
    log::info!(
        "Loaded {} records ({} pages of {})",
        outcome.total_items,
        outcome.total_pages,
        state.config.pagination.records_per_page
    );

    let refresh_task = if state.config.refresh.enable {
        let interval = Duration::from_millis(state.config.refresh.interval_ms);
        log::info!("Refreshing every {:?}", interval);
        Some(spawn_refresh_task(state.clone(), interval))
    } else {
        None
    };

    let router = create_router(state);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("cannot bind {}", addr))?;
    log::info!("Starting txpager server on http://{}", addr);

    let result = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    if let Some(task) = refresh_task {
        task.abort();
    }
    result.context("server error")?;
    log::info!("Server stopped gracefully");
    Ok(())
}
