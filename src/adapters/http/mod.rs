//! JSON API over [`CatalogService`].

pub mod rate_limit;
pub mod response;

use crate::core::service::CatalogService;
use crate::domain::model::Program;
use crate::domain::ports::Storage;
use crate::utils::error::{AppError, Result, ValidationError};
use axum::body::Bytes;
use axum::extract::{ConnectInfo, Path, State};
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::routing::{get, post};
use axum::{Json, Router};
use rate_limit::{client_ip, RateLimiter};
use serde_json::{json, Value};
use std::future::Future;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

pub const CONTACT_SUCCESS_MESSAGE: &str =
    "Thank you for your inquiry! We'll get back to you within 24 hours.";

pub struct AppState<S: Storage> {
    pub service: CatalogService<S>,
    pub limiter: Arc<RateLimiter>,
    pub trust_forwarded_for: bool,
}

impl<S: Storage> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            limiter: Arc::clone(&self.limiter),
            trust_forwarded_for: self.trust_forwarded_for,
        }
    }
}

pub fn router<S: Storage + 'static>(state: AppState<S>, static_dir: Option<PathBuf>) -> Router {
    let api = Router::new()
        .route("/health", get(health::<S>))
        .route("/programs", get(list_programs::<S>))
        .route("/programs/featured", get(featured_programs::<S>))
        .route("/programs/level/:level", get(programs_by_level::<S>))
        .route("/programs/:id", get(program_by_id::<S>))
        .route("/contact", post(submit_contact::<S>))
        .fallback(unknown_api_route)
        .with_state(state);

    let app = Router::new().nest("/api", api);
    let app = match static_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "Serving static files");
            // unknown paths get index.html so the client router can take over
            let index = ServeFile::new(dir.join("index.html"));
            app.fallback_service(ServeDir::new(dir).fallback(index))
        }
        None => app,
    };

    app.layer(TraceLayer::new_for_http())
}

/// Runs until `shutdown` resolves, then drains in-flight requests.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown)
    .await?;
    Ok(())
}

async fn unknown_api_route(uri: Uri) -> AppError {
    AppError::not_found("Route", uri.path())
}

async fn health<S: Storage + 'static>(State(state): State<AppState<S>>) -> Json<Value> {
    let programs = state.service.list_programs().await.len();
    Json(json!({ "status": "ok", "programs": programs }))
}

async fn list_programs<S: Storage + 'static>(
    State(state): State<AppState<S>>,
) -> Json<Vec<Program>> {
    Json(state.service.list_programs().await)
}

async fn featured_programs<S: Storage + 'static>(
    State(state): State<AppState<S>>,
) -> Json<Vec<Program>> {
    Json(state.service.featured_programs().await)
}

async fn programs_by_level<S: Storage + 'static>(
    State(state): State<AppState<S>>,
    Path(level): Path<String>,
) -> Json<Vec<Program>> {
    Json(state.service.programs_by_level(&level).await)
}

async fn program_by_id<S: Storage + 'static>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<Program>> {
    state.service.program(&id).await.map(Json)
}

async fn submit_contact<S: Storage + 'static>(
    State(state): State<AppState<S>>,
    peer: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Value>)> {
    let client = client_ip(
        &headers,
        peer.map(|ConnectInfo(addr)| addr),
        state.trust_forwarded_for,
    );
    state.limiter.check(client)?;

    let body: Value = serde_json::from_slice(&body)
        .map_err(|_| AppError::from(ValidationError::single("", "Invalid JSON body")))?;

    let submission = state.service.submit_contact(&body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": CONTACT_SUCCESS_MESSAGE,
            "submission": submission,
        })),
    ))
}
