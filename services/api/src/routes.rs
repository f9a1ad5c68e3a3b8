use crate::infra::{AppState, Board};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use job_board::board::applications::application_router;
use job_board::board::auth::auth_router;
use job_board::board::notifications::notification_router;
use job_board::board::offers::offer_router;
use job_board::board::profiles::profile_router;
use serde_json::json;

/// All board endpoints plus the health and metrics endpoints.
pub(crate) fn with_board_routes(board: &Board) -> Router {
    offer_router(board.offers.clone())
        .merge(application_router(board.applications.clone()))
        .merge(auth_router(board.auth.clone()))
        .merge(profile_router(board.profiles.clone()))
        .merge(notification_router(board.notifications.clone()))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
