use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{ApplicationAction, ApplicationId, ApplicationStatus, ApplyRequest};
use super::repository::{ApplicationRepository, TrackedApplicationRepository};
use super::service::{ApplicationService, ApplicationServiceError};
use crate::board::offers::domain::OfferId;
use crate::board::offers::repository::OfferRepository;
use crate::board::offers::router::error_response as offer_error_response;
use crate::board::report::{ReceivedApplicationView, TrackedApplicationView};
use crate::board::repository::RepositoryError;

type SharedService<A, T, O> = Arc<ApplicationService<A, T, O>>;

/// Router builder for employer review and candidate application endpoints.
pub fn application_router<A, T, O>(service: SharedService<A, T, O>) -> Router
where
    A: ApplicationRepository + 'static,
    T: TrackedApplicationRepository + 'static,
    O: OfferRepository + 'static,
{
    Router::new()
        .route("/api/v1/applications", get(list_handler::<A, T, O>))
        .route(
            "/api/v1/applications/summary",
            get(summary_handler::<A, T, O>),
        )
        .route(
            "/api/v1/applications/:application_id/actions",
            post(action_handler::<A, T, O>),
        )
        .route(
            "/api/v1/offers/:offer_id/apply",
            post(apply_handler::<A, T, O>),
        )
        .route(
            "/api/v1/candidate/applications",
            get(tracked_handler::<A, T, O>),
        )
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListQuery {
    #[serde(default)]
    status: Option<ApplicationStatus>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ActionRequest {
    action: ApplicationAction,
}

pub(crate) async fn list_handler<A, T, O>(
    State(service): State<SharedService<A, T, O>>,
    Query(query): Query<ListQuery>,
) -> Response
where
    A: ApplicationRepository + 'static,
    T: TrackedApplicationRepository + 'static,
    O: OfferRepository + 'static,
{
    match service.list(query.status) {
        Ok(records) => {
            let views: Vec<ReceivedApplicationView> =
                records.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(views)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn summary_handler<A, T, O>(
    State(service): State<SharedService<A, T, O>>,
) -> Response
where
    A: ApplicationRepository + 'static,
    T: TrackedApplicationRepository + 'static,
    O: OfferRepository + 'static,
{
    match service.report() {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn action_handler<A, T, O>(
    State(service): State<SharedService<A, T, O>>,
    Path(application_id): Path<String>,
    Json(request): Json<ActionRequest>,
) -> Response
where
    A: ApplicationRepository + 'static,
    T: TrackedApplicationRepository + 'static,
    O: OfferRepository + 'static,
{
    match service.act(&ApplicationId(application_id), request.action) {
        Ok(record) => {
            (StatusCode::OK, Json(ReceivedApplicationView::from(record))).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn apply_handler<A, T, O>(
    State(service): State<SharedService<A, T, O>>,
    Path(offer_id): Path<String>,
    Json(request): Json<ApplyRequest>,
) -> Response
where
    A: ApplicationRepository + 'static,
    T: TrackedApplicationRepository + 'static,
    O: OfferRepository + 'static,
{
    match service.apply(&OfferId(offer_id), request) {
        Ok(receipt) => (StatusCode::CREATED, Json(receipt)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn tracked_handler<A, T, O>(
    State(service): State<SharedService<A, T, O>>,
) -> Response
where
    A: ApplicationRepository + 'static,
    T: TrackedApplicationRepository + 'static,
    O: OfferRepository + 'static,
{
    match service.tracked() {
        Ok(records) => {
            let views: Vec<TrackedApplicationView> =
                records.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(views)).into_response()
        }
        Err(err) => error_response(err),
    }
}

fn error_response(err: ApplicationServiceError) -> Response {
    match err {
        ApplicationServiceError::Validation(error) => {
            (StatusCode::UNPROCESSABLE_ENTITY, Json(error.to_json())).into_response()
        }
        ApplicationServiceError::Offer(error) => offer_error_response(error),
        ApplicationServiceError::Transition(error) => (
            StatusCode::CONFLICT,
            Json(json!({ "error": error.to_string() })),
        )
            .into_response(),
        ApplicationServiceError::Repository(RepositoryError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "application not found" })),
        )
            .into_response(),
        ApplicationServiceError::Repository(RepositoryError::Conflict) => (
            StatusCode::CONFLICT,
            Json(json!({ "error": "application already exists" })),
        )
            .into_response(),
        other => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": other.to_string() })),
        )
            .into_response(),
    }
}
