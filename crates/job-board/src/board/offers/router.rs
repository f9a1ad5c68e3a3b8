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

use super::domain::{OfferDraft, OfferEdit, OfferId, OfferStatus};
use super::filter::{DiscoveryQuery, FilterState};
use super::lifecycle::OfferAction;
use super::repository::OfferRepository;
use super::service::{OfferService, OfferServiceError};
use crate::board::report::OfferView;
use crate::board::repository::RepositoryError;

/// Router builder exposing offer management and discovery endpoints.
pub fn offer_router<R>(service: Arc<OfferService<R>>) -> Router
where
    R: OfferRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/offers",
            get(list_handler::<R>).post(create_handler::<R>),
        )
        .route("/api/v1/offers/discover", get(discover_handler::<R>))
        .route("/api/v1/offers/summary", get(summary_handler::<R>))
        .route(
            "/api/v1/offers/:offer_id",
            get(detail_handler::<R>).put(edit_handler::<R>),
        )
        .route(
            "/api/v1/offers/:offer_id/actions",
            post(action_handler::<R>),
        )
        .route("/api/v1/offers/:offer_id/views", post(view_handler::<R>))
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListQuery {
    #[serde(default)]
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ActionRequest {
    action: OfferAction,
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<OfferService<R>>>,
    Query(query): Query<ListQuery>,
) -> Response
where
    R: OfferRepository + 'static,
{
    let status = match query.status.as_deref().map(str::parse::<OfferStatus>) {
        None => None,
        Some(Ok(status)) => Some(status),
        Some(Err(err)) => return bad_request(err.to_string()),
    };

    match service.list(status) {
        Ok(offers) => {
            let views: Vec<OfferView> = offers.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(views)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn create_handler<R>(
    State(service): State<Arc<OfferService<R>>>,
    Json(draft): Json<OfferDraft>,
) -> Response
where
    R: OfferRepository + 'static,
{
    match service.create(draft) {
        Ok(offer) => (StatusCode::CREATED, Json(OfferView::from(offer))).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn detail_handler<R>(
    State(service): State<Arc<OfferService<R>>>,
    Path(offer_id): Path<String>,
) -> Response
where
    R: OfferRepository + 'static,
{
    match service.get(&OfferId(offer_id)) {
        Ok(offer) => (StatusCode::OK, Json(OfferView::from(offer))).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn edit_handler<R>(
    State(service): State<Arc<OfferService<R>>>,
    Path(offer_id): Path<String>,
    Json(edit): Json<OfferEdit>,
) -> Response
where
    R: OfferRepository + 'static,
{
    match service.edit(&OfferId(offer_id), edit) {
        Ok(offer) => (StatusCode::OK, Json(OfferView::from(offer))).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn action_handler<R>(
    State(service): State<Arc<OfferService<R>>>,
    Path(offer_id): Path<String>,
    Json(request): Json<ActionRequest>,
) -> Response
where
    R: OfferRepository + 'static,
{
    match service.apply_action(&OfferId(offer_id), request.action) {
        Ok(offer) => (StatusCode::OK, Json(OfferView::from(offer))).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn view_handler<R>(
    State(service): State<Arc<OfferService<R>>>,
    Path(offer_id): Path<String>,
) -> Response
where
    R: OfferRepository + 'static,
{
    match service.record_view(&OfferId(offer_id)) {
        Ok(offer) => (StatusCode::OK, Json(json!({ "views": offer.views }))).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn discover_handler<R>(
    State(service): State<Arc<OfferService<R>>>,
    Query(query): Query<DiscoveryQuery>,
) -> Response
where
    R: OfferRepository + 'static,
{
    let filters = match FilterState::try_from(query) {
        Ok(filters) => filters,
        Err(err) => return bad_request(err.to_string()),
    };

    match service.discover(&filters) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn summary_handler<R>(State(service): State<Arc<OfferService<R>>>) -> Response
where
    R: OfferRepository + 'static,
{
    match service.report() {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(err) => error_response(err),
    }
}

fn bad_request(message: String) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}

pub(crate) fn error_response(err: OfferServiceError) -> Response {
    match err {
        OfferServiceError::Validation(error) => {
            (StatusCode::UNPROCESSABLE_ENTITY, Json(error.to_json())).into_response()
        }
        OfferServiceError::Repository(RepositoryError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "offer not found" })),
        )
            .into_response(),
        OfferServiceError::Repository(RepositoryError::Conflict) => (
            StatusCode::CONFLICT,
            Json(json!({ "error": "offer already exists" })),
        )
            .into_response(),
        err @ (OfferServiceError::Lifecycle(_)
        | OfferServiceError::NotAcceptingApplications { .. }
        | OfferServiceError::NotEditable { .. }) => {
            (StatusCode::CONFLICT, Json(json!({ "error": err.to_string() }))).into_response()
        }
        other => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": other.to_string() })),
        )
            .into_response(),
    }
}
