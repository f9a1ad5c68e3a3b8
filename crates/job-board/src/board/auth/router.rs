use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{
    CandidateRegistration, EmployerRegistration, LoginRequest, PasswordChange, Session,
};
use super::gateway::AuthGateway;
use super::service::{AuthService, AuthServiceError};

pub fn auth_router<G>(service: Arc<AuthService<G>>) -> Router
where
    G: AuthGateway + 'static,
{
    Router::new()
        .route("/api/v1/auth/login", post(login_handler::<G>))
        .route(
            "/api/v1/auth/register/candidate",
            post(register_candidate_handler::<G>),
        )
        .route(
            "/api/v1/auth/register/employer",
            post(register_employer_handler::<G>),
        )
        .route(
            "/api/v1/auth/change-password",
            post(change_password_handler::<G>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChangePasswordRequest {
    session: Session,
    #[serde(flatten)]
    change: PasswordChange,
}

pub(crate) async fn login_handler<G>(
    State(service): State<Arc<AuthService<G>>>,
    Json(request): Json<LoginRequest>,
) -> Response
where
    G: AuthGateway + 'static,
{
    session_response(service.login(&request).await, StatusCode::OK)
}

pub(crate) async fn register_candidate_handler<G>(
    State(service): State<Arc<AuthService<G>>>,
    Json(registration): Json<CandidateRegistration>,
) -> Response
where
    G: AuthGateway + 'static,
{
    session_response(
        service.register_candidate(registration),
        StatusCode::CREATED,
    )
}

pub(crate) async fn register_employer_handler<G>(
    State(service): State<Arc<AuthService<G>>>,
    Json(registration): Json<EmployerRegistration>,
) -> Response
where
    G: AuthGateway + 'static,
{
    session_response(service.register_employer(registration), StatusCode::CREATED)
}

pub(crate) async fn change_password_handler<G>(
    State(service): State<Arc<AuthService<G>>>,
    Json(request): Json<ChangePasswordRequest>,
) -> Response
where
    G: AuthGateway + 'static,
{
    session_response(
        service.change_password(request.session, &request.change),
        StatusCode::OK,
    )
}

fn session_response(result: Result<Session, AuthServiceError>, success: StatusCode) -> Response {
    match result {
        Ok(session) => (success, Json(session)).into_response(),
        Err(AuthServiceError::Validation(error)) => {
            (StatusCode::UNPROCESSABLE_ENTITY, Json(error.to_json())).into_response()
        }
        Err(err @ AuthServiceError::TimedOut { .. }) => (
            StatusCode::GATEWAY_TIMEOUT,
            Json(json!({ "error": err.to_string() })),
        )
            .into_response(),
        Err(AuthServiceError::Gateway(error)) => (
            StatusCode::BAD_GATEWAY,
            Json(json!({ "error": error.to_string() })),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::Request;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::board::auth::gateway::MockAuthGateway;

    fn router() -> Router {
        auth_router(Arc::new(AuthService::new(
            Arc::new(MockAuthGateway::new(Duration::ZERO)),
            Duration::from_secs(5),
        )))
    }

    fn post(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request builds")
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn login_route_returns_session() {
        let response = router()
            .oneshot(post(
                "/api/v1/auth/login",
                json!({ "role": "employer", "email": "rrhh@abc.ec", "password": "temporal" }),
            ))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["user"]["role"], "employer");
        assert_eq!(body["user"]["company"], "Industrias ABC");
        assert_eq!(body["needs_password_change"], true);
    }

    #[tokio::test]
    async fn login_route_reports_missing_credentials() {
        let response = router()
            .oneshot(post(
                "/api/v1/auth/login",
                json!({ "role": "candidate", "email": "", "password": "" }),
            ))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Campos incompletos");
        assert_eq!(body["message"], "Ingresa tu correo y contraseña.");
    }

    #[tokio::test]
    async fn change_password_route_clears_flag() {
        let login = router()
            .oneshot(post(
                "/api/v1/auth/login",
                json!({ "role": "employer", "email": "rrhh@abc.ec", "password": "temporal" }),
            ))
            .await
            .expect("response");
        let session = body_json(login).await;

        let response = router()
            .oneshot(post(
                "/api/v1/auth/change-password",
                json!({
                    "session": session,
                    "password": "nueva-clave",
                    "confirmation": "nueva-clave"
                }),
            ))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["needs_password_change"], false);
    }

    #[tokio::test]
    async fn register_candidate_route_creates_session() {
        let response = router()
            .oneshot(post(
                "/api/v1/auth/register/candidate",
                json!({ "full_name": "Jorge Ortiz", "email": "jorge@correo.ec", "password": "x" }),
            ))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["user"]["id"], "candidate-2");
        assert_eq!(body["user"]["city"], "Loja");
    }
}
