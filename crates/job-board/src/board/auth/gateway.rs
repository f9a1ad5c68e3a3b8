use std::future::Future;
use std::time::Duration;

use tracing::debug;

use super::domain::{CandidateUser, EmployerUser, LoginRequest, Role, UserData};

/// Failure reported by an identity provider.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("credentials rejected")]
    Rejected,
    #[error("identity provider unavailable: {0}")]
    Unavailable(String),
}

/// Identity provider seam. Implementations resolve asynchronously; dropping the future
/// abandons the attempt.
pub trait AuthGateway: Send + Sync {
    fn authenticate(
        &self,
        request: &LoginRequest,
    ) -> impl Future<Output = Result<UserData, AuthError>> + Send;
}

/// Stand-in provider that answers fixed demo accounts after a delay.
#[derive(Debug, Clone)]
pub struct MockAuthGateway {
    latency: Duration,
}

impl MockAuthGateway {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for MockAuthGateway {
    fn default() -> Self {
        Self::new(Duration::from_millis(700))
    }
}

impl AuthGateway for MockAuthGateway {
    fn authenticate(
        &self,
        request: &LoginRequest,
    ) -> impl Future<Output = Result<UserData, AuthError>> + Send {
        let latency = self.latency;
        let role = request.role;
        let email = request.email.trim().to_string();

        async move {
            debug!(?latency, role = role.label(), "mock gateway authenticating");
            tokio::time::sleep(latency).await;
            Ok(match role {
                Role::Candidate => UserData::Candidate(CandidateUser {
                    id: "candidate-1".to_string(),
                    name: "María Fernanda Calle".to_string(),
                    email,
                    city: None,
                    progress: 0.82,
                }),
                Role::Employer => UserData::Employer(EmployerUser {
                    id: "employer-1".to_string(),
                    company: "Industrias ABC".to_string(),
                    contact_name: "Patricia Ludeña".to_string(),
                    email,
                    needs_password_change: true,
                    is_email_verified: Some(false),
                }),
            })
        }
    }
}
