use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use super::domain::{
    CandidateRegistration, CandidateUser, EmployerRegistration, EmployerUser, LoginRequest,
    PasswordChange, Session, UserData,
};
use super::gateway::{AuthError, AuthGateway};
use crate::board::validation::{is_blank, ValidationError};

const DEFAULT_CITY: &str = "Loja";
const MIN_PASSWORD_CHARS: usize = 8;

/// Sign-in, registration and forced password change on top of an identity gateway.
pub struct AuthService<G> {
    gateway: Arc<G>,
    timeout: Duration,
}

impl<G> AuthService<G>
where
    G: AuthGateway + 'static,
{
    pub fn new(gateway: Arc<G>, timeout: Duration) -> Self {
        Self { gateway, timeout }
    }

    /// Validates locally, then waits on the gateway for at most the configured timeout.
    pub async fn login(&self, request: &LoginRequest) -> Result<Session, AuthServiceError> {
        if request.email.is_empty() || request.password.is_empty() {
            return Err(ValidationError::MissingCredentials.into());
        }

        let user = tokio::time::timeout(self.timeout, self.gateway.authenticate(request))
            .await
            .map_err(|_| {
                warn!(role = request.role.label(), timeout = ?self.timeout, "login timed out");
                AuthServiceError::TimedOut {
                    after: self.timeout,
                }
            })??;

        let session = Session::start(user);
        info!(
            role = session.role().label(),
            needs_password_change = session.needs_password_change,
            "session started"
        );
        Ok(session)
    }

    pub fn register_candidate(
        &self,
        registration: CandidateRegistration,
    ) -> Result<Session, AuthServiceError> {
        if registration.full_name.is_empty()
            || registration.email.is_empty()
            || registration.password.is_empty()
        {
            return Err(ValidationError::IncompleteCandidateRegistration.into());
        }

        let city = registration
            .city
            .filter(|city| !is_blank(city))
            .unwrap_or_else(|| DEFAULT_CITY.to_string());
        info!(city = %city, "candidate registered");

        Ok(Session::start(UserData::Candidate(CandidateUser {
            id: "candidate-2".to_string(),
            name: registration.full_name.trim().to_string(),
            email: registration.email.trim().to_string(),
            city: Some(city),
            progress: 0.4,
        })))
    }

    pub fn register_employer(
        &self,
        registration: EmployerRegistration,
    ) -> Result<Session, AuthServiceError> {
        if registration.company.is_empty()
            || registration.contact_name.is_empty()
            || registration.email.is_empty()
            || registration.password.is_empty()
        {
            return Err(ValidationError::IncompleteEmployerRegistration.into());
        }

        info!(company = %registration.company.trim(), "employer registered");
        Ok(Session::start(UserData::Employer(EmployerUser {
            id: "employer-2".to_string(),
            company: registration.company.trim().to_string(),
            contact_name: registration.contact_name.trim().to_string(),
            email: registration.email.trim().to_string(),
            needs_password_change: false,
            is_email_verified: None,
        })))
    }

    /// Length is checked before the confirmation match.
    pub fn change_password(
        &self,
        session: Session,
        change: &PasswordChange,
    ) -> Result<Session, AuthServiceError> {
        if change.password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(ValidationError::WeakPassword.into());
        }
        if change.password != change.confirmation {
            return Err(ValidationError::PasswordMismatch.into());
        }

        info!(role = session.role().label(), "password changed");
        Ok(Session {
            needs_password_change: false,
            ..session
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Gateway(#[from] AuthError),
    #[error("login did not complete within {after:?}")]
    TimedOut { after: Duration },
}
