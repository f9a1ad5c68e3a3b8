//! Sign-in and account bootstrap for candidates and employers.

pub mod domain;
pub mod gateway;
pub mod router;
pub mod service;

pub use domain::{
    CandidateRegistration, CandidateUser, EmployerRegistration, EmployerUser, LoginRequest,
    PasswordChange, Role, Session, UserData,
};
pub use gateway::{AuthError, AuthGateway, MockAuthGateway};
pub use router::auth_router;
pub use service::{AuthService, AuthServiceError};
