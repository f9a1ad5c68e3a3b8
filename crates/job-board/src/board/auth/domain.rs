use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Candidate,
    Employer,
}

impl Role {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Candidate => "Candidato",
            Self::Employer => "Empleador",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub role: Role,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRegistration {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub city: Option<String>,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerRegistration {
    pub company: String,
    pub contact_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateUser {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Profile completion between 0 and 1.
    pub progress: f32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerUser {
    pub id: String,
    pub company: String,
    pub contact_name: String,
    pub email: String,
    #[serde(default)]
    pub needs_password_change: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_email_verified: Option<bool>,
}

/// Account data returned by the identity provider, tagged by role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum UserData {
    Candidate(CandidateUser),
    Employer(EmployerUser),
}

impl UserData {
    pub const fn role(&self) -> Role {
        match self {
            Self::Candidate(_) => Role::Candidate,
            Self::Employer(_) => Role::Employer,
        }
    }
}

/// Signed-in state. Only employers can be forced through a password change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: UserData,
    pub needs_password_change: bool,
    pub is_email_verified: bool,
}

impl Session {
    pub fn start(user: UserData) -> Self {
        let (needs_password_change, is_email_verified) = match &user {
            UserData::Candidate(_) => (false, true),
            UserData::Employer(employer) => (
                employer.needs_password_change,
                employer.is_email_verified.unwrap_or(true),
            ),
        };

        Self {
            user,
            needs_password_change,
            is_email_verified,
        }
    }

    pub const fn role(&self) -> Role {
        self.user.role()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordChange {
    pub password: String,
    pub confirmation: String,
}
