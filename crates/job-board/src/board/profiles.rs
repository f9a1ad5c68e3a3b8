//! Candidate and employer profile editors.

use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::board::repository::{lock, RepositoryError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateProfileForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub address: String,
    pub professional_summary: String,
    #[serde(default)]
    pub technical_skills: Vec<String>,
    #[serde(default)]
    pub soft_skills: Vec<String>,
    #[serde(default)]
    pub competencies: Vec<String>,
}

/// Editable list sections of the candidate profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListField {
    TechnicalSkills,
    SoftSkills,
    Competencies,
}

impl CandidateProfileForm {
    /// Share of the nine tracked sections that are filled, between 0 and 1.
    pub fn completion(&self) -> f32 {
        let sections = [
            !self.full_name.is_empty(),
            !self.email.is_empty(),
            !self.phone.is_empty(),
            !self.city.is_empty(),
            !self.address.is_empty(),
            !self.professional_summary.is_empty(),
            !self.technical_skills.is_empty(),
            !self.soft_skills.is_empty(),
            !self.competencies.is_empty(),
        ];
        let filled = sections.iter().filter(|filled| **filled).count();
        filled as f32 / sections.len() as f32
    }

    pub fn items(&self, field: ListField) -> &[String] {
        match field {
            ListField::TechnicalSkills => &self.technical_skills,
            ListField::SoftSkills => &self.soft_skills,
            ListField::Competencies => &self.competencies,
        }
    }

    /// Appends a trimmed entry; blank input leaves the form unchanged.
    pub fn with_item(&self, field: ListField, value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() {
            return self.clone();
        }
        let mut items = self.items(field).to_vec();
        items.push(value.to_string());
        self.with_items(field, items)
    }

    /// Drops the entry at `index`; out-of-range indexes are ignored.
    pub fn without_item(&self, field: ListField, index: usize) -> Self {
        let items = self
            .items(field)
            .iter()
            .enumerate()
            .filter(|(position, _)| *position != index)
            .map(|(_, item)| item.clone())
            .collect();
        self.with_items(field, items)
    }

    fn with_items(&self, field: ListField, items: Vec<String>) -> Self {
        let mut next = self.clone();
        match field {
            ListField::TechnicalSkills => next.technical_skills = items,
            ListField::SoftSkills => next.soft_skills = items,
            ListField::Competencies => next.competencies = items,
        }
        next
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerProfileForm {
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub industry: String,
    pub number_of_employees: String,
    pub address: String,
    pub website: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CandidateProfileView {
    #[serde(flatten)]
    pub profile: CandidateProfileForm,
    pub completion: f32,
}

impl From<CandidateProfileForm> for CandidateProfileView {
    fn from(profile: CandidateProfileForm) -> Self {
        Self {
            completion: profile.completion(),
            profile,
        }
    }
}

/// Holds the signed-in user's profile forms; saving replaces a form wholesale.
#[derive(Debug, Default)]
pub struct ProfileService {
    candidate: Mutex<CandidateProfileForm>,
    employer: Mutex<EmployerProfileForm>,
}

impl ProfileService {
    pub fn new(candidate: CandidateProfileForm, employer: EmployerProfileForm) -> Self {
        Self {
            candidate: Mutex::new(candidate),
            employer: Mutex::new(employer),
        }
    }

    pub fn candidate(&self) -> Result<CandidateProfileForm, RepositoryError> {
        Ok(lock(&self.candidate)?.clone())
    }

    pub fn save_candidate(
        &self,
        form: CandidateProfileForm,
    ) -> Result<CandidateProfileForm, RepositoryError> {
        *lock(&self.candidate)? = form.clone();
        info!(completion = form.completion(), "candidate profile saved");
        Ok(form)
    }

    pub fn employer(&self) -> Result<EmployerProfileForm, RepositoryError> {
        Ok(lock(&self.employer)?.clone())
    }

    pub fn save_employer(
        &self,
        form: EmployerProfileForm,
    ) -> Result<EmployerProfileForm, RepositoryError> {
        *lock(&self.employer)? = form.clone();
        info!(company = %form.company_name, "employer profile saved");
        Ok(form)
    }
}

pub fn profile_router(service: Arc<ProfileService>) -> Router {
    Router::new()
        .route(
            "/api/v1/profiles/candidate",
            get(candidate_handler).put(save_candidate_handler),
        )
        .route(
            "/api/v1/profiles/employer",
            get(employer_handler).put(save_employer_handler),
        )
        .with_state(service)
}

async fn candidate_handler(State(service): State<Arc<ProfileService>>) -> Response {
    match service.candidate() {
        Ok(form) => (StatusCode::OK, Json(CandidateProfileView::from(form))).into_response(),
        Err(err) => unavailable(err),
    }
}

async fn save_candidate_handler(
    State(service): State<Arc<ProfileService>>,
    Json(form): Json<CandidateProfileForm>,
) -> Response {
    match service.save_candidate(form) {
        Ok(form) => (StatusCode::OK, Json(CandidateProfileView::from(form))).into_response(),
        Err(err) => unavailable(err),
    }
}

async fn employer_handler(State(service): State<Arc<ProfileService>>) -> Response {
    match service.employer() {
        Ok(form) => (StatusCode::OK, Json(form)).into_response(),
        Err(err) => unavailable(err),
    }
}

async fn save_employer_handler(
    State(service): State<Arc<ProfileService>>,
    Json(form): Json<EmployerProfileForm>,
) -> Response {
    match service.save_employer(form) {
        Ok(form) => (StatusCode::OK, Json(form)).into_response(),
        Err(err) => unavailable(err),
    }
}

fn unavailable(err: RepositoryError) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": err.to_string() })),
    )
        .into_response()
}
