use std::sync::Arc;

use axum::body::Body;
use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::board::offers::domain::{
    JobOffer, Modality, OfferDraft, OfferId, OfferStatus, Priority,
};
use crate::board::offers::repository::{InMemoryOfferRepository, OfferRepository};
use crate::board::offers::service::OfferService;
use crate::board::repository::RepositoryError;

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn offer(id: &str, title: &str, company: &str, industry: &str) -> JobOffer {
    JobOffer {
        id: OfferId(id.to_string()),
        title: title.to_string(),
        company: company.to_string(),
        department: "Operaciones".to_string(),
        description: format!("{title} en {company}"),
        location: "Loja".to_string(),
        modality: Modality::OnSite,
        salary: "$900 - $1200".to_string(),
        industry: industry.to_string(),
        priority: Priority::Medium,
        required_competencies: vec!["Trabajo en equipo".to_string()],
        required_education: vec!["Tercer nivel".to_string()],
        required_experience: "1 año".to_string(),
        published_on: date(2025, 10, 1),
        status: OfferStatus::Active,
        applications: 0,
        views: 0,
    }
}

/// Four offers across three industries; the last one is archived.
pub(super) fn board() -> Vec<JobOffer> {
    let mut remote = offer("offer-a", "Desarrollador Backend", "TecnoSur", "Tecnología");
    remote.modality = Modality::Remote;
    remote.location = "Quito".to_string();

    let production = offer(
        "offer-b",
        "Ingeniero de Producción",
        "Industrias ABC",
        "Manufactura",
    );

    let mut hybrid = offer("offer-c", "Analista de Datos", "Industrias ABC", "Tecnología");
    hybrid.modality = Modality::Hybrid;

    let archived = offer("offer-d", "Cajero", "Comercial Loja", "Comercio")
        .with_status(OfferStatus::Archived);

    vec![remote, production, hybrid, archived]
}

pub(super) fn draft(title: &str) -> OfferDraft {
    OfferDraft {
        title: title.to_string(),
        company: "Industrias ABC".to_string(),
        department: "Planta".to_string(),
        description: "Supervisión de línea".to_string(),
        location: "Loja".to_string(),
        modality: Modality::OnSite,
        salary: "$1000".to_string(),
        industry: "Manufactura".to_string(),
        priority: Priority::High,
        required_competencies: vec![" Lean ".to_string(), "".to_string()],
        required_education: vec!["Ingeniería Industrial".to_string()],
        required_experience: "2 años".to_string(),
        published_on: Some(date(2025, 10, 12)),
    }
}

pub(super) fn seeded_service() -> Arc<OfferService<InMemoryOfferRepository>> {
    Arc::new(OfferService::new(Arc::new(InMemoryOfferRepository::seeded(
        board(),
    ))))
}

pub(super) struct UnavailableRepository;

impl OfferRepository for UnavailableRepository {
    fn list(&self) -> Result<Vec<JobOffer>, RepositoryError> {
        Err(unavailable())
    }

    fn fetch(&self, _id: &OfferId) -> Result<Option<JobOffer>, RepositoryError> {
        Err(unavailable())
    }

    fn create(&self, _offer: JobOffer) -> Result<JobOffer, RepositoryError> {
        Err(unavailable())
    }

    fn update<E, F>(&self, _id: &OfferId, _change: F) -> Result<JobOffer, E>
    where
        E: From<RepositoryError>,
        F: FnOnce(&JobOffer) -> Result<JobOffer, E>,
    {
        Err(unavailable().into())
    }
}

fn unavailable() -> RepositoryError {
    RepositoryError::Unavailable("offline".to_string())
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&body).expect("json body")
}

pub(super) fn json_request(method: &str, uri: &str, body: Value) -> axum::http::Request<Body> {
    axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

pub(super) fn get_request(uri: &str) -> axum::http::Request<Body> {
    axum::http::Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request builds")
}
