use std::sync::Arc;

use axum::body::Body;
use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::board::applications::domain::{
    initials, ApplicationId, ApplicationStatus, ApplyRequest, CandidateStage, ReceivedApplication,
    TrackedApplication,
};
use crate::board::applications::repository::{
    ApplicationRepository, InMemoryApplicationRepository, InMemoryTrackedApplicationRepository,
    TrackedApplicationRepository,
};
use crate::board::applications::service::ApplicationService;
use crate::board::offers::domain::{JobOffer, Modality, OfferId, OfferStatus, Priority};
use crate::board::offers::repository::InMemoryOfferRepository;
use crate::board::offers::service::OfferService;
use crate::board::repository::RepositoryError;

pub(super) type MemoryService = ApplicationService<
    InMemoryApplicationRepository,
    InMemoryTrackedApplicationRepository,
    InMemoryOfferRepository,
>;

pub(super) fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, day).expect("valid date")
}

fn offer(id: &str, status: OfferStatus) -> JobOffer {
    JobOffer {
        id: OfferId(id.to_string()),
        title: "Ingeniero de Producción".to_string(),
        company: "Industrias ABC".to_string(),
        department: "Planta".to_string(),
        description: "Coordinación de líneas de producción".to_string(),
        location: "Loja".to_string(),
        modality: Modality::OnSite,
        salary: "$1200 - $1800".to_string(),
        industry: "Manufactura".to_string(),
        priority: Priority::High,
        required_competencies: vec!["Lean Manufacturing".to_string()],
        required_education: vec!["Ingeniería Industrial".to_string()],
        required_experience: "3 años".to_string(),
        published_on: date(1),
        status,
        applications: 4,
        views: 20,
    }
}

pub(super) fn received(id: &str, name: &str, status: ApplicationStatus) -> ReceivedApplication {
    ReceivedApplication {
        id: ApplicationId(id.to_string()),
        offer_id: Some(OfferId("offer-open".to_string())),
        candidate_name: name.to_string(),
        initials: initials(name),
        position: "Ingeniero de Producción".to_string(),
        education: "Ingeniería Industrial".to_string(),
        experience: "3 años".to_string(),
        email: "candidato@correo.ec".to_string(),
        phone: "0999999999".to_string(),
        skills: vec!["Lean".to_string()],
        received_on: date(5),
        status,
        match_score: Some(80),
        channel: "Bolsa de empleo".to_string(),
        notes: None,
        cv_link: None,
    }
}

fn tracked(id: &str, stage: CandidateStage) -> TrackedApplication {
    TrackedApplication {
        id: ApplicationId(id.to_string()),
        title: "Analista de Datos".to_string(),
        company: "TecnoSur".to_string(),
        stage,
        step: "Entrevista técnica".to_string(),
        submitted_on: date(3),
        priority: Priority::Medium,
        notes: None,
    }
}

pub(super) fn apply_request(cv_link: &str) -> ApplyRequest {
    ApplyRequest {
        candidate_name: " María Fernanda Calle ".to_string(),
        email: "maria.calle@correo.ec".to_string(),
        phone: "0991234567".to_string(),
        education: "Ingeniería Industrial".to_string(),
        experience: "2 años".to_string(),
        skills: vec!["Lean".to_string()],
        cv_link: cv_link.to_string(),
        cover_letter: Some("   ".to_string()),
    }
}

pub(super) struct Fixture {
    pub service: Arc<MemoryService>,
    pub offers: Arc<OfferService<InMemoryOfferRepository>>,
}

pub(super) fn offer_board() -> Arc<OfferService<InMemoryOfferRepository>> {
    Arc::new(OfferService::new(Arc::new(InMemoryOfferRepository::seeded(
        vec![
            offer("offer-open", OfferStatus::Active),
            offer("offer-closed", OfferStatus::Archived),
        ],
    ))))
}

pub(super) fn fixture() -> Fixture {
    let offers = offer_board();
    let received_store = InMemoryApplicationRepository::seeded(vec![
        received("app-1", "Luis Torres", ApplicationStatus::Pending),
        received("app-2", "Ana Jaramillo", ApplicationStatus::Review),
        received("app-3", "Carlos Ruiz", ApplicationStatus::Accepted),
    ]);
    let tracked_store = InMemoryTrackedApplicationRepository::seeded(vec![tracked(
        "track-1",
        CandidateStage::Interview,
    )]);

    let service = Arc::new(ApplicationService::new(
        Arc::new(received_store),
        Arc::new(tracked_store),
        offers.clone(),
    ));
    Fixture { service, offers }
}

pub(super) struct UnavailableRepository;

impl ApplicationRepository for UnavailableRepository {
    fn list(&self) -> Result<Vec<ReceivedApplication>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn fetch(&self, _id: &ApplicationId) -> Result<Option<ReceivedApplication>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn create(
        &self,
        _application: ReceivedApplication,
    ) -> Result<ReceivedApplication, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn update<E, F>(&self, _id: &ApplicationId, _change: F) -> Result<ReceivedApplication, E>
    where
        E: From<RepositoryError>,
        F: FnOnce(&ReceivedApplication) -> Result<ReceivedApplication, E>,
    {
        Err(RepositoryError::Unavailable("offline".to_string()).into())
    }

    fn remove(&self, _id: &ApplicationId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }
}

/// Candidate tracker whose writes always fail.
pub(super) struct UnavailableTracker;

impl TrackedApplicationRepository for UnavailableTracker {
    fn list(&self) -> Result<Vec<TrackedApplication>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn create(
        &self,
        _application: TrackedApplication,
    ) -> Result<TrackedApplication, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn remove(&self, _id: &ApplicationId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&body).expect("json body")
}

pub(super) fn post_json(uri: &str, body: Value) -> axum::http::Request<Body> {
    axum::http::Request::builder()
        .method("POST")
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
