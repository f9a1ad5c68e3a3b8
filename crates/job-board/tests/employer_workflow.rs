//! End-to-end employer workflow: publish an offer, take an application, review it and close
//! the offer, checking the reports along the way.

use std::sync::Arc;

use chrono::NaiveDate;

use job_board::board::applications::{
    ApplicationAction, ApplicationService, ApplicationServiceError, ApplicationStatus,
    ApplyRequest, CandidateStage, InMemoryApplicationRepository,
    InMemoryTrackedApplicationRepository,
};
use job_board::board::offers::{
    InMemoryOfferRepository, LifecycleError, Modality, OfferAction, OfferDraft, OfferService,
    OfferServiceError, OfferStatus, Priority,
};
use job_board::board::state::OfferManagementScreen;
use job_board::board::ValidationError;

type Applications = ApplicationService<
    InMemoryApplicationRepository,
    InMemoryTrackedApplicationRepository,
    InMemoryOfferRepository,
>;

fn board() -> (Arc<OfferService<InMemoryOfferRepository>>, Applications) {
    let offers = Arc::new(OfferService::new(Arc::new(InMemoryOfferRepository::default())));
    let applications = ApplicationService::new(
        Arc::new(InMemoryApplicationRepository::default()),
        Arc::new(InMemoryTrackedApplicationRepository::default()),
        Arc::clone(&offers),
    );
    (offers, applications)
}

fn draft() -> OfferDraft {
    OfferDraft {
        title: "Técnico de Mantenimiento".to_string(),
        company: "Industrias ABC".to_string(),
        department: "Planta".to_string(),
        description: "Mantenimiento preventivo de líneas de producción.".to_string(),
        location: "Loja".to_string(),
        modality: Modality::OnSite,
        salary: "$900 - $1200".to_string(),
        industry: "Manufactura".to_string(),
        priority: Priority::High,
        required_competencies: vec!["Electricidad industrial".to_string()],
        required_education: vec!["Tecnología en Electromecánica".to_string()],
        required_experience: "1 año".to_string(),
        published_on: NaiveDate::from_ymd_opt(2025, 10, 20),
    }
}

fn request() -> ApplyRequest {
    ApplyRequest {
        candidate_name: "  María Fernanda Calle ".to_string(),
        email: "maria.calle@example.com".to_string(),
        phone: "0991234567".to_string(),
        education: "Tecnología en Electromecánica".to_string(),
        experience: "2 años".to_string(),
        skills: vec!["PLC".to_string()],
        cv_link: "https://example.com/cv/maria.pdf".to_string(),
        cover_letter: Some("   ".to_string()),
    }
}

#[test]
fn offer_moves_from_publication_to_closed_review() {
    let (offers, applications) = board();

    let offer = offers.create(draft()).expect("offer published");
    assert_eq!(offer.id.0, "offer-000001");
    assert_eq!(offer.status, OfferStatus::Active);
    assert_eq!(offer.applications, 0);

    offers.record_view(&offer.id).expect("view recorded");

    let receipt = applications
        .apply(&offer.id, request())
        .expect("application accepted");
    assert_eq!(receipt.received.id.0, "application-000001");
    assert_eq!(receipt.received.candidate_name, "María Fernanda Calle");
    assert_eq!(receipt.received.initials, "MF");
    assert_eq!(receipt.received.position, "Técnico de Mantenimiento");
    assert_eq!(receipt.received.status, ApplicationStatus::Pending);
    assert!(receipt.received.notes.is_none());
    assert_eq!(receipt.tracked.stage, CandidateStage::Applied);
    assert_eq!(receipt.tracked.priority, Priority::High);

    let stored = offers.get(&offer.id).expect("offer exists");
    assert_eq!(stored.applications, 1);
    assert_eq!(stored.views, 1);

    let id = receipt.received.id;
    applications
        .act(&id, ApplicationAction::StartReview)
        .expect("pending applications can be reviewed");
    let selected = applications
        .act(&id, ApplicationAction::Select)
        .expect("reviewed applications can be selected");
    assert_eq!(selected.status, ApplicationStatus::Accepted);

    let error = applications
        .act(&id, ApplicationAction::Reject)
        .expect_err("accepted is terminal");
    assert!(matches!(error, ApplicationServiceError::Transition(_)));

    let mut screen = OfferManagementScreen::default();
    screen.request(OfferAction::Archive, offer.id.clone());
    screen.confirm(&*offers).expect("archive succeeds");
    assert_eq!(screen.tab(), OfferStatus::Archived);
    assert!(screen.pending().is_none());

    let report = offers.report().expect("report builds");
    assert_eq!(report.summary.total_vacancies, 0);
    assert_eq!(report.status_counts.total, 1);
    assert_eq!(report.status_counts.get(OfferStatus::Archived), 1);

    let application_report = applications.report().expect("report builds");
    assert_eq!(application_report.received.get(ApplicationStatus::Accepted), 1);
    assert_eq!(application_report.tracked.get(CandidateStage::Applied), 1);
}

#[test]
fn archived_offers_refuse_new_applications() {
    let (offers, applications) = board();
    let offer = offers.create(draft()).expect("offer published");
    offers
        .apply_action(&offer.id, OfferAction::Archive)
        .expect("archive succeeds");

    let error = applications
        .apply(&offer.id, request())
        .expect_err("archived offer");
    assert!(matches!(
        error,
        ApplicationServiceError::Offer(OfferServiceError::NotAcceptingApplications { .. })
    ));
    assert!(applications.list(None).expect("list succeeds").is_empty());
}

#[test]
fn application_without_cv_is_rejected_before_touching_the_offer() {
    let (offers, applications) = board();
    let offer = offers.create(draft()).expect("offer published");

    let error = applications
        .apply(
            &offer.id,
            ApplyRequest {
                cv_link: " ".to_string(),
                ..request()
            },
        )
        .expect_err("cv required");
    assert!(matches!(
        error,
        ApplicationServiceError::Validation(ValidationError::MissingCv)
    ));
    assert_eq!(offers.get(&offer.id).expect("offer exists").applications, 0);
}

#[test]
fn deleted_offers_accept_no_further_actions() {
    let (offers, _) = board();
    let offer = offers.create(draft()).expect("offer published");
    offers
        .apply_action(&offer.id, OfferAction::Delete)
        .expect("delete succeeds");

    let error = offers
        .apply_action(&offer.id, OfferAction::Restore)
        .expect_err("deleted is terminal");
    assert!(matches!(
        error,
        OfferServiceError::Lifecycle(LifecycleError::Terminal)
    ));
    assert_eq!(
        offers.list(Some(OfferStatus::Deleted)).expect("list").len(),
        1
    );
}
