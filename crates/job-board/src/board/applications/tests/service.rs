use std::sync::Arc;
use std::thread;

use super::common::*;

use crate::board::applications::domain::{
    ApplicationAction, ApplicationId, ApplicationStatus, CandidateStage, TrackedApplication,
};
use crate::board::applications::repository::{
    ApplicationRepository, InMemoryApplicationRepository, InMemoryTrackedApplicationRepository,
    TrackedApplicationRepository,
};
use crate::board::applications::service::{ApplicationService, ApplicationServiceError};
use crate::board::offers::domain::{OfferId, OfferStatus, Priority};
use crate::board::offers::lifecycle::OfferAction;
use crate::board::offers::repository::InMemoryOfferRepository;
use crate::board::offers::service::{OfferService, OfferServiceError};
use crate::board::repository::RepositoryError;
use crate::board::validation::ValidationError;

#[test]
fn list_filters_received_applications_by_status() {
    let Fixture { service, .. } = fixture();

    assert_eq!(service.list(None).expect("listed").len(), 3);
    let pending = service
        .list(Some(ApplicationStatus::Pending))
        .expect("listed");
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].initials, "LT");
}

#[test]
fn employer_review_flow_updates_status() {
    let Fixture { service, .. } = fixture();
    let id = ApplicationId("app-1".to_string());

    let review = service
        .act(&id, ApplicationAction::StartReview)
        .expect("review");
    assert_eq!(review.status, ApplicationStatus::Review);

    let accepted = service.act(&id, ApplicationAction::Select).expect("select");
    assert_eq!(accepted.status, ApplicationStatus::Accepted);
    assert_eq!(service.get(&id).expect("stored"), accepted);
}

#[test]
fn terminal_applications_reject_actions_without_mutation() {
    let Fixture { service, .. } = fixture();
    let id = ApplicationId("app-3".to_string());

    let err = service
        .act(&id, ApplicationAction::Reject)
        .expect_err("accepted is terminal");

    assert!(matches!(err, ApplicationServiceError::Transition(_)));
    assert_eq!(
        service.get(&id).expect("stored").status,
        ApplicationStatus::Accepted
    );
}

#[test]
fn unknown_application_reports_not_found() {
    let Fixture { service, .. } = fixture();

    let err = service
        .act(&ApplicationId("nope".to_string()), ApplicationAction::Select)
        .expect_err("missing");
    assert!(matches!(
        err,
        ApplicationServiceError::Repository(RepositoryError::NotFound)
    ));
}

#[test]
fn applying_creates_both_records_and_counts_the_application() {
    let Fixture { service, offers } = fixture();
    let offer_id = OfferId("offer-open".to_string());

    let receipt = service
        .apply(&offer_id, apply_request("https://cv.example/maria"))
        .expect("applied");

    assert_eq!(receipt.received.status, ApplicationStatus::Pending);
    assert_eq!(receipt.received.candidate_name, "María Fernanda Calle");
    assert_eq!(receipt.received.initials, "MF");
    assert_eq!(receipt.received.offer_id, Some(offer_id.clone()));
    assert_eq!(receipt.received.position, "Ingeniero de Producción");
    assert!(receipt.received.notes.is_none());
    assert_eq!(receipt.tracked.stage, CandidateStage::Applied);
    assert_eq!(receipt.tracked.company, "Industrias ABC");
    assert_eq!(receipt.tracked.priority, Priority::High);
    assert_eq!(receipt.received.id, receipt.tracked.id);

    assert_eq!(offers.get(&offer_id).expect("offer").applications, 5);
    assert_eq!(service.list(None).expect("listed").len(), 4);
    assert_eq!(service.tracked().expect("tracked").len(), 2);
}

#[test]
fn applying_without_cv_is_rejected_before_touching_the_offer() {
    let Fixture { service, offers } = fixture();
    let offer_id = OfferId("offer-open".to_string());

    let err = service
        .apply(&offer_id, apply_request("  "))
        .expect_err("missing cv");

    assert!(matches!(
        err,
        ApplicationServiceError::Validation(ValidationError::MissingCv)
    ));
    assert_eq!(offers.get(&offer_id).expect("offer").applications, 4);
}

#[test]
fn applying_to_archived_offer_is_refused() {
    let Fixture { service, .. } = fixture();

    let err = service
        .apply(
            &OfferId("offer-closed".to_string()),
            apply_request("https://cv.example/maria"),
        )
        .expect_err("archived");

    assert!(matches!(
        err,
        ApplicationServiceError::Offer(OfferServiceError::NotAcceptingApplications {
            status: OfferStatus::Archived,
            ..
        })
    ));
    assert_eq!(service.list(None).expect("listed").len(), 3);
}

#[test]
fn report_counts_every_status_and_stage() {
    let Fixture { service, .. } = fixture();

    let report = service.report().expect("report");
    assert_eq!(report.received.total, 3);
    assert_eq!(report.received.get(ApplicationStatus::Rejected), 0);
    assert_eq!(report.received.by_status.len(), 4);
    assert_eq!(report.tracked.total, 1);
    assert_eq!(report.tracked.get(CandidateStage::Interview), 1);
    assert_eq!(report.tracked.by_status.len(), 5);
}

#[test]
fn repository_outage_propagates() {
    let Fixture { offers, .. } = fixture();
    let service = ApplicationService::new(
        Arc::new(UnavailableRepository),
        Arc::new(InMemoryTrackedApplicationRepository::default()),
        offers,
    );

    let err = service.report().expect_err("offline");
    assert!(matches!(
        err,
        ApplicationServiceError::Repository(RepositoryError::Unavailable(_))
    ));
}

#[test]
fn failed_received_write_does_not_count_the_application() {
    let offers = offer_board();
    let offer_id = OfferId("offer-open".to_string());
    let service = ApplicationService::new(
        Arc::new(UnavailableRepository),
        Arc::new(InMemoryTrackedApplicationRepository::default()),
        offers.clone(),
    );

    let err = service
        .apply(&offer_id, apply_request("https://cv.example/maria"))
        .expect_err("offline");

    assert!(matches!(
        err,
        ApplicationServiceError::Repository(RepositoryError::Unavailable(_))
    ));
    assert_eq!(offers.get(&offer_id).expect("offer").applications, 4);
}

#[test]
fn failed_tracker_write_removes_the_received_record() {
    let offers = offer_board();
    let offer_id = OfferId("offer-open".to_string());
    let received = InMemoryApplicationRepository::default();
    let service = ApplicationService::new(
        Arc::new(received.clone()),
        Arc::new(UnavailableTracker),
        offers.clone(),
    );

    service
        .apply(&offer_id, apply_request("https://cv.example/maria"))
        .expect_err("tracker offline");

    assert!(received.list().expect("listed").is_empty());
    assert_eq!(offers.get(&offer_id).expect("offer").applications, 4);
}

/// Tracker that archives the offer while the application is being written, so the offer
/// stops accepting applications before it counts this one.
struct ArchivingTracker {
    offers: Arc<OfferService<InMemoryOfferRepository>>,
    inner: InMemoryTrackedApplicationRepository,
}

impl TrackedApplicationRepository for ArchivingTracker {
    fn list(&self) -> Result<Vec<TrackedApplication>, RepositoryError> {
        self.inner.list()
    }

    fn create(
        &self,
        application: TrackedApplication,
    ) -> Result<TrackedApplication, RepositoryError> {
        self.offers
            .apply_action(&OfferId("offer-open".to_string()), OfferAction::Archive)
            .expect("archived");
        self.inner.create(application)
    }

    fn remove(&self, id: &ApplicationId) -> Result<(), RepositoryError> {
        self.inner.remove(id)
    }
}

#[test]
fn offer_closing_mid_application_rolls_back_both_records() {
    let offers = offer_board();
    let offer_id = OfferId("offer-open".to_string());
    let received = InMemoryApplicationRepository::default();
    let tracked = InMemoryTrackedApplicationRepository::default();
    let service = ApplicationService::new(
        Arc::new(received.clone()),
        Arc::new(ArchivingTracker {
            offers: offers.clone(),
            inner: tracked.clone(),
        }),
        offers.clone(),
    );

    let err = service
        .apply(&offer_id, apply_request("https://cv.example/maria"))
        .expect_err("offer closed");

    assert!(matches!(
        err,
        ApplicationServiceError::Offer(OfferServiceError::NotAcceptingApplications { .. })
    ));
    assert!(received.list().expect("listed").is_empty());
    assert!(tracked.list().expect("listed").is_empty());
    assert_eq!(offers.get(&offer_id).expect("offer").applications, 4);
}

#[test]
fn concurrent_decisions_settle_on_exactly_one() {
    for _ in 0..50 {
        let Fixture { service, .. } = fixture();
        let id = ApplicationId("app-1".to_string());

        let (selected, rejected) = thread::scope(|scope| {
            let select = scope.spawn(|| service.act(&id, ApplicationAction::Select));
            let reject = scope.spawn(|| service.act(&id, ApplicationAction::Reject));
            (
                select.join().expect("select thread"),
                reject.join().expect("reject thread"),
            )
        });

        assert_ne!(selected.is_ok(), rejected.is_ok());
        let stored = service.get(&id).expect("stored").status;
        let expected = if selected.is_ok() {
            ApplicationStatus::Accepted
        } else {
            ApplicationStatus::Rejected
        };
        assert_eq!(stored, expected);
    }
}
