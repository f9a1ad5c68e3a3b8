use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Local;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::domain::{
    initials, ApplicationAction, ApplicationId, ApplicationStatus, ApplicationTransitionError,
    ApplyRequest, CandidateStage, ReceivedApplication, TrackedApplication,
};
use super::repository::{ApplicationRepository, TrackedApplicationRepository};
use crate::board::offers::domain::{OfferId, OfferStatus};
use crate::board::offers::repository::OfferRepository;
use crate::board::offers::service::{OfferService, OfferServiceError};
use crate::board::report::{ApplicationBoardReport, StatusCounts};
use crate::board::repository::RepositoryError;
use crate::board::validation::{is_blank, ValidationError};

const APPLY_CHANNEL: &str = "Bolsa de empleo";

/// Employer review of received applications plus the candidate tracker, over shared stores.
pub struct ApplicationService<A, T, O> {
    received: Arc<A>,
    tracked: Arc<T>,
    offers: Arc<OfferService<O>>,
    sequence: AtomicU64,
}

/// Both records created when a candidate applies to an offer.
#[derive(Debug, Clone, Serialize)]
pub struct ApplyReceipt {
    pub received: ReceivedApplication,
    pub tracked: TrackedApplication,
}

impl<A, T, O> ApplicationService<A, T, O>
where
    A: ApplicationRepository + 'static,
    T: TrackedApplicationRepository + 'static,
    O: OfferRepository + 'static,
{
    pub fn new(received: Arc<A>, tracked: Arc<T>, offers: Arc<OfferService<O>>) -> Self {
        Self {
            received,
            tracked,
            offers,
            sequence: AtomicU64::new(1),
        }
    }

    fn next_application_id(&self) -> ApplicationId {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed);
        ApplicationId(format!("application-{id:06}"))
    }

    pub fn list(
        &self,
        status: Option<ApplicationStatus>,
    ) -> Result<Vec<ReceivedApplication>, ApplicationServiceError> {
        let records = self.received.list()?;
        debug!(total = records.len(), ?status, "listing received applications");
        Ok(match status {
            Some(status) => records
                .into_iter()
                .filter(|record| record.status == status)
                .collect(),
            None => records,
        })
    }

    pub fn get(&self, id: &ApplicationId) -> Result<ReceivedApplication, ApplicationServiceError> {
        let record = self.received.fetch(id)?.ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn tracked(&self) -> Result<Vec<TrackedApplication>, ApplicationServiceError> {
        Ok(self.tracked.list()?)
    }

    /// Applies an employer decision. Terminal applications reject every action.
    pub fn act(
        &self,
        id: &ApplicationId,
        action: ApplicationAction,
    ) -> Result<ReceivedApplication, ApplicationServiceError> {
        let updated = self
            .received
            .update(
                id,
                |current| -> Result<ReceivedApplication, ApplicationServiceError> {
                    let next = current.status.apply(action)?;
                    Ok(current.with_status(next))
                },
            )
            .inspect_err(|err| {
                if let ApplicationServiceError::Transition(reason) = err {
                    warn!(application_id = %id, action = action.label(), %reason, "application action rejected");
                }
            })?;

        info!(
            application_id = %id,
            action = action.label(),
            status = updated.status.key(),
            "application status changed"
        );
        Ok(updated)
    }

    /// Candidate applies to an active offer. Both records are written before the offer
    /// counts the application; any failure along the way removes what was already written.
    pub fn apply(
        &self,
        offer_id: &OfferId,
        request: ApplyRequest,
    ) -> Result<ApplyReceipt, ApplicationServiceError> {
        if is_blank(&request.cv_link) {
            return Err(ValidationError::MissingCv.into());
        }
        if is_blank(&request.candidate_name) || is_blank(&request.email) {
            return Err(ValidationError::IncompleteApplication.into());
        }

        let offer = self.offers.get(offer_id)?;
        if offer.status != OfferStatus::Active {
            return Err(OfferServiceError::NotAcceptingApplications {
                offer_id: offer.id,
                status: offer.status,
            }
            .into());
        }

        let id = self.next_application_id();
        let today = Local::now().date_naive();
        let candidate_name = request.candidate_name.trim().to_string();

        let received = self.received.create(ReceivedApplication {
            id: id.clone(),
            offer_id: Some(offer.id.clone()),
            initials: initials(&candidate_name),
            candidate_name,
            position: offer.title.clone(),
            education: request.education,
            experience: request.experience,
            email: request.email.trim().to_string(),
            phone: request.phone,
            skills: request.skills,
            received_on: today,
            status: ApplicationStatus::Pending,
            match_score: None,
            channel: APPLY_CHANNEL.to_string(),
            notes: request.cover_letter.filter(|letter| !is_blank(letter)),
            cv_link: Some(request.cv_link.trim().to_string()),
        })?;

        let tracked = self
            .tracked
            .create(TrackedApplication {
                id: id.clone(),
                title: offer.title.clone(),
                company: offer.company.clone(),
                stage: CandidateStage::Applied,
                step: "Postulación enviada".to_string(),
                submitted_on: today,
                priority: offer.priority,
                notes: None,
            })
            .inspect_err(|_| self.roll_back(&id, false))?;

        let counted = self
            .offers
            .record_application(offer_id)
            .inspect_err(|_| self.roll_back(&id, true))?;

        info!(
            application_id = %received.id,
            offer_id = %counted.id,
            applications = counted.applications,
            "application submitted"
        );
        Ok(ApplyReceipt { received, tracked })
    }

    fn roll_back(&self, id: &ApplicationId, tracked_written: bool) {
        if let Err(err) = self.received.remove(id) {
            warn!(application_id = %id, %err, "received application left behind");
        }
        if tracked_written {
            if let Err(err) = self.tracked.remove(id) {
                warn!(application_id = %id, %err, "tracked application left behind");
            }
        }
    }

    pub fn report(&self) -> Result<ApplicationBoardReport, ApplicationServiceError> {
        let received = self.received.list()?;
        let tracked = self.tracked.list()?;
        Ok(ApplicationBoardReport {
            received: StatusCounts::tally(received.iter().map(|record| record.status)),
            tracked: StatusCounts::tally(tracked.iter().map(|record| record.stage)),
        })
    }
}

/// Error raised by the application service.
#[derive(Debug, thiserror::Error)]
pub enum ApplicationServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Transition(#[from] ApplicationTransitionError),
    #[error(transparent)]
    Offer(#[from] OfferServiceError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
