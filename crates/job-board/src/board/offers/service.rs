use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Local;
use tracing::{debug, info, warn};

use super::domain::{JobOffer, OfferDraft, OfferEdit, OfferId, OfferStatus};
use super::filter::{filter_offers, FilterState};
use super::lifecycle::{LifecycleError, OfferAction};
use super::repository::OfferRepository;
use crate::board::report::{DiscoveryView, OfferBoardReport, OfferSummary, StatusCounts};
use crate::board::repository::RepositoryError;
use crate::board::validation::{is_blank, ValidationError};

/// Employer offer management and candidate discovery over one offer store.
pub struct OfferService<R> {
    repository: Arc<R>,
    sequence: AtomicU64,
}

impl<R> OfferService<R>
where
    R: OfferRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            sequence: AtomicU64::new(1),
        }
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    fn next_offer_id(&self) -> OfferId {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed);
        OfferId(format!("offer-{id:06}"))
    }

    /// Offers in store order, optionally restricted to one tab.
    pub fn list(&self, status: Option<OfferStatus>) -> Result<Vec<JobOffer>, OfferServiceError> {
        let offers = self.repository.list()?;
        debug!(total = offers.len(), ?status, "listing offers");
        Ok(match status {
            Some(status) => offers
                .into_iter()
                .filter(|offer| offer.status == status)
                .collect(),
            None => offers,
        })
    }

    pub fn get(&self, id: &OfferId) -> Result<JobOffer, OfferServiceError> {
        let offer = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(offer)
    }

    /// Publishes a new offer; it starts active with zeroed counters.
    pub fn create(&self, mut draft: OfferDraft) -> Result<JobOffer, OfferServiceError> {
        if is_blank(&draft.title) {
            return Err(ValidationError::MissingOfferTitle.into());
        }

        let published_on = draft
            .published_on
            .take()
            .unwrap_or_else(|| Local::now().date_naive());
        let offer = JobOffer::from_draft(self.next_offer_id(), draft, published_on);
        let stored = self.repository.create(offer)?;
        info!(offer_id = %stored.id, title = %stored.title, "offer published");
        Ok(stored)
    }

    /// Edits an active offer. Archived and deleted offers are read-only.
    pub fn edit(&self, id: &OfferId, edit: OfferEdit) -> Result<JobOffer, OfferServiceError> {
        if is_blank(&edit.title) {
            return Err(ValidationError::MissingOfferTitle.into());
        }

        let updated = self.repository.update(id, |current| {
            if current.status != OfferStatus::Active {
                return Err(OfferServiceError::NotEditable {
                    offer_id: id.clone(),
                    status: current.status,
                });
            }
            Ok(current.with_edit(&edit))
        })?;
        info!(offer_id = %id, "offer edited");
        Ok(updated)
    }

    /// Applies a lifecycle action. Rejected transitions leave the store untouched.
    pub fn apply_action(
        &self,
        id: &OfferId,
        action: OfferAction,
    ) -> Result<JobOffer, OfferServiceError> {
        let updated = self
            .repository
            .update(id, |current| -> Result<JobOffer, OfferServiceError> {
                let next = current.status.apply(action)?;
                Ok(current.with_status(next))
            })
            .inspect_err(|err| {
                if let OfferServiceError::Lifecycle(reason) = err {
                    warn!(offer_id = %id, action = action.label(), %reason, "offer action rejected");
                }
            })?;

        info!(
            offer_id = %id,
            action = action.label(),
            status = updated.status.key(),
            "offer status changed"
        );
        Ok(updated)
    }

    pub fn record_view(&self, id: &OfferId) -> Result<JobOffer, OfferServiceError> {
        self.repository.update(id, |current| {
            Ok(JobOffer {
                views: current.views.saturating_add(1),
                ..current.clone()
            })
        })
    }

    /// Counts a new application against an active offer.
    pub fn record_application(&self, id: &OfferId) -> Result<JobOffer, OfferServiceError> {
        self.repository.update(id, |current| {
            if current.status != OfferStatus::Active {
                return Err(OfferServiceError::NotAcceptingApplications {
                    offer_id: id.clone(),
                    status: current.status,
                });
            }
            Ok(JobOffer {
                applications: current.applications.saturating_add(1),
                ..current.clone()
            })
        })
    }

    /// Active offers matching `filters`, with indicators computed over every active offer.
    pub fn discover(&self, filters: &FilterState) -> Result<DiscoveryView, OfferServiceError> {
        let visible = self.list(Some(OfferStatus::Active))?;
        let summary = OfferSummary::from_offers(&visible);
        let offers = filter_offers(&visible, filters)
            .into_iter()
            .map(Into::into)
            .collect();
        Ok(DiscoveryView { offers, summary })
    }

    pub fn report(&self) -> Result<OfferBoardReport, OfferServiceError> {
        let offers = self.repository.list()?;
        let active: Vec<JobOffer> = offers
            .iter()
            .filter(|offer| offer.status == OfferStatus::Active)
            .cloned()
            .collect();

        Ok(OfferBoardReport {
            summary: OfferSummary::from_offers(&active),
            status_counts: StatusCounts::tally(offers.iter().map(|offer| offer.status)),
        })
    }
}

/// Error raised by the offer service.
#[derive(Debug, thiserror::Error)]
pub enum OfferServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("offer {offer_id} is {} and does not accept applications", .status.key())]
    NotAcceptingApplications {
        offer_id: OfferId,
        status: OfferStatus,
    },
    #[error("offer {offer_id} is {} and can no longer be edited", .status.key())]
    NotEditable {
        offer_id: OfferId,
        status: OfferStatus,
    },
}
