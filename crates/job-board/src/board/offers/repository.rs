use std::sync::{Arc, Mutex};

use super::domain::{JobOffer, OfferId};
use crate::board::repository::{lock, RepositoryError};

/// Storage abstraction for offers so a remote backend can replace the in-memory store.
pub trait OfferRepository: Send + Sync {
    /// All offers in insertion order.
    fn list(&self) -> Result<Vec<JobOffer>, RepositoryError>;
    fn fetch(&self, id: &OfferId) -> Result<Option<JobOffer>, RepositoryError>;
    fn create(&self, offer: JobOffer) -> Result<JobOffer, RepositoryError>;
    /// Reads the stored offer and writes back what `change` returns as one step, so no other
    /// writer can slip in between the check and the write. An error from `change` leaves the
    /// store untouched.
    fn update<E, F>(&self, id: &OfferId, change: F) -> Result<JobOffer, E>
    where
        E: From<RepositoryError>,
        F: FnOnce(&JobOffer) -> Result<JobOffer, E>;
}

/// Process-lifetime offer store. Every update runs under the store lock.
#[derive(Debug, Default, Clone)]
pub struct InMemoryOfferRepository {
    offers: Arc<Mutex<Vec<JobOffer>>>,
}

impl InMemoryOfferRepository {
    pub fn seeded(offers: Vec<JobOffer>) -> Self {
        Self {
            offers: Arc::new(Mutex::new(offers)),
        }
    }
}

impl OfferRepository for InMemoryOfferRepository {
    fn list(&self) -> Result<Vec<JobOffer>, RepositoryError> {
        Ok(lock(&self.offers)?.clone())
    }

    fn fetch(&self, id: &OfferId) -> Result<Option<JobOffer>, RepositoryError> {
        let guard = lock(&self.offers)?;
        Ok(guard.iter().find(|offer| &offer.id == id).cloned())
    }

    fn create(&self, offer: JobOffer) -> Result<JobOffer, RepositoryError> {
        let mut guard = lock(&self.offers)?;
        if guard.iter().any(|existing| existing.id == offer.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(offer.clone());
        Ok(offer)
    }

    fn update<E, F>(&self, id: &OfferId, change: F) -> Result<JobOffer, E>
    where
        E: From<RepositoryError>,
        F: FnOnce(&JobOffer) -> Result<JobOffer, E>,
    {
        let mut guard = lock(&self.offers)?;
        let slot = guard
            .iter_mut()
            .find(|offer| &offer.id == id)
            .ok_or(RepositoryError::NotFound)?;

        let updated = change(slot)?;
        *slot = updated.clone();
        Ok(updated)
    }
}
