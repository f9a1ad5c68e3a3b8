use std::sync::{Arc, Mutex};

use super::domain::{ApplicationId, ReceivedApplication, TrackedApplication};
use crate::board::repository::{lock, RepositoryError};

/// Storage abstraction for applications received by employers.
pub trait ApplicationRepository: Send + Sync {
    fn list(&self) -> Result<Vec<ReceivedApplication>, RepositoryError>;
    fn fetch(&self, id: &ApplicationId) -> Result<Option<ReceivedApplication>, RepositoryError>;
    fn create(&self, application: ReceivedApplication)
        -> Result<ReceivedApplication, RepositoryError>;
    /// Same contract as the offer store: `change` sees and replaces the record in one step.
    fn update<E, F>(&self, id: &ApplicationId, change: F) -> Result<ReceivedApplication, E>
    where
        E: From<RepositoryError>,
        F: FnOnce(&ReceivedApplication) -> Result<ReceivedApplication, E>;
    fn remove(&self, id: &ApplicationId) -> Result<(), RepositoryError>;
}

/// Storage abstraction for the candidate's own application tracker.
pub trait TrackedApplicationRepository: Send + Sync {
    fn list(&self) -> Result<Vec<TrackedApplication>, RepositoryError>;
    fn create(&self, application: TrackedApplication)
        -> Result<TrackedApplication, RepositoryError>;
    fn remove(&self, id: &ApplicationId) -> Result<(), RepositoryError>;
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryApplicationRepository {
    records: Arc<Mutex<Vec<ReceivedApplication>>>,
}

impl InMemoryApplicationRepository {
    pub fn seeded(records: Vec<ReceivedApplication>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }
}

impl ApplicationRepository for InMemoryApplicationRepository {
    fn list(&self) -> Result<Vec<ReceivedApplication>, RepositoryError> {
        Ok(lock(&self.records)?.clone())
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<ReceivedApplication>, RepositoryError> {
        let guard = lock(&self.records)?;
        Ok(guard.iter().find(|record| &record.id == id).cloned())
    }

    fn create(
        &self,
        application: ReceivedApplication,
    ) -> Result<ReceivedApplication, RepositoryError> {
        let mut guard = lock(&self.records)?;
        if guard.iter().any(|record| record.id == application.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(application.clone());
        Ok(application)
    }

    fn update<E, F>(&self, id: &ApplicationId, change: F) -> Result<ReceivedApplication, E>
    where
        E: From<RepositoryError>,
        F: FnOnce(&ReceivedApplication) -> Result<ReceivedApplication, E>,
    {
        let mut guard = lock(&self.records)?;
        let slot = guard
            .iter_mut()
            .find(|record| &record.id == id)
            .ok_or(RepositoryError::NotFound)?;

        let updated = change(slot)?;
        *slot = updated.clone();
        Ok(updated)
    }

    fn remove(&self, id: &ApplicationId) -> Result<(), RepositoryError> {
        let mut guard = lock(&self.records)?;
        remove_by_id(&mut *guard, |record| &record.id == id)
    }
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryTrackedApplicationRepository {
    records: Arc<Mutex<Vec<TrackedApplication>>>,
}

impl InMemoryTrackedApplicationRepository {
    pub fn seeded(records: Vec<TrackedApplication>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }
}

impl TrackedApplicationRepository for InMemoryTrackedApplicationRepository {
    fn list(&self) -> Result<Vec<TrackedApplication>, RepositoryError> {
        Ok(lock(&self.records)?.clone())
    }

    fn create(
        &self,
        application: TrackedApplication,
    ) -> Result<TrackedApplication, RepositoryError> {
        let mut guard = lock(&self.records)?;
        if guard.iter().any(|record| record.id == application.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(application.clone());
        Ok(application)
    }

    fn remove(&self, id: &ApplicationId) -> Result<(), RepositoryError> {
        let mut guard = lock(&self.records)?;
        remove_by_id(&mut *guard, |record| &record.id == id)
    }
}

fn remove_by_id<T>(
    records: &mut Vec<T>,
    matches: impl Fn(&T) -> bool,
) -> Result<(), RepositoryError> {
    let position = records
        .iter()
        .position(matches)
        .ok_or(RepositoryError::NotFound)?;
    records.remove(position);
    Ok(())
}
