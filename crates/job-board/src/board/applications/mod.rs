//! Applications on both sides of the board: what employers receive and review, and what
//! candidates track after applying.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    initials, ApplicationAction, ApplicationId, ApplicationStatus, ApplicationTransitionError,
    ApplyRequest, CandidateStage, ReceivedApplication, TrackedApplication,
};
pub use repository::{
    ApplicationRepository, InMemoryApplicationRepository, InMemoryTrackedApplicationRepository,
    TrackedApplicationRepository,
};
pub use router::application_router;
pub use service::{ApplicationService, ApplicationServiceError, ApplyReceipt};
