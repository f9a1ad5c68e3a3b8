use serde::Serialize;

use super::summary::{OfferSummary, StatusCounts};
use crate::board::applications::domain::{
    ApplicationStatus, CandidateStage, ReceivedApplication, TrackedApplication,
};
use crate::board::offers::domain::{JobOffer, OfferStatus};
use crate::board::tone::Tone;

#[derive(Debug, Clone, Serialize)]
pub struct OfferView {
    #[serde(flatten)]
    pub offer: JobOffer,
    pub modality_label: &'static str,
    pub priority_label: &'static str,
    pub status_label: &'static str,
    pub status_tone: Tone,
}

impl From<JobOffer> for OfferView {
    fn from(offer: JobOffer) -> Self {
        Self {
            modality_label: offer.modality.label(),
            priority_label: offer.priority.label(),
            status_label: offer.status.label(),
            status_tone: offer.status.tone(),
            offer,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReceivedApplicationView {
    #[serde(flatten)]
    pub application: ReceivedApplication,
    pub status_label: &'static str,
    pub status_tone: Tone,
}

impl From<ReceivedApplication> for ReceivedApplicationView {
    fn from(application: ReceivedApplication) -> Self {
        Self {
            status_label: application.status.label(),
            status_tone: application.status.tone(),
            application,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TrackedApplicationView {
    #[serde(flatten)]
    pub application: TrackedApplication,
    pub stage_label: &'static str,
    pub stage_tone: Tone,
}

impl From<TrackedApplication> for TrackedApplicationView {
    fn from(application: TrackedApplication) -> Self {
        Self {
            stage_label: application.stage.label(),
            stage_tone: application.stage.tone(),
            application,
        }
    }
}

/// Candidate discovery payload: filtered offers plus indicators over the visible board.
#[derive(Debug, Clone, Serialize)]
pub struct DiscoveryView {
    pub offers: Vec<OfferView>,
    pub summary: OfferSummary,
}

/// Employer-side overview of the whole offer store.
#[derive(Debug, Clone, Serialize)]
pub struct OfferBoardReport {
    pub summary: OfferSummary,
    pub status_counts: StatusCounts<OfferStatus>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApplicationBoardReport {
    pub received: StatusCounts<ApplicationStatus>,
    pub tracked: StatusCounts<CandidateStage>,
}
