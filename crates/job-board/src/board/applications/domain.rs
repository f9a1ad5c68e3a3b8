use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::board::offers::domain::{OfferId, Priority};
use crate::board::tone::Tone;

/// Identifier wrapper for received applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Review state of an application as seen by the employer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Review,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub const fn ordered() -> [Self; 4] {
        [Self::Pending, Self::Review, Self::Accepted, Self::Rejected]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Review => "review",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pendiente",
            Self::Review => "En revisión",
            Self::Accepted => "Aceptado",
            Self::Rejected => "Rechazado",
        }
    }

    pub const fn tone(self) -> Tone {
        match self {
            Self::Pending => Tone::Info,
            Self::Review => Tone::Warning,
            Self::Accepted => Tone::Success,
            Self::Rejected => Tone::Danger,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Accepted | Self::Rejected)
    }

    /// Status reached by an explicit employer action.
    pub fn apply(self, action: ApplicationAction) -> Result<Self, ApplicationTransitionError> {
        use ApplicationAction::*;
        use ApplicationStatus::*;

        match (self, action) {
            (Pending, StartReview) => Ok(Review),
            (Pending | Review, Select) => Ok(Accepted),
            (Pending | Review, Reject) => Ok(Rejected),
            (from, action) => Err(ApplicationTransitionError { from, action }),
        }
    }
}

/// Employer decisions on a received application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationAction {
    StartReview,
    Select,
    Reject,
}

impl ApplicationAction {
    pub const fn label(self) -> &'static str {
        match self {
            Self::StartReview => "start_review",
            Self::Select => "select",
            Self::Reject => "reject",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot {} an application that is {}", .action.label(), .from.key())]
pub struct ApplicationTransitionError {
    pub from: ApplicationStatus,
    pub action: ApplicationAction,
}

/// Application as received by an employer, either against an offer or spontaneous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceivedApplication {
    pub id: ApplicationId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer_id: Option<OfferId>,
    pub candidate_name: String,
    pub initials: String,
    pub position: String,
    pub education: String,
    pub experience: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub received_on: NaiveDate,
    pub status: ApplicationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_score: Option<u8>,
    pub channel: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cv_link: Option<String>,
}

impl ReceivedApplication {
    pub fn with_status(&self, status: ApplicationStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

/// First letters of the first two words, uppercased.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Progress of an application as the candidate tracks it. Deliberately not the
/// employer vocabulary: the two are separate product concepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CandidateStage {
    #[serde(rename = "postulado")]
    Applied,
    #[serde(rename = "revision")]
    InReview,
    #[serde(rename = "entrevista")]
    Interview,
    #[serde(rename = "oferta")]
    Offer,
    #[serde(rename = "finalizado")]
    Closed,
}

impl CandidateStage {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Applied,
            Self::InReview,
            Self::Interview,
            Self::Offer,
            Self::Closed,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Applied => "Postulado",
            Self::InReview => "En revisión",
            Self::Interview => "Entrevista",
            Self::Offer => "Oferta",
            Self::Closed => "Finalizado",
        }
    }

    pub const fn tone(self) -> Tone {
        match self {
            Self::Applied | Self::Closed => Tone::Neutral,
            Self::InReview => Tone::Warning,
            Self::Interview => Tone::Info,
            Self::Offer => Tone::Success,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedApplication {
    pub id: ApplicationId,
    pub title: String,
    pub company: String,
    pub stage: CandidateStage,
    /// Free-form description of the current step, e.g. "Entrevista técnica".
    pub step: String,
    pub submitted_on: NaiveDate,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Candidate submission against an offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyRequest {
    pub candidate_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub cv_link: String,
    #[serde(default)]
    pub cover_letter: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employer_actions_follow_the_review_flow() {
        assert_eq!(
            ApplicationStatus::Pending.apply(ApplicationAction::StartReview),
            Ok(ApplicationStatus::Review)
        );
        assert_eq!(
            ApplicationStatus::Review.apply(ApplicationAction::Select),
            Ok(ApplicationStatus::Accepted)
        );
        assert_eq!(
            ApplicationStatus::Pending.apply(ApplicationAction::Reject),
            Ok(ApplicationStatus::Rejected)
        );
    }

    #[test]
    fn decided_applications_are_terminal() {
        for status in [ApplicationStatus::Accepted, ApplicationStatus::Rejected] {
            assert!(status.is_terminal());
            for action in [
                ApplicationAction::StartReview,
                ApplicationAction::Select,
                ApplicationAction::Reject,
            ] {
                assert!(status.apply(action).is_err());
            }
        }
        let err = ApplicationStatus::Review
            .apply(ApplicationAction::StartReview)
            .expect_err("already in review");
        assert_eq!(
            err.to_string(),
            "cannot start_review an application that is review"
        );
    }

    #[test]
    fn initials_use_first_two_words() {
        assert_eq!(initials("María Fernanda Calle"), "MF");
        assert_eq!(initials("  josé  "), "J");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn candidate_stages_serialize_with_tracking_keys() {
        let json = serde_json::to_value(CandidateStage::InReview).expect("serializes");
        assert_eq!(json, "revision");
        let stage: CandidateStage = serde_json::from_str("\"finalizado\"").expect("parses");
        assert_eq!(stage, CandidateStage::Closed);
    }
}
