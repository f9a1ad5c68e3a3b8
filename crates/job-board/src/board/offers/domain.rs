use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::board::tone::Tone;

/// Identifier wrapper for job offers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OfferId(pub String);

impl fmt::Display for OfferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Work arrangement advertised by an offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    OnSite,
    Hybrid,
    Remote,
}

impl Modality {
    pub const fn ordered() -> [Self; 3] {
        [Self::OnSite, Self::Hybrid, Self::Remote]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::OnSite => "Presencial",
            Self::Hybrid => "Híbrido",
            Self::Remote => "Remoto",
        }
    }
}

impl FromStr for Modality {
    type Err = UnknownVariant;

    /// Accepts the display label (with or without accent) or the snake-case key.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "presencial" | "on_site" | "onsite" | "on-site" => Ok(Self::OnSite),
            "híbrido" | "hibrido" | "hybrid" => Ok(Self::Hybrid),
            "remoto" | "remote" => Ok(Self::Remote),
            _ => Err(UnknownVariant {
                kind: "modality",
                value: value.to_string(),
            }),
        }
    }
}

/// Hiring urgency set by the employer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "Alta",
            Self::Medium => "Media",
            Self::Low => "Baja",
        }
    }
}

impl FromStr for Priority {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "alta" | "high" => Ok(Self::High),
            "media" | "medium" => Ok(Self::Medium),
            "baja" | "low" => Ok(Self::Low),
            _ => Err(UnknownVariant {
                kind: "priority",
                value: value.to_string(),
            }),
        }
    }
}

/// Publication state of an offer. `Deleted` is a tombstone: the record stays listable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferStatus {
    Active,
    Archived,
    Deleted,
}

impl OfferStatus {
    pub const fn ordered() -> [Self; 3] {
        [Self::Active, Self::Archived, Self::Deleted]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Archived => "archived",
            Self::Deleted => "deleted",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Activa",
            Self::Archived => "Archivada",
            Self::Deleted => "Retirada",
        }
    }

    /// Heading shown above the offers listed under this status.
    pub const fn section_title(self) -> &'static str {
        match self {
            Self::Active => "Publicadas y Vigentes",
            Self::Archived => "Historial de Ofertas Archivadas",
            Self::Deleted => "Historial de Ofertas Retiradas",
        }
    }

    pub const fn tone(self) -> Tone {
        match self {
            Self::Active => Tone::Success,
            Self::Archived => Tone::Warning,
            Self::Deleted => Tone::Danger,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Deleted)
    }
}

impl FromStr for OfferStatus {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "archived" => Ok(Self::Archived),
            "deleted" => Ok(Self::Deleted),
            _ => Err(UnknownVariant {
                kind: "offer status",
                value: value.to_string(),
            }),
        }
    }
}

/// A job vacancy managed by an employer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobOffer {
    pub id: OfferId,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub department: String,
    pub description: String,
    pub location: String,
    pub modality: Modality,
    pub salary: String,
    pub industry: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub required_competencies: Vec<String>,
    #[serde(default)]
    pub required_education: Vec<String>,
    #[serde(default)]
    pub required_experience: String,
    pub published_on: NaiveDate,
    pub status: OfferStatus,
    pub applications: u32,
    pub views: u32,
}

impl JobOffer {
    /// Builds a freshly published offer from an employer draft.
    pub fn from_draft(id: OfferId, draft: OfferDraft, published_on: NaiveDate) -> Self {
        Self {
            id,
            title: draft.title.trim().to_string(),
            company: draft.company,
            department: draft.department,
            description: draft.description,
            location: draft.location,
            modality: draft.modality,
            salary: draft.salary,
            industry: draft.industry,
            priority: draft.priority,
            required_competencies: clean_entries(draft.required_competencies),
            required_education: clean_entries(draft.required_education),
            required_experience: draft.required_experience,
            published_on,
            status: OfferStatus::Active,
            applications: 0,
            views: 0,
        }
    }

    /// Returns a copy carrying the edited fields; identity and counters are kept.
    pub fn with_edit(&self, edit: &OfferEdit) -> Self {
        Self {
            title: edit.title.trim().to_string(),
            description: edit.description.clone(),
            salary: edit.salary.clone(),
            modality: edit.modality,
            location: edit.location.clone(),
            ..self.clone()
        }
    }

    pub fn with_status(&self, status: OfferStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

fn clean_entries(entries: Vec<String>) -> Vec<String> {
    entries
        .into_iter()
        .map(|entry| entry.trim().to_string())
        .filter(|entry| !entry.is_empty())
        .collect()
}

/// Employer input for a new offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferDraft {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub description: String,
    pub location: String,
    pub modality: Modality,
    #[serde(default)]
    pub salary: String,
    pub industry: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub required_competencies: Vec<String>,
    #[serde(default)]
    pub required_education: Vec<String>,
    #[serde(default)]
    pub required_experience: String,
    #[serde(default)]
    pub published_on: Option<NaiveDate>,
}

/// Fields an employer may change on an existing offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferEdit {
    pub title: String,
    pub description: String,
    pub salary: String,
    pub modality: Modality,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}
