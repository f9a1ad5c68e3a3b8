use serde::{Deserialize, Serialize};

use super::domain::OfferStatus;

/// Employer actions that move an offer between tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferAction {
    Archive,
    Restore,
    Delete,
}

impl OfferAction {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Archive => "archive",
            Self::Restore => "restore",
            Self::Delete => "delete",
        }
    }

    /// Status an offer lands in once the action succeeds.
    pub const fn target_status(self) -> OfferStatus {
        match self {
            Self::Archive => OfferStatus::Archived,
            Self::Restore => OfferStatus::Active,
            Self::Delete => OfferStatus::Deleted,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LifecycleError {
    #[error("offer is deleted; no further actions are possible")]
    Terminal,
    #[error("cannot {} an offer that is {}", .action.label(), .from.key())]
    InvalidTransition {
        from: OfferStatus,
        action: OfferAction,
    },
}

impl OfferStatus {
    /// Resolves the status reached by applying `action`, or why it is not allowed.
    pub fn apply(self, action: OfferAction) -> Result<OfferStatus, LifecycleError> {
        use OfferAction::*;
        use OfferStatus::*;

        match (self, action) {
            (Deleted, _) => Err(LifecycleError::Terminal),
            (Active, Archive) => Ok(Archived),
            (Archived, Restore) => Ok(Active),
            (Active | Archived, Delete) => Ok(Deleted),
            (from, action) => Err(LifecycleError::InvalidTransition { from, action }),
        }
    }
}
