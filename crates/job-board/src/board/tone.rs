use serde::{Deserialize, Serialize};

/// Semantic color category clients use to badge a status. Carries no domain meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Info,
    Warning,
    Danger,
    Success,
    Neutral,
}

impl Tone {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Success => "success",
            Self::Neutral => "neutral",
        }
    }
}
