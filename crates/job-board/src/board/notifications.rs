//! Candidate notification feed and delivery preferences.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::board::repository::{lock, RepositoryError};
use crate::board::tone::Tone;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPreference {
    pub id: String,
    pub label: String,
    pub description: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub category: Option<String>,
}

impl NotificationItem {
    pub fn tone(&self) -> Tone {
        category_tone(self.category.as_deref())
    }
}

/// Badge tone for a feed category; unknown or missing categories are neutral.
pub fn category_tone(category: Option<&str>) -> Tone {
    match category {
        Some("Proceso") => Tone::Info,
        Some("Sugerencia") => Tone::Success,
        Some("Alerta") => Tone::Danger,
        _ => Tone::Neutral,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NotificationItemView {
    #[serde(flatten)]
    pub item: NotificationItem,
    pub tone: Tone,
}

/// Two views of the notifications screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationTab {
    #[default]
    Feed,
    Settings,
}

#[derive(Debug, Clone, Serialize)]
pub struct NotificationCenter {
    pub feed: Vec<NotificationItemView>,
    pub preferences: Vec<NotificationPreference>,
}

#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("unknown notification preference '{0}'")]
    UnknownPreference(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Flips `enabled` on the preference with `id`, leaving the others untouched.
pub fn toggle_preference(
    preferences: &[NotificationPreference],
    id: &str,
) -> Result<Vec<NotificationPreference>, NotificationError> {
    if !preferences.iter().any(|preference| preference.id == id) {
        return Err(NotificationError::UnknownPreference(id.to_string()));
    }

    Ok(preferences
        .iter()
        .map(|preference| {
            if preference.id == id {
                NotificationPreference {
                    enabled: !preference.enabled,
                    ..preference.clone()
                }
            } else {
                preference.clone()
            }
        })
        .collect())
}

pub struct NotificationService {
    feed: Vec<NotificationItem>,
    preferences: Mutex<Vec<NotificationPreference>>,
}

impl NotificationService {
    pub fn new(feed: Vec<NotificationItem>, preferences: Vec<NotificationPreference>) -> Self {
        Self {
            feed,
            preferences: Mutex::new(preferences),
        }
    }

    pub fn center(&self) -> Result<NotificationCenter, NotificationError> {
        let preferences = lock(&self.preferences)?.clone();
        let feed = self
            .feed
            .iter()
            .cloned()
            .map(|item| NotificationItemView {
                tone: item.tone(),
                item,
            })
            .collect();
        Ok(NotificationCenter { feed, preferences })
    }

    pub fn toggle(&self, id: &str) -> Result<NotificationPreference, NotificationError> {
        let mut guard = lock(&self.preferences)?;
        let updated = toggle_preference(&guard, id)?;
        let toggled = updated
            .iter()
            .find(|preference| preference.id == id)
            .cloned()
            .ok_or_else(|| NotificationError::UnknownPreference(id.to_string()))?;
        *guard = updated;
        info!(preference = id, enabled = toggled.enabled, "notification preference toggled");
        Ok(toggled)
    }
}

pub fn notification_router(service: Arc<NotificationService>) -> Router {
    Router::new()
        .route("/api/v1/notifications", get(center_handler))
        .route(
            "/api/v1/notifications/preferences/:preference_id/toggle",
            post(toggle_handler),
        )
        .with_state(service)
}

async fn center_handler(State(service): State<Arc<NotificationService>>) -> Response {
    match service.center() {
        Ok(center) => (StatusCode::OK, Json(center)).into_response(),
        Err(err) => error_response(err),
    }
}

async fn toggle_handler(
    State(service): State<Arc<NotificationService>>,
    Path(preference_id): Path<String>,
) -> Response {
    match service.toggle(&preference_id) {
        Ok(preference) => (StatusCode::OK, Json(preference)).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: NotificationError) -> Response {
    let status = match err {
        NotificationError::UnknownPreference(_) => StatusCode::NOT_FOUND,
        NotificationError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(json!({ "error": err.to_string() }))).into_response()
}
