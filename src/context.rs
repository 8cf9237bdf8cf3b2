use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ErrorContext, PlacerError, PlacerResult};
use crate::models::ContentRef;

/// Read-only view of the event that triggered the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerContext {
    pub content: ContentRef,
}

#[derive(Debug, Deserialize)]
struct EventPayload {
    issue: Option<EventContent>,
    pull_request: Option<EventContent>,
    repository: Option<EventRepository>,
}

#[derive(Debug, Deserialize)]
struct EventContent {
    node_id: String,
    html_url: String,
    #[serde(default)]
    labels: Vec<EventLabel>,
}

#[derive(Debug, Deserialize)]
struct EventLabel {
    name: String,
}

#[derive(Debug, Deserialize)]
struct EventRepository {
    owner: EventOwner,
}

#[derive(Debug, Deserialize)]
struct EventOwner {
    login: String,
}

impl TriggerContext {
    pub fn new(content: ContentRef) -> Self {
        Self { content }
    }

    /// Load the webhook payload the runner wrote to `path`.
    pub fn from_event_file(path: &Path) -> PlacerResult<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read event payload {}", path.display()))?;
        Self::from_event_json(&raw)
    }

    /// The issue takes precedence; otherwise the pull request is used.
    pub fn from_event_json(raw: &str) -> PlacerResult<Self> {
        let payload: EventPayload = serde_json::from_str(raw)?;

        let content = payload.issue.or(payload.pull_request).ok_or_else(|| {
            PlacerError::ConfigError("event payload has neither an issue nor a pull request".to_string())
        })?;
        let owner_login = payload
            .repository
            .map(|repo| repo.owner.login)
            .ok_or_else(|| PlacerError::ConfigError("event payload has no repository owner".to_string()))?;

        Ok(Self {
            content: ContentRef {
                content_id: content.node_id,
                owner_login,
                url: content.html_url,
                labels: content
                    .labels
                    .into_iter()
                    .map(|label| label.name.to_lowercase())
                    .collect(),
            },
        })
    }
}
