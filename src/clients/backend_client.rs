use std::fmt;

use reqwest;
use serde_json;

use crate::models::event::{CalendarEvent, EventDraft};

// One error kind for everything that can go wrong talking to the backend:
// transport failures, non-2xx statuses, and bodies that fail to decode.
#[derive(Debug)]
pub enum SyncError {
    Http(String),
    Status { status: u16, body: String },
    Decode(String),
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "HTTP error: {e}"),
            Self::Status { status, body } => {
                write!(f, "Request failed with status {status}: {body}")
            }
            Self::Decode(e) => write!(f, "Failed to parse response JSON: {e}"),
        }
    }
}

impl std::error::Error for SyncError {}

impl From<reqwest::Error> for SyncError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.to_string())
    }
}

pub async fn fetch_all_events(
    client: &reqwest::Client,
    base_url: &str,
) -> Result<Vec<CalendarEvent>, SyncError> {
    let url = format!("{}/get-events", base_url.trim_end_matches('/'));
    let response = client.get(&url).send().await?;

    let status = response.status();
    let text = response.text().await?; // read the body once

    if !status.is_success() {
        return Err(SyncError::Status {
            status: status.as_u16(),
            body: text,
        });
    }

    serde_json::from_str(&text).map_err(|e| SyncError::Decode(format!("{}\nRaw body: {}", e, text)))
}

pub async fn create_event(
    client: &reqwest::Client,
    base_url: &str,
    draft: &EventDraft,
) -> Result<CalendarEvent, SyncError> {
    let url = format!("{}/create-event", base_url.trim_end_matches('/'));
    let response = client
        .post(&url)
        .header("Content-Type", "application/json")
        .json(draft)
        .send()
        .await?;

    let status = response.status();
    let text = response.text().await?;

    if !status.is_success() {
        return Err(SyncError::Status {
            status: status.as_u16(),
            body: text,
        });
    }

    serde_json::from_str(&text).map_err(|e| SyncError::Decode(format!("{}\nRaw body: {}", e, text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sync_error_display_includes_status_and_body() {
        let err = SyncError::Status {
            status: 503,
            body: "backend down".to_string(),
        };
        let text = format!("{}", err);
        assert!(text.contains("503"));
        assert!(text.contains("backend down"));
    }
}
