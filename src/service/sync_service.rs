use async_trait::async_trait;

use crate::clients::backend_client::{self, SyncError};
use crate::models::event::{CalendarEvent, EventDraft};

#[async_trait]
pub trait SyncClient: Send + Sync {
    async fn fetch_all_events(&self) -> Result<Vec<CalendarEvent>, SyncError>;

    async fn create_event(&self, draft: &EventDraft) -> Result<CalendarEvent, SyncError>;
}

pub struct BackendSyncService {
    base_url: String,
    http: reqwest::Client,
}

impl BackendSyncService {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    // Optional overall request timeout. Without it a hung backend hangs
    // the pending operation, matching the default client behavior.
    pub fn with_timeout(base_url: String, timeout_secs: u64) -> Result<Self, SyncError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self { base_url, http })
    }
}

#[async_trait]
impl SyncClient for BackendSyncService {
    async fn fetch_all_events(&self) -> Result<Vec<CalendarEvent>, SyncError> {
        backend_client::fetch_all_events(&self.http, &self.base_url).await
    }

    async fn create_event(&self, draft: &EventDraft) -> Result<CalendarEvent, SyncError> {
        backend_client::create_event(&self.http, &self.base_url, draft).await
    }
}
