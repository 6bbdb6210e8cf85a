use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::service::status_reporter::StatusReporter;
use crate::service::sync_service::SyncClient;
use crate::state::collection::EventCollection;
use crate::state::draft::DraftStore;

pub type SubmitToken = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitting,
}

#[derive(Debug)]
pub enum FormEvent {
    TitleChanged { value: String },
    DescriptionChanged { value: String },
    StartDateChanged { date: DateTime<Utc> },
    EndDateChanged { date: DateTime<Utc> },
    ReminderSelected { minutes: u32 },
    SubmitRequested,
    RefreshRequested,
}

// Owns the draft lifecycle: Editing -> Submitting -> (reset on success,
// input retained on failure). Field events mutate the draft store one
// field at a time; submit and refresh go through the sync client and
// update the collection.
pub struct FormEngine {
    draft: Arc<Mutex<DraftStore>>,
    events: Arc<Mutex<EventCollection>>,
    sync: Arc<dyn SyncClient>,
    reporter: Arc<dyn StatusReporter>,
    in_flight: Mutex<Option<SubmitToken>>,
    selected: Mutex<Option<String>>,
}

impl FormEngine {
    pub fn new(
        draft: Arc<Mutex<DraftStore>>,
        events: Arc<Mutex<EventCollection>>,
        sync: Arc<dyn SyncClient>,
        reporter: Arc<dyn StatusReporter>,
    ) -> Self {
        Self {
            draft,
            events,
            sync,
            reporter,
            in_flight: Mutex::new(None),
            selected: Mutex::new(None),
        }
    }

    pub fn draft_store(&self) -> Arc<Mutex<DraftStore>> {
        self.draft.clone()
    }

    pub fn event_collection(&self) -> Arc<Mutex<EventCollection>> {
        self.events.clone()
    }

    pub async fn phase(&self) -> FormPhase {
        if self.in_flight.lock().await.is_some() {
            FormPhase::Submitting
        } else {
            FormPhase::Editing
        }
    }

    // Id of the most recently created event; the calendar highlights it.
    pub async fn selected_event_id(&self) -> Option<String> {
        self.selected.lock().await.clone()
    }

    pub async fn handle_event(&self, event: FormEvent) {
        match event {
            FormEvent::TitleChanged { value } => {
                self.draft.lock().await.set_title(value);
            }
            FormEvent::DescriptionChanged { value } => {
                self.draft.lock().await.set_description(value);
            }
            FormEvent::StartDateChanged { date } => {
                self.draft.lock().await.set_start_date(date);
            }
            FormEvent::EndDateChanged { date } => {
                self.draft.lock().await.set_end_date(date);
            }
            FormEvent::ReminderSelected { minutes } => {
                self.draft.lock().await.add_reminder(minutes);
            }
            FormEvent::SubmitRequested => {
                self.submit().await;
            }
            FormEvent::RefreshRequested => {
                self.refresh().await;
            }
        }
    }

    async fn submit(&self) {
        // One lifecycle token per submission. A second submit while one is
        // outstanding is dropped here; a completion whose token no longer
        // matches is dropped below.
        let token: SubmitToken = Uuid::new_v4().to_string();
        {
            let mut in_flight = self.in_flight.lock().await;
            if in_flight.is_some() {
                drop(in_flight);
                self.reporter.submit_ignored().await;
                return;
            }
            *in_flight = Some(token.clone());
        }

        let snapshot = self.draft.lock().await.snapshot();

        let result = self.sync.create_event(&snapshot).await;

        {
            let mut in_flight = self.in_flight.lock().await;
            if in_flight.as_deref() != Some(token.as_str()) {
                return;
            }
            *in_flight = None;
        }

        match result {
            Ok(created) => {
                self.events.lock().await.append(created.clone());
                self.draft.lock().await.reset();
                *self.selected.lock().await = Some(created.id.clone());
                self.reporter.event_created(&created).await;
            }
            Err(err) => {
                // Draft and collection stay as they were; the user retries
                // by submitting again.
                self.reporter.sync_failed("creating event", &err).await;
            }
        }
    }

    async fn refresh(&self) {
        match self.sync.fetch_all_events().await {
            Ok(fetched) => {
                self.events.lock().await.replace_all(fetched);
            }
            Err(err) => {
                self.reporter.sync_failed("loading events", &err).await;
            }
        }
    }
}
