use async_trait::async_trait;

use crate::clients::backend_client::SyncError;
use crate::models::event::CalendarEvent;

// How the engine tells the outside world what happened to a sync
// operation. The form flow itself never inspects errors; it hands them
// here and moves on with the stores untouched.
#[async_trait]
pub trait StatusReporter: Send + Sync {
    async fn event_created(&self, event: &CalendarEvent);

    async fn sync_failed(&self, operation: &str, error: &SyncError);

    async fn submit_ignored(&self);
}

// Console reporter. By default failures go to stderr only, so the user
// sees nothing in the normal output stream; SURFACE_SYNC_ERRORS flips
// them onto stdout next to the form.
pub struct ConsoleReporter {
    surface_errors: bool,
}

impl ConsoleReporter {
    pub fn new(surface_errors: bool) -> Self {
        Self { surface_errors }
    }
}

#[async_trait]
impl StatusReporter for ConsoleReporter {
    async fn event_created(&self, event: &CalendarEvent) {
        println!("Event created: {}", event.title);
    }

    async fn sync_failed(&self, operation: &str, error: &SyncError) {
        if self.surface_errors {
            println!("Error {}: {}", operation, error);
        } else {
            eprintln!("Error {}: {}", operation, error);
        }
    }

    async fn submit_ignored(&self) {
        eprintln!("A submission is already in flight, ignoring.");
    }
}
