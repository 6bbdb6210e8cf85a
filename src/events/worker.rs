use std::sync::Arc;

use tokio::sync::mpsc;

use crate::handlers::form::{FormEngine, FormEvent};

// Drains form events off the bus so network operations never block the
// prompt loop. Ends when every bus handle has been dropped.
pub async fn run_event_worker(mut rx: mpsc::Receiver<FormEvent>, engine: Arc<FormEngine>) {
    while let Some(event) = rx.recv().await {
        engine.handle_event(event).await;
    }
}
