use std::sync::Arc;

use chrono::{Datelike, Utc};
use inquire::Select;

use crate::events::queue::EventBus;
use crate::events::worker::run_event_worker;
use crate::handlers::form::{FormEngine, FormEvent};
use crate::render::calendar;
use crate::render::details;
use crate::service::form_prompt;

const MENU_CREATE: &str = "Create event";
const MENU_REFRESH: &str = "Refresh calendar";
const MENU_QUIT: &str = "Quit";

// The interactive session: load events from the backend, then loop
// rendering the calendar and details panel around the form menu. Submits
// and refreshes run on the worker, so the menu stays responsive while a
// request is in flight.
pub async fn run_session(engine: Arc<FormEngine>) {
    let (bus, rx) = EventBus::new(16);
    let worker = tokio::spawn(run_event_worker(rx, engine.clone()));

    // Load events from the backend before the first render.
    engine.handle_event(FormEvent::RefreshRequested).await;

    loop {
        render_screen(&engine).await;

        let choice = Select::new(
            "What next?",
            vec![MENU_CREATE, MENU_REFRESH, MENU_QUIT],
        )
        .prompt();

        match choice {
            Ok(MENU_CREATE) => {
                if let Err(e) = form_prompt::compose_event(&bus).await {
                    println!("Failed to compose event: {}", e);
                }
            }
            Ok(MENU_REFRESH) => {
                bus.emit(FormEvent::RefreshRequested).await;
            }
            Ok(_) | Err(_) => break,
        }
    }

    drop(bus);
    let _ = worker.await;
}

async fn render_screen(engine: &FormEngine) {
    let now = Utc::now();
    let selected = engine.selected_event_id().await;

    {
        let collection = engine.event_collection();
        let guard = collection.lock().await;
        println!(
            "{}",
            calendar::render_month(guard.events(), now.year(), now.month(), selected.as_deref())
        );
    }

    {
        let draft = engine.draft_store();
        let guard = draft.lock().await;
        println!("{}", details::render_draft_details(guard.draft()));
    }
}
