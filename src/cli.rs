use std::sync::Arc;

use chrono::{Datelike, Utc};
use clap::{Parser, Subcommand};

use crate::events::queue::EventBus;
use crate::events::worker::run_event_worker;
use crate::handlers::form::{FormEngine, FormEvent};
use crate::render::calendar;
use crate::service::form_prompt;

#[derive(Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Create {
        title: String,

        #[arg(short, long, default_value = "")]
        description: String,

        /// Start date/time (e.g., "2025-03-20T15:00")
        #[arg(short, long)]
        start: String,

        /// End date/time (e.g., "2025-03-20T16:00")
        #[arg(short, long)]
        end: String,

        /// Reminder lead time in minutes, repeatable (0, 5, 15, 30 or 60)
        #[arg(short, long)]
        reminder: Vec<u32>,
    },
    CreatePrompt {},
    Events {},
}

pub async fn cli(engine: Arc<FormEngine>) {
    // Fine to panic here
    let cli = Cli::parse();
    match cli.command {
        Commands::Create {
            title,
            description,
            start,
            end,
            reminder,
        } => {
            if let Err(e) = create_from_args(&engine, title, description, start, end, reminder).await
            {
                println!("Failed to create event: {}", e);
            }
        }
        Commands::CreatePrompt {} => {
            if let Err(e) = create_from_prompt(engine.clone()).await {
                println!("Failed to create event from prompt {}", e);
            }
        }
        Commands::Events {} => {
            show_events(&engine).await;
        }
    }
}

async fn create_from_args(
    engine: &FormEngine,
    title: String,
    description: String,
    start: String,
    end: String,
    reminders: Vec<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let start = form_prompt::parse_datetime_input(&start)?;
    let end = form_prompt::parse_datetime_input(&end)?;

    engine
        .handle_event(FormEvent::TitleChanged { value: title })
        .await;
    engine
        .handle_event(FormEvent::DescriptionChanged { value: description })
        .await;
    engine
        .handle_event(FormEvent::StartDateChanged { date: start })
        .await;
    engine
        .handle_event(FormEvent::EndDateChanged { date: end })
        .await;
    for minutes in reminders {
        engine
            .handle_event(FormEvent::ReminderSelected { minutes })
            .await;
    }
    engine.handle_event(FormEvent::SubmitRequested).await;
    Ok(())
}

async fn create_from_prompt(engine: Arc<FormEngine>) -> Result<(), Box<dyn std::error::Error>> {
    let (bus, rx) = EventBus::new(16);
    let worker = tokio::spawn(run_event_worker(rx, engine));

    let result = form_prompt::compose_event(&bus).await;

    // Closing the bus lets the worker drain the submit before we return.
    drop(bus);
    let _ = worker.await;
    result
}

async fn show_events(engine: &FormEngine) {
    engine.handle_event(FormEvent::RefreshRequested).await;

    let selected = engine.selected_event_id().await;
    let collection = engine.event_collection();
    let guard = collection.lock().await;
    let now = Utc::now();
    println!(
        "{}",
        calendar::render_month(guard.events(), now.year(), now.month(), selected.as_deref())
    );
    let agenda = calendar::render_agenda(guard.events(), selected.as_deref());
    if !agenda.is_empty() {
        println!("{}", agenda);
    }
}
