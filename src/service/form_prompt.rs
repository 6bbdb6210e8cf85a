use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use inquire::{Confirm, Select, Text};

use crate::events::queue::EventBus;
use crate::handlers::form::FormEvent;
use crate::models::event::{parse_reminder_option, REMINDER_OPTIONS};

pub fn parse_datetime_input(input: &str) -> Result<DateTime<Utc>, String> {
    let trimmed = input.trim();
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M"))
        .map(|naive| Utc.from_utc_datetime(&naive))
        .map_err(|_| format!("Invalid date/time {:?}, expected YYYY-MM-DDTHH:MM", trimmed))
}

// Walks the user through the original form, emitting one event per field
// change and a submit at the end. Nothing here validates the draft; an
// empty title goes through like any other.
pub async fn compose_event(bus: &EventBus) -> Result<(), Box<dyn std::error::Error>> {
    let title = Text::new("Event title:")
        .with_placeholder("Event Title")
        .prompt()?;
    bus.emit(FormEvent::TitleChanged { value: title }).await;

    let description = Text::new("Event description:")
        .with_placeholder("Event Description")
        .prompt()?;
    bus.emit(FormEvent::DescriptionChanged { value: description })
        .await;

    let start = prompt_datetime("Event start date:")?;
    bus.emit(FormEvent::StartDateChanged { date: start }).await;

    let end = prompt_datetime("Event end date:")?;
    bus.emit(FormEvent::EndDateChanged { date: end }).await;

    loop {
        let labels: Vec<&str> = REMINDER_OPTIONS.iter().map(|(label, _)| *label).collect();
        let choice = Select::new("Reminders:", labels).prompt()?;
        if let Some(minutes) = parse_reminder_option(choice) {
            bus.emit(FormEvent::ReminderSelected { minutes }).await;
        }
        if !Confirm::new("Add another reminder?")
            .with_default(false)
            .prompt()?
        {
            break;
        }
    }

    bus.emit(FormEvent::SubmitRequested).await;
    Ok(())
}

fn prompt_datetime(message: &str) -> Result<DateTime<Utc>, Box<dyn std::error::Error>> {
    loop {
        let input = Text::new(message)
            .with_placeholder("YYYY-MM-DDTHH:MM")
            .prompt()?;
        match parse_datetime_input(&input) {
            Ok(date) => return Ok(date),
            Err(err) => println!("{}", err),
        }
    }
}
