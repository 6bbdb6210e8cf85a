use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// The backend speaks camelCase JSON (startDate/endDate), so every wire
// type renames its fields on (de)serialization.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderMethod {
    Popup,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub method: ReminderMethod,
    pub minutes: u32,
}

// The fixed option set offered by the form. Selecting "None" still
// produces a zero-minute reminder; the draft store appends it like any
// other selection.
pub const REMINDER_OPTIONS: [(&str, u32); 5] = [
    ("None", 0),
    ("5 minutes before", 5),
    ("15 minutes before", 15),
    ("30 minutes before", 30),
    ("1 hour before", 60),
];

pub fn parse_reminder_option(label: &str) -> Option<u32> {
    REMINDER_OPTIONS
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, minutes)| *minutes)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub reminders: Vec<Reminder>,
}

impl EventDraft {
    // The initial form state: both dates set to "now", everything else empty.
    pub fn empty() -> Self {
        let now = Utc::now();
        Self {
            title: String::new(),
            description: String::new(),
            start_date: now,
            end_date: now,
            reminders: Vec::new(),
        }
    }
}

// Whatever the backend echoes back for a created or listed event. The
// shape is backend-defined; missing fields fall back to defaults instead
// of failing the whole decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub reminders: Vec<Reminder>,
}
