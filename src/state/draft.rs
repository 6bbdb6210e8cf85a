use chrono::{DateTime, Utc};

use crate::models::event::{EventDraft, Reminder, ReminderMethod};

// Holds the event currently being composed. Every operation replaces
// exactly one field; no validation happens here (empty titles and
// end-before-start ranges are accepted and submitted as-is).
#[derive(Debug, Clone)]
pub struct DraftStore {
    draft: EventDraft,
}

impl DraftStore {
    pub fn new() -> Self {
        Self {
            draft: EventDraft::empty(),
        }
    }

    pub fn draft(&self) -> &EventDraft {
        &self.draft
    }

    pub fn snapshot(&self) -> EventDraft {
        self.draft.clone()
    }

    pub fn set_title(&mut self, title: String) {
        self.draft.title = title;
    }

    pub fn set_description(&mut self, description: String) {
        self.draft.description = description;
    }

    pub fn set_start_date(&mut self, date: DateTime<Utc>) {
        self.draft.start_date = date;
    }

    pub fn set_end_date(&mut self, date: DateTime<Utc>) {
        self.draft.end_date = date;
    }

    // Always appends, including the zero-minute "None" selection.
    // Duplicates are kept in selection order.
    pub fn add_reminder(&mut self, minutes: u32) {
        self.draft.reminders.push(Reminder {
            method: ReminderMethod::Popup,
            minutes,
        });
    }

    pub fn reset(&mut self) {
        self.draft = EventDraft::empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn setters_leave_other_fields_untouched() {
        let mut store = DraftStore::new();
        let start = Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap();

        store.set_title("Standup".to_string());
        store.set_start_date(start);
        store.set_description("daily".to_string());
        store.set_title("Standup (moved)".to_string());

        let draft = store.draft();
        assert_eq!(draft.title, "Standup (moved)");
        assert_eq!(draft.description, "daily");
        assert_eq!(draft.start_date, start);
        assert!(draft.reminders.is_empty());
    }

    #[test]
    fn end_date_is_not_bounded_by_start_date() {
        let mut store = DraftStore::new();
        let start = Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();

        store.set_start_date(start);
        store.set_end_date(end);

        assert_eq!(store.draft().start_date, start);
        assert_eq!(store.draft().end_date, end);
    }

    #[test]
    fn add_reminder_appends_in_order_with_duplicates() {
        let mut store = DraftStore::new();
        store.add_reminder(15);
        store.add_reminder(15);
        store.add_reminder(0);

        let reminders = &store.draft().reminders;
        assert_eq!(reminders.len(), 3);
        assert_eq!(reminders[0].minutes, 15);
        assert_eq!(reminders[1].minutes, 15);
        assert_eq!(reminders[2].minutes, 0);
        assert!(
            reminders
                .iter()
                .all(|r| r.method == ReminderMethod::Popup)
        );
    }

    #[test]
    fn reset_restores_the_empty_draft() {
        let mut store = DraftStore::new();
        store.set_title("Standup".to_string());
        store.set_description("daily".to_string());
        store.set_start_date(Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap());
        store.add_reminder(5);

        store.reset();

        let draft = store.draft();
        assert_eq!(draft.title, "");
        assert_eq!(draft.description, "");
        assert!(draft.reminders.is_empty());
        let now = Utc::now();
        assert!((now - draft.start_date).num_seconds().abs() < 5);
        assert_eq!(draft.start_date, draft.end_date);
    }
}
