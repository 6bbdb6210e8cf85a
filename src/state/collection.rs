use crate::models::event::CalendarEvent;

// The list of events known to the client, exactly as the backend returned
// them. A fetch replaces the whole list; a create appends one entry. No
// deduplication and no reconciliation between fetched and created events.
#[derive(Debug, Clone)]
pub struct EventCollection {
    events: Vec<CalendarEvent>,
}

impl EventCollection {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn replace_all(&mut self, events: Vec<CalendarEvent>) {
        self.events = events;
    }

    pub fn append(&mut self, event: CalendarEvent) {
        self.events.push(event);
    }
}
