use crate::models::event::EventDraft;

// The details panel next to the form: the draft as the user will submit
// it, dates in the original's long format.
pub fn render_draft_details(draft: &EventDraft) -> String {
    format!(
        "Event Details\nEvent Title: {}\nEvent Description: {}\nStart Date: {}\nEnd Date: {}",
        draft.title,
        draft.description,
        draft.start_date.format("%B %e %Y, %l:%M %p"),
        draft.end_date.format("%B %e %Y, %l:%M %p"),
    )
}
