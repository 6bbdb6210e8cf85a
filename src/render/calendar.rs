use chrono::{Datelike, NaiveDate};
use owo_colors::OwoColorize;

use crate::models::event::CalendarEvent;

// The original widget's two-valued scheme: orange for the selected event,
// blue for everything else.
const HIGHLIGHT_RGB: (u8, u8, u8) = (0xFF, 0xA5, 0x00);
const NORMAL_RGB: (u8, u8, u8) = (0x00, 0x7B, 0xFF);

pub fn is_highlighted(event: &CalendarEvent, selected: Option<&str>) -> bool {
    selected.is_some_and(|id| !id.is_empty() && id == event.id)
}

pub fn reminder_label(event: &CalendarEvent) -> String {
    event
        .reminders
        .iter()
        .map(|r| format!("Reminder {} mins before", r.minutes))
        .collect::<Vec<_>>()
        .join(", ")
}

fn paint(text: &str, highlighted: bool) -> String {
    let (r, g, b) = if highlighted { HIGHLIGHT_RGB } else { NORMAL_RGB };
    text.truecolor(r, g, b).to_string()
}

// One agenda row per event: start/end on the time axis, then title and
// the reminder label.
pub fn event_line(event: &CalendarEvent, selected: Option<&str>) -> String {
    let times = format!(
        "{} - {}",
        event.start_date.format("%b %d %H:%M"),
        event.end_date.format("%b %d %H:%M")
    );
    let mut line = format!(
        "  {}  {}",
        times,
        paint(&event.title, is_highlighted(event, selected))
    );
    let label = reminder_label(event);
    if !label.is_empty() {
        line.push_str("  ");
        line.push_str(&label);
    }
    line
}

// Every known event in start order, one row each. Zero events renders
// zero rows.
pub fn render_agenda(events: &[CalendarEvent], selected: Option<&str>) -> String {
    let mut sorted: Vec<&CalendarEvent> = events.iter().collect();
    sorted.sort_by_key(|e| e.start_date);
    sorted
        .iter()
        .map(|e| event_line(e, selected))
        .collect::<Vec<_>>()
        .join("\n")
}

fn covers_day(event: &CalendarEvent, day: NaiveDate) -> bool {
    event.start_date.date_naive() <= day && day <= event.end_date.date_naive()
}

// Month grid plus the month's agenda. Days carrying at least one event
// are colored; a day carrying the selected event wins the highlight.
pub fn render_month(
    events: &[CalendarEvent],
    year: i32,
    month: u32,
    selected: Option<&str>,
) -> String {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return String::new();
    };
    let days_in_month = {
        let (ny, nm) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
        NaiveDate::from_ymd_opt(ny, nm, 1)
            .and_then(|d| d.pred_opt())
            .map(|d| d.day())
            .unwrap_or(31)
    };

    let mut out = String::new();
    out.push_str(&format!("{:^21}\n", first.format("%B %Y").to_string()));
    out.push_str("Su Mo Tu We Th Fr Sa\n");

    let lead = first.weekday().num_days_from_sunday() as usize;
    let mut line = "   ".repeat(lead);
    for day in 1..=days_in_month {
        let Some(date) = first.with_day(day) else {
            continue;
        };
        let covering: Vec<&CalendarEvent> =
            events.iter().filter(|e| covers_day(e, date)).collect();
        let cell = format!("{:>2}", day);
        if covering.is_empty() {
            line.push_str(&cell);
        } else {
            let highlighted = covering.iter().any(|e| is_highlighted(e, selected));
            line.push_str(&paint(&cell, highlighted));
        }
        line.push(' ');

        if (lead + day as usize) % 7 == 0 {
            line.push('\n');
            out.push_str(&line);
            line.clear();
        }
    }
    if !line.is_empty() {
        line.push('\n');
        out.push_str(&line);
    }

    let month_start = first;
    let month_end = first.with_day(days_in_month).unwrap_or(first);
    let mut month_events: Vec<&CalendarEvent> = events
        .iter()
        .filter(|e| {
            e.start_date.date_naive() <= month_end && month_start <= e.end_date.date_naive()
        })
        .collect();
    month_events.sort_by_key(|e| e.start_date);
    if !month_events.is_empty() {
        out.push('\n');
        for event in month_events {
            out.push_str(&event_line(event, selected));
            out.push('\n');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::{Reminder, ReminderMethod};
    use chrono::{TimeZone, Utc};

    fn event(id: &str, title: &str, reminders: Vec<u32>) -> CalendarEvent {
        CalendarEvent {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            start_date: Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2024, 1, 2, 9, 15, 0).unwrap(),
            reminders: reminders
                .into_iter()
                .map(|minutes| Reminder {
                    method: ReminderMethod::Popup,
                    minutes,
                })
                .collect(),
        }
    }

    #[test]
    fn empty_collection_renders_zero_agenda_rows() {
        assert_eq!(render_agenda(&[], None), "");
        let grid = render_month(&[], 2024, 1, None);
        assert!(grid.contains("January 2024"));
        assert!(!grid.contains(" - "));
    }

    #[test]
    fn agenda_rows_carry_title_and_reminder_label() {
        let events = vec![event("evt-1", "Standup", vec![15, 15])];
        let agenda = render_agenda(&events, None);
        assert!(agenda.contains("Standup"));
        assert!(agenda.contains("Reminder 15 mins before, Reminder 15 mins before"));
    }

    #[test]
    fn selection_controls_the_highlight() {
        let e = event("evt-1", "Standup", vec![]);
        assert!(!is_highlighted(&e, None));
        assert!(!is_highlighted(&e, Some("evt-2")));
        assert!(is_highlighted(&e, Some("evt-1")));
    }

    #[test]
    fn backend_events_without_ids_never_match_a_selection() {
        let e = event("", "Standup", vec![]);
        assert!(!is_highlighted(&e, Some("")));
    }

    #[test]
    fn month_grid_lists_the_months_events() {
        let events = vec![event("evt-1", "Standup", vec![5])];
        let grid = render_month(&events, 2024, 1, None);
        assert!(grid.contains("Standup"));
        assert!(grid.contains("Reminder 5 mins before"));

        let other_month = render_month(&events, 2024, 3, None);
        assert!(!other_month.contains("Standup"));
    }
}
