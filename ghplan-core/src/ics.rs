//! ICS generation: all-day pseudo-events encoding contribution intensity.

use crate::error::PlanResult;
use chrono::{Duration, NaiveDate};
use icalendar::{Calendar, Component, Event, EventLike, Property, ValueType};

/// Generate .ics content for a set of contribution days.
///
/// A day at level k gets k all-day events, so a synced calendar shows the
/// intended contribution count for that date. Output is fully deterministic:
/// UIDs derive from (date, index) and DTSTAMP from the date itself.
pub fn generate_ics(days: &[(NaiveDate, u8)], title: &str) -> PlanResult<String> {
    let mut cal = Calendar::new();
    cal.name(title);

    for (date, level) in days {
        for n in 0..*level {
            let mut event = Event::new();
            event.uid(&format!("ghplan-{}-{}@ghplan", date.format("%Y%m%d"), n));
            event.summary(title);

            // DTSTAMP is required by RFC 5545; derive it from the event date
            // so identical inputs produce identical files.
            event.add_property("DTSTAMP", date.format("%Y%m%dT000000Z").to_string());

            // All-day event; DTEND is exclusive.
            add_date_property(&mut event, "DTSTART", *date);
            add_date_property(&mut event, "DTEND", *date + Duration::days(1));

            // Keep the pseudo-events from blocking free/busy time.
            event.add_property("TRANSP", "TRANSPARENT");

            cal.push(event.done());
        }
    }

    Ok(cal.done().to_string())
}

/// Add a date-valued property (VALUE=DATE, no time component).
fn add_date_property(event: &mut Event, name: &str, date: NaiveDate) {
    let mut prop = Property::new(name, date.format("%Y%m%d").to_string());
    prop.append_parameter(ValueType::Date);
    event.append_property(prop);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn count_events(ics: &str) -> usize {
        ics.lines().filter(|l| l.trim() == "BEGIN:VEVENT").count()
    }

    #[test]
    fn test_single_day_single_level_yields_one_event() {
        let ics = generate_ics(&[(date(2024, 3, 15), 1)], "Hi").unwrap();

        assert_eq!(count_events(&ics), 1, "ICS:\n{}", ics);
        assert!(
            ics.contains("DTSTART;VALUE=DATE:20240315"),
            "DTSTART should be a date value. ICS:\n{}",
            ics
        );
        assert!(
            ics.contains("DTEND;VALUE=DATE:20240316"),
            "DTEND should be the following day. ICS:\n{}",
            ics
        );
    }

    #[test]
    fn test_level_encodes_event_count() {
        let ics = generate_ics(&[(date(2024, 3, 15), 3)], "Hi").unwrap();
        assert_eq!(count_events(&ics), 3, "level 3 should yield 3 events");

        // Each event on the same day needs its own UID.
        let uids: std::collections::HashSet<_> = ics
            .lines()
            .filter(|l| l.starts_with("UID:"))
            .collect();
        assert_eq!(uids.len(), 3, "UIDs must be distinct. ICS:\n{}", ics);
    }

    #[test]
    fn test_output_is_deterministic() {
        let days = [(date(2024, 3, 15), 2), (date(2024, 3, 18), 1)];
        let a = generate_ics(&days, "Hi").unwrap();
        let b = generate_ics(&days, "Hi").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_no_days_yields_empty_calendar() {
        let ics = generate_ics(&[], "Hi").unwrap();
        assert_eq!(count_events(&ics), 0);
        assert!(ics.contains("BEGIN:VCALENDAR"));
    }
}
