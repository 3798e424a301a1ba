//! Search, filtering, sorting and counters over the event collection.
//!
//! Everything here is a plain pass over an in-memory slice; the caller
//! supplies the wall-clock instant so results are reproducible.

use std::str::FromStr;

use chrono::NaiveDateTime;

use crate::event::Event;

/// Status predicate applied when listing events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Upcoming,
    Today,
    Past,
}

impl StatusFilter {
    fn matches(&self, event: &Event, now: NaiveDateTime) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Upcoming => event.starts_at() > now,
            StatusFilter::Today => event.date == now.date(),
            StatusFilter::Past => event.starts_at() < now,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "upcoming" => Ok(StatusFilter::Upcoming),
            "today" => Ok(StatusFilter::Today),
            "past" => Ok(StatusFilter::Past),
            _ => Err(format!(
                "Unknown status '{}'. Available: all, upcoming, today, past",
                s
            )),
        }
    }
}

/// Apply search and status filters, then sort ascending by date and time.
pub fn filter_and_sort(
    events: Vec<Event>,
    search: Option<&str>,
    status: StatusFilter,
    now: NaiveDateTime,
) -> Vec<Event> {
    let mut filtered: Vec<Event> = events
        .into_iter()
        .filter(|event| match search {
            Some(term) if !term.trim().is_empty() => event.matches_search(term.trim()),
            _ => true,
        })
        .filter(|event| status.matches(event, now))
        .collect();

    filtered.sort_by_key(Event::starts_at);
    filtered
}

/// Dashboard counters over the whole collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub upcoming: usize,
    pub today: usize,
    pub past: usize,
}

pub fn stats(events: &[Event], now: NaiveDateTime) -> Stats {
    Stats {
        total: events.len(),
        upcoming: events.iter().filter(|e| e.starts_at() > now).count(),
        today: events.iter().filter(|e| e.date == now.date()).count(),
        past: events.iter().filter(|e| e.starts_at() < now).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Category, EventDraft, Priority};
    use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};

    fn make_event(title: &str, date: (i32, u32, u32), time: (u32, u32)) -> Event {
        let draft = EventDraft {
            title: title.to_string(),
            description: format!("Description for {title}"),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2),
            time: NaiveTime::from_hms_opt(time.0, time.1, 0),
            location: "Town Hall".to_string(),
            category: Some(Category::Community),
            priority: Some(Priority::Medium),
            max_attendees: None,
        };
        Event::from_draft(&draft, Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()).unwrap()
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 20)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn sample() -> Vec<Event> {
        vec![
            make_event("Past Workshop", (2026, 3, 10), (9, 0)),
            make_event("Morning Yoga", (2026, 3, 20), (8, 0)),
            make_event("Evening Concert", (2026, 3, 20), (19, 0)),
            make_event("Future Fair", (2026, 4, 2), (10, 0)),
        ]
    }

    // --- status filters ---

    #[test]
    fn upcoming_filter_uses_datetime() {
        let result = filter_and_sort(sample(), None, StatusFilter::Upcoming, now());
        let titles: Vec<_> = result.iter().map(|e| e.title.as_str()).collect();
        // The 19:00 event today is still ahead of 12:00, so it counts
        assert_eq!(titles, vec!["Evening Concert", "Future Fair"]);
    }

    #[test]
    fn past_filter_uses_datetime() {
        let result = filter_and_sort(sample(), None, StatusFilter::Past, now());
        let titles: Vec<_> = result.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Past Workshop", "Morning Yoga"]);
    }

    #[test]
    fn today_filter_matches_calendar_date() {
        let result = filter_and_sort(sample(), None, StatusFilter::Today, now());
        let titles: Vec<_> = result.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Morning Yoga", "Evening Concert"]);
    }

    #[test]
    fn upcoming_and_past_partition_off_today_events() {
        // Every event is either strictly before or strictly after now
        // (no event starts exactly at now), so upcoming + past == total.
        let events = sample();
        let up = filter_and_sort(events.clone(), None, StatusFilter::Upcoming, now()).len();
        let past = filter_and_sort(events.clone(), None, StatusFilter::Past, now()).len();
        assert_eq!(up + past, events.len());
    }

    // --- sort ---

    #[test]
    fn list_sorted_ascending_by_date_and_time() {
        let mut events = sample();
        events.reverse();
        let result = filter_and_sort(events, None, StatusFilter::All, now());
        let starts: Vec<_> = result.iter().map(Event::starts_at).collect();
        let mut sorted = starts.clone();
        sorted.sort();
        assert_eq!(starts, sorted);
        assert_eq!(result.len(), 4);
    }

    // --- search ---

    #[test]
    fn search_is_case_insensitive_and_combines_with_status() {
        let result = filter_and_sort(sample(), Some("CONCERT"), StatusFilter::All, now());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Evening Concert");

        // Search term matches a past event, but the upcoming filter excludes it
        let result = filter_and_sort(sample(), Some("workshop"), StatusFilter::Upcoming, now());
        assert!(result.is_empty());
    }

    #[test]
    fn blank_search_matches_everything() {
        let result = filter_and_sort(sample(), Some("   "), StatusFilter::All, now());
        assert_eq!(result.len(), 4);
    }

    // --- stats ---

    #[test]
    fn stats_counts() {
        let events = sample();
        let s = stats(&events, now());
        assert_eq!(s.total, 4);
        assert_eq!(s.upcoming, 2);
        assert_eq!(s.today, 2);
        assert_eq!(s.past, 2);
    }

    // --- parsing ---

    #[test]
    fn status_filter_from_str() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "Upcoming".parse::<StatusFilter>().unwrap(),
            StatusFilter::Upcoming
        );
        assert_eq!("past".parse::<StatusFilter>().unwrap(), StatusFilter::Past);
        assert!("soon".parse::<StatusFilter>().is_err());
    }
}
