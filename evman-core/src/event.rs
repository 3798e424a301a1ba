//! Event record types.
//!
//! These types represent a single scheduled event with its descriptive and
//! logistical fields. Drafts carry user input before validation; records are
//! only ever constructed from a draft that passed validation.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EvmanError, EvmanResult};
use crate::validate::validate;

/// Upper bound on the optional attendee limit.
pub const MAX_ATTENDEES_LIMIT: u32 = 10_000;

/// A scheduled event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub category: Category,
    pub priority: Priority,
    /// Attendee cap, when the event has one (1..=10000)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_attendees: Option<u32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Build a new event from a draft, generating a fresh id.
    ///
    /// Validates the draft first. The same captured `now` is used for both
    /// timestamps, so `created_at == updated_at` on a new record.
    pub fn from_draft(draft: &EventDraft, now: DateTime<Utc>) -> EvmanResult<Self> {
        let errors = validate(draft);
        match (draft.date, draft.time, draft.category, draft.priority) {
            (Some(date), Some(time), Some(category), Some(priority)) if errors.is_empty() => {
                Ok(Event {
                    id: Uuid::new_v4().to_string(),
                    title: draft.title.trim().to_string(),
                    description: draft.description.trim().to_string(),
                    date,
                    time,
                    location: draft.location.trim().to_string(),
                    category,
                    priority,
                    max_attendees: draft.max_attendees,
                    created_at: now,
                    updated_at: now,
                })
            }
            _ => Err(EvmanError::Validation(errors)),
        }
    }

    /// Merge a draft into this event.
    ///
    /// Validates the draft first. The id and `created_at` are preserved;
    /// `updated_at` is refreshed to `now`.
    pub fn apply(&self, draft: &EventDraft, now: DateTime<Utc>) -> EvmanResult<Self> {
        let errors = validate(draft);
        match (draft.date, draft.time, draft.category, draft.priority) {
            (Some(date), Some(time), Some(category), Some(priority)) if errors.is_empty() => {
                Ok(Event {
                    id: self.id.clone(),
                    title: draft.title.trim().to_string(),
                    description: draft.description.trim().to_string(),
                    date,
                    time,
                    location: draft.location.trim().to_string(),
                    category,
                    priority,
                    max_attendees: draft.max_attendees,
                    created_at: self.created_at,
                    updated_at: now,
                })
            }
            _ => Err(EvmanError::Validation(errors)),
        }
    }

    /// Combined date and time the event starts at (naive wall-clock).
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// Classify the event relative to a wall-clock instant.
    ///
    /// An event on today's calendar date is `Today` regardless of whether
    /// its time has already passed.
    pub fn status(&self, now: NaiveDateTime) -> EventStatus {
        if self.date == now.date() {
            EventStatus::Today
        } else if self.starts_at() > now {
            EventStatus::Upcoming
        } else {
            EventStatus::Past
        }
    }

    /// Case-insensitive substring match over title, description and location.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.title.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
            || self.location.to_lowercase().contains(&term)
    }
}

/// User-editable event fields, prior to validation.
///
/// Typed fields are optional so that required-ness is a validation outcome
/// rather than a construction failure.
#[derive(Debug, Clone, Default)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub location: String,
    pub category: Option<Category>,
    pub priority: Option<Priority>,
    pub max_attendees: Option<u32>,
}

impl From<&Event> for EventDraft {
    fn from(event: &Event) -> Self {
        EventDraft {
            title: event.title.clone(),
            description: event.description.clone(),
            date: Some(event.date),
            time: Some(event.time),
            location: event.location.clone(),
            category: Some(event.category),
            priority: Some(event.priority),
            max_attendees: event.max_attendees,
        }
    }
}

/// Fixed set of event categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Community,
    Education,
    Entertainment,
    Sports,
    Business,
    #[serde(rename = "Health & Wellness")]
    HealthWellness,
    #[serde(rename = "Arts & Culture")]
    ArtsCulture,
    Technology,
    Other,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Community,
        Category::Education,
        Category::Entertainment,
        Category::Sports,
        Category::Business,
        Category::HealthWellness,
        Category::ArtsCulture,
        Category::Technology,
        Category::Other,
    ];

    /// Display label, as shown in listings and accepted on input.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Community => "Community",
            Category::Education => "Education",
            Category::Entertainment => "Entertainment",
            Category::Sports => "Sports",
            Category::Business => "Business",
            Category::HealthWellness => "Health & Wellness",
            Category::ArtsCulture => "Arts & Culture",
            Category::Technology => "Technology",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Parse a category label, ignoring case and punctuation
    /// ("health & wellness", "Health-Wellness" and "healthwellness" all match).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        Category::ALL
            .into_iter()
            .find(|c| normalize(c.label()) == normalized)
            .ok_or_else(|| {
                let labels: Vec<_> = Category::ALL.iter().map(|c| c.label()).collect();
                format!("Unknown category '{}'. Available: {}", s, labels.join(", "))
            })
    }
}

fn normalize(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// Event priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(format!(
                "Unknown priority '{}'. Available: low, medium, high",
                s
            )),
        }
    }
}

/// Where an event sits relative to the current wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Upcoming,
    Today,
    Past,
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EventStatus::Upcoming => "upcoming",
            EventStatus::Today => "today",
            EventStatus::Past => "past",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_draft() -> EventDraft {
        EventDraft {
            title: "Team Standup".to_string(),
            description: "Weekly sync for the whole team".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 3, 20),
            time: NaiveTime::from_hms_opt(15, 0, 0),
            location: "Community Hall".to_string(),
            category: Some(Category::Community),
            priority: Some(Priority::Medium),
            max_attendees: Some(50),
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    // --- from_draft ---

    #[test]
    fn from_draft_sets_equal_timestamps() {
        let event = Event::from_draft(&make_draft(), fixed_now()).unwrap();
        assert_eq!(event.created_at, event.updated_at);
        assert_eq!(event.created_at, fixed_now());
    }

    #[test]
    fn from_draft_generates_unique_ids() {
        let a = Event::from_draft(&make_draft(), fixed_now()).unwrap();
        let b = Event::from_draft(&make_draft(), fixed_now()).unwrap();
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn from_draft_trims_text_fields() {
        let mut draft = make_draft();
        draft.title = "  Team Standup  ".to_string();
        draft.location = " Community Hall ".to_string();
        let event = Event::from_draft(&draft, fixed_now()).unwrap();
        assert_eq!(event.title, "Team Standup");
        assert_eq!(event.location, "Community Hall");
    }

    #[test]
    fn from_draft_rejects_invalid() {
        let mut draft = make_draft();
        draft.title = "ab".to_string();
        let err = Event::from_draft(&draft, fixed_now()).unwrap_err();
        assert!(matches!(err, EvmanError::Validation(ref errors) if !errors.is_empty()));
    }

    #[test]
    fn from_draft_rejects_missing_date() {
        let mut draft = make_draft();
        draft.date = None;
        assert!(Event::from_draft(&draft, fixed_now()).is_err());
    }

    // --- apply ---

    #[test]
    fn apply_preserves_id_and_created_at() {
        let event = Event::from_draft(&make_draft(), fixed_now()).unwrap();

        let mut draft = EventDraft::from(&event);
        draft.title = "Renamed Standup".to_string();

        let later = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();
        let updated = event.apply(&draft, later).unwrap();

        assert_eq!(updated.id, event.id);
        assert_eq!(updated.created_at, event.created_at);
        assert_eq!(updated.updated_at, later);
        assert_eq!(updated.title, "Renamed Standup");
    }

    #[test]
    fn apply_rejects_invalid_draft() {
        let event = Event::from_draft(&make_draft(), fixed_now()).unwrap();
        let mut draft = EventDraft::from(&event);
        draft.description = "too short".to_string();
        assert!(event.apply(&draft, fixed_now()).is_err());
    }

    // --- status ---

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn status_today_takes_precedence_over_time() {
        let mut draft = make_draft();
        draft.date = NaiveDate::from_ymd_opt(2026, 3, 20);
        draft.time = NaiveTime::from_hms_opt(8, 0, 0);
        let event = Event::from_draft(&draft, fixed_now()).unwrap();

        // Same calendar date, time already passed: still "today"
        assert_eq!(event.status(at(2026, 3, 20, 12, 0)), EventStatus::Today);
    }

    #[test]
    fn status_upcoming_and_past() {
        let event = Event::from_draft(&make_draft(), fixed_now()).unwrap();
        assert_eq!(event.status(at(2026, 3, 19, 12, 0)), EventStatus::Upcoming);
        assert_eq!(event.status(at(2026, 3, 21, 12, 0)), EventStatus::Past);
    }

    // --- search ---

    #[test]
    fn search_matches_any_text_field() {
        let event = Event::from_draft(&make_draft(), fixed_now()).unwrap();
        assert!(event.matches_search("standup"));
        assert!(event.matches_search("SYNC"));
        assert!(event.matches_search("community hall"));
        assert!(!event.matches_search("picnic"));
    }

    // --- enums ---

    #[test]
    fn category_parses_loose_input() {
        assert_eq!(
            "health & wellness".parse::<Category>().unwrap(),
            Category::HealthWellness
        );
        assert_eq!(
            "Arts-Culture".parse::<Category>().unwrap(),
            Category::ArtsCulture
        );
        assert_eq!("SPORTS".parse::<Category>().unwrap(), Category::Sports);
        assert!("cooking".parse::<Category>().is_err());
    }

    #[test]
    fn category_serializes_as_label() {
        let json = serde_json::to_string(&Category::HealthWellness).unwrap();
        assert_eq!(json, "\"Health & Wellness\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::HealthWellness);
    }

    #[test]
    fn priority_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
        let back: Priority = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(back, Priority::Medium);
    }
}
