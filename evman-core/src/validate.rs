//! Draft validation.
//!
//! Produces field-keyed, human-readable messages so callers can display
//! each error next to the field it belongs to.

use std::fmt;

use crate::event::{EventDraft, MAX_ATTENDEES_LIMIT};

/// A validation failure tied to a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        FieldError {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validate a draft, returning every failure found.
pub fn validate(draft: &EventDraft) -> Vec<FieldError> {
    let mut errors = Vec::new();

    let title = draft.title.trim();
    if title.is_empty() {
        errors.push(FieldError::new("title", "Title is required"));
    } else if title.chars().count() < 3 {
        errors.push(FieldError::new(
            "title",
            "Title must be at least 3 characters long",
        ));
    }

    let description = draft.description.trim();
    if description.is_empty() {
        errors.push(FieldError::new("description", "Description is required"));
    } else if description.chars().count() < 10 {
        errors.push(FieldError::new(
            "description",
            "Description must be at least 10 characters long",
        ));
    }

    if draft.date.is_none() {
        errors.push(FieldError::new("date", "Date is required"));
    }

    if draft.time.is_none() {
        errors.push(FieldError::new("time", "Time is required"));
    }

    if draft.location.trim().is_empty() {
        errors.push(FieldError::new("location", "Location is required"));
    }

    if draft.category.is_none() {
        errors.push(FieldError::new("category", "Category is required"));
    }

    if draft.priority.is_none() {
        errors.push(FieldError::new("priority", "Priority is required"));
    }

    if let Some(max) = draft.max_attendees {
        if max < 1 {
            errors.push(FieldError::new(
                "max_attendees",
                "Maximum attendees must be at least 1",
            ));
        } else if max > MAX_ATTENDEES_LIMIT {
            errors.push(FieldError::new(
                "max_attendees",
                "Maximum attendees cannot exceed 10,000",
            ));
        }
    }

    errors
}
