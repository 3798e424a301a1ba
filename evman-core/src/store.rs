//! Local event storage.
//!
//! The whole collection is persisted as a single JSON array at
//! `<data_dir>/events.json`. Reads that fail for any reason degrade to an
//! empty collection with a logged warning; they never abort the caller.

use std::path::PathBuf;

use crate::error::{EvmanError, EvmanResult};
use crate::event::Event;

pub struct EventStore {
    path: PathBuf,
}

impl EventStore {
    pub fn new(path: PathBuf) -> Self {
        EventStore { path }
    }

    /// Load all events.
    ///
    /// A missing or unreadable file yields an empty collection.
    pub fn load(&self) -> Vec<Event> {
        if !self.path.exists() {
            return Vec::new();
        }

        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "could not read event store, starting empty"
                );
                return Vec::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(events) => events,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "event store is not valid JSON, starting empty"
                );
                Vec::new()
            }
        }
    }

    /// Write the full collection back to disk, creating the data
    /// directory on demand.
    pub fn save(&self, events: &[Event]) -> EvmanResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(events)
            .map_err(|e| EvmanError::Serialization(e.to_string()))?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    pub fn find(&self, id: &str) -> EvmanResult<Event> {
        self.load()
            .into_iter()
            .find(|event| event.id == id)
            .ok_or_else(|| EvmanError::EventNotFound(id.to_string()))
    }

    pub fn insert(&self, event: Event) -> EvmanResult<Event> {
        let mut events = self.load();
        events.push(event.clone());
        self.save(&events)?;
        Ok(event)
    }

    /// Replace the event with the given id.
    pub fn update(&self, id: &str, updated: Event) -> EvmanResult<Event> {
        let mut events = self.load();
        let slot = events
            .iter_mut()
            .find(|event| event.id == id)
            .ok_or_else(|| EvmanError::EventNotFound(id.to_string()))?;

        *slot = updated.clone();
        self.save(&events)?;
        Ok(updated)
    }

    /// Delete the event with the given id.
    ///
    /// An unknown id is an error and leaves the collection untouched.
    pub fn delete(&self, id: &str) -> EvmanResult<()> {
        let mut events = self.load();
        let before = events.len();
        events.retain(|event| event.id != id);

        if events.len() == before {
            return Err(EvmanError::EventNotFound(id.to_string()));
        }

        self.save(&events)
    }
}
