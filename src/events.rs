//! Append-only event journal for store mutations.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Kind of store mutation recorded in the journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    UserLoggedIn,
    UserSignedUp,
    UserLoggedOut,
    ProfileUpdated,
    RecipeLikeToggled,
    RecipeCreated,
    RecipeUpdated,
    RecipeDeleted,
    PostCreated,
    PostUpdated,
    PostDeleted,
    PostLikeToggled,
    MessageSent,
    ConversationDeleted,
    StarsEarned,
    RecipeCompleted,
    RecipeReviewed,
}

/// One journal line, stored as JSONL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreEvent {
    pub event_id: Uuid,
    pub event_type: EventType,
    pub timestamp: DateTime<Utc>,
    pub details: serde_json::Value,
}

impl StoreEvent {
    pub fn new(event_type: EventType, details: serde_json::Value) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            event_type,
            timestamp: Utc::now(),
            details,
        }
    }
}

/// Wraps the journal path for a workspace.
#[derive(Debug, Clone)]
pub struct EventLog {
    events_path: PathBuf,
}

impl EventLog {
    pub fn at(root: &Path) -> Self {
        Self {
            events_path: root.join("events.jsonl"),
        }
    }

    pub fn append_event(&self, event: &StoreEvent) -> Result<()> {
        if let Some(parent) = self.events_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.events_path)?;
        file.write_all(serde_json::to_string(event)?.as_bytes())?;
        file.write_all(b"\n")?;
        Ok(())
    }

    pub fn load_events(&self) -> Result<Vec<StoreEvent>> {
        if !self.events_path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.events_path)?;
        let mut events = Vec::new();
        for line in data.lines().filter(|l| !l.trim().is_empty()) {
            let event: StoreEvent = serde_json::from_str(line)?;
            events.push(event);
        }
        Ok(events)
    }

    pub fn load_events_since(&self, cutoff: DateTime<Utc>) -> Result<Vec<StoreEvent>> {
        Ok(self
            .load_events()?
            .into_iter()
            .filter(|event| event.timestamp >= cutoff)
            .collect())
    }
}
