//! Event entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::value_objects::EventId;

/// An event users can register for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    /// Capacity hint; registrations are not capped by it
    pub max_attendees: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Whether an event lies ahead of or behind a reference time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventTiming {
    Upcoming,
    Past,
}

impl EventTiming {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Past => "past",
        }
    }

    /// Classify a date: strictly after `now` is upcoming, anything else is past
    pub fn classify(date: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if date > now {
            Self::Upcoming
        } else {
            Self::Past
        }
    }
}

impl fmt::Display for EventTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventTiming {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "upcoming" => Ok(Self::Upcoming),
            "past" => Ok(Self::Past),
            other => Err(format!("unknown event status '{other}'")),
        }
    }
}

/// Data needed to insert an event
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub max_attendees: i32,
}

/// Partial update of an event
#[derive(Debug, Clone, Default)]
pub struct EventChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub max_attendees: Option<i32>,
}

impl EventChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.date.is_none()
            && self.location.is_none()
            && self.max_attendees.is_none()
    }
}

impl Event {
    pub fn timing(&self, now: DateTime<Utc>) -> EventTiming {
        EventTiming::classify(self.date, now)
    }

    /// Apply a partial update. Returns `true` if anything was set.
    pub fn apply(&mut self, changes: EventChanges) -> bool {
        if changes.is_empty() {
            return false;
        }

        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(date) = changes.date {
            self.date = date;
        }
        if let Some(location) = changes.location {
            self.location = location;
        }
        if let Some(max_attendees) = changes.max_attendees {
            self.max_attendees = max_attendees;
        }

        self.updated_at = Utc::now();
        true
    }
}
