//! Core shared types and identifiers

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{SharedError, SharedResult};

/// Format used for dates in persisted tables and the HTTP API
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Component tag attached to structured log events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentId {
    /// Rotation, cadence and ledger logic
    Scheduler,
    /// Storage backends and the spreadsheet codec
    Gateway,
    /// HTTP presentation layer
    WebServer,
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentId::Scheduler => write!(f, "scheduler"),
            ComponentId::Gateway => write!(f, "gateway"),
            ComponentId::WebServer => write!(f, "webserver"),
        }
    }
}

/// A team member who can be assigned to a session
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub active: bool,
}

impl Participant {
    pub fn new(name: impl Into<String>, active: bool) -> Self {
        Self {
            name: name.into(),
            active,
        }
    }

    pub fn active(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }

    pub fn inactive(name: impl Into<String>) -> Self {
        Self::new(name, false)
    }
}

/// One pairing of two participants for a meeting date.
///
/// Participants are referenced by name only; a record may outlive the
/// roster entry it points at.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionRecord {
    pub date: NaiveDate,
    pub participant_1: String,
    pub participant_2: String,
}

impl SessionRecord {
    pub fn new(date: NaiveDate, participant_1: impl Into<String>, participant_2: impl Into<String>) -> Self {
        Self {
            date,
            participant_1: participant_1.into(),
            participant_2: participant_2.into(),
        }
    }

    /// Both names in column order
    pub fn participants(&self) -> [&str; 2] {
        [&self.participant_1, &self.participant_2]
    }
}

/// Parse a strict `YYYY-MM-DD` date
pub fn parse_iso_date(value: &str) -> SharedResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ISO_DATE_FORMAT).map_err(|_| SharedError::MalformedDate {
        value: value.to_string(),
    })
}

/// Render a date as `YYYY-MM-DD`
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}
