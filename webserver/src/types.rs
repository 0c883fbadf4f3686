//! Request and response bodies for the JSON API

use chrono::NaiveDate;
use scheduler::Assignment;
use serde::{Deserialize, Serialize};
use shared::{Participant, SessionRecord};

/// Data for the assignment form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignDefaults {
    pub next_date: NaiveDate,
    pub active_participants: Vec<String>,
    pub recency_window: usize,
    pub upcoming: Vec<NaiveDate>,
}

/// Assignment request; missing fields fall back to the form defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssignBody {
    #[serde(default)]
    pub available: Option<Vec<String>>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub save: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignResponse {
    pub status: String,
    pub message: String,
    pub assignment: Assignment,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub sessions: Vec<SessionRecord>,
}

/// One bar of the participation chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub participant: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrequencyResponse {
    pub frequency: Vec<FrequencyEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterBody {
    pub participants: Vec<Participant>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReloadResponse {
    pub participants: usize,
    pub sessions: usize,
}
