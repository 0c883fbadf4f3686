//! Team roster
//!
//! Participants are unique by name and kept in alphabetical order. Edits
//! arrive as a full replacement list, the same shape the data editor saves.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use shared::Participant;

use crate::error::{SchedulerError, SchedulerResult};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    participants: Vec<Participant>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate an edited participant list and sort it by name.
    ///
    /// Names are trimmed; empty and duplicate names are rejected.
    pub fn from_edits(rows: Vec<Participant>) -> SchedulerResult<Roster> {
        let mut seen = HashSet::new();
        let mut participants = Vec::with_capacity(rows.len());

        for row in rows {
            let name = row.name.trim().to_string();
            if name.is_empty() {
                return Err(SchedulerError::InvalidParticipant {
                    reason: "participant name cannot be empty".to_string(),
                });
            }
            if !seen.insert(name.clone()) {
                return Err(SchedulerError::DuplicateParticipant { name });
            }
            participants.push(Participant::new(name, row.active));
        }

        participants.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(Roster { participants })
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.name == name)
    }

    /// Names of active participants in roster order
    pub fn active_names(&self) -> Vec<String> {
        self.participants
            .iter()
            .filter(|p| p.active)
            .map(|p| p.name.clone())
            .collect()
    }
}
