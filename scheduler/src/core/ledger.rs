//! Assignment history
//!
//! Records are kept in insertion order. Date ordering is only ever a view;
//! the rotation selector depends on storage order.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::SessionRecord;

use crate::error::{SchedulerError, SchedulerResult};

/// Append-only sequence of session records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLedger {
    records: Vec<SessionRecord>,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from records already in storage order
    pub fn from_records(records: Vec<SessionRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[SessionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Return a copy of the ledger with one record added at the end
    pub fn append(
        &self,
        participant_1: &str,
        participant_2: &str,
        date: NaiveDate,
    ) -> SchedulerResult<HistoryLedger> {
        if participant_1 == participant_2 {
            return Err(SchedulerError::SameParticipant {
                name: participant_1.to_string(),
            });
        }

        let mut records = self.records.clone();
        records.push(SessionRecord::new(date, participant_1, participant_2));
        Ok(HistoryLedger { records })
    }

    /// Every name in storage order, interleaving the two columns row by row
    pub fn flattened_participants(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().flat_map(|record| record.participants())
    }

    /// Total appearances per participant across both columns
    pub fn frequency(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for name in self.flattened_participants() {
            *counts.entry(name.to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// Frequency ordered for charting: highest count first, then by name
    pub fn frequency_ranked(&self) -> Vec<(String, usize)> {
        let mut ranked: Vec<(String, usize)> = self.frequency().into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked
    }

    /// Records newest first; equal dates keep their insertion order
    pub fn sorted_by_date_desc(&self) -> Vec<SessionRecord> {
        let mut sorted = self.records.clone();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }
}
