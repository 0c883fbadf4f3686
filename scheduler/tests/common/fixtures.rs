//! Test fixtures for scheduler tests
//!
//! Consistent roster and history data used across the suites.

use chrono::NaiveDate;
use scheduler::{HistoryLedger, Roster};
use shared::{Participant, SessionRecord};

pub struct TestFixtures;

impl TestFixtures {
    pub const TEAM: [&'static str; 5] = ["A", "B", "C", "D", "E"];

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Everyone in `TEAM` active, plus one former member
    pub fn roster() -> Roster {
        let mut rows: Vec<Participant> = Self::TEAM.iter().map(|name| Participant::active(*name)).collect();
        rows.push(Participant::inactive("Z"));
        Roster::from_edits(rows).unwrap()
    }

    /// History whose leading three entries are A, B, C
    pub fn ledger() -> HistoryLedger {
        HistoryLedger::from_records(vec![
            SessionRecord::new(Self::date(2024, 1, 5), "A", "B"),
            SessionRecord::new(Self::date(2024, 1, 19), "C", "D"),
            SessionRecord::new(Self::date(2024, 2, 2), "A", "C"),
        ])
    }

    pub fn team() -> Vec<String> {
        Self::TEAM.iter().map(|name| name.to_string()).collect()
    }
}
