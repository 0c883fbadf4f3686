//! Test fixtures for webserver integration tests

use chrono::NaiveDate;
use scheduler::{HistoryLedger, Roster};
use shared::{Participant, SessionRecord};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A through E active, Z retired
pub fn create_test_roster() -> Roster {
    let mut rows: Vec<Participant> = ["A", "B", "C", "D", "E"]
        .into_iter()
        .map(Participant::active)
        .collect();
    rows.push(Participant::inactive("Z"));
    Roster::from_edits(rows).unwrap()
}

/// Three sessions whose leading participants are A, B and C
pub fn create_test_ledger() -> HistoryLedger {
    HistoryLedger::from_records(vec![
        SessionRecord::new(date(2024, 1, 5), "A", "B"),
        SessionRecord::new(date(2024, 1, 19), "C", "D"),
        SessionRecord::new(date(2024, 2, 2), "A", "C"),
    ])
}

/// Saturday after the cadence anchor
pub fn test_today() -> NaiveDate {
    date(2024, 1, 6)
}
