//! Service-specific tests
//!
//! Each service has its own test file; shared fixtures live in `common`.


pub mod common {
    use chrono::NaiveDate;
    use shared::{Participant, SessionRecord};

    use crate::core::{HistoryLedger, Roster};

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    /// Four-person team, one inactive
    pub fn sample_roster() -> Roster {
        Roster::from_edits(vec![
            Participant::active("Ada"),
            Participant::active("Grace"),
            Participant::active("Linus"),
            Participant::inactive("Ken"),
        ])
        .expect("valid roster")
    }

    pub fn sample_ledger() -> HistoryLedger {
        HistoryLedger::from_records(vec![
            SessionRecord::new(date(2024, 1, 5), "Ada", "Grace"),
            SessionRecord::new(date(2024, 1, 19), "Linus", "Ken"),
        ])
    }
}
