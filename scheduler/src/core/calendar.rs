//! Biweekly meeting cadence
//!
//! Meetings happen every other Friday, counted from a fixed anchor Friday.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Recurring meeting schedule anchored to a reference date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cadence {
    /// A meeting day; its weekday is the meeting weekday
    pub anchor: NaiveDate,
    /// Days between meetings
    pub interval_days: i64,
}

impl Default for Cadence {
    fn default() -> Self {
        Self {
            // 2024-01-05 is a Friday
            anchor: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap_or_default(),
            interval_days: 14,
        }
    }
}

impl Cadence {
    pub fn new(anchor: NaiveDate, interval_days: i64) -> Self {
        Self {
            anchor,
            interval_days: interval_days.max(1),
        }
    }

    pub fn weekday(&self) -> Weekday {
        self.anchor.weekday()
    }

    /// First meeting day on or after `today`.
    ///
    /// Steps to the next meeting weekday, then forward until the date is
    /// in phase with the anchor. For a 14 day interval that is at most one
    /// extra week.
    pub fn next_meeting_date(&self, today: NaiveDate) -> NaiveDate {
        let target = self.weekday().num_days_from_monday() as i64;
        let current = today.weekday().num_days_from_monday() as i64;
        let days_until_weekday = (target - current).rem_euclid(7);

        let candidate = today + Duration::days(days_until_weekday);
        let phase = (candidate - self.anchor).num_days().rem_euclid(self.interval_days);
        if phase == 0 {
            candidate
        } else {
            candidate + Duration::days(self.interval_days - phase)
        }
    }

    /// The next `count` meeting days starting from `today`
    pub fn upcoming(&self, today: NaiveDate, count: usize) -> Vec<NaiveDate> {
        let first = self.next_meeting_date(today);
        (0..count as i64)
            .map(|i| first + Duration::days(i * self.interval_days))
            .collect()
    }
}

/// Next meeting day on the default biweekly Friday cadence
pub fn next_meeting_date(today: NaiveDate) -> NaiveDate {
    Cadence::default().next_meeting_date(today)
}
