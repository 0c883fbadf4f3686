//! Participant rotation
//!
//! Picks the next pair uniformly at random from the available members,
//! skipping names that appear in the leading entries of the history.

use std::collections::{BTreeSet, HashSet};

use rand::seq::SliceRandom;
use rand::Rng;
use shared::{component_debug, ComponentId};

use crate::core::ledger::HistoryLedger;
use crate::error::{SchedulerError, SchedulerResult};

/// Number of history entries excluded from the next selection
pub const DEFAULT_RECENCY_WINDOW: usize = 3;

/// The first `window` distinct names of the flattened history.
///
/// History is read in storage order, not date order. A name repeated
/// within the leading sessions only fills one slot.
pub fn recently_used(history: &HistoryLedger, window: usize) -> HashSet<&str> {
    let mut recent = HashSet::with_capacity(window);
    for name in history.flattened_participants() {
        if recent.len() >= window {
            break;
        }
        recent.insert(name);
    }
    recent
}

/// Available names that are not recently used, sorted and deduplicated
pub fn eligible_candidates<'a, I>(history: &HistoryLedger, available: I, window: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let recent = recently_used(history, window);
    available
        .into_iter()
        .filter(|name| !recent.contains(*name))
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Draw two distinct eligible participants without replacement
pub fn select_next_pair<'a, I, R>(
    history: &HistoryLedger,
    available: I,
    window: usize,
    rng: &mut R,
) -> SchedulerResult<(String, String)>
where
    I: IntoIterator<Item = &'a str>,
    R: Rng + ?Sized,
{
    let candidates = eligible_candidates(history, available, window);
    if candidates.len() < 2 {
        return Err(SchedulerError::InsufficientCandidates {
            eligible: candidates.len(),
        });
    }

    let mut picked = candidates.choose_multiple(rng, 2).cloned();
    match (picked.next(), picked.next()) {
        (Some(first), Some(second)) => {
            component_debug!(
                ComponentId::Scheduler,
                "🎲 Selected {} & {} from {} eligible",
                first,
                second,
                candidates.len()
            );
            Ok((first, second))
        }
        _ => Err(SchedulerError::InsufficientCandidates {
            eligible: candidates.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use shared::SessionRecord;

    fn ledger(pairs: &[(&str, &str)]) -> HistoryLedger {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        HistoryLedger::from_records(pairs.iter().map(|(a, b)| SessionRecord::new(date, *a, *b)).collect())
    }

    #[test]
    fn test_recently_used_takes_leading_entries() {
        let history = ledger(&[("A", "B"), ("C", "D"), ("A", "C")]);
        let recent = recently_used(&history, 3);
        assert_eq!(recent, HashSet::from(["A", "B", "C"]));

        assert!(recently_used(&history, 0).is_empty());
        assert_eq!(recently_used(&history, 100).len(), 4);
    }

    #[test]
    fn test_recently_used_skips_repeated_names() {
        let history = ledger(&[("A", "B"), ("A", "C")]);
        assert_eq!(recently_used(&history, 3), HashSet::from(["A", "B", "C"]));
        assert_eq!(recently_used(&history, 2), HashSet::from(["A", "B"]));
    }

    #[test]
    fn test_repeated_leading_names_do_not_shrink_exclusion() {
        let history = ledger(&[("A", "B"), ("A", "C")]);
        let mut rng = StdRng::seed_from_u64(5);

        let err = select_next_pair(&history, ["A", "B", "C", "D"], 3, &mut rng).unwrap_err();
        assert!(matches!(err, SchedulerError::InsufficientCandidates { eligible: 1 }));
    }

    #[test]
    fn test_only_one_possible_pair() {
        let history = ledger(&[("A", "B"), ("C", "D"), ("A", "C")]);
        let available = ["A", "B", "C", "D", "E"];

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let (first, second) = select_next_pair(&history, available, 3, &mut rng).unwrap();
            let pair: BTreeSet<String> = [first, second].into_iter().collect();
            assert_eq!(pair, BTreeSet::from(["D".to_string(), "E".to_string()]));
        }
    }

    #[test]
    fn test_selection_respects_exclusion() {
        let history = ledger(&[("A", "B"), ("C", "D")]);
        let available = ["A", "B", "C", "D", "E", "F", "G"];

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let (first, second) = select_next_pair(&history, available, 2, &mut rng).unwrap();
            assert_ne!(first, second);
            for name in [&first, &second] {
                assert!(available.contains(&name.as_str()));
                assert!(name != "A" && name != "B");
            }
        }
    }

    #[test]
    fn test_every_eligible_name_gets_picked_eventually() {
        let history = HistoryLedger::new();
        let available = ["A", "B", "C", "D"];
        let mut seen = BTreeSet::new();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let (first, second) = select_next_pair(&history, available, 3, &mut rng).unwrap();
            seen.insert(first);
            seen.insert(second);
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_insufficient_candidates() {
        let history = ledger(&[("A", "B"), ("C", "D")]);
        let mut rng = StdRng::seed_from_u64(1);

        let err = select_next_pair(&history, ["A", "B", "C", "E"], 3, &mut rng).unwrap_err();
        assert!(matches!(err, SchedulerError::InsufficientCandidates { eligible: 1 }));

        let err = select_next_pair(&HistoryLedger::new(), ["A"], 3, &mut rng).unwrap_err();
        assert!(matches!(err, SchedulerError::InsufficientCandidates { eligible: 1 }));

        let err = select_next_pair(&HistoryLedger::new(), std::iter::empty(), 3, &mut rng).unwrap_err();
        assert!(matches!(err, SchedulerError::InsufficientCandidates { eligible: 0 }));
    }

    #[test]
    fn test_duplicate_available_names_count_once() {
        let mut rng = StdRng::seed_from_u64(3);
        let err = select_next_pair(&HistoryLedger::new(), ["A", "A"], 3, &mut rng).unwrap_err();
        assert!(matches!(err, SchedulerError::InsufficientCandidates { eligible: 1 }));
    }

    #[test]
    fn test_history_may_reference_unknown_names() {
        let history = ledger(&[("Former", "Member")]);
        let candidates = eligible_candidates(&history, ["B", "A"], 3);
        assert_eq!(candidates, vec!["A".to_string(), "B".to_string()]);
    }
}
