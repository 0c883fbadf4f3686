//! Integration tests for the OfficeHours handle
//!
//! Uses mocked gateways for failure paths and a real workbook file for the
//! end-to-end flow.

mod common;

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use scheduler::{
    AssignmentRequest, HistoryLedger, LocalFileStore, MockPersistenceGateway, OfficeHours, Roster, SchedulerError,
    WorkbookGateway,
};
use shared::Participant;
use tempfile::TempDir;

use common::fixtures::TestFixtures;
use common::helpers::{fixture_gateway, gateway_with, load, storage_failure};

fn request(available: Vec<String>, save: bool) -> AssignmentRequest {
    AssignmentRequest {
        available,
        date: TestFixtures::date(2024, 2, 16),
        save,
    }
}

#[tokio::test]
async fn test_assign_picks_only_possible_pair_and_saves() {
    let mut gateway = fixture_gateway();
    gateway
        .expect_save()
        .withf(|roster, ledger| roster.len() == 6 && ledger.len() == 4)
        .times(1)
        .returning(|_, _| Ok(()));
    let mut office_hours = load(gateway).await;
    let mut rng = StdRng::seed_from_u64(11);

    let assignment = office_hours.assign(&request(TestFixtures::team(), true), &mut rng).await.unwrap();

    let pair: BTreeSet<&str> = [assignment.participant_1.as_str(), assignment.participant_2.as_str()].into();
    assert_eq!(pair, BTreeSet::from(["D", "E"]));
    assert!(assignment.saved);

    let last = office_hours.ledger().records().last().unwrap();
    assert_eq!(last.date, TestFixtures::date(2024, 2, 16));
    assert_eq!(last.participant_1, assignment.participant_1);
}

#[tokio::test]
async fn test_assign_without_save_leaves_ledger_alone() {
    let mut gateway = fixture_gateway();
    gateway.expect_save().never();
    let mut office_hours = load(gateway).await;
    let mut rng = StdRng::seed_from_u64(5);

    let assignment = office_hours.assign(&request(TestFixtures::team(), false), &mut rng).await.unwrap();

    assert!(!assignment.saved);
    assert_eq!(office_hours.ledger(), &TestFixtures::ledger());
}

#[tokio::test]
async fn test_insufficient_candidates_is_recoverable() {
    let mut gateway = fixture_gateway();
    gateway.expect_save().never();
    let mut office_hours = load(gateway).await;
    let mut rng = StdRng::seed_from_u64(5);

    let available = vec!["A".to_string(), "B".to_string(), "D".to_string()];
    let err = office_hours.assign(&request(available, true), &mut rng).await.unwrap_err();

    assert!(matches!(err, SchedulerError::InsufficientCandidates { eligible: 1 }));
    assert!(err.is_recoverable());
    assert_eq!(office_hours.ledger().len(), 3);
}

#[tokio::test]
async fn test_inactive_member_cannot_be_selected() {
    let office_hours = load(fixture_gateway()).await;
    let mut rng = StdRng::seed_from_u64(5);

    let available = vec!["D".to_string(), "E".to_string(), "Z".to_string()];
    let err = office_hours.select_pair(&available, &mut rng).unwrap_err();
    assert!(matches!(err, SchedulerError::InvalidParticipant { reason } if reason.contains("'Z'")));
}

#[tokio::test]
async fn test_failed_save_keeps_previous_state() {
    let mut gateway = fixture_gateway();
    gateway.expect_save().returning(|_, _| Err(storage_failure()));
    let mut office_hours = load(gateway).await;
    let mut rng = StdRng::seed_from_u64(5);

    let err = office_hours.assign(&request(TestFixtures::team(), true), &mut rng).await.unwrap_err();
    assert!(matches!(err, SchedulerError::StorageError { .. }));
    assert_eq!(office_hours.ledger(), &TestFixtures::ledger());

    let err = office_hours
        .update_roster(vec![Participant::active("Only")])
        .await
        .unwrap_err();
    assert!(matches!(err, SchedulerError::StorageError { .. }));
    assert_eq!(office_hours.roster(), &TestFixtures::roster());
}

#[tokio::test]
async fn test_update_roster_sorts_and_persists() {
    let mut gateway = fixture_gateway();
    gateway
        .expect_save()
        .withf(|roster, ledger| roster.len() == 2 && ledger.len() == 3)
        .times(1)
        .returning(|_, _| Ok(()));
    let mut office_hours = load(gateway).await;

    let roster = office_hours
        .update_roster(vec![Participant::active("Zed"), Participant::inactive("Amy")])
        .await
        .unwrap();

    let names: Vec<&str> = roster.participants().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Amy", "Zed"]);
    assert_eq!(office_hours.active_participants(), vec!["Zed".to_string()]);
}

#[tokio::test]
async fn test_update_roster_rejects_duplicates_without_saving() {
    let mut gateway = fixture_gateway();
    gateway.expect_save().never();
    let mut office_hours = load(gateway).await;

    let err = office_hours
        .update_roster(vec![Participant::active("Amy"), Participant::active("Amy")])
        .await
        .unwrap_err();
    assert!(matches!(err, SchedulerError::DuplicateParticipant { .. }));
}

#[tokio::test]
async fn test_reload_replaces_state_and_keeps_it_on_failure() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();

    let mut gateway = MockPersistenceGateway::new();
    gateway.expect_describe().returning(|| "mock".to_string());
    gateway.expect_load().returning(move || match counter.fetch_add(1, Ordering::SeqCst) {
        0 => Ok((Roster::new(), HistoryLedger::new())),
        1 => Ok((TestFixtures::roster(), TestFixtures::ledger())),
        _ => Err(storage_failure()),
    });

    let mut office_hours = OfficeHours::load(gateway).await.unwrap();
    assert!(office_hours.roster().is_empty());

    office_hours.reload().await.unwrap();
    assert_eq!(office_hours.roster(), &TestFixtures::roster());

    assert!(office_hours.reload().await.is_err());
    assert_eq!(office_hours.ledger(), &TestFixtures::ledger());
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_history_and_frequency_views() {
    let office_hours = load(gateway_with(TestFixtures::roster(), TestFixtures::ledger())).await;

    let history = office_hours.history_desc();
    assert_eq!(history.first().unwrap().date, TestFixtures::date(2024, 2, 2));

    let frequency = office_hours.frequency();
    assert_eq!(frequency[0], ("A".to_string(), 2));
    assert_eq!(frequency[1], ("C".to_string(), 2));
}

#[tokio::test]
async fn test_default_meeting_date_uses_cadence() {
    let office_hours = load(fixture_gateway()).await;
    assert_eq!(
        office_hours.default_meeting_date(TestFixtures::date(2024, 1, 6)),
        TestFixtures::date(2024, 1, 19)
    );
}

#[tokio::test]
async fn test_end_to_end_with_workbook_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("office_hours.xlsx");
    let mut rng = StdRng::seed_from_u64(2024);

    // First run: nothing on disk
    let mut office_hours = OfficeHours::load(WorkbookGateway::new(LocalFileStore::new(&path)))
        .await
        .unwrap();
    assert!(office_hours.roster().is_empty());

    office_hours
        .update_roster(TestFixtures::TEAM.iter().map(|n| Participant::active(*n)).collect())
        .await
        .unwrap();
    let available = office_hours.active_participants();
    let first = office_hours
        .assign(&request(available, true), &mut rng)
        .await
        .unwrap();

    // Second run sees what the first one saved
    let reopened = OfficeHours::load(WorkbookGateway::new(LocalFileStore::new(&path)))
        .await
        .unwrap();
    assert_eq!(reopened.roster().len(), 5);
    assert_eq!(reopened.ledger().len(), 1);
    let record = &reopened.ledger().records()[0];
    assert_eq!(record.participant_1, first.participant_1);
    assert_eq!(record.participant_2, first.participant_2);

    let frequency = reopened.ledger().frequency();
    assert_eq!(frequency.values().sum::<usize>(), 2);
}
