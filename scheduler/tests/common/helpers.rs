//! Test helpers for building gateways and handles

use scheduler::{HistoryLedger, MockPersistenceGateway, OfficeHours, Roster, SchedulerError};

use super::fixtures::TestFixtures;

/// Mock gateway that serves the fixture tables
pub fn gateway_with(roster: Roster, ledger: HistoryLedger) -> MockPersistenceGateway {
    let mut gateway = MockPersistenceGateway::new();
    gateway
        .expect_load()
        .returning(move || Ok((roster.clone(), ledger.clone())));
    gateway.expect_describe().returning(|| "mock".to_string());
    gateway
}

pub fn fixture_gateway() -> MockPersistenceGateway {
    gateway_with(TestFixtures::roster(), TestFixtures::ledger())
}

pub async fn load(gateway: MockPersistenceGateway) -> OfficeHours<MockPersistenceGateway> {
    OfficeHours::load(gateway).await.unwrap()
}

pub fn storage_failure() -> SchedulerError {
    SchedulerError::StorageError {
        operation: "upload".to_string(),
        location: "mock".to_string(),
        message: "HTTP 500".to_string(),
    }
}
