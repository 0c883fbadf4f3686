//! Workbook-backed persistence gateway
//!
//! One gateway implementation shared by every object store: the tables are
//! always encoded into a single workbook and written as one blob.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared::{component_info, component_warn, ComponentId};

use crate::core::{HistoryLedger, Roster};
use crate::error::{SchedulerError, SchedulerResult};
use crate::services::workbook::{decode_workbook, encode_workbook};
use crate::traits::{ObjectStore, PersistenceGateway};

/// What `load` does when the store holds no document yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MissingStorePolicy {
    /// Start with an empty roster and ledger
    #[default]
    EmptyDefaults,
    /// Fail the load with `MissingStore`
    Fail,
}

pub struct WorkbookGateway<S: ObjectStore> {
    store: S,
    missing_policy: MissingStorePolicy,
}

impl<S: ObjectStore> WorkbookGateway<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            missing_policy: MissingStorePolicy::default(),
        }
    }

    pub fn with_missing_policy(mut self, policy: MissingStorePolicy) -> Self {
        self.missing_policy = policy;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[async_trait]
impl<S: ObjectStore> PersistenceGateway for WorkbookGateway<S> {
    async fn load(&self) -> SchedulerResult<(Roster, HistoryLedger)> {
        let bytes = match self.store.read().await {
            Ok(bytes) => bytes,
            Err(SchedulerError::MissingStore { location })
                if self.missing_policy == MissingStorePolicy::EmptyDefaults =>
            {
                component_warn!(ComponentId::Gateway, "📭 No data at {}, starting with empty tables", location);
                return Ok((Roster::new(), HistoryLedger::new()));
            }
            Err(e) => return Err(e),
        };

        let (roster, ledger) = decode_workbook(&bytes)?;
        component_info!(
            ComponentId::Gateway,
            "📥 Loaded {} participants and {} sessions from {}",
            roster.len(),
            ledger.len(),
            self.store.location()
        );
        Ok((roster, ledger))
    }

    async fn save(&self, roster: &Roster, ledger: &HistoryLedger) -> SchedulerResult<()> {
        let bytes = encode_workbook(roster, ledger)?;
        self.store.write(bytes).await?;
        component_info!(
            ComponentId::Gateway,
            "📤 Saved {} participants and {} sessions to {}",
            roster.len(),
            ledger.len(),
            self.store.location()
        );
        Ok(())
    }

    fn describe(&self) -> String {
        self.store.location()
    }
}
