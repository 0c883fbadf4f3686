//! Caller-owned office hours state
//!
//! `OfficeHours` holds the roster and ledger loaded from a gateway. Nothing
//! is cached globally: callers keep the handle, call `reload` when they want
//! fresh data, and every mutating action persists before it is committed to
//! memory so a failed save leaves the loaded state untouched.

use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use shared::{component_info, ComponentId, Participant, SessionRecord};

use crate::core::{select_next_pair, Cadence, HistoryLedger, Roster, DEFAULT_RECENCY_WINDOW};
use crate::error::{SchedulerError, SchedulerResult};
use crate::traits::PersistenceGateway;

/// Input for one "assign participants" action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRequest {
    /// Members available this time
    pub available: Vec<String>,
    pub date: NaiveDate,
    /// Persist the result; when false the pick is only returned
    pub save: bool,
}

/// Outcome of an "assign participants" action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub date: NaiveDate,
    pub participant_1: String,
    pub participant_2: String,
    pub saved: bool,
}

pub struct OfficeHours<G: PersistenceGateway> {
    gateway: G,
    roster: Roster,
    ledger: HistoryLedger,
    cadence: Cadence,
    recency_window: usize,
}

impl<G: PersistenceGateway> OfficeHours<G> {
    /// Load both tables from the gateway
    pub async fn load(gateway: G) -> SchedulerResult<Self> {
        let (roster, ledger) = gateway.load().await?;
        component_info!(
            ComponentId::Scheduler,
            "📋 Office hours loaded from {}: {} participants, {} sessions",
            gateway.describe(),
            roster.len(),
            ledger.len()
        );

        Ok(Self {
            gateway,
            roster,
            ledger,
            cadence: Cadence::default(),
            recency_window: DEFAULT_RECENCY_WINDOW,
        })
    }

    pub fn with_cadence(mut self, cadence: Cadence) -> Self {
        self.cadence = cadence;
        self
    }

    pub fn with_recency_window(mut self, recency_window: usize) -> Self {
        self.recency_window = recency_window;
        self
    }

    /// Replace the in-memory tables with the stored ones.
    ///
    /// On failure the previously loaded tables are kept.
    pub async fn reload(&mut self) -> SchedulerResult<()> {
        let (roster, ledger) = self.gateway.load().await?;
        self.roster = roster;
        self.ledger = ledger;
        Ok(())
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn ledger(&self) -> &HistoryLedger {
        &self.ledger
    }

    pub fn cadence(&self) -> Cadence {
        self.cadence
    }

    pub fn recency_window(&self) -> usize {
        self.recency_window
    }

    /// Suggested date for the next session
    pub fn default_meeting_date(&self, today: NaiveDate) -> NaiveDate {
        self.cadence.next_meeting_date(today)
    }

    /// Active roster members, the default availability
    pub fn active_participants(&self) -> Vec<String> {
        self.roster.active_names()
    }

    /// Pick the next pair without recording it.
    ///
    /// Every available name must be an active roster member.
    pub fn select_pair<R: Rng + ?Sized>(&self, available: &[String], rng: &mut R) -> SchedulerResult<(String, String)> {
        if let Some(unknown) = available
            .iter()
            .find(|name| !self.roster.get(name).is_some_and(|p| p.active))
        {
            return Err(SchedulerError::InvalidParticipant {
                reason: format!("'{unknown}' is not an active participant"),
            });
        }

        select_next_pair(
            &self.ledger,
            available.iter().map(String::as_str),
            self.recency_window,
            rng,
        )
    }

    /// Append a pairing to the ledger and persist both tables
    pub async fn record_session(&mut self, pair: (String, String), date: NaiveDate) -> SchedulerResult<SessionRecord> {
        let ledger = self.ledger.append(&pair.0, &pair.1, date)?;
        self.gateway.save(&self.roster, &ledger).await?;
        self.ledger = ledger;

        component_info!(ComponentId::Scheduler, "🗓️ Recorded {} & {} for {}", pair.0, pair.1, date);
        Ok(SessionRecord::new(date, pair.0, pair.1))
    }

    /// Select a pair and, when requested, record it
    pub async fn assign<R: Rng + ?Sized>(
        &mut self,
        request: &AssignmentRequest,
        rng: &mut R,
    ) -> SchedulerResult<Assignment> {
        let (participant_1, participant_2) = self.select_pair(&request.available, rng)?;

        if request.save {
            self.record_session((participant_1.clone(), participant_2.clone()), request.date)
                .await?;
        }

        Ok(Assignment {
            date: request.date,
            participant_1,
            participant_2,
            saved: request.save,
        })
    }

    /// Replace the roster with an edited list and persist both tables
    pub async fn update_roster(&mut self, rows: Vec<Participant>) -> SchedulerResult<&Roster> {
        let roster = Roster::from_edits(rows)?;
        self.gateway.save(&roster, &self.ledger).await?;
        self.roster = roster;

        component_info!(ComponentId::Scheduler, "👥 Roster saved with {} participants", self.roster.len());
        Ok(&self.roster)
    }

    /// History newest first
    pub fn history_desc(&self) -> Vec<SessionRecord> {
        self.ledger.sorted_by_date_desc()
    }

    /// Participation counts, highest first
    pub fn frequency(&self) -> Vec<(String, usize)> {
        self.ledger.frequency_ranked()
    }
}
