//! Webserver state management
//!
//! One `OfficeHours` handle and its random source behind a single async
//! mutex, so each request runs to completion before the next one starts.

use chrono::{Local, NaiveDate};
use rand::rngs::StdRng;
use rand::SeedableRng;
use scheduler::{OfficeHours, PersistenceGateway};
use tokio::sync::{Mutex, MutexGuard};

/// Source of "today" for default meeting dates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    System,
    Fixed(NaiveDate),
}

impl Clock {
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System => Local::now().date_naive(),
            Clock::Fixed(date) => *date,
        }
    }
}

/// Mutable per-server session data
pub struct Session<G: PersistenceGateway> {
    pub office_hours: OfficeHours<G>,
    pub rng: StdRng,
}

pub struct AppState<G: PersistenceGateway> {
    session: Mutex<Session<G>>,
    clock: Clock,
    /// Meeting dates previewed on the assignment page
    pub upcoming_count: usize,
}

impl<G: PersistenceGateway> AppState<G> {
    pub fn new(office_hours: OfficeHours<G>) -> Self {
        Self::with_rng(office_hours, StdRng::from_entropy())
    }

    /// Use a specific random source (seeded in tests)
    pub fn with_rng(office_hours: OfficeHours<G>, rng: StdRng) -> Self {
        Self {
            session: Mutex::new(Session { office_hours, rng }),
            clock: Clock::System,
            upcoming_count: 4,
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub async fn session(&self) -> MutexGuard<'_, Session<G>> {
        self.session.lock().await
    }
}
