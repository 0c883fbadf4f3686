//! Web presentation layer for office hours
//!
//! Serves a JSON API over the scheduler core plus a static dashboard with
//! the assignment form, the history table and the frequency chart.

pub mod config;
pub mod error;
pub mod state;
pub mod types;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use config::{Backend, Config};
pub use error::{WebServerError, WebServerResult};
pub use state::{AppState, Clock};
pub use webserver_impl::{build_router, run};
