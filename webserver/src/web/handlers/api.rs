//! REST API handlers
//!
//! One handler per dashboard action: assign participants, view history,
//! edit the roster, plus an explicit reload.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Json;
use scheduler::{AssignmentRequest, PersistenceGateway};
use serde_json::{json, Value};
use shared::{component_info, ComponentId, Participant};

use crate::error::WebServerResult;
use crate::state::{AppState, Session};
use crate::types::{
    AssignBody, AssignDefaults, AssignResponse, FrequencyEntry, FrequencyResponse, HistoryResponse, ReloadResponse,
    RosterBody,
};

/// Health check endpoint - /health
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Form defaults - GET /api/assign
pub async fn assign_defaults<G>(State(state): State<Arc<AppState<G>>>) -> WebServerResult<Json<AssignDefaults>>
where
    G: PersistenceGateway + 'static,
{
    let today = state.today();
    let session = state.session().await;
    let office_hours = &session.office_hours;

    Ok(Json(AssignDefaults {
        next_date: office_hours.default_meeting_date(today),
        active_participants: office_hours.active_participants(),
        recency_window: office_hours.recency_window(),
        upcoming: office_hours.cadence().upcoming(today, state.upcoming_count),
    }))
}

/// Assign participants - POST /api/assign
pub async fn assign<G>(
    State(state): State<Arc<AppState<G>>>,
    payload: Result<Json<AssignBody>, JsonRejection>,
) -> WebServerResult<Json<AssignResponse>>
where
    G: PersistenceGateway + 'static,
{
    let Json(body) = payload?;
    let today = state.today();
    let mut guard = state.session().await;
    let Session { office_hours, rng } = &mut *guard;

    let request = AssignmentRequest {
        available: body.available.unwrap_or_else(|| office_hours.active_participants()),
        date: body.date.unwrap_or_else(|| office_hours.default_meeting_date(today)),
        save: body.save.unwrap_or(true),
    };
    let assignment = office_hours.assign(&request, rng).await?;

    component_info!(
        ComponentId::WebServer,
        "🎯 Assigned {} & {} for {} (saved: {})",
        assignment.participant_1,
        assignment.participant_2,
        assignment.date,
        assignment.saved
    );

    Ok(Json(AssignResponse {
        status: "success".to_string(),
        message: format!(
            "Next Office Hours Participants: {} & {}",
            assignment.participant_1, assignment.participant_2
        ),
        assignment,
    }))
}

/// Session history, newest first - GET /api/history
pub async fn history<G>(State(state): State<Arc<AppState<G>>>) -> WebServerResult<Json<HistoryResponse>>
where
    G: PersistenceGateway + 'static,
{
    let session = state.session().await;
    Ok(Json(HistoryResponse {
        sessions: session.office_hours.history_desc(),
    }))
}

/// Participation counts for the chart - GET /api/frequency
pub async fn frequency<G>(State(state): State<Arc<AppState<G>>>) -> WebServerResult<Json<FrequencyResponse>>
where
    G: PersistenceGateway + 'static,
{
    let session = state.session().await;
    let frequency = session
        .office_hours
        .frequency()
        .into_iter()
        .map(|(participant, count)| FrequencyEntry { participant, count })
        .collect();

    Ok(Json(FrequencyResponse { frequency }))
}

/// Current roster - GET /api/roster
pub async fn roster<G>(State(state): State<Arc<AppState<G>>>) -> WebServerResult<Json<RosterBody>>
where
    G: PersistenceGateway + 'static,
{
    let session = state.session().await;
    Ok(Json(RosterBody {
        participants: session.office_hours.roster().participants().to_vec(),
    }))
}

/// Save an edited roster - PUT /api/roster
pub async fn save_roster<G>(
    State(state): State<Arc<AppState<G>>>,
    payload: Result<Json<RosterBody>, JsonRejection>,
) -> WebServerResult<Json<RosterBody>>
where
    G: PersistenceGateway + 'static,
{
    let Json(body) = payload?;
    let mut session = state.session().await;
    let roster = session.office_hours.update_roster(body.participants).await?;
    let participants: Vec<Participant> = roster.participants().to_vec();

    Ok(Json(RosterBody { participants }))
}

/// Reload both tables from storage - POST /api/reload
pub async fn reload<G>(State(state): State<Arc<AppState<G>>>) -> WebServerResult<Json<ReloadResponse>>
where
    G: PersistenceGateway + 'static,
{
    let mut session = state.session().await;
    session.office_hours.reload().await?;

    Ok(Json(ReloadResponse {
        participants: session.office_hours.roster().len(),
        sessions: session.office_hours.ledger().len(),
    }))
}
