//! Project event trail.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use serde_json::{Value, json};
use tracing::warn;
use uuid::Uuid;

use crate::{ApiResult, AppState};
use cinetrack_db::EventRepository;
use cinetrack_shared::types::ProjectId;

/// Creates the event routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/events/projects/{project_id}", get(list_events))
}

/// Appends an event without failing the request that caused it.
pub(crate) async fn record_event(
    state: &AppState,
    project_id: ProjectId,
    event_type: &str,
    payload: Value,
) {
    let repo = EventRepository::new(state.db.clone());
    if let Err(e) = repo.log_event(project_id, event_type, payload).await {
        warn!(error = %e, %project_id, event_type, "Failed to record event");
    }
}

/// GET `/events/projects/{project_id}` - Audit trail, newest first.
async fn list_events(
    State(state): State<AppState>,
    Path(project_id): Path<Uuid>,
) -> ApiResult<Json<Value>> {
    let repo = EventRepository::new(state.db.clone());
    let events = repo.list_by_project(ProjectId::from(project_id)).await?;

    Ok(Json(json!({
        "count": events.len(),
        "events": events
    })))
}
