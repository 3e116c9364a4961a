//! Shooting schedule routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::{Value, json};
use uuid::Uuid;

use super::events::record_event;
use crate::{ApiResult, AppState};
use cinetrack_core::ScheduleDay;
use cinetrack_core::rollup::ScheduleSummary;
use cinetrack_db::repositories::{
    CreateScheduleDayInput, EVENT_SCHEDULE_CREATED, ScheduleRepository,
};
use cinetrack_shared::types::ProjectId;

/// Creates the schedule routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/schedule", post(create_schedule_day))
        .route("/schedule/projects/{project_id}", get(project_schedule))
}

fn default_status() -> String {
    "planned".to_string()
}

/// Request body for adding a shooting day.
#[derive(Debug, Deserialize)]
pub struct CreateScheduleDayRequest {
    /// Owning project.
    pub project_id: Uuid,
    /// Day ordinal.
    pub day: i32,
    /// Scene(s).
    pub scene: String,
    /// Location.
    pub location: String,
    /// Status; `planned` when omitted.
    #[serde(default = "default_status")]
    pub status: String,
}

/// GET `/schedule/projects/{project_id}` - Days in order with status counts.
async fn project_schedule(
    State(state): State<AppState>,
    Path(project_id): Path<Uuid>,
) -> ApiResult<Json<Value>> {
    let repo = ScheduleRepository::new(state.db.clone());
    let rows = repo.list_by_project(ProjectId::from(project_id)).await?;

    let days: Vec<ScheduleDay> = rows.iter().map(ScheduleDay::from).collect();
    let summary = ScheduleSummary::from_days(&days);

    Ok(Json(json!({
        "schedule": rows,
        "total_days": summary.total_days,
        "status_breakdown": summary.status_breakdown
    })))
}

/// POST `/schedule` - Add a shooting day.
async fn create_schedule_day(
    State(state): State<AppState>,
    Json(payload): Json<CreateScheduleDayRequest>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let project_id = ProjectId::from(payload.project_id);
    let repo = ScheduleRepository::new(state.db.clone());

    let row = repo
        .create(CreateScheduleDayInput {
            project_id,
            day: payload.day,
            scene: payload.scene,
            location: payload.location,
            status: payload.status,
        })
        .await?;

    record_event(
        &state,
        project_id,
        EVENT_SCHEDULE_CREATED,
        json!({ "schedule_id": row.id, "day": row.day, "status": row.status }),
    )
    .await;

    Ok((StatusCode::CREATED, Json(json!({ "schedule": row }))))
}
