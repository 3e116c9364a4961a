//! AI analysis routes.
//!
//! Analyses are advisory: model failures come back as fallback payloads with
//! an `error` field rather than as HTTP errors. Missing data is still a 404.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::{ApiError, ApiResult, AppState};
use cinetrack_ai::NarrativeHealth;
use cinetrack_core::{BudgetLine, ScheduleDay};
use cinetrack_db::{BudgetRepository, ProjectRepository, PurchaseOrderRepository, ScheduleRepository};
use cinetrack_shared::types::ProjectId;

/// Creates the AI routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/ai/health", get(ai_health))
        .route("/ai/analyze/budget/{project_id}", get(analyze_budget))
        .route("/ai/analyze/schedule/{project_id}", get(analyze_schedule))
        .route("/ai/analyze/project/{project_id}", get(analyze_project))
        .route("/ai/ask", post(ask))
        .route("/ai/report/{project_id}", get(report))
}

/// Request body for `/ai/ask`.
#[derive(Debug, Deserialize)]
pub struct QuestionRequest {
    /// Free-form question.
    pub question: String,
    /// Project whose data grounds the answer.
    pub project_id: Uuid,
}

/// GET `/ai/health` - Probe the model. Always 200.
async fn ai_health(State(state): State<AppState>) -> Json<NarrativeHealth> {
    Json(state.narrative.health().await)
}

/// GET `/ai/analyze/budget/{project_id}`
async fn analyze_budget(
    State(state): State<AppState>,
    Path(project_id): Path<Uuid>,
) -> ApiResult<Json<Value>> {
    let lines = BudgetRepository::new(state.db.clone())
        .budget_lines(ProjectId::from(project_id))
        .await?;
    if lines.is_empty() {
        return Err(ApiError::not_found("No budget data"));
    }

    let analysis = state.narrative.analyze_budget_risk(&lines).await;
    Ok(Json(json!({ "project_id": project_id, "analysis": analysis })))
}

/// GET `/ai/analyze/schedule/{project_id}`
async fn analyze_schedule(
    State(state): State<AppState>,
    Path(project_id): Path<Uuid>,
) -> ApiResult<Json<Value>> {
    let days = ScheduleRepository::new(state.db.clone())
        .schedule_days(ProjectId::from(project_id))
        .await?;
    if days.is_empty() {
        return Err(ApiError::not_found("No schedule data"));
    }

    let analysis = state.narrative.analyze_schedule_risk(&days).await;
    Ok(Json(json!({ "project_id": project_id, "analysis": analysis })))
}

/// GET `/ai/analyze/project/{project_id}` - Needs the project, its budget and its schedule.
async fn analyze_project(
    State(state): State<AppState>,
    Path(project_id): Path<Uuid>,
) -> ApiResult<Json<Value>> {
    let id = ProjectId::from(project_id);
    let db = state.db.clone();

    let project = ProjectRepository::new(db.clone()).find_by_id(id).await?;
    let lines: Vec<BudgetLine> = BudgetRepository::new(db.clone()).budget_lines(id).await?;
    let days: Vec<ScheduleDay> = ScheduleRepository::new(db).schedule_days(id).await?;

    let Some(project) = project.filter(|_| !lines.is_empty() && !days.is_empty()) else {
        return Err(ApiError::not_found("Insufficient data"));
    };

    let analysis = state
        .narrative
        .analyze_project_overall(&project.title, &lines, &days)
        .await;

    Ok(Json(json!({
        "project_id": project_id,
        "project_title": project.title,
        "analysis": analysis
    })))
}

/// POST `/ai/ask` - Answer a question against a project's budget and schedule.
async fn ask(
    State(state): State<AppState>,
    Json(payload): Json<QuestionRequest>,
) -> ApiResult<Json<Value>> {
    if payload.question.trim().is_empty() {
        return Err(ApiError::validation("question is required"));
    }

    let id = ProjectId::from(payload.project_id);
    let budget = BudgetRepository::new(state.db.clone())
        .list_by_project(id)
        .await?;
    let schedule = ScheduleRepository::new(state.db.clone())
        .list_by_project(id)
        .await?;

    let context = json!({ "budget": budget, "schedule": schedule });
    let answer = state.narrative.ask_question(&payload.question, &context).await;

    Ok(Json(json!({ "question": payload.question, "answer": answer })))
}

/// GET `/ai/report/{project_id}` - Executive status report.
async fn report(
    State(state): State<AppState>,
    Path(project_id): Path<Uuid>,
) -> ApiResult<Json<Value>> {
    let id = ProjectId::from(project_id);
    let db = state.db.clone();

    let project = ProjectRepository::new(db.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Project not found"))?;
    let budget = BudgetRepository::new(db.clone()).list_by_project(id).await?;
    let schedule = ScheduleRepository::new(db.clone())
        .list_by_project(id)
        .await?;
    let pos = PurchaseOrderRepository::new(db).list_by_project(id).await?;

    let project_data = json!({
        "project": project,
        "budget": budget,
        "schedule": schedule,
        "purchase_orders": pos
    });
    let report = state.narrative.generate_report(&project_data).await;

    Ok(Json(json!({
        "project_id": project_id,
        "project_title": project.title,
        "report": report
    })))
}
