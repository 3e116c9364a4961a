//! Department budget routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Value, json};
use uuid::Uuid;

use super::events::record_event;
use crate::{ApiResult, AppState};
use cinetrack_core::BudgetLine;
use cinetrack_core::rollup::BudgetTotals;
use cinetrack_db::repositories::{BudgetRepository, CreateBudgetLineInput, EVENT_BUDGET_CREATED};
use cinetrack_shared::types::ProjectId;

/// Creates the budget routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/budget", post(create_budget_line))
        .route("/budget/projects/{project_id}", get(project_budget))
}

/// Request body for adding a department budget line.
#[derive(Debug, Deserialize)]
pub struct CreateBudgetLineRequest {
    /// Owning project.
    pub project_id: Uuid,
    /// Department name.
    pub dept: String,
    /// Allocated amount.
    pub planned: Decimal,
    /// Obligated amount.
    #[serde(default)]
    pub committed: Decimal,
    /// Spent amount.
    #[serde(default)]
    pub actual: Decimal,
}

/// GET `/budget/projects/{project_id}` - Rows, totals and variance.
async fn project_budget(
    State(state): State<AppState>,
    Path(project_id): Path<Uuid>,
) -> ApiResult<Json<Value>> {
    let repo = BudgetRepository::new(state.db.clone());
    let rows = repo.list_by_project(ProjectId::from(project_id)).await?;

    let lines: Vec<BudgetLine> = rows.iter().map(BudgetLine::from).collect();
    let totals = BudgetTotals::from_lines(&lines);

    Ok(Json(json!({
        "budgets": rows,
        "totals": totals,
        "variance": totals.variance()
    })))
}

/// POST `/budget` - Add a department budget line.
async fn create_budget_line(
    State(state): State<AppState>,
    Json(payload): Json<CreateBudgetLineRequest>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let project_id = ProjectId::from(payload.project_id);
    let repo = BudgetRepository::new(state.db.clone());

    let row = repo
        .create(CreateBudgetLineInput {
            project_id,
            department: payload.dept,
            planned: payload.planned,
            committed: payload.committed,
            actual: payload.actual,
        })
        .await?;

    record_event(
        &state,
        project_id,
        EVENT_BUDGET_CREATED,
        json!({ "budget_id": row.id, "dept": row.dept, "planned": row.planned }),
    )
    .await;

    Ok((StatusCode::CREATED, Json(json!({ "budget": row }))))
}
