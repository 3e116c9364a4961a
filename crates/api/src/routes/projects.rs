//! Project listing and summary routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::{ApiError, ApiResult, AppState};
use cinetrack_core::BudgetLine;
use cinetrack_core::rollup::{BudgetTotals, PurchaseOrderTotals, ScheduleSummary};
use cinetrack_db::entities::{budgets, projects};
use cinetrack_db::{BudgetRepository, ProjectRepository, PurchaseOrderRepository, ScheduleRepository};
use cinetrack_shared::types::ProjectId;

/// Creates the project routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/projects", get(list_projects))
        .route("/projects/{project_id}/summary", get(project_summary))
}

/// Budget block of a project summary.
#[derive(Debug, Serialize)]
pub struct BudgetSummary {
    /// Sum of planned amounts.
    pub total_planned: Decimal,
    /// Sum of committed amounts.
    pub total_committed: Decimal,
    /// Sum of actual amounts.
    pub total_actual: Decimal,
    /// Planned minus actual.
    pub variance: Decimal,
    /// Raw budget rows.
    pub by_department: Vec<budgets::Model>,
}

/// Purchase-order block of a project summary.
#[derive(Debug, Serialize)]
pub struct PurchaseOrderBlock {
    /// Number of purchase orders.
    pub total_count: usize,
    /// Sum of order amounts.
    pub total_amount: Decimal,
}

/// Everything known about a project in one payload.
#[derive(Debug, Serialize)]
pub struct ProjectSummary {
    /// Project row.
    pub project: projects::Model,
    /// Budget totals with the underlying rows.
    pub budget_summary: BudgetSummary,
    /// Schedule counts.
    pub schedule_summary: ScheduleSummary,
    /// Purchase-order rollup.
    pub purchase_orders: PurchaseOrderBlock,
}

/// GET `/projects` - All projects, newest first.
async fn list_projects(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let repo = ProjectRepository::new(state.db.clone());
    let projects = repo.list().await?;
    Ok(Json(json!({ "projects": projects })))
}

/// GET `/projects/{project_id}/summary` - Budget, schedule and PO rollups.
async fn project_summary(
    State(state): State<AppState>,
    Path(project_id): Path<Uuid>,
) -> ApiResult<Json<ProjectSummary>> {
    let project_id = ProjectId::from(project_id);
    let db = state.db.clone();

    let project = ProjectRepository::new(db.clone())
        .find_by_id(project_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Project not found"))?;

    let budget_rows = BudgetRepository::new(db.clone())
        .list_by_project(project_id)
        .await?;
    let days = ScheduleRepository::new(db.clone())
        .schedule_days(project_id)
        .await?;
    let orders = PurchaseOrderRepository::new(db)
        .list_by_project(project_id)
        .await?;

    let lines: Vec<BudgetLine> = budget_rows.iter().map(BudgetLine::from).collect();
    let totals = BudgetTotals::from_lines(&lines);
    let po_totals = PurchaseOrderTotals::from_amounts(orders.iter().map(|po| po.amount));

    Ok(Json(ProjectSummary {
        project,
        budget_summary: BudgetSummary {
            total_planned: totals.planned,
            total_committed: totals.committed,
            total_actual: totals.actual,
            variance: totals.variance(),
            by_department: budget_rows,
        },
        schedule_summary: ScheduleSummary::from_days(&days),
        purchase_orders: PurchaseOrderBlock {
            total_count: po_totals.count,
            total_amount: po_totals.total_amount,
        },
    }))
}
