//! KPI report route.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

use crate::{ApiError, ApiResult, AppState};
use cinetrack_core::{KpiAggregator, KpiReport};
use cinetrack_db::{BudgetRepository, ScheduleRepository};
use cinetrack_shared::types::ProjectId;

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/reports/kpis", get(project_kpis))
}

/// Query parameters for `/reports/kpis`.
#[derive(Debug, Deserialize)]
pub struct KpiQuery {
    /// Project to report on.
    pub project_id: Option<Uuid>,
}

/// GET `/reports/kpis?project_id=` - Burn rate, CPI, SPI and variances.
async fn project_kpis(
    State(state): State<AppState>,
    Query(query): Query<KpiQuery>,
) -> ApiResult<Json<KpiReport>> {
    let Some(project_id) = query.project_id.map(ProjectId::from) else {
        return Err(ApiError::validation("project_id query parameter is required"));
    };

    let lines = BudgetRepository::new(state.db.clone())
        .budget_lines(project_id)
        .await?;
    if lines.is_empty() {
        return Err(ApiError::not_found("No budget data found"));
    }

    let days = ScheduleRepository::new(state.db.clone())
        .schedule_days(project_id)
        .await?;

    let report = KpiAggregator::compute_kpis(&lines, &days);
    debug!(
        %project_id,
        lines = lines.len(),
        days = days.len(),
        undefined = ?report.undefined_metrics,
        "Computed KPIs"
    );

    Ok(Json(report))
}
