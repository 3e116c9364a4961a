//! Purchase order routes.

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
use cinetrack_core::rollup::PurchaseOrderTotals;
use cinetrack_db::repositories::{
    CreatePurchaseOrderInput, EVENT_PO_CREATED, PurchaseOrderRepository,
};
use cinetrack_shared::types::ProjectId;

/// Creates the purchase order routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/pos", post(create_purchase_order))
        .route("/pos/projects/{project_id}", get(project_purchase_orders))
}

fn default_status() -> String {
    "draft".to_string()
}

/// Request body for raising a purchase order.
#[derive(Debug, Deserialize)]
pub struct CreatePurchaseOrderRequest {
    /// Owning project.
    pub project_id: Uuid,
    /// Vendor name.
    pub vendor: String,
    /// Order amount.
    pub amount: Decimal,
    /// Workflow status; `draft` when omitted.
    #[serde(default = "default_status")]
    pub status: String,
}

/// POST `/pos` - Raise a purchase order.
async fn create_purchase_order(
    State(state): State<AppState>,
    Json(payload): Json<CreatePurchaseOrderRequest>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let project_id = ProjectId::from(payload.project_id);
    let repo = PurchaseOrderRepository::new(state.db.clone());

    let po = repo
        .create(CreatePurchaseOrderInput {
            project_id,
            vendor: payload.vendor,
            amount: payload.amount,
            status: payload.status,
        })
        .await?;

    record_event(
        &state,
        project_id,
        EVENT_PO_CREATED,
        json!({ "po_id": po.id, "vendor": po.vendor, "amount": po.amount }),
    )
    .await;

    Ok((StatusCode::CREATED, Json(json!({ "po": po }))))
}

/// GET `/pos/projects/{project_id}` - Orders with count and total.
async fn project_purchase_orders(
    State(state): State<AppState>,
    Path(project_id): Path<Uuid>,
) -> ApiResult<Json<Value>> {
    let repo = PurchaseOrderRepository::new(state.db.clone());
    let pos = repo.list_by_project(ProjectId::from(project_id)).await?;
    let totals = PurchaseOrderTotals::from_amounts(pos.iter().map(|po| po.amount));

    Ok(Json(json!({
        "pos": pos,
        "total_amount": totals.total_amount,
        "count": totals.count
    })))
}
