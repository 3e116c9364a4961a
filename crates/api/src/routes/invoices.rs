//! Invoice routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Value, json};
use uuid::Uuid;

use super::events::record_event;
use crate::{ApiResult, AppState};
use cinetrack_core::rollup::PurchaseOrderTotals;
use cinetrack_db::repositories::{CreateInvoiceInput, EVENT_INVOICE_CREATED, InvoiceRepository};
use cinetrack_shared::types::{ProjectId, PurchaseOrderId};

/// Creates the invoice routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/invoices", post(create_invoice))
        .route("/invoices/pos/{po_id}", get(purchase_order_invoices))
}

fn default_status() -> String {
    "pending".to_string()
}

/// Request body for recording an invoice.
#[derive(Debug, Deserialize)]
pub struct CreateInvoiceRequest {
    /// Purchase order being billed.
    pub po_id: Uuid,
    /// Invoiced amount.
    pub amount: Decimal,
    /// ISO date (`YYYY-MM-DD`).
    pub due_date: NaiveDate,
    /// Payment status; `pending` when omitted.
    #[serde(default = "default_status")]
    pub status: String,
}

/// POST `/invoices` - Record an invoice against a purchase order.
async fn create_invoice(
    State(state): State<AppState>,
    Json(payload): Json<CreateInvoiceRequest>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let repo = InvoiceRepository::new(state.db.clone());

    let (invoice, po) = repo
        .create(CreateInvoiceInput {
            po_id: PurchaseOrderId::from(payload.po_id),
            amount: payload.amount,
            due_date: payload.due_date,
            status: payload.status,
        })
        .await?;

    record_event(
        &state,
        ProjectId::from(po.project_id),
        EVENT_INVOICE_CREATED,
        json!({ "invoice_id": invoice.id, "po_id": po.id, "amount": invoice.amount }),
    )
    .await;

    Ok((StatusCode::CREATED, Json(json!({ "invoice": invoice }))))
}

/// GET `/invoices/pos/{po_id}` - Invoices billed against one order.
async fn purchase_order_invoices(
    State(state): State<AppState>,
    Path(po_id): Path<Uuid>,
) -> ApiResult<Json<Value>> {
    let repo = InvoiceRepository::new(state.db.clone());
    let invoices = repo
        .list_by_purchase_order(PurchaseOrderId::from(po_id))
        .await?;
    let totals = PurchaseOrderTotals::from_amounts(invoices.iter().map(|i| i.amount));

    Ok(Json(json!({
        "invoices": invoices,
        "total_amount": totals.total_amount,
        "count": totals.count
    })))
}
