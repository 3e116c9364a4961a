//! Invoice repository.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use cinetrack_shared::types::{InvoiceId, PurchaseOrderId};

use super::error::{RepositoryError, ensure_non_negative};
use crate::entities::{invoices, pos};

/// Input for creating an invoice.
#[derive(Debug, Clone)]
pub struct CreateInvoiceInput {
    /// Purchase order being billed.
    pub po_id: PurchaseOrderId,
    /// Invoiced amount.
    pub amount: Decimal,
    /// Payment due date.
    pub due_date: NaiveDate,
    /// Payment status, e.g. `pending`, `paid`.
    pub status: String,
}

/// Invoice repository.
#[derive(Debug, Clone)]
pub struct InvoiceRepository {
    db: Arc<DatabaseConnection>,
}

impl InvoiceRepository {
    /// Creates a new invoice repository.
    #[must_use]
    pub fn new(db: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self { db: db.into() }
    }

    /// Lists invoices billed against a purchase order, by due date.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_by_purchase_order(
        &self,
        po_id: PurchaseOrderId,
    ) -> Result<Vec<invoices::Model>, DbErr> {
        invoices::Entity::find()
            .filter(invoices::Column::PoId.eq(po_id.into_inner()))
            .order_by_asc(invoices::Column::DueDate)
            .all(&*self.db)
            .await
    }

    /// Creates an invoice, returning it with the purchase order it bills.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::PurchaseOrderNotFound` if the purchase order is missing.
    pub async fn create(
        &self,
        input: CreateInvoiceInput,
    ) -> Result<(invoices::Model, pos::Model), RepositoryError> {
        ensure_non_negative("amount", input.amount)?;

        let po_id = input.po_id.into_inner();
        let Some(po) = pos::Entity::find_by_id(po_id).one(&*self.db).await? else {
            return Err(RepositoryError::PurchaseOrderNotFound(po_id));
        };

        let row = invoices::ActiveModel {
            id: Set(InvoiceId::new().into_inner()),
            po_id: Set(po_id),
            amount: Set(input.amount),
            due_date: Set(input.due_date),
            status: Set(input.status),
            created_at: Set(Utc::now().into()),
        }
        .insert(&*self.db)
        .await?;

        Ok((row, po))
    }
}
