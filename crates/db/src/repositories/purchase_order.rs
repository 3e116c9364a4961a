//! Purchase order repository.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use cinetrack_shared::types::{ProjectId, PurchaseOrderId};

use super::error::{RepositoryError, ensure_non_negative, ensure_present};
use crate::entities::{pos, projects};

/// Input for creating a purchase order.
#[derive(Debug, Clone)]
pub struct CreatePurchaseOrderInput {
    /// Owning project.
    pub project_id: ProjectId,
    /// Vendor name.
    pub vendor: String,
    /// Order amount.
    pub amount: Decimal,
    /// Workflow status, e.g. `draft`, `approved`.
    pub status: String,
}

/// Purchase order repository.
#[derive(Debug, Clone)]
pub struct PurchaseOrderRepository {
    db: Arc<DatabaseConnection>,
}

impl PurchaseOrderRepository {
    /// Creates a new purchase order repository.
    #[must_use]
    pub fn new(db: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self { db: db.into() }
    }

    /// Lists a project's purchase orders, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_by_project(&self, project_id: ProjectId) -> Result<Vec<pos::Model>, DbErr> {
        pos::Entity::find()
            .filter(pos::Column::ProjectId.eq(project_id.into_inner()))
            .order_by_asc(pos::Column::CreatedAt)
            .all(&*self.db)
            .await
    }

    /// Finds a purchase order by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: PurchaseOrderId) -> Result<Option<pos::Model>, DbErr> {
        pos::Entity::find_by_id(id.into_inner()).one(&*self.db).await
    }

    /// Creates a purchase order for an existing project.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::ProjectNotFound` if the project is missing.
    pub async fn create(
        &self,
        input: CreatePurchaseOrderInput,
    ) -> Result<pos::Model, RepositoryError> {
        ensure_present("vendor", &input.vendor)?;
        ensure_non_negative("amount", input.amount)?;

        let project_id = input.project_id.into_inner();
        if projects::Entity::find_by_id(project_id)
            .one(&*self.db)
            .await?
            .is_none()
        {
            return Err(RepositoryError::ProjectNotFound(project_id));
        }

        let row = pos::ActiveModel {
            id: Set(PurchaseOrderId::new().into_inner()),
            project_id: Set(project_id),
            vendor: Set(input.vendor),
            amount: Set(input.amount),
            status: Set(input.status),
            created_at: Set(Utc::now().into()),
        }
        .insert(&*self.db)
        .await?;

        Ok(row)
    }
}
