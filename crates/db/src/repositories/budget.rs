//! Budget repository for department allocation rows.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use cinetrack_core::BudgetLine;
use cinetrack_shared::types::{BudgetLineId, ProjectId};

use super::error::{RepositoryError, ensure_non_negative, ensure_present};
use crate::entities::{budgets, projects};

/// Input for creating a department budget line.
#[derive(Debug, Clone)]
pub struct CreateBudgetLineInput {
    /// Owning project.
    pub project_id: ProjectId,
    /// Department name, stored verbatim.
    pub department: String,
    /// Allocated amount.
    pub planned: Decimal,
    /// Obligated amount.
    pub committed: Decimal,
    /// Spent amount.
    pub actual: Decimal,
}

impl From<&budgets::Model> for BudgetLine {
    fn from(row: &budgets::Model) -> Self {
        Self::new(row.dept.clone(), row.planned, row.committed, row.actual)
    }
}

/// Budget repository.
#[derive(Debug, Clone)]
pub struct BudgetRepository {
    db: Arc<DatabaseConnection>,
}

impl BudgetRepository {
    /// Creates a new budget repository.
    #[must_use]
    pub fn new(db: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self { db: db.into() }
    }

    /// Lists the budget rows of a project in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_by_project(
        &self,
        project_id: ProjectId,
    ) -> Result<Vec<budgets::Model>, DbErr> {
        budgets::Entity::find()
            .filter(budgets::Column::ProjectId.eq(project_id.into_inner()))
            .order_by_asc(budgets::Column::CreatedAt)
            .all(&*self.db)
            .await
    }

    /// Loads a project's rows as KPI input.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn budget_lines(&self, project_id: ProjectId) -> Result<Vec<BudgetLine>, DbErr> {
        let rows = self.list_by_project(project_id).await?;
        Ok(rows.iter().map(BudgetLine::from).collect())
    }

    /// Creates a budget line for an existing project.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::ProjectNotFound` if the project is missing,
    /// `NegativeAmount`/`MissingField` for invalid input, or a database error.
    pub async fn create(
        &self,
        input: CreateBudgetLineInput,
    ) -> Result<budgets::Model, RepositoryError> {
        ensure_present("dept", &input.department)?;
        ensure_non_negative("planned", input.planned)?;
        ensure_non_negative("committed", input.committed)?;
        ensure_non_negative("actual", input.actual)?;

        let project_id = input.project_id.into_inner();
        if projects::Entity::find_by_id(project_id)
            .one(&*self.db)
            .await?
            .is_none()
        {
            return Err(RepositoryError::ProjectNotFound(project_id));
        }

        let row = budgets::ActiveModel {
            id: Set(BudgetLineId::new().into_inner()),
            project_id: Set(project_id),
            dept: Set(input.department),
            planned: Set(input.planned),
            committed: Set(input.committed),
            actual: Set(input.actual),
            created_at: Set(Utc::now().into()),
        }
        .insert(&*self.db)
        .await?;

        Ok(row)
    }
}

#[cfg(test)]
#[path = "budget_tests.rs"]
mod tests;
