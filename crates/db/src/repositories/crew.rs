//! Crew repository.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use cinetrack_shared::types::{CrewMemberId, ProjectId};

use super::error::{RepositoryError, ensure_non_negative, ensure_present};
use crate::entities::crew;

/// Input for adding a crew member.
#[derive(Debug, Clone)]
pub struct CreateCrewMemberInput {
    /// Project the person is attached to, if any.
    pub project_id: Option<ProjectId>,
    /// Full name.
    pub name: String,
    /// Role, e.g. `Director of Photography`.
    pub role: String,
    /// Department.
    pub dept: Option<String>,
    /// Day rate.
    pub day_rate: Option<Decimal>,
    /// Contact email.
    pub email: Option<String>,
}

/// Crew repository.
#[derive(Debug, Clone)]
pub struct CrewRepository {
    db: Arc<DatabaseConnection>,
}

impl CrewRepository {
    /// Creates a new crew repository.
    #[must_use]
    pub fn new(db: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self { db: db.into() }
    }

    /// Lists every crew member by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_all(&self) -> Result<Vec<crew::Model>, DbErr> {
        crew::Entity::find()
            .order_by_asc(crew::Column::Name)
            .all(&*self.db)
            .await
    }

    /// Lists crew attached to a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_by_project(&self, project_id: ProjectId) -> Result<Vec<crew::Model>, DbErr> {
        crew::Entity::find()
            .filter(crew::Column::ProjectId.eq(project_id.into_inner()))
            .order_by_asc(crew::Column::Name)
            .all(&*self.db)
            .await
    }

    /// Adds a crew member.
    ///
    /// # Errors
    ///
    /// Returns an error for a blank name or negative rate, or if the insert fails.
    pub async fn create(&self, input: CreateCrewMemberInput) -> Result<crew::Model, RepositoryError> {
        ensure_present("name", &input.name)?;
        if let Some(rate) = input.day_rate {
            ensure_non_negative("day_rate", rate)?;
        }

        let row = crew::ActiveModel {
            id: Set(CrewMemberId::new().into_inner()),
            project_id: Set(input.project_id.map(ProjectId::into_inner)),
            name: Set(input.name),
            role: Set(input.role),
            dept: Set(input.dept),
            day_rate: Set(input.day_rate),
            email: Set(input.email),
            created_at: Set(Utc::now().into()),
        }
        .insert(&*self.db)
        .await?;

        Ok(row)
    }
}
