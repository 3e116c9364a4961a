//! Schedule repository for shooting days.

use std::sync::Arc;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use cinetrack_core::ScheduleDay;
use cinetrack_shared::types::{ProjectId, ScheduleDayId};

use super::error::{RepositoryError, ensure_present};
use crate::entities::{projects, schedules};

/// Input for creating a shooting day.
#[derive(Debug, Clone)]
pub struct CreateScheduleDayInput {
    /// Owning project.
    pub project_id: ProjectId,
    /// Day ordinal.
    pub day: i32,
    /// Scene(s) being shot.
    pub scene: String,
    /// Location.
    pub location: String,
    /// Status tag.
    pub status: String,
}

impl From<&schedules::Model> for ScheduleDay {
    fn from(row: &schedules::Model) -> Self {
        Self {
            day: row.day,
            status: row.status.clone(),
            scene: row.scene.clone(),
            location: row.location.clone(),
        }
    }
}

/// Schedule repository.
#[derive(Debug, Clone)]
pub struct ScheduleRepository {
    db: Arc<DatabaseConnection>,
}

impl ScheduleRepository {
    /// Creates a new schedule repository.
    #[must_use]
    pub fn new(db: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self { db: db.into() }
    }

    /// Lists a project's shooting days ordered by day.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_by_project(
        &self,
        project_id: ProjectId,
    ) -> Result<Vec<schedules::Model>, DbErr> {
        schedules::Entity::find()
            .filter(schedules::Column::ProjectId.eq(project_id.into_inner()))
            .order_by_asc(schedules::Column::Day)
            .all(&*self.db)
            .await
    }

    /// Loads a project's shooting days as KPI input.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn schedule_days(&self, project_id: ProjectId) -> Result<Vec<ScheduleDay>, DbErr> {
        let rows = self.list_by_project(project_id).await?;
        Ok(rows.iter().map(ScheduleDay::from).collect())
    }

    /// Creates a shooting day for an existing project.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::ProjectNotFound` if the project is missing.
    pub async fn create(
        &self,
        input: CreateScheduleDayInput,
    ) -> Result<schedules::Model, RepositoryError> {
        ensure_present("status", &input.status)?;

        let project_id = input.project_id.into_inner();
        if projects::Entity::find_by_id(project_id)
            .one(&*self.db)
            .await?
            .is_none()
        {
            return Err(RepositoryError::ProjectNotFound(project_id));
        }

        let row = schedules::ActiveModel {
            id: Set(ScheduleDayId::new().into_inner()),
            project_id: Set(project_id),
            day: Set(input.day),
            scene: Set(input.scene),
            location: Set(input.location),
            status: Set(input.status),
            created_at: Set(Utc::now().into()),
        }
        .insert(&*self.db)
        .await?;

        Ok(row)
    }
}
