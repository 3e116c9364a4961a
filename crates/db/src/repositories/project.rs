//! Project repository for database operations.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set,
};

use cinetrack_shared::types::ProjectId;

use crate::entities::projects;

/// Input for creating a project.
#[derive(Debug, Clone)]
pub struct CreateProjectInput {
    /// Working title.
    pub title: String,
    /// Optional logline or notes.
    pub description: Option<String>,
    /// Production phase, e.g. `pre_production`, `shooting`, `post`.
    pub status: String,
    /// First day of principal photography.
    pub start_date: Option<NaiveDate>,
    /// Planned wrap date.
    pub end_date: Option<NaiveDate>,
}

/// Project repository.
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepository {
    /// Creates a new project repository.
    #[must_use]
    pub fn new(db: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self { db: db.into() }
    }

    /// Lists all projects, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<projects::Model>, DbErr> {
        projects::Entity::find()
            .order_by_desc(projects::Column::CreatedAt)
            .all(&*self.db)
            .await
    }

    /// Finds a project by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: ProjectId) -> Result<Option<projects::Model>, DbErr> {
        projects::Entity::find_by_id(id.into_inner())
            .one(&*self.db)
            .await
    }

    /// Returns whether a project exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn exists(&self, id: ProjectId) -> Result<bool, DbErr> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    /// Creates a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(&self, input: CreateProjectInput) -> Result<projects::Model, DbErr> {
        projects::ActiveModel {
            id: Set(ProjectId::new().into_inner()),
            title: Set(input.title),
            description: Set(input.description),
            status: Set(input.status),
            start_date: Set(input.start_date),
            end_date: Set(input.end_date),
            created_at: Set(Utc::now().into()),
        }
        .insert(&*self.db)
        .await
    }
}
