//! Event repository for the project audit trail.

use std::sync::Arc;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use serde_json::Value;

use cinetrack_shared::types::{EventId, ProjectId};

use crate::entities::events;

/// Event type recorded when a budget line is added.
pub const EVENT_BUDGET_CREATED: &str = "budget.created";
/// Event type recorded when a shooting day is added.
pub const EVENT_SCHEDULE_CREATED: &str = "schedule.created";
/// Event type recorded when a purchase order is raised.
pub const EVENT_PO_CREATED: &str = "po.created";
/// Event type recorded when an invoice is received.
pub const EVENT_INVOICE_CREATED: &str = "invoice.created";

/// Event repository.
#[derive(Debug, Clone)]
pub struct EventRepository {
    db: Arc<DatabaseConnection>,
}

impl EventRepository {
    /// Creates a new event repository.
    #[must_use]
    pub fn new(db: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self { db: db.into() }
    }

    /// Appends an event to a project's audit trail.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn log_event(
        &self,
        project_id: ProjectId,
        event_type: &str,
        payload: Value,
    ) -> Result<events::Model, DbErr> {
        events::ActiveModel {
            id: Set(EventId::new().into_inner()),
            project_id: Set(project_id.into_inner()),
            event_type: Set(event_type.to_string()),
            payload_json: Set(payload),
            created_at: Set(Utc::now().into()),
        }
        .insert(&*self.db)
        .await
    }

    /// Lists a project's events, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_by_project(
        &self,
        project_id: ProjectId,
    ) -> Result<Vec<events::Model>, DbErr> {
        events::Entity::find()
            .filter(events::Column::ProjectId.eq(project_id.into_inner()))
            .order_by_desc(events::Column::CreatedAt)
            .all(&*self.db)
            .await
    }
}
