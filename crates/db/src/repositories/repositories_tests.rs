//! Tests for the schedule, purchase order, invoice, crew and event repositories.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rust_decimal_macros::dec;
use sea_orm::{DatabaseBackend, MockDatabase};
use serde_json::json;
use uuid::Uuid;

use cinetrack_core::ScheduleDay;
use cinetrack_shared::types::{ProjectId, PurchaseOrderId};

use super::*;
use crate::entities::{crew, events, invoices, pos, schedules};

fn schedule_row(project_id: Uuid, day: i32, status: &str) -> schedules::Model {
    schedules::Model {
        id: Uuid::now_v7(),
        project_id,
        day,
        scene: format!("Sc. {day}"),
        location: "Pier 9".to_string(),
        status: status.to_string(),
        created_at: Utc::now().into(),
    }
}

fn po_row(project_id: Uuid) -> pos::Model {
    pos::Model {
        id: Uuid::now_v7(),
        project_id,
        vendor: "Panavision".to_string(),
        amount: dec!(12500.00),
        status: "approved".to_string(),
        created_at: Utc::now().into(),
    }
}

#[tokio::test]
async fn schedule_days_carry_status_and_scene() {
    let project_id = Uuid::now_v7();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            schedule_row(project_id, 1, "completed"),
            schedule_row(project_id, 2, "delayed"),
        ]])
        .into_connection();

    let days = ScheduleRepository::new(db)
        .schedule_days(ProjectId::from(project_id))
        .await
        .unwrap();

    assert_eq!(days.len(), 2);
    assert!(days[0].is_completed());
    assert!(days[1].is_delayed());
    assert_eq!(days[1].scene, "Sc. 2");
    assert_eq!(ScheduleDay::from(&schedule_row(project_id, 3, "scheduled")).day, 3);
}

#[tokio::test]
async fn repositories_share_one_connection() {
    let project_id = Uuid::now_v7();
    let db = Arc::new(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![schedule_row(project_id, 1, "completed")]])
            .append_query_results([vec![po_row(project_id)]])
            .into_connection(),
    );

    let schedule = ScheduleRepository::new(db.clone());
    let orders = PurchaseOrderRepository::new(db.clone());

    let days = schedule
        .list_by_project(ProjectId::from(project_id))
        .await
        .unwrap();
    let rows = orders
        .list_by_project(ProjectId::from(project_id))
        .await
        .unwrap();

    assert_eq!(days.len(), 1);
    assert_eq!(rows[0].vendor, "Panavision");
    assert_eq!(Arc::strong_count(&db), 3);
}

#[tokio::test]
async fn schedule_create_requires_status() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let err = ScheduleRepository::new(db)
        .create(CreateScheduleDayInput {
            project_id: ProjectId::new(),
            day: 1,
            scene: "Sc. 1".to_string(),
            location: "Studio A".to_string(),
            status: String::new(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, RepositoryError::MissingField("status")));
}

#[tokio::test]
async fn purchase_order_create_rejects_unknown_project() {
    let project_id = Uuid::now_v7();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<crate::entities::projects::Model>::new()])
        .into_connection();

    let err = PurchaseOrderRepository::new(db)
        .create(CreatePurchaseOrderInput {
            project_id: ProjectId::from(project_id),
            vendor: "Panavision".to_string(),
            amount: dec!(100),
            status: "draft".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, RepositoryError::ProjectNotFound(id) if id == project_id));
}

#[tokio::test]
async fn invoice_create_returns_billed_purchase_order() {
    let project_id = Uuid::now_v7();
    let po = po_row(project_id);
    let due = NaiveDate::from_ymd_opt(2026, 11, 30).unwrap();
    let invoice = invoices::Model {
        id: Uuid::now_v7(),
        po_id: po.id,
        amount: dec!(5000),
        due_date: due,
        status: "pending".to_string(),
        created_at: Utc::now().into(),
    };
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![po.clone()]])
        .append_query_results([vec![invoice.clone()]])
        .into_connection();

    let (row, billed) = InvoiceRepository::new(db)
        .create(CreateInvoiceInput {
            po_id: PurchaseOrderId::from(po.id),
            amount: dec!(5000),
            due_date: due,
            status: "pending".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(row, invoice);
    assert_eq!(billed.project_id, project_id);
}

#[tokio::test]
async fn invoice_create_rejects_unknown_purchase_order() {
    let po_id = Uuid::now_v7();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<pos::Model>::new()])
        .into_connection();

    let err = InvoiceRepository::new(db)
        .create(CreateInvoiceInput {
            po_id: PurchaseOrderId::from(po_id),
            amount: dec!(10),
            due_date: NaiveDate::from_ymd_opt(2026, 12, 1).unwrap(),
            status: "pending".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, RepositoryError::PurchaseOrderNotFound(id) if id == po_id));
}

#[tokio::test]
async fn crew_create_rejects_negative_day_rate() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let err = CrewRepository::new(db)
        .create(CreateCrewMemberInput {
            project_id: None,
            name: "Ana Ruiz".to_string(),
            role: "Gaffer".to_string(),
            dept: Some("Lighting".to_string()),
            day_rate: Some(dec!(-50)),
            email: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, RepositoryError::NegativeAmount("day_rate")));
}

#[tokio::test]
async fn crew_list_returns_rows() {
    let member = crew::Model {
        id: Uuid::now_v7(),
        project_id: None,
        name: "Ana Ruiz".to_string(),
        role: "Gaffer".to_string(),
        dept: Some("Lighting".to_string()),
        day_rate: Some(dec!(650)),
        email: None,
        created_at: Utc::now().into(),
    };
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![member.clone()]])
        .into_connection();

    let rows = CrewRepository::new(db).list_all().await.unwrap();

    assert_eq!(rows, vec![member]);
}

#[tokio::test]
async fn log_event_returns_inserted_event() {
    let project_id = Uuid::now_v7();
    let stored = events::Model {
        id: Uuid::now_v7(),
        project_id,
        event_type: EVENT_PO_CREATED.to_string(),
        payload_json: json!({ "vendor": "Panavision" }),
        created_at: Utc::now().into(),
    };
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![stored.clone()]])
        .into_connection();

    let event = EventRepository::new(db)
        .log_event(
            ProjectId::from(project_id),
            EVENT_PO_CREATED,
            json!({ "vendor": "Panavision" }),
        )
        .await
        .unwrap();

    assert_eq!(event.event_type, "po.created");
    assert_eq!(event.payload_json["vendor"], "Panavision");
}
