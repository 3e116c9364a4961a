//! Database seeder for Cinetrack development.
//!
//! Seeds one demo feature with department budgets, a shooting schedule,
//! purchase orders, invoices and crew. Skips everything when the demo
//! project already exists.
//!
//! Usage: cargo run --bin seeder

use std::sync::Arc;

use anyhow::Context;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::DatabaseConnection;
use serde_json::json;

use cinetrack_db::repositories::{
    BudgetRepository, CreateBudgetLineInput, CreateCrewMemberInput, CreateInvoiceInput,
    CreateProjectInput, CreatePurchaseOrderInput, CreateScheduleDayInput, CrewRepository,
    EVENT_BUDGET_CREATED, EventRepository, InvoiceRepository, ProjectRepository,
    PurchaseOrderRepository, ScheduleRepository,
};
use cinetrack_shared::AppConfig;
use cinetrack_shared::types::{ProjectId, PurchaseOrderId};

const DEMO_TITLE: &str = "Night Harbor";

/// (department, planned, committed, actual)
const BUDGET: [(&str, Decimal, Decimal, Decimal); 6] = [
    ("Camera", dec!(180000), dec!(40000), dec!(126500)),
    ("Sound", dec!(65000), dec!(8000), dec!(51200)),
    ("Lighting", dec!(90000), dec!(15000), dec!(97300)),
    ("Art", dec!(120000), dec!(30000), dec!(64000)),
    ("Locations", dec!(75000), dec!(12000), dec!(81900)),
    ("Post", dec!(150000), dec!(60000), dec!(0)),
];

/// (day, scene, location, status)
const SCHEDULE: [(i32, &str, &str, &str); 8] = [
    (1, "Sc. 1-3", "Pier 9", "completed"),
    (2, "Sc. 4, 7", "Harbor Office", "completed"),
    (3, "Sc. 12", "Pier 9", "delayed"),
    (4, "Sc. 8-10", "Warehouse", "completed"),
    (5, "Sc. 15", "Lighthouse", "in_progress"),
    (6, "Sc. 16-18", "Lighthouse", "planned"),
    (7, "Sc. 20", "Studio A", "planned"),
    (8, "Sc. 21-24", "Studio A", "planned"),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    println!("Connecting to database...");
    let db = Arc::new(
        cinetrack_db::connect(&config.database.url, 2, 1)
            .await
            .context("Failed to connect to database")?,
    );

    let projects = ProjectRepository::new(db.clone());
    if projects.list().await?.iter().any(|p| p.title == DEMO_TITLE) {
        println!("  Demo project already exists, skipping...");
        return Ok(());
    }

    println!("Seeding demo project...");
    let project = projects
        .create(CreateProjectInput {
            title: DEMO_TITLE.to_string(),
            description: Some("Harbor-side noir feature, 8-day shoot".to_string()),
            status: "shooting".to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 10, 5),
            end_date: NaiveDate::from_ymd_opt(2026, 10, 16),
        })
        .await?;
    let project_id = ProjectId::from(project.id);

    println!("Seeding budget...");
    seed_budget(&db, project_id).await?;

    println!("Seeding schedule...");
    seed_schedule(&db, project_id).await?;

    println!("Seeding purchase orders and invoices...");
    seed_purchase_orders(&db, project_id).await?;

    println!("Seeding crew...");
    seed_crew(&db, project_id).await?;

    println!("Seeding complete! Project id: {}", project.id);
    Ok(())
}

async fn seed_budget(db: &Arc<DatabaseConnection>, project_id: ProjectId) -> anyhow::Result<()> {
    let budgets = BudgetRepository::new(db.clone());
    let events = EventRepository::new(db.clone());

    for (department, planned, committed, actual) in BUDGET {
        let row = budgets
            .create(CreateBudgetLineInput {
                project_id,
                department: department.to_string(),
                planned,
                committed,
                actual,
            })
            .await?;
        events
            .log_event(
                project_id,
                EVENT_BUDGET_CREATED,
                json!({ "budget_id": row.id, "dept": row.dept, "source": "seeder" }),
            )
            .await?;
    }
    Ok(())
}

async fn seed_schedule(db: &Arc<DatabaseConnection>, project_id: ProjectId) -> anyhow::Result<()> {
    let schedule = ScheduleRepository::new(db.clone());
    for (day, scene, location, status) in SCHEDULE {
        schedule
            .create(CreateScheduleDayInput {
                project_id,
                day,
                scene: scene.to_string(),
                location: location.to_string(),
                status: status.to_string(),
            })
            .await?;
    }
    Ok(())
}

async fn seed_purchase_orders(
    db: &Arc<DatabaseConnection>,
    project_id: ProjectId,
) -> anyhow::Result<()> {
    let orders = PurchaseOrderRepository::new(db.clone());
    let invoices = InvoiceRepository::new(db.clone());

    let orders_to_raise = [
        ("Panavision", dec!(42000), "approved"),
        ("Harbor Grip & Electric", dec!(18500), "approved"),
        ("Dockside Catering", dec!(9600), "draft"),
    ];

    for (vendor, amount, status) in orders_to_raise {
        let po = orders
            .create(CreatePurchaseOrderInput {
                project_id,
                vendor: vendor.to_string(),
                amount,
                status: status.to_string(),
            })
            .await?;

        if status == "approved" {
            let due_date = NaiveDate::from_ymd_opt(2026, 11, 15).context("invalid due date")?;
            invoices
                .create(CreateInvoiceInput {
                    po_id: PurchaseOrderId::from(po.id),
                    amount: amount / dec!(2),
                    due_date,
                    status: "pending".to_string(),
                })
                .await?;
        }
    }
    Ok(())
}

async fn seed_crew(db: &Arc<DatabaseConnection>, project_id: ProjectId) -> anyhow::Result<()> {
    let crew = CrewRepository::new(db.clone());

    let members = [
        ("Mara Ellison", "Director", None, None),
        ("Tomas Reyes", "Director of Photography", Some("Camera"), Some(dec!(1450))),
        ("Ji-woo Park", "Production Sound Mixer", Some("Sound"), Some(dec!(850))),
        ("Ana Ruiz", "Gaffer", Some("Lighting"), Some(dec!(780))),
        ("Owen Blake", "Location Manager", Some("Locations"), Some(dec!(650))),
    ];

    for (name, role, dept, day_rate) in members {
        crew.create(CreateCrewMemberInput {
            project_id: Some(project_id),
            name: name.to_string(),
            role: role.to_string(),
            dept: dept.map(str::to_string),
            day_rate,
            email: None,
        })
        .await?;
    }
    Ok(())
}
