//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod budget;
pub mod crew;
pub mod error;
pub mod event;
pub mod invoice;
pub mod project;
pub mod purchase_order;
pub mod schedule;

pub use budget::{BudgetRepository, CreateBudgetLineInput};
pub use crew::{CreateCrewMemberInput, CrewRepository};
pub use error::RepositoryError;
pub use event::{
    EVENT_BUDGET_CREATED, EVENT_INVOICE_CREATED, EVENT_PO_CREATED, EVENT_SCHEDULE_CREATED,
    EventRepository,
};
pub use invoice::{CreateInvoiceInput, InvoiceRepository};
pub use project::{CreateProjectInput, ProjectRepository};
pub use purchase_order::{CreatePurchaseOrderInput, PurchaseOrderRepository};
pub use schedule::{CreateScheduleDayInput, ScheduleRepository};

#[cfg(test)]
#[path = "repositories_tests.rs"]
mod tests;
