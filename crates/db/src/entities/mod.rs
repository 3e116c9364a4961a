//! `SeaORM` entity definitions for the production tables.

pub mod budgets;
pub mod crew;
pub mod events;
pub mod invoices;
pub mod pos;
pub mod projects;
pub mod schedules;

pub mod prelude {
    //! Entity re-exports.
    pub use super::budgets::Entity as Budgets;
    pub use super::crew::Entity as Crew;
    pub use super::events::Entity as Events;
    pub use super::invoices::Entity as Invoices;
    pub use super::pos::Entity as Pos;
    pub use super::projects::Entity as Projects;
    pub use super::schedules::Entity as Schedules;
}
