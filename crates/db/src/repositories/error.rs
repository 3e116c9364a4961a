//! Error type shared by the write paths of the repositories.

use sea_orm::DbErr;
use uuid::Uuid;

/// Errors raised while writing production records.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Referenced project does not exist.
    #[error("Project not found: {0}")]
    ProjectNotFound(Uuid),

    /// Referenced purchase order does not exist.
    #[error("Purchase order not found: {0}")]
    PurchaseOrderNotFound(Uuid),

    /// An amount field was negative.
    #[error("{0} cannot be negative")]
    NegativeAmount(&'static str),

    /// A required text field was blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Rejects negative amounts, naming the offending field.
pub(crate) fn ensure_non_negative(
    field: &'static str,
    amount: rust_decimal::Decimal,
) -> Result<(), RepositoryError> {
    if amount < rust_decimal::Decimal::ZERO {
        return Err(RepositoryError::NegativeAmount(field));
    }
    Ok(())
}

/// Rejects blank text, naming the offending field.
pub(crate) fn ensure_present(field: &'static str, value: &str) -> Result<(), RepositoryError> {
    if value.trim().is_empty() {
        return Err(RepositoryError::MissingField(field));
    }
    Ok(())
}
