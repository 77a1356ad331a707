//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.

use thiserror::Error;

/// A consistency rule broken by a tower section or its shells.
///
/// The leading sentence of each message is stable; some variants append
/// the offending position or field in parentheses.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Tower section must have at least one shell")]
    EmptyShells,

    #[error("Tower section with the same part_number already exists")]
    DuplicatePartNumber,

    #[error("Part number must not be empty")]
    BlankPartNumber,

    #[error("Shell positions must be sequential, unique, and start with number 1")]
    NonSequentialPositions,

    #[error(
        "Shell diameters must be contiguous between adjacent shells \
         (shell {lower} top {top} != shell {upper} bottom {bottom})"
    )]
    DiscontinuousDiameters {
        lower: i32,
        upper: i32,
        top: f64,
        bottom: f64,
    },

    #[error("Shell dimensions must be numeric positive numbers (shell {position}: {field})")]
    NonPositiveDimension { position: i32, field: &'static str },

    #[error("Diameter range is invalid ({0})")]
    InvalidDiameterRange(String),
}

#[derive(Debug, Error)]
pub enum DomainError {
    /// Resource not found
    #[error("Resource not found")]
    NotFound,
    /// A business rule was violated by the caller's input
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    /// Database/persistence error
    #[error("Database error: {0}")]
    Database(String),
    /// Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

// Conversion from SeaORM errors (used in infrastructure layer)
impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Database(e.to_string())
    }
}
