//! Domain layer - Pure business abstractions
//!
//! This layer contains NO framework dependencies (no SeaORM, no Axum).
//! Only domain types, trait definitions, validation rules and error types.

pub mod errors;
pub mod repositories;
pub mod validation;

pub use errors::{DomainError, ValidationError};
pub use repositories::*;
pub use validation::{SectionGeometry, validate_part_number, validate_shells};
