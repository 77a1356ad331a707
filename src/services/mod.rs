//! Services Layer
//!
//! This module contains pure business logic extracted from HTTP handlers.

pub mod tower_section_service;

// Re-export for convenience
pub use tower_section_service::*;
