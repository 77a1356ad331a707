//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::DomainError;
use super::validation::SectionGeometry;

/// A stored shell, as returned to API clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Shell {
    pub id: i32,
    pub position: i32,
    pub height: f64,
    pub bottom_diameter: f64,
    pub top_diameter: f64,
    pub thickness: f64,
    pub density: f64,
}

/// A stored tower section with its shells ordered by position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TowerSection {
    pub id: i32,
    pub part_number: String,
    pub bottom_diameter: f64,
    pub top_diameter: f64,
    pub length: f64,
    pub created_at: String,
    pub updated_at: String,
    pub shells: Vec<Shell>,
}

/// Shell data supplied by a client, before it has an id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NewShell {
    pub position: i32,
    pub height: f64,
    pub bottom_diameter: f64,
    pub top_diameter: f64,
    pub thickness: f64,
    #[serde(alias = "steel_density")]
    pub density: f64,
}

/// Input for creating or fully replacing a tower section
#[derive(Debug, Clone, Deserialize)]
pub struct TowerSectionInput {
    pub part_number: String,
    pub shells: Vec<NewShell>,
}

/// A validated section ready to be written.
///
/// `shells` are sorted by position and `geometry` is derived from them.
#[derive(Debug, Clone)]
pub struct SectionDraft {
    pub part_number: String,
    pub geometry: SectionGeometry,
    pub shells: Vec<NewShell>,
}

/// Inclusive diameter bounds used to filter sections.
///
/// A section matches when both its bottom and top diameter lie inside
/// the range. Missing bounds are open.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DiameterRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Repository trait for TowerSection entity
#[async_trait]
pub trait TowerSectionRepository: Send + Sync {
    /// Find all sections ordered by id
    async fn find_all(&self) -> Result<Vec<TowerSection>, DomainError>;

    /// Find a section by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<TowerSection>, DomainError>;

    /// Find a section by its part number
    async fn find_by_part_number(
        &self,
        part_number: &str,
    ) -> Result<Option<TowerSection>, DomainError>;

    /// Find sections whose bottom and top diameters both fall in `range`
    async fn find_by_diameter_range(
        &self,
        range: DiameterRange,
    ) -> Result<Vec<TowerSection>, DomainError>;

    /// Insert a section and its shells in one transaction
    async fn create(&self, draft: SectionDraft) -> Result<TowerSection, DomainError>;

    /// Overwrite a section and replace all of its shells in one transaction
    async fn replace(&self, id: i32, draft: SectionDraft) -> Result<TowerSection, DomainError>;

    /// Delete a section and its shells
    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}
