//! Tower Section Service - Business rules without HTTP layer
//!
//! Every write re-validates the full shell set and recomputes the section
//! geometry from it. Handlers and the demo seeder both go through here.

use crate::domain::{
    DiameterRange, DomainError, NewShell, SectionDraft, SectionGeometry, TowerSection,
    TowerSectionInput, TowerSectionRepository, ValidationError, validate_part_number,
    validate_shells,
};

fn rejected(rule: ValidationError) -> DomainError {
    tracing::warn!("Tower section rejected: {}", rule);
    rule.into()
}

/// Validate and sort the shells, then derive the section geometry
fn build_draft(
    part_number: String,
    shells: Vec<NewShell>,
) -> Result<SectionDraft, ValidationError> {
    let shells = validate_shells(shells)?;
    let geometry = SectionGeometry::from_shells(&shells).ok_or(ValidationError::EmptyShells)?;

    Ok(SectionDraft {
        part_number,
        geometry,
        shells,
    })
}

/// Create a tower section from a complete shell list
pub async fn create_tower_section(
    repo: &dyn TowerSectionRepository,
    input: TowerSectionInput,
) -> Result<TowerSection, DomainError> {
    if input.shells.is_empty() {
        return Err(rejected(ValidationError::EmptyShells));
    }

    let part_number = validate_part_number(&input.part_number).map_err(rejected)?;

    if repo.find_by_part_number(&part_number).await?.is_some() {
        return Err(rejected(ValidationError::DuplicatePartNumber));
    }

    let draft = build_draft(part_number, input.shells).map_err(rejected)?;
    let section = repo.create(draft).await?;

    tracing::info!(
        "Created tower section {} (id={}, {} shells, length={})",
        section.part_number,
        section.id,
        section.shells.len(),
        section.length
    );
    Ok(section)
}

/// Replace a section's part number and its whole shell set
pub async fn update_tower_section(
    repo: &dyn TowerSectionRepository,
    id: i32,
    input: TowerSectionInput,
) -> Result<TowerSection, DomainError> {
    if repo.find_by_id(id).await?.is_none() {
        return Err(DomainError::NotFound);
    }

    if input.shells.is_empty() {
        return Err(rejected(ValidationError::EmptyShells));
    }

    let part_number = validate_part_number(&input.part_number).map_err(rejected)?;

    if let Some(other) = repo.find_by_part_number(&part_number).await?
        && other.id != id
    {
        return Err(rejected(ValidationError::DuplicatePartNumber));
    }

    let draft = build_draft(part_number, input.shells).map_err(rejected)?;
    let section = repo.replace(id, draft).await?;

    tracing::info!(
        "Replaced tower section {} (id={}, {} shells)",
        section.part_number,
        section.id,
        section.shells.len()
    );
    Ok(section)
}

/// Delete a section with its shells, returning what was removed
pub async fn delete_tower_section(
    repo: &dyn TowerSectionRepository,
    id: i32,
) -> Result<TowerSection, DomainError> {
    let existing = repo.find_by_id(id).await?.ok_or(DomainError::NotFound)?;
    repo.delete(id).await?;

    tracing::info!(
        "Deleted tower section {} (id={})",
        existing.part_number,
        existing.id
    );
    Ok(existing)
}

pub async fn get_tower_section(
    repo: &dyn TowerSectionRepository,
    id: i32,
) -> Result<TowerSection, DomainError> {
    repo.find_by_id(id).await?.ok_or(DomainError::NotFound)
}

pub async fn get_tower_section_by_part_number(
    repo: &dyn TowerSectionRepository,
    part_number: &str,
) -> Result<TowerSection, DomainError> {
    repo.find_by_part_number(part_number.trim())
        .await?
        .ok_or(DomainError::NotFound)
}

/// List sections, optionally restricted to a diameter range
pub async fn list_tower_sections(
    repo: &dyn TowerSectionRepository,
    range: DiameterRange,
) -> Result<Vec<TowerSection>, DomainError> {
    range.validate().map_err(rejected)?;

    let sections = if range.is_unbounded() {
        repo.find_all().await?
    } else {
        repo.find_by_diameter_range(range).await?
    };

    tracing::debug!(
        "Listed {} tower sections (min={:?}, max={:?})",
        sections.len(),
        range.min,
        range.max
    );
    Ok(sections)
}
