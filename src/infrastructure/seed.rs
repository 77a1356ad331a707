use crate::domain::{
    DomainError, NewShell, TowerSectionInput, TowerSectionRepository, ValidationError,
};
use crate::services::tower_section_service;

pub const DEMO_PART_NUMBER: &str = "DEMO-T1";

/// Insert a three-shell demo section unless it already exists
pub async fn seed_demo_data(repo: &dyn TowerSectionRepository) -> Result<(), DomainError> {
    let shells = [
        (1, 12.0, 4.5, 4.3, 0.040),
        (2, 12.0, 4.3, 4.1, 0.036),
        (3, 10.5, 4.1, 3.9, 0.030),
    ]
    .into_iter()
    .map(
        |(position, height, bottom_diameter, top_diameter, thickness)| NewShell {
            position,
            height,
            bottom_diameter,
            top_diameter,
            thickness,
            density: 7850.0,
        },
    )
    .collect();

    let input = TowerSectionInput {
        part_number: DEMO_PART_NUMBER.to_owned(),
        shells,
    };

    match tower_section_service::create_tower_section(repo, input).await {
        Ok(_) | Err(DomainError::Validation(ValidationError::DuplicatePartNumber)) => Ok(()),
        Err(e) => Err(e),
    }
}
