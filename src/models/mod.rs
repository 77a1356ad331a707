pub mod shell;
pub mod tower_section;

use crate::domain::{Shell, TowerSection};

impl From<shell::Model> for Shell {
    fn from(model: shell::Model) -> Self {
        Self {
            id: model.id,
            position: model.position,
            height: model.height,
            bottom_diameter: model.bottom_diameter,
            top_diameter: model.top_diameter,
            thickness: model.thickness,
            density: model.density,
        }
    }
}

impl TowerSection {
    /// Assemble a domain section from its row and shell rows.
    /// Shells are ordered by position regardless of the order given.
    pub fn from_models(section: tower_section::Model, mut shells: Vec<shell::Model>) -> Self {
        shells.sort_by_key(|s| s.position);
        Self {
            id: section.id,
            part_number: section.part_number,
            bottom_diameter: section.bottom_diameter,
            top_diameter: section.top_diameter,
            length: section.length,
            created_at: section.created_at,
            updated_at: section.updated_at,
            shells: shells.into_iter().map(Shell::from).collect(),
        }
    }
}
