use crate::api;
use crate::domain::{NewShell, Shell, TowerSection};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::tower_sections::create_tower_section,
        api::tower_sections::list_tower_sections,
        api::tower_sections::get_tower_section,
        api::tower_sections::get_tower_section_by_part_number,
        api::tower_sections::update_tower_section,
        api::tower_sections::delete_tower_section,
    ),
    components(
        schemas(
            api::tower_sections::TowerSectionRequest,
            NewShell,
            Shell,
            TowerSection,
        )
    ),
    tags(
        (name = "tower_sections", description = "Tower section catalogue API")
    )
)]
pub struct ApiDoc;
