pub mod health;
pub mod tower_sections;

use axum::{Router, routing::get};

use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Tower sections
        .route(
            "/tower_sections",
            get(tower_sections::list_tower_sections).post(tower_sections::create_tower_section),
        )
        .route(
            "/tower_sections/by_part_number/:part_number",
            get(tower_sections::get_tower_section_by_part_number),
        )
        .route(
            "/tower_sections/:id",
            get(tower_sections::get_tower_section)
                .put(tower_sections::update_tower_section)
                .delete(tower_sections::delete_tower_section),
        )
        .with_state(state)
}
