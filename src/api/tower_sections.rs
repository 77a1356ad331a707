//! Tower section API handlers using repository pattern

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

use crate::domain::{DiameterRange, DomainError, NewShell, TowerSectionInput};
use crate::infrastructure::AppState;
use crate::services::tower_section_service;

/// Request DTO for creating or replacing a tower section
#[derive(Debug, Deserialize, ToSchema)]
pub struct TowerSectionRequest {
    pub part_number: String,
    pub shells: Vec<NewShell>,
}

impl From<TowerSectionRequest> for TowerSectionInput {
    fn from(req: TowerSectionRequest) -> Self {
        Self {
            part_number: req.part_number,
            shells: req.shells,
        }
    }
}

/// Inclusive diameter bounds; both the bottom and top diameter must fit
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DiameterRangeQuery {
    pub min_diameter: Option<f64>,
    pub max_diameter: Option<f64>,
}

impl From<DiameterRangeQuery> for DiameterRange {
    fn from(q: DiameterRangeQuery) -> Self {
        Self {
            min: q.min_diameter,
            max: q.max_diameter,
        }
    }
}

/// Map a domain failure to a status code and `{"error": ...}` body
fn error_response(err: DomainError) -> Response {
    match err {
        DomainError::NotFound => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Tower section not found"})),
        )
            .into_response(),
        DomainError::Validation(rule) => (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": rule.to_string()})),
        )
            .into_response(),
        e => {
            tracing::error!("Tower section request failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": format!("Error occurred: {}", e)})),
            )
                .into_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/tower_sections",
    request_body = TowerSectionRequest,
    responses(
        (status = 201, description = "Tower section created"),
        (status = 400, description = "A shell or section rule was violated")
    ),
    tag = "tower_sections"
)]
pub async fn create_tower_section(
    State(state): State<AppState>,
    Json(payload): Json<TowerSectionRequest>,
) -> impl IntoResponse {
    match tower_section_service::create_tower_section(state.section_repo.as_ref(), payload.into())
        .await
    {
        Ok(section) => (
            StatusCode::CREATED,
            Json(json!({
                "tower_section": section,
                "message": "Tower section created successfully"
            })),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/tower_sections",
    params(DiameterRangeQuery),
    responses(
        (status = 200, description = "Sections whose diameters fall in the range"),
        (status = 400, description = "Invalid diameter range")
    ),
    tag = "tower_sections"
)]
pub async fn list_tower_sections(
    State(state): State<AppState>,
    Query(query): Query<DiameterRangeQuery>,
) -> impl IntoResponse {
    match tower_section_service::list_tower_sections(state.section_repo.as_ref(), query.into())
        .await
    {
        Ok(sections) => Json(json!({
            "total": sections.len(),
            "tower_sections": sections
        }))
        .into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/tower_sections/{id}",
    params(("id" = i32, Path, description = "Tower section id")),
    responses(
        (status = 200, description = "Tower section found"),
        (status = 404, description = "Tower section not found")
    ),
    tag = "tower_sections"
)]
pub async fn get_tower_section(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match tower_section_service::get_tower_section(state.section_repo.as_ref(), id).await {
        Ok(section) => (StatusCode::OK, Json(json!({"tower_section": section}))).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/tower_sections/by_part_number/{part_number}",
    params(("part_number" = String, Path, description = "Unique part number")),
    responses(
        (status = 200, description = "Tower section found"),
        (status = 404, description = "Tower section not found")
    ),
    tag = "tower_sections"
)]
pub async fn get_tower_section_by_part_number(
    State(state): State<AppState>,
    Path(part_number): Path<String>,
) -> impl IntoResponse {
    match tower_section_service::get_tower_section_by_part_number(
        state.section_repo.as_ref(),
        &part_number,
    )
    .await
    {
        Ok(section) => (StatusCode::OK, Json(json!({"tower_section": section}))).into_response(),
        Err(e) => error_response(e),
    }
}

/// Full replace: part number and every shell
#[utoipa::path(
    put,
    path = "/api/tower_sections/{id}",
    params(("id" = i32, Path, description = "Tower section id")),
    request_body = TowerSectionRequest,
    responses(
        (status = 200, description = "Tower section replaced"),
        (status = 400, description = "A shell or section rule was violated"),
        (status = 404, description = "Tower section not found")
    ),
    tag = "tower_sections"
)]
pub async fn update_tower_section(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<TowerSectionRequest>,
) -> impl IntoResponse {
    match tower_section_service::update_tower_section(
        state.section_repo.as_ref(),
        id,
        payload.into(),
    )
    .await
    {
        Ok(section) => (
            StatusCode::OK,
            Json(json!({
                "tower_section": section,
                "message": "Tower section updated successfully"
            })),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/tower_sections/{id}",
    params(("id" = i32, Path, description = "Tower section id")),
    responses(
        (status = 200, description = "Tower section deleted"),
        (status = 404, description = "Tower section not found")
    ),
    tag = "tower_sections"
)]
pub async fn delete_tower_section(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match tower_section_service::delete_tower_section(state.section_repo.as_ref(), id).await {
        Ok(section) => (
            StatusCode::OK,
            Json(json!({
                "tower_section": section,
                "message": "Tower section deleted successfully"
            })),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}
