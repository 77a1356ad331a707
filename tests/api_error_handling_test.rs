use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::util::ServiceExt; // for `oneshot`
use tower_catalogue::api;
use tower_catalogue::db;
use tower_catalogue::infrastructure::AppState;

// Helper to create a test app state
async fn setup_test_state() -> AppState {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    AppState::new(db)
}

fn json_request(method: &str, uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method(method)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(payload).unwrap()))
        .unwrap()
}

async fn error_message(response: axum::response::Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    json["error"].as_str().unwrap_or_default().to_string()
}

fn shell(position: i32, bottom: f64, top: f64, thickness: f64) -> Value {
    json!({
        "position": position,
        "height": 10.0,
        "bottom_diameter": bottom,
        "top_diameter": top,
        "thickness": thickness,
        "density": 7.85
    })
}

#[tokio::test]
async fn test_missing_section_is_not_found() {
    let state = setup_test_state().await;
    let app = api::api_router(state);

    // GET
    let req = Request::builder()
        .uri("/tower_sections/999")
        .method("GET")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(error_message(response).await, "Tower section not found");

    // PUT
    let payload = json!({
        "part_number": "TS999",
        "shells": [shell(1, 5.0, 4.0, 1.0)]
    });
    let response = app
        .clone()
        .oneshot(json_request("PUT", "/tower_sections/999", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // DELETE is not idempotent: a missing section is reported
    let req = Request::builder()
        .uri("/tower_sections/999")
        .method("DELETE")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // By part number
    let req = Request::builder()
        .uri("/tower_sections/by_part_number/NOPE")
        .method("GET")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_invalid_json() {
    let state = setup_test_state().await;
    let app = api::api_router(state);

    let req = Request::builder()
        .uri("/tower_sections")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("invalid json"))
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    // Axum's Json extractor returns 400 for malformed JSON
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_rule_violations_are_bad_requests() {
    let state = setup_test_state().await;
    let app = api::api_router(state);

    let cases = [
        (
            json!({ "part_number": "TS-EMPTY", "shells": [] }),
            "Tower section must have at least one shell",
        ),
        (
            json!({ "part_number": "TS-GAP", "shells": [shell(1, 5.0, 8.0, 1.0), shell(3, 8.0, 10.0, 1.0)] }),
            "Shell positions must be sequential, unique, and start with number 1",
        ),
        (
            json!({ "part_number": "TS-STEP", "shells": [shell(1, 5.0, 8.0, 1.0), shell(2, 11.0, 10.0, 1.0)] }),
            "Shell diameters must be contiguous between adjacent shells",
        ),
        (
            json!({ "part_number": "TS-NEG", "shells": [shell(1, 5.0, 8.0, -1.0)] }),
            "Shell dimensions must be numeric positive numbers",
        ),
        (
            json!({ "part_number": " ", "shells": [shell(1, 5.0, 8.0, 1.0)] }),
            "Part number must not be empty",
        ),
    ];

    for (payload, expected) in cases {
        let response = app
            .clone()
            .oneshot(json_request("POST", "/tower_sections", &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", expected);
        let message = error_message(response).await;
        assert!(
            message.starts_with(expected),
            "expected '{}' got '{}'",
            expected,
            message
        );
    }

    // Nothing was stored
    let req = Request::builder()
        .uri("/tower_sections")
        .method("GET")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["total"], 0);
}

#[tokio::test]
async fn test_duplicate_part_number() {
    let state = setup_test_state().await;
    let app = api::api_router(state);

    let payload = json!({
        "part_number": "TS123",
        "shells": [shell(1, 5.0, 8.0, 1.0), shell(2, 8.0, 10.0, 1.5)]
    });

    let response = app
        .clone()
        .oneshot(json_request("POST", "/tower_sections", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(json_request("POST", "/tower_sections", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        error_message(response).await,
        "Tower section with the same part_number already exists"
    );
}

#[tokio::test]
async fn test_inverted_diameter_range() {
    let state = setup_test_state().await;
    let app = api::api_router(state);

    let req = Request::builder()
        .uri("/tower_sections?min_diameter=10&max_diameter=1")
        .method("GET")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(
        error_message(response)
            .await
            .starts_with("Diameter range is invalid")
    );
}
