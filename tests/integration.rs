//! Integration tests for the maternity calculation engine.
//!
//! This test suite drives the HTTP API end to end and covers:
//! - Statutory leave baseline
//! - Extended leave, dystocia, and multiple-infant bonuses
//! - Abortion leave exclusivity
//! - Allowance and compensation arithmetic, including the null-allowance
//!   cities and both compensation fallback behaviors
//! - Error cases (unknown city, invalid date, invalid salary, malformed JSON)
//! - Idempotence of the whole pipeline

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use maternity_engine::api::{AppState, create_router};
use maternity_engine::policy::PolicyRegistry;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let registry = PolicyRegistry::builtin().expect("builtin policy table is valid");
    AppState::new(registry)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

async fn post_calculate(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/calculate")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post_calculate_raw_body(router: Router, body: Value) -> (StatusCode, Vec<u8>) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/calculate")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, body_bytes.to_vec())
}

fn create_request(city: &str, start_date: &str) -> Value {
    json!({
        "cityCode": city,
        "leaveStartDate": start_date,
        "firstMonthSalary": 10000,
        "lastMonthSalary": 10000,
        "otherMonthSalary": 10000
    })
}

// =============================================================================
// Leave period scenarios
// =============================================================================

/// IT-001: Shanghai baseline, no flags, 98 statutory days
#[tokio::test]
async fn test_shanghai_baseline() {
    let (status, body) = post_calculate(
        create_router_for_test(),
        create_request("上海", "2024-03-01"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["leaveDetail"]["currentLeaveDays"], 98);
    assert_eq!(body["leaveDetail"]["leaveStartDate"], "2024-03-01");
    assert_eq!(body["leaveDetail"]["leaveEndDate"], "2024-06-06");
    assert_eq!(
        body["allowanceDetail"]["totalSalary"].as_f64().unwrap(),
        30000.0
    );
    // 10000 / 30 x 98 = 32666.67 exceeds the declared salary, so no top-up.
    assert_eq!(
        body["allowanceDetail"]["allowance"].as_f64().unwrap(),
        32666.67
    );
    assert_eq!(
        body["allowanceDetail"]["compensation"].as_f64().unwrap(),
        0.0
    );
}

/// IT-002: leap-year crossing, 98 days from 2024-02-01 ends 2024-05-08
#[tokio::test]
async fn test_leap_year_crossing() {
    let (status, body) = post_calculate(
        create_router_for_test(),
        create_request("310000", "2024-02-01"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["leaveDetail"]["leaveEndDate"], "2024-05-08");
}

/// IT-003: extended leave claim in Shanghai adds 60 days
#[tokio::test]
async fn test_extended_leave() {
    let mut request = create_request("310000", "2024-03-01");
    request["extendedLeave"] = json!(true);

    let (status, body) = post_calculate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["leaveDetail"]["currentLeaveDays"], 158);
    assert_eq!(body["leaveDetail"]["leaveEndDate"], "2024-08-05");
}

/// IT-004: Guangzhou dystocia bonus is 30 days
#[tokio::test]
async fn test_guangzhou_dystocia() {
    let mut request = create_request("440100", "2024-03-01");
    request["dystocia"] = json!(true);

    let (status, body) = post_calculate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["leaveDetail"]["currentLeaveDays"], 128);
}

/// IT-005: twins grant exactly one per-extra-infant bonus unit
#[tokio::test]
async fn test_twins_one_bonus_unit() {
    let mut request = create_request("310000", "2024-03-01");
    request["multipleInfantCount"] = json!(2);

    let (status, body) = post_calculate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    // 98 statutory + one 15-day bonus unit, not two.
    assert_eq!(body["leaveDetail"]["currentLeaveDays"], 113);
}

/// IT-006: abortion replaces the entire live-birth stack
#[tokio::test]
async fn test_abortion_exclusivity() {
    let mut request = create_request("310000", "2024-03-20");
    request["abortion"] = json!(true);
    request["dystocia"] = json!(true);
    request["multipleInfantCount"] = json!(3);
    request["extendedLeave"] = json!(true);
    request["otherMonthSalary"] = json!(null);

    let (status, body) = post_calculate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["leaveDetail"]["currentLeaveDays"], 42);
    assert_eq!(body["leaveDetail"]["leaveEndDate"], "2024-04-30");
    let first_comment = body["calculateComments"]["descriptionList"][0]
        .as_str()
        .unwrap();
    assert!(first_comment.contains("Abortion leave"));
}

// =============================================================================
// Allowance and compensation scenarios
// =============================================================================

/// IT-007: compensation is the exact salary-allowance gap
#[tokio::test]
async fn test_compensation_gap() {
    let request = json!({
        "cityCode": "310000",
        "leaveStartDate": "2024-03-01",
        "firstMonthSalary": 20000,
        "lastMonthSalary": 20000,
        "otherMonthSalary": 9000
    });

    let (status, body) = post_calculate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    // Monthly base 9000: allowance = 9000/30*98 = 29400 < 49000 total.
    assert_eq!(
        body["allowanceDetail"]["allowance"].as_f64().unwrap(),
        29400.0
    );
    assert_eq!(
        body["allowanceDetail"]["compensation"].as_f64().unwrap(),
        19600.0
    );
}

/// IT-008: Beijing cap clamps a high monthly base
#[tokio::test]
async fn test_beijing_cap() {
    let request = json!({
        "cityCode": "110000",
        "leaveStartDate": "2024-03-01",
        "firstMonthSalary": 50000,
        "lastMonthSalary": 50000,
        "otherMonthSalary": 50000
    });

    let (status, body) = post_calculate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    // Base clamped to 33891: 33891/30*98 = 110710.60.
    assert_eq!(
        body["allowanceDetail"]["allowance"].as_f64().unwrap(),
        110710.6
    );
}

/// IT-009: Chengdu cannot compute an allowance; compensation is also null
#[tokio::test]
async fn test_null_allowance_no_fallback() {
    let (status, body) = post_calculate(
        create_router_for_test(),
        create_request("510100", "2024-03-01"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["allowanceDetail"]["allowance"].is_null());
    assert!(body["allowanceDetail"]["compensation"].is_null());
    assert_eq!(
        body["allowanceDetail"]["totalSalary"].as_f64().unwrap(),
        30000.0
    );
    let comments = body["calculateComments"]["descriptionList"]
        .as_array()
        .unwrap();
    assert!(
        comments
            .iter()
            .any(|c| c.as_str().unwrap().contains("could not be determined"))
    );
}

/// IT-010: Chongqing guarantees the full declared salary as a top-up
#[tokio::test]
async fn test_null_allowance_full_salary_fallback() {
    let (status, body) = post_calculate(
        create_router_for_test(),
        create_request("500000", "2024-03-01"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["allowanceDetail"]["allowance"].is_null());
    assert_eq!(
        body["allowanceDetail"]["compensation"].as_f64().unwrap(),
        30000.0
    );
}

/// IT-011: identical requests produce byte-identical responses
#[tokio::test]
async fn test_idempotence() {
    let request = create_request("310000", "2024-03-01");

    let (status_a, body_a) =
        post_calculate_raw_body(create_router_for_test(), request.clone()).await;
    let (status_b, body_b) = post_calculate_raw_body(create_router_for_test(), request).await;

    assert_eq!(status_a, StatusCode::OK);
    assert_eq!(status_b, StatusCode::OK);
    assert_eq!(body_a, body_b);
}

// =============================================================================
// Error cases
// =============================================================================

/// IT-012: unknown city code yields 400 CITY_NOT_FOUND
#[tokio::test]
async fn test_unknown_city() {
    let (status, body) = post_calculate(
        create_router_for_test(),
        create_request("999999", "2024-03-01"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "CITY_NOT_FOUND");
    assert!(body["message"].as_str().unwrap().contains("999999"));
}

/// IT-013: malformed date yields 400 INVALID_DATE
#[tokio::test]
async fn test_invalid_date() {
    let (status, body) = post_calculate(
        create_router_for_test(),
        create_request("310000", "2024-13-40"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_DATE");
}

/// IT-014: negative salary yields 400 INVALID_SALARY
#[tokio::test]
async fn test_negative_salary() {
    let request = json!({
        "cityCode": "310000",
        "leaveStartDate": "2024-03-01",
        "firstMonthSalary": -100,
        "lastMonthSalary": 10000,
        "otherMonthSalary": 10000
    });

    let (status, body) = post_calculate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_SALARY");
    assert!(body["message"].as_str().unwrap().contains("firstMonthSalary"));
}

/// IT-015: missing otherMonthSalary for a long period yields 400
#[tokio::test]
async fn test_missing_other_month_salary() {
    let request = json!({
        "cityCode": "310000",
        "leaveStartDate": "2024-03-01",
        "firstMonthSalary": 10000,
        "lastMonthSalary": 10000
    });

    let (status, body) = post_calculate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_SALARY");
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("otherMonthSalary")
    );
}

/// IT-016: missing required field yields a validation error
#[tokio::test]
async fn test_missing_required_field() {
    let request = json!({
        "cityCode": "310000",
        "leaveStartDate": "2024-03-01",
        "lastMonthSalary": 10000
    });

    let (status, body) = post_calculate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

/// IT-017: syntactically broken JSON yields MALFORMED_JSON
#[tokio::test]
async fn test_malformed_json() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/calculate")
                .header("Content-Type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(body["code"], "MALFORMED_JSON");
}

// =============================================================================
// Comments
// =============================================================================

/// IT-018: comments follow computation order
#[tokio::test]
async fn test_comment_ordering() {
    let (status, body) = post_calculate(
        create_router_for_test(),
        create_request("310000", "2024-03-01"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let comments: Vec<&str> = body["calculateComments"]["descriptionList"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c.as_str().unwrap())
        .collect();

    assert!(comments[0].contains("Statutory maternity leave"));
    let leave_pos = comments.iter().position(|c| c.contains("Total leave")).unwrap();
    let salary_pos = comments
        .iter()
        .position(|c| c.contains("Declared salary"))
        .unwrap();
    let allowance_pos = comments
        .iter()
        .position(|c| c.contains("Maternity allowance"))
        .unwrap();
    assert!(leave_pos < salary_pos);
    assert!(salary_pos < allowance_pos);
}
