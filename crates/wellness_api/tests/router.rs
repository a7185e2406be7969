use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use wellness_api::build_router;

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app() -> Router {
    build_router()
}

#[tokio::test]
async fn health_returns_ok() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/v1/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn progress_stats_computes_averages() {
    let snapshot = serde_json::json!({
        "mood": "Happy",
        "water_intake": [true, true, false, false, false, false, false, false],
        "nutrition_log": [
            {"id": "m1", "name": "Eggs", "calories": 300, "type": "Breakfast",
             "date": "2024-01-01", "macros": {"protein": 20, "carbs": 2, "fat": 22}},
            {"id": "m2", "name": "Oats", "calories": 400, "type": "Breakfast",
             "date": "2024-01-02", "macros": {"protein": 12, "carbs": 60, "fat": 8}},
            {"id": "m3", "name": "Salad", "calories": 500, "type": "Lunch",
             "date": "2024-01-02", "macros": {"protein": 10, "carbs": 40, "fat": 30}}
        ]
    });

    let response = app()
        .oneshot(post_json("/api/v1/progress/stats", snapshot))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let stats = body_json(response).await;
    assert_eq!(stats["averageWaterIntake"], 2);
    assert_eq!(stats["mostCommonMood"], "Happy");
    assert_eq!(stats["totalMeals"], 3);
    assert_eq!(stats["averageCalories"], 400.0);
    assert_eq!(stats["mostCommonMealType"], "Breakfast");
}

#[tokio::test]
async fn progress_stats_handles_empty_record() {
    let response = app()
        .oneshot(post_json(
            "/api/v1/progress/stats",
            serde_json::json!({ "mood": null }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let stats = body_json(response).await;
    assert_eq!(stats["averageCalories"], 0.0);
    assert_eq!(stats["mostCommonMood"], "—");
    assert_eq!(stats["mostCommonMealType"], "N/A");
}

#[tokio::test]
async fn progress_charts_signal_no_data() {
    let response = app()
        .oneshot(post_json(
            "/api/v1/progress/charts",
            serde_json::json!({ "water_intake": [false, false, false] }),
        ))
        .await
        .unwrap();

    let bundle = body_json(response).await;
    assert_eq!(bundle["noData"], true);
    assert!(bundle["water"]["values"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn nutrition_sorted_defaults_to_most_recent_first() {
    let entries = serde_json::json!([
        {"date": "2024-01-01", "mealType": "Breakfast", "calories": 300,
         "protein": 10, "carbs": 30, "fat": 5},
        {"date": "2024-01-02", "mealType": "Lunch", "calories": 500,
         "protein": 20, "carbs": 50, "fat": 15}
    ]);

    let response = app()
        .oneshot(post_json("/api/v1/nutrition/sorted", entries))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let sorted = body_json(response).await;
    assert_eq!(sorted[0]["date"], "2024-01-02");
    assert_eq!(sorted[1]["date"], "2024-01-01");
}

#[tokio::test]
async fn nutrition_sorted_rejects_unknown_key() {
    let response = app()
        .oneshot(post_json(
            "/api/v1/nutrition/sorted?key=weight",
            serde_json::json!([]),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn nutrition_sorted_honors_key_and_direction() {
    let entries = serde_json::json!([
        {"date": "2024-01-01", "mealType": "Breakfast", "calories": 300,
         "protein": 10, "carbs": 30, "fat": 5},
        {"date": "2024-01-02", "mealType": "Lunch", "calories": 500,
         "protein": 20, "carbs": 50, "fat": 15}
    ]);

    let response = app()
        .oneshot(post_json(
            "/api/v1/nutrition/sorted?key=calories&direction=descending",
            entries,
        ))
        .await
        .unwrap();
    let sorted = body_json(response).await;
    assert_eq!(sorted[0]["calories"], 500.0);
}

#[tokio::test]
async fn journal_export_empty_history_is_no_content() {
    let response = app()
        .oneshot(post_json("/api/v1/journal/export", serde_json::json!([])))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn journal_export_returns_csv_attachment() {
    let rows = serde_json::json!([
        {"id": "e1",
         "entry": "{\"energy\":4,\"journal\":\"good day\",\"tags\":[\"calm\"]}",
         "created_at": "2024-03-01T09:00:00Z"}
    ]);

    let response = app()
        .oneshot(post_json("/api/v1/journal/export", rows))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"wellness-entries-"));

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let csv = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(csv.starts_with("id,created_at,energy"));
    assert!(csv.contains("good day"));
}

#[tokio::test]
async fn journal_prepare_escapes_and_tokenizes() {
    let response = app()
        .oneshot(post_json(
            "/api/v1/journal/prepare",
            serde_json::json!({
                "journal": "fish & chips <3",
                "tags": "dinner, comfort dinner"
            }),
        ))
        .await
        .unwrap();

    let prepared = body_json(response).await;
    assert_eq!(prepared["journal"], "fish &amp; chips &lt;3");
    assert_eq!(prepared["tags"], serde_json::json!(["dinner", "comfort"]));
}

#[tokio::test]
async fn malformed_body_is_rejected_at_the_boundary() {
    // nutrition_log must be an array; serde rejects the shape before the
    // engine ever sees it.
    let response = app()
        .oneshot(post_json(
            "/api/v1/progress/stats",
            serde_json::json!({ "nutrition_log": "not-an-array" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
