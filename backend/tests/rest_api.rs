use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use pet_care_backend::config::ServerConfig;
use pet_care_backend::domain::calendar::{format_day, today};
use pet_care_backend::storage::MemoryStore;
use pet_care_backend::{create_router, AppState};

fn test_app() -> Router {
    let config = ServerConfig::default();
    let state = AppState::with_store(MemoryStore::new(), &config);
    create_router(state, &config).expect("Failed to build router")
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create_pet(app: &Router, name: &str) -> Value {
    let (status, pet) = send(
        app,
        Method::POST,
        "/api/pets",
        Some(json!({ "name": name, "type": "dog", "breed": "Beagle", "age": 3 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    pet
}

#[tokio::test]
async fn test_health() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_pet_crud() {
    let app = test_app();

    let pet = create_pet(&app, "Rex").await;
    assert_eq!(pet["id"], 1);
    assert_eq!(pet["userId"], 1);
    assert!(pet["photoUrl"].is_null());

    let (status, pets) = send(&app, Method::GET, "/api/pets", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(pets.as_array().unwrap().len(), 1);

    let (status, updated) = send(&app, Method::PUT, "/api/pets/1", Some(json!({ "age": 4 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["age"], 4);
    assert_eq!(updated["name"], "Rex");

    let (status, body) = send(&app, Method::DELETE, "/api/pets/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));

    let (status, body) = send(&app, Method::GET, "/api/pets/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Pet not found");
}

#[tokio::test]
async fn test_create_pet_ignores_body_user_id() {
    let app = test_app();

    let (_, pet) = send(
        &app,
        Method::POST,
        "/api/pets",
        Some(json!({ "name": "Rex", "type": "dog", "breed": "Beagle", "age": 3, "userId": 9 })),
    )
    .await;

    assert_eq!(pet["userId"], 1);
}

#[tokio::test]
async fn test_missing_targets_return_404() {
    let app = test_app();

    for (method, uri, body) in [
        (Method::PUT, "/api/pets/5", Some(json!({ "name": "X" }))),
        (Method::DELETE, "/api/pets/5", None),
        (Method::PUT, "/api/tasks/5", Some(json!({ "completed": true }))),
        (Method::DELETE, "/api/tasks/5", None),
        (Method::PUT, "/api/vaccines/5", Some(json!({ "completed": true }))),
        (Method::DELETE, "/api/vaccines/5", None),
        (Method::PUT, "/api/diary/5", Some(json!({ "content": "x" }))),
        (Method::DELETE, "/api/diary/5", None),
    ] {
        let (status, body) = send(&app, method, uri, body).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert!(body["message"].as_str().unwrap().ends_with("not found"));
    }
}

#[tokio::test]
async fn test_invalid_input_returns_400() {
    let app = test_app();

    let (status, body) = send(&app, Method::POST, "/api/pets", Some(json!({ "name": "Rex" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid pet data");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/tasks",
        Some(json!({ "petId": "one", "title": "Walk", "date": "2024-05-01" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid task data");

    let (status, body) = send(&app, Method::PUT, "/api/vaccines/1", Some(json!({ "completed": "yes" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid vaccine data");

    let (status, body) = send(&app, Method::POST, "/api/diary", Some(json!({ "petId": 1 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid diary entry data");

    let (status, body) = send(&app, Method::DELETE, "/api/pets/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid id");
}

#[tokio::test]
async fn test_tasks_for_date_scenario() {
    let app = test_app();
    create_pet(&app, "A").await;

    let (status, task) = send(
        &app,
        Method::POST,
        "/api/tasks",
        Some(json!({ "petId": 1, "date": "2024-05-01", "title": "Walk" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(task["completed"], false);
    assert_eq!(task["isRecurring"], true);

    let (_, tasks) = send(&app, Method::GET, "/api/tasks?date=2024-05-01", None).await;
    assert_eq!(tasks.as_array().unwrap().len(), 1);
    assert_eq!(tasks[0]["petName"], "A");
    assert_eq!(tasks[0]["title"], "Walk");

    let (_, tasks) = send(&app, Method::GET, "/api/tasks?date=2024-05-02", None).await;
    assert_eq!(tasks, json!([]));

    let (_, tasks) = send(&app, Method::GET, "/api/pets/1/tasks?date=2024-05-01", None).await;
    assert_eq!(tasks.as_array().unwrap().len(), 1);
    assert!(tasks[0].get("petName").is_none());
}

#[tokio::test]
async fn test_tasks_default_to_today() {
    let app = test_app();
    create_pet(&app, "A").await;
    let today = format_day(today());

    send(
        &app,
        Method::POST,
        "/api/tasks",
        Some(json!({ "petId": 1, "date": today, "title": "Feed", "completed": true })),
    )
    .await;
    send(
        &app,
        Method::POST,
        "/api/tasks",
        Some(json!({ "petId": 1, "date": today, "title": "Walk" })),
    )
    .await;

    let (_, tasks) = send(&app, Method::GET, "/api/tasks", None).await;
    assert_eq!(tasks.as_array().unwrap().len(), 2);

    let (status, summary) = send(&app, Method::GET, "/api/tasks/summary", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary, json!({ "date": today, "total": 2, "completed": 1, "pending": 1 }));
}

#[tokio::test]
async fn test_vaccine_completion_keeps_other_fields() {
    let app = test_app();
    create_pet(&app, "A").await;

    let (_, vaccine) = send(
        &app,
        Method::POST,
        "/api/vaccines",
        Some(json!({ "petId": 1, "name": "Rabies", "dueDate": "2024-01-01", "completed": false, "veterinarian": "Dr. Lee" })),
    )
    .await;

    let (status, _) = send(&app, Method::PUT, "/api/vaccines/1", Some(json!({ "completed": true }))).await;
    assert_eq!(status, StatusCode::OK);

    let (_, vaccines) = send(&app, Method::GET, "/api/pets/1/vaccines", None).await;
    let mut expected = vaccine.clone();
    expected["completed"] = json!(true);
    assert_eq!(vaccines, json!([expected]));

    let (_, joined) = send(&app, Method::GET, "/api/vaccines", None).await;
    assert_eq!(joined[0]["petName"], "A");
    assert_eq!(joined[0]["completed"], true);
}

#[tokio::test]
async fn test_vaccine_schedule_window() {
    let app = test_app();
    create_pet(&app, "A").await;
    let soon = format_day(today() + chrono::Duration::days(10));

    send(
        &app,
        Method::POST,
        "/api/vaccines",
        Some(json!({ "petId": 1, "name": "Rabies", "dueDate": soon })),
    )
    .await;

    let (status, schedule) = send(&app, Method::GET, "/api/vaccines/schedule", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(schedule["dueSoonDays"], 30);
    assert_eq!(schedule["dueSoon"].as_array().unwrap().len(), 1);

    let (_, schedule) = send(&app, Method::GET, "/api/vaccines/schedule?withinDays=5", None).await;
    assert_eq!(schedule["dueSoon"], json!([]));
    assert_eq!(schedule["later"][0]["name"], "Rabies");
}

#[tokio::test]
async fn test_diary_listing_order_and_null_clear() {
    let app = test_app();
    create_pet(&app, "A").await;

    send(
        &app,
        Method::POST,
        "/api/diary",
        Some(json!({ "petId": 1, "content": "Evening nap", "mood": "tired", "date": "2024-01-01", "time": "18:00" })),
    )
    .await;
    send(
        &app,
        Method::POST,
        "/api/diary",
        Some(json!({ "petId": 1, "content": "Morning run", "date": "2024-01-02", "time": "09:00" })),
    )
    .await;

    let (_, entries) = send(&app, Method::GET, "/api/diary", None).await;
    assert_eq!(entries[0]["content"], "Morning run");
    assert_eq!(entries[1]["content"], "Evening nap");
    assert_eq!(entries[1]["petName"], "A");

    let (_, entry) = send(&app, Method::PUT, "/api/diary/1", Some(json!({ "mood": null }))).await;
    assert!(entry["mood"].is_null());
    assert_eq!(entry["content"], "Evening nap");
}

#[tokio::test]
async fn test_deleted_pet_leaves_orphans() {
    let app = test_app();
    create_pet(&app, "A").await;
    send(
        &app,
        Method::POST,
        "/api/tasks",
        Some(json!({ "petId": 1, "date": "2024-05-01", "title": "Walk" })),
    )
    .await;

    send(&app, Method::DELETE, "/api/pets/1", None).await;

    let (_, tasks) = send(&app, Method::GET, "/api/tasks?date=2024-05-01", None).await;
    assert_eq!(tasks, json!([]));

    let (status, task) = send(&app, Method::GET, "/api/tasks/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(task["petId"], 1);
}

#[tokio::test]
async fn test_vaccine_schedule_rejects_huge_window() {
    let app = test_app();
    create_pet(&app, "A").await;

    let (status, body) = send(&app, Method::GET, "/api/vaccines/schedule?withinDays=4000000000", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid query");

    let (status, schedule) = send(&app, Method::GET, "/api/vaccines/schedule?withinDays=36500", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(schedule["dueSoonDays"], 36500);
}

#[tokio::test]
async fn test_update_rejects_null_for_required_field() {
    let app = test_app();
    create_pet(&app, "Rex").await;

    let (status, body) = send(&app, Method::PUT, "/api/pets/1", Some(json!({ "name": null }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid pet data");

    send(
        &app,
        Method::POST,
        "/api/tasks",
        Some(json!({ "petId": 1, "date": "2024-05-01", "title": "Walk" })),
    )
    .await;
    let (status, body) = send(&app, Method::PUT, "/api/tasks/1", Some(json!({ "completed": null }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid task data");

    let (_, pet) = send(&app, Method::GET, "/api/pets/1", None).await;
    assert_eq!(pet["name"], "Rex");

    let (status, pet) = send(&app, Method::PUT, "/api/pets/1", Some(json!({ "photoUrl": null, "age": 5 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(pet["age"], 5);
    assert!(pet["photoUrl"].is_null());
}
