use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use frontdesk::db::{MemoryStore, RecordStore, SqliteStore};
use frontdesk::server::router;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    router(Arc::new(MemoryStore::new()))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            req = req.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };

    let resp = app
        .clone()
        .oneshot(req.body(body).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&bytes).to_string(),
        ))
    };
    (status, value)
}

fn volunteer_body(name: &str, area: &str) -> Value {
    json!({
        "name": name,
        "date": "7/22/2025",
        "timeIn": "9:00:00 AM",
        "area": area,
        "activities": "tour",
    })
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(&app(), "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("ok".into()));
}

#[tokio::test]
async fn test_create_volunteer_returns_record() {
    let app = app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/volunteers",
        Some(volunteer_body("Ann", "Gift Shop")),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["area"], "gift-shop");
    assert_eq!(body["timeOut"], Value::Null);

    let (status, body) = send(&app, "GET", "/api/volunteers?area=gift-shop", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (_, body) = send(&app, "GET", "/api/volunteers?area=tours", None).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_validation_error_shape() {
    let app = app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/guests",
        Some(json!({
            "name": "Carla",
            "email": "carla@example.com",
            "reason": "wedding",
            "date": "7/22/2025",
            "groomName": "Dave",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "invalid input");
    assert_eq!(body["errors"][0]["field"], "brideName");
    assert_eq!(body["errors"].as_array().unwrap().len(), 1);

    let (_, guests) = send(&app, "GET", "/api/guests", None).await;
    assert!(guests.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_by_area_as_sent_at_checkin() {
    let app = app();
    send(&app, "POST", "/api/volunteers", Some(volunteer_body("Ann", "Gift Shop"))).await;
    send(&app, "POST", "/api/volunteers", Some(volunteer_body("Bob", "office"))).await;

    let (status, body) = send(&app, "GET", "/api/volunteers?area=Gift%20Shop", None).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Ann");

    let (status, body) = send(&app, "GET", "/api/volunteers?area=kitchen", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_wrong_field_type_is_validation_error() {
    let app = app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/guests",
        Some(json!({
            "name": "Carla",
            "email": "carla@example.com",
            "reason": "historic",
            "date": "7/22/2025",
            "joinNewsletter": "yes",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "invalid input");
    assert_eq!(body["errors"][0]["field"], "joinNewsletter");

    let (_, guests) = send(&app, "GET", "/api/guests", None).await;
    assert!(guests.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_body_is_validation_error() {
    let app = app();
    let req = Request::builder()
        .method("POST")
        .uri("/api/staff")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();

    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["errors"][0]["field"], "body");

    let (status, body) = send(&app, "POST", "/api/volunteers", Some(json!(42))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["field"], "body");
}

#[tokio::test]
async fn test_people_and_delete() {
    let app = app();
    send(&app, "POST", "/api/volunteers", Some(volunteer_body("Ann", "tours"))).await;
    let (status, _) = send(
        &app,
        "POST",
        "/api/staff",
        Some(json!({ "name": "Dan", "date": "7/22/2025", "timeIn": "9:00 AM" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, people) = send(&app, "GET", "/api/people", None).await;
    let tags: Vec<&str> = people
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["type"].as_str().unwrap())
        .collect();
    assert_eq!(tags, vec!["volunteer", "staff"]);

    let (status, body) = send(&app, "DELETE", "/api/people/guest/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "person not found");

    let (status, _) = send(&app, "DELETE", "/api/people/staff/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, "DELETE", "/api/people/visitor/1", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["field"], "type");

    let (_, people) = send(&app, "GET", "/api/people", None).await;
    assert_eq!(people.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_names_and_stats() {
    let app = app();
    for n in ["Bob", "Ann", "Bob"] {
        send(&app, "POST", "/api/volunteers", Some(volunteer_body(n, "events"))).await;
    }
    send(
        &app,
        "POST",
        "/api/staff",
        Some(json!({
            "name": "Dan",
            "date": "7/22/2025",
            "timeIn": "9:00:00 AM",
            "timeOut": "5:00:00 PM",
        })),
    )
    .await;

    let (_, names) = send(&app, "GET", "/api/volunteers/names", None).await;
    assert_eq!(names, json!(["Ann", "Bob"]));

    let (_, names) = send(&app, "GET", "/api/staff/names", None).await;
    assert_eq!(names, json!(["Dan"]));

    let (status, stats) = send(&app, "GET", "/api/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats, json!({ "volunteers": 3, "guests": 0, "hours": 8 }));
}

#[tokio::test]
async fn test_sqlite_backend_behind_router() {
    let store: Arc<dyn RecordStore> = Arc::new(SqliteStore::open_in_memory().unwrap());
    let app = router(store.clone());

    let (status, body) = send(
        &app,
        "POST",
        "/api/guests",
        Some(json!({
            "name": "Carla",
            "email": "carla@example.com",
            "reason": "historic",
            "date": "7/22/2025",
            "brideName": "ignored",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["joinNewsletter"], false);
    assert_eq!(body["brideName"], Value::Null);
    assert_eq!(store.get_guests().unwrap().len(), 1);
}
