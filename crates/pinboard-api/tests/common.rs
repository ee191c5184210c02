#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use pinboard_api::{AppState, AppStateInner, app, password::PasswordPolicy};
use pinboard_db::Database;
use serde_json::Value;
use tower::ServiceExt;

pub fn setup_app(policy: PasswordPolicy) -> (Router, AppState) {
    let db = Database::open_in_memory().expect("in-memory database");
    let state = AppStateInner::new(db, policy);
    (app(state.clone()), state)
}

pub async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> Response {
    let request = Request::builder()
        .uri(uri)
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn get(app: &Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a user through the API and return its id from the Location header.
pub async fn create_user(app: &Router, name: &str, email: &str) -> i64 {
    let response = post_json(
        app,
        "/users",
        serde_json::json!({ "name": name, "email": email, "password": "pw" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    location_id(&response)
}

pub fn location_id(response: &Response) -> i64 {
    let location = response
        .headers()
        .get(header::LOCATION)
        .expect("Location header")
        .to_str()
        .unwrap();
    location.rsplit('/').next().unwrap().parse().unwrap()
}
