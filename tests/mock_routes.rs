use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
};
use sea_orm::{DatabaseBackend, MockDatabase};
use serde_json::{Value, json};
use tower::ServiceExt;

use starwars_api::{
    db::entities::{person, planet, user},
    test_helpers::test_app,
};

async fn get_json(db: sea_orm::DatabaseConnection, method: &str, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = test_app(db).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

fn empty_db() -> sea_orm::DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres).into_connection()
}

#[tokio::test]
async fn hello_route_returns_message() {
    let (status, body) = get_json(empty_db(), "GET", "/user").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "msg": "Hello, this is your GET /user response " }));
}

#[tokio::test]
async fn trailing_slash_is_tolerated() {
    let (status, body) = get_json(empty_db(), "GET", "/user/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["msg"].is_string());
}

#[tokio::test]
async fn sitemap_lists_registered_routes() {
    let (status, body) = get_json(empty_db(), "GET", "/").await;
    assert_eq!(status, StatusCode::OK);

    let routes = body.as_array().expect("sitemap should be an array");
    assert!(routes.contains(&json!({ "method": "GET", "path": "/people/{id}" })));
    assert!(routes.contains(&json!({
        "method": "DELETE",
        "path": "/favorite/planet/{planet_id}/{user_id}"
    })));
}

#[tokio::test]
async fn unknown_person_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<person::Model>::new()])
        .into_connection();

    let (status, body) = get_json(db, "GET", "/people/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({ "error": true, "status": 404, "message": "Character does not exist" })
    );
}

#[tokio::test]
async fn unknown_planet_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<planet::Model>::new()])
        .into_connection();

    let (status, body) = get_json(db, "GET", "/planets/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "The planet does not exists");
}

#[tokio::test]
async fn unknown_user_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<user::Model>::new()])
        .into_connection();

    let (status, body) = get_json(db, "GET", "/users/favorites/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "The user does not exists");
}

#[tokio::test]
async fn person_record_has_fixed_field_set() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[person::Model {
            id: 1,
            name: "Luke Skywalker".to_string(),
            height: 172,
            mass: 77,
            gender: "male".to_string(),
        }]])
        .into_connection();

    let (status, body) = get_json(db, "GET", "/people/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "id": 1, "name": "Luke Skywalker", "height": 172, "mass": 77, "gender": "male" })
    );
}

#[tokio::test]
async fn non_integer_id_is_bad_request() {
    let (status, body) = get_json(empty_db(), "GET", "/people/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], true);
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn non_positive_id_is_bad_request() {
    let (status, body) = get_json(empty_db(), "POST", "/favorite/planet/0/1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "planet_id must be a positive integer");
}

#[tokio::test]
async fn unknown_route_uses_error_envelope() {
    let (status, body) = get_json(empty_db(), "GET", "/starships").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], true);
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn wrong_method_uses_error_envelope() {
    let (status, body) = get_json(empty_db(), "DELETE", "/people").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["status"], 405);
}
