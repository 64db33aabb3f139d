use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use starwars_api::{
    app::App,
    db::{dao::DaoContext, seed::seed_demo_data},
    test_helpers::sqlite_test_app,
};

async fn get(app: &App, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn empty_catalog_lists_are_empty_arrays() {
    let dir = tempfile::tempdir().unwrap();
    let (app, _db) = sqlite_test_app(dir.path()).await.unwrap();

    for uri in ["/people", "/planets", "/users"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, json!([]), "{uri}");
    }
}

#[tokio::test]
async fn stored_planet_comes_back_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let (app, db) = sqlite_test_app(dir.path()).await.unwrap();
    let planet = DaoContext::new(&db)
        .planet()
        .create_planet("Hoth", "frozen", "tundra, ice caves", 0)
        .await
        .unwrap();

    let (status, body) = get(&app, &format!("/planets/{}", planet.id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": planet.id,
            "name": "Hoth",
            "climate": "frozen",
            "terrain": "tundra, ice caves",
            "population": 0
        })
    );
}

#[tokio::test]
async fn seeded_catalog_is_listed_in_id_order() {
    let dir = tempfile::tempdir().unwrap();
    let (app, db) = sqlite_test_app(dir.path()).await.unwrap();
    seed_demo_data(&db).await.unwrap();

    let (status, people) = get(&app, "/people").await;
    assert_eq!(status, StatusCode::OK);
    let people = people.as_array().unwrap();
    assert_eq!(people.len(), 5);
    assert_eq!(people[0]["name"], "Luke Skywalker");
    assert_eq!(people[4]["name"], "Yoda");

    let (_, planets) = get(&app, "/planets").await;
    assert_eq!(planets.as_array().unwrap().len(), 4);
    assert_eq!(planets[0]["population"], 200_000);

    let (_, users) = get(&app, "/users").await;
    assert_eq!(
        users,
        json!([{ "id": 1, "email": "luke@rebellion.org", "favorites": [] }])
    );
}

#[tokio::test]
async fn seeding_twice_does_not_duplicate_rows() {
    let dir = tempfile::tempdir().unwrap();
    let (app, db) = sqlite_test_app(dir.path()).await.unwrap();
    seed_demo_data(&db).await.unwrap();
    seed_demo_data(&db).await.unwrap();

    let (_, people) = get(&app, "/people").await;
    assert_eq!(people.as_array().unwrap().len(), 5);
}
