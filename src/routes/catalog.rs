use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    response::{ApiResult, JsonResponse},
    routes::positive_id,
    serialization::{PersonResponse, PlanetResponse, Project, project_all},
    state::AppState,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/people", get(list_people))
        .route("/people/{id}", get(get_person))
        .route("/planets", get(list_planets))
        .route("/planets/{id}", get(get_planet))
        .with_state(state)
}

async fn list_people(State(state): State<Arc<AppState>>) -> ApiResult<Vec<PersonResponse>> {
    let people = state.services().catalog().list_people().await?;
    JsonResponse::ok(project_all(&people))
}

async fn get_person(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> ApiResult<PersonResponse> {
    let id = positive_id(id, "id")?;
    let person = state.services().catalog().get_person(id).await?;
    JsonResponse::ok(person.project())
}

async fn list_planets(State(state): State<Arc<AppState>>) -> ApiResult<Vec<PlanetResponse>> {
    let planets = state.services().catalog().list_planets().await?;
    JsonResponse::ok(project_all(&planets))
}

async fn get_planet(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> ApiResult<PlanetResponse> {
    let id = positive_id(id, "id")?;
    let planet = state.services().catalog().get_planet(id).await?;
    JsonResponse::ok(planet.project())
}
