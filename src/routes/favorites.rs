use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    routing::post,
};

use crate::{
    db::dao::FavoriteTarget,
    error::AppError,
    response::{ApiResult, JsonResponse, MessageBody},
    routes::positive_id,
    state::AppState,
};

pub const FAVORITE_ADDED: &str = "The favorite was added";
pub const FAVORITE_DELETED: &str = "The favorite was deleted";

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/favorite/planet/{planet_id}/{user_id}",
            post(add_planet).delete(remove_planet),
        )
        .route(
            "/favorite/people/{person_id}/{user_id}",
            post(add_person).delete(remove_person),
        )
        .with_state(state)
}

fn planet_target(planet_id: i32, user_id: i32) -> Result<(i32, FavoriteTarget), AppError> {
    let planet_id = positive_id(planet_id, "planet_id")?;
    let user_id = positive_id(user_id, "user_id")?;
    Ok((user_id, FavoriteTarget::Planet(planet_id)))
}

fn person_target(person_id: i32, user_id: i32) -> Result<(i32, FavoriteTarget), AppError> {
    let person_id = positive_id(person_id, "person_id")?;
    let user_id = positive_id(user_id, "user_id")?;
    Ok((user_id, FavoriteTarget::Person(person_id)))
}

async fn add_planet(
    State(state): State<Arc<AppState>>,
    Path((planet_id, user_id)): Path<(i32, i32)>,
) -> ApiResult<MessageBody> {
    let (user_id, target) = planet_target(planet_id, user_id)?;
    add(&state, user_id, target).await
}

async fn remove_planet(
    State(state): State<Arc<AppState>>,
    Path((planet_id, user_id)): Path<(i32, i32)>,
) -> ApiResult<MessageBody> {
    let (user_id, target) = planet_target(planet_id, user_id)?;
    remove(&state, user_id, target).await
}

async fn add_person(
    State(state): State<Arc<AppState>>,
    Path((person_id, user_id)): Path<(i32, i32)>,
) -> ApiResult<MessageBody> {
    let (user_id, target) = person_target(person_id, user_id)?;
    add(&state, user_id, target).await
}

async fn remove_person(
    State(state): State<Arc<AppState>>,
    Path((person_id, user_id)): Path<(i32, i32)>,
) -> ApiResult<MessageBody> {
    let (user_id, target) = person_target(person_id, user_id)?;
    remove(&state, user_id, target).await
}

async fn add(state: &AppState, user_id: i32, target: FavoriteTarget) -> ApiResult<MessageBody> {
    state.services().favorite().add(user_id, target).await?;
    JsonResponse::created(MessageBody::new(FAVORITE_ADDED))
}

async fn remove(state: &AppState, user_id: i32, target: FavoriteTarget) -> ApiResult<MessageBody> {
    state.services().favorite().remove(user_id, target).await?;
    JsonResponse::ok(MessageBody::new(FAVORITE_DELETED))
}
