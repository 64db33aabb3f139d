use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    response::{ApiResult, JsonResponse},
    routes::positive_id,
    serialization::{Project, UserResponse, project_all},
    state::AppState,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/favorites/{user_id}", get(user_favorites))
        .with_state(state)
}

async fn list_users(State(state): State<Arc<AppState>>) -> ApiResult<Vec<UserResponse>> {
    let users = state.services().user().list_users().await?;
    JsonResponse::ok(project_all(&users))
}

async fn user_favorites(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i32>,
) -> ApiResult<UserResponse> {
    let user_id = positive_id(user_id, "user_id")?;
    let user = state.services().user().get_with_favorites(user_id).await?;
    JsonResponse::ok(user.project())
}
