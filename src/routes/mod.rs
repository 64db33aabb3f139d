use std::sync::Arc;

use axum::Router;

use crate::{error::AppError, state::AppState};

pub mod catalog;
pub mod favorites;
pub mod public;
pub mod route_list;
pub mod users;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(public::router())
        .merge(catalog::router(state.clone()))
        .merge(users::router(state.clone()))
        .merge(favorites::router(state))
}

/// Rejects ids the store could never have assigned.
pub(crate) fn positive_id(id: i32, label: &str) -> Result<i32, AppError> {
    if id <= 0 {
        return Err(AppError::bad_request(format!(
            "{label} must be a positive integer"
        )));
    }
    Ok(id)
}
