pub mod catalog_service;
pub mod context;
pub mod favorite_service;
pub mod user_service;

pub use context::ServiceContext;

use crate::{db::dao::DaoLayerError, error::AppError};

/// Store failures surface as 500 with the database's own message.
pub(crate) fn store_failure(context: &'static str, err: DaoLayerError) -> AppError {
    match err {
        DaoLayerError::Db(db_err) => AppError::internal_from_source(context, db_err),
        DaoLayerError::NotFound { .. } => AppError::internal_from_source(context, err),
    }
}
