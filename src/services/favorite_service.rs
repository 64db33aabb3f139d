use tracing::info;

use crate::{
    db::dao::{DaoLayerError, FavoriteDao, FavoriteTarget},
    db::entities::favorite,
    error::AppError,
    services::store_failure,
};

pub const FAVORITE_EXISTS: &str = "This favorite already exists";
pub const FAVORITE_NOT_FOUND: &str = "This favorite does not exist";

#[derive(Clone)]
pub struct FavoriteService {
    favorite_dao: FavoriteDao,
}

impl FavoriteService {
    pub fn new(favorite_dao: FavoriteDao) -> Self {
        Self { favorite_dao }
    }

    /// Links `user_id` to `target`. A duplicate is rejected by the pre-check,
    /// or by the unique index when two requests race past it.
    pub async fn add(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<favorite::Model, AppError> {
        let existing = self
            .favorite_dao
            .find_for_target(user_id, target)
            .await
            .map_err(|err| store_failure("find favorite", err))?;
        if existing.is_some() {
            return Err(AppError::conflict(FAVORITE_EXISTS));
        }
        self.insert(user_id, target).await
    }

    /// Inserts without the existence check. The unique indexes still turn a
    /// duplicate into the same conflict `add` reports.
    pub async fn insert(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<favorite::Model, AppError> {
        let created = self
            .favorite_dao
            .create_favorite(user_id, target)
            .await
            .map_err(|err| {
                if err.is_unique_violation() {
                    AppError::conflict(FAVORITE_EXISTS)
                } else {
                    store_failure("create favorite", err)
                }
            })?;
        info!(favorite_id = created.id, user_id, ?target, "favorite added");
        Ok(created)
    }

    pub async fn remove(&self, user_id: i32, target: FavoriteTarget) -> Result<(), AppError> {
        let existing = self
            .favorite_dao
            .find_for_target(user_id, target)
            .await
            .map_err(|err| store_failure("find favorite", err))?
            .ok_or_else(|| AppError::not_found(FAVORITE_NOT_FOUND))?;

        self.favorite_dao
            .delete_favorite(&existing)
            .await
            .map_err(|err| match err {
                DaoLayerError::NotFound { .. } => AppError::not_found(FAVORITE_NOT_FOUND),
                err => store_failure("delete favorite", err),
            })?;
        info!(favorite_id = existing.id, user_id, ?target, "favorite deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

    use super::{FAVORITE_EXISTS, FAVORITE_NOT_FOUND};
    use crate::{
        db::{dao::FavoriteTarget, entities::favorite},
        services::ServiceContext,
    };

    fn person_favorite(id: i32, user_id: i32, person_id: i32) -> favorite::Model {
        favorite::Model {
            id,
            user_id: Some(user_id),
            people_id: Some(person_id),
            planets_id: None,
        }
    }

    #[tokio::test]
    async fn add_rejects_existing_favorite_before_insert() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[person_favorite(1, 1, 4)]])
            .into_connection();

        let err = ServiceContext::new(&db)
            .favorite()
            .add(1, FavoriteTarget::Person(4))
            .await
            .expect_err("duplicate should be rejected");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), FAVORITE_EXISTS);
    }

    #[tokio::test]
    async fn add_inserts_when_no_favorite_exists() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<favorite::Model>::new()])
            .append_query_results([[person_favorite(2, 1, 4)]])
            .into_connection();

        let created = ServiceContext::new(&db)
            .favorite()
            .add(1, FavoriteTarget::Person(4))
            .await
            .expect("favorite should be created");
        assert_eq!(created.people_id, Some(4));
    }

    #[tokio::test]
    async fn add_reports_store_failure_as_internal() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<favorite::Model>::new()])
            .append_query_errors([DbErr::Custom("FOREIGN KEY constraint failed".to_string())])
            .into_connection();

        let err = ServiceContext::new(&db)
            .favorite()
            .add(1, FavoriteTarget::Planet(404))
            .await
            .expect_err("insert should fail");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.message().contains("FOREIGN KEY constraint failed"));
    }

    #[tokio::test]
    async fn remove_missing_favorite_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<favorite::Model>::new()])
            .into_connection();

        let err = ServiceContext::new(&db)
            .favorite()
            .remove(1, FavoriteTarget::Planet(3))
            .await
            .expect_err("nothing to remove");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), FAVORITE_NOT_FOUND);
    }

    #[tokio::test]
    async fn remove_deletes_matching_favorite() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[person_favorite(5, 1, 4)]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        ServiceContext::new(&db)
            .favorite()
            .remove(1, FavoriteTarget::Person(4))
            .await
            .expect("favorite should be removed");
    }
}
