use crate::{
    db::dao::{UserDao, UserWithFavorites},
    error::AppError,
    services::store_failure,
};

pub const USER_NOT_FOUND: &str = "The user does not exists";

#[derive(Clone)]
pub struct UserService {
    user_dao: UserDao,
}

impl UserService {
    pub fn new(user_dao: UserDao) -> Self {
        Self { user_dao }
    }

    pub async fn list_users(&self) -> Result<Vec<UserWithFavorites>, AppError> {
        self.user_dao
            .list_with_favorites()
            .await
            .map_err(|err| store_failure("list users", err))
    }

    pub async fn get_with_favorites(&self, id: i32) -> Result<UserWithFavorites, AppError> {
        self.user_dao
            .find_with_favorites(id)
            .await
            .map_err(|err| store_failure("find user", err))?
            .ok_or_else(|| AppError::not_found(USER_NOT_FOUND))
    }
}
