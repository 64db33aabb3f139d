use std::collections::HashMap;

use sea_orm::{DatabaseConnection, Set};

use super::{DaoBase, DaoResult, DaoLayerError, FavoriteDao};
use crate::db::entities::{favorite, prelude::User, user};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserWithFavorites {
    pub user: user::Model,
    pub favorites: Vec<favorite::Model>,
}

#[derive(Clone)]
pub struct UserDao {
    db: DatabaseConnection,
}

impl DaoBase for UserDao {
    type Entity = User;

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl UserDao {
    fn favorite_dao(&self) -> FavoriteDao {
        FavoriteDao::new(&self.db)
    }

    pub async fn create_user(
        &self,
        email: &str,
        username: &str,
        password_hash: &str,
        is_active: bool,
    ) -> DaoResult<user::Model> {
        let model = user::ActiveModel {
            email: Set(email.to_string()),
            username: Set(username.to_string()),
            password: Set(password_hash.to_string()),
            is_active: Set(is_active),
            ..Default::default()
        };
        self.create(model).await
    }

    pub async fn find_with_favorites(&self, id: i32) -> DaoResult<Option<UserWithFavorites>> {
        let user = match self.find_by_id(id).await {
            Ok(user) => user,
            Err(DaoLayerError::NotFound { .. }) => return Ok(None),
            Err(err) => return Err(err),
        };
        let favorites = self.favorite_dao().list_for_users(&[user.id]).await?;
        Ok(Some(UserWithFavorites { user, favorites }))
    }

    pub async fn list_with_favorites(&self) -> DaoResult<Vec<UserWithFavorites>> {
        let users = self.list_all().await?;
        let ids: Vec<i32> = users.iter().map(|user| user.id).collect();

        let mut by_user: HashMap<i32, Vec<favorite::Model>> = HashMap::new();
        for favorite in self.favorite_dao().list_for_users(&ids).await? {
            if let Some(user_id) = favorite.user_id {
                by_user.entry(user_id).or_default().push(favorite);
            }
        }

        Ok(users
            .into_iter()
            .map(|user| UserWithFavorites {
                favorites: by_user.remove(&user.id).unwrap_or_default(),
                user,
            })
            .collect())
    }
}
