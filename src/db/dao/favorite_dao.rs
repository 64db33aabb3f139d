use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

use super::{DaoBase, DaoLayerError, DaoResult};
use crate::db::entities::{favorite, prelude::Favorite};

/// What a favorite points at besides its user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteTarget {
    Person(i32),
    Planet(i32),
}

impl FavoriteTarget {
    /// `(people_id, planets_id)` as stored on the row.
    pub fn columns(self) -> (Option<i32>, Option<i32>) {
        match self {
            FavoriteTarget::Person(id) => (Some(id), None),
            FavoriteTarget::Planet(id) => (None, Some(id)),
        }
    }
}

#[derive(Clone)]
pub struct FavoriteDao {
    db: DatabaseConnection,
}

impl DaoBase for FavoriteDao {
    type Entity = Favorite;

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl FavoriteDao {
    /// First favorite of `user_id` matching the given target ids. A `None`
    /// id leaves that column unconstrained.
    pub async fn find_favorite(
        &self,
        user_id: i32,
        person_id: Option<i32>,
        planet_id: Option<i32>,
    ) -> DaoResult<Option<favorite::Model>> {
        let mut query = Favorite::find().filter(favorite::Column::UserId.eq(user_id));
        if let Some(person_id) = person_id {
            query = query.filter(favorite::Column::PeopleId.eq(person_id));
        }
        if let Some(planet_id) = planet_id {
            query = query.filter(favorite::Column::PlanetsId.eq(planet_id));
        }

        query
            .order_by_asc(favorite::Column::Id)
            .one(&self.db)
            .await
            .map_err(DaoLayerError::Db)
    }

    pub async fn find_for_target(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> DaoResult<Option<favorite::Model>> {
        let (person_id, planet_id) = target.columns();
        self.find_favorite(user_id, person_id, planet_id).await
    }

    pub async fn create_favorite(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> DaoResult<favorite::Model> {
        let (people_id, planets_id) = target.columns();
        let model = favorite::ActiveModel {
            user_id: Set(Some(user_id)),
            people_id: Set(people_id),
            planets_id: Set(planets_id),
            ..Default::default()
        };
        self.create(model).await
    }

    pub async fn delete_favorite(&self, favorite: &favorite::Model) -> DaoResult<i32> {
        self.delete(favorite.id).await
    }

    pub async fn list_for_users(&self, user_ids: &[i32]) -> DaoResult<Vec<favorite::Model>> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        Favorite::find()
            .filter(favorite::Column::UserId.is_in(user_ids.iter().copied()))
            .order_by_asc(favorite::Column::Id)
            .all(&self.db)
            .await
            .map_err(DaoLayerError::Db)
    }
}
