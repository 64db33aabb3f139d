use sea_orm::{DatabaseConnection, Set};

use super::{DaoBase, DaoResult};
use crate::db::entities::{person, prelude::Person};

#[derive(Clone)]
pub struct PersonDao {
    db: DatabaseConnection,
}

impl DaoBase for PersonDao {
    type Entity = Person;

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl PersonDao {
    pub async fn create_person(
        &self,
        name: &str,
        height: i32,
        mass: i32,
        gender: &str,
    ) -> DaoResult<person::Model> {
        let model = person::ActiveModel {
            name: Set(name.to_string()),
            height: Set(height),
            mass: Set(mass),
            gender: Set(gender.to_string()),
            ..Default::default()
        };
        self.create(model).await
    }
}
