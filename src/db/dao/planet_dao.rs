use sea_orm::{DatabaseConnection, Set};

use super::{DaoBase, DaoResult};
use crate::db::entities::{planet, prelude::Planet};

#[derive(Clone)]
pub struct PlanetDao {
    db: DatabaseConnection,
}

impl DaoBase for PlanetDao {
    type Entity = Planet;

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl PlanetDao {
    pub async fn create_planet(
        &self,
        name: &str,
        climate: &str,
        terrain: &str,
        population: i64,
    ) -> DaoResult<planet::Model> {
        let model = planet::ActiveModel {
            name: Set(name.to_string()),
            climate: Set(climate.to_string()),
            terrain: Set(terrain.to_string()),
            population: Set(population),
            ..Default::default()
        };
        self.create(model).await
    }
}
