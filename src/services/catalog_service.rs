use crate::{
    db::dao::{DaoBase, DaoLayerError, PersonDao, PlanetDao},
    db::entities::{person, planet},
    error::AppError,
    services::store_failure,
};

pub const PERSON_NOT_FOUND: &str = "Character does not exist";
pub const PLANET_NOT_FOUND: &str = "The planet does not exists";

#[derive(Clone)]
pub struct CatalogService {
    person_dao: PersonDao,
    planet_dao: PlanetDao,
}

impl CatalogService {
    pub fn new(person_dao: PersonDao, planet_dao: PlanetDao) -> Self {
        Self {
            person_dao,
            planet_dao,
        }
    }

    pub async fn list_people(&self) -> Result<Vec<person::Model>, AppError> {
        self.person_dao
            .list_all()
            .await
            .map_err(|err| store_failure("list people", err))
    }

    pub async fn get_person(&self, id: i32) -> Result<person::Model, AppError> {
        self.person_dao.find_by_id(id).await.map_err(|err| match err {
            DaoLayerError::NotFound { .. } => AppError::not_found(PERSON_NOT_FOUND),
            err => store_failure("find person", err),
        })
    }

    pub async fn list_planets(&self) -> Result<Vec<planet::Model>, AppError> {
        self.planet_dao
            .list_all()
            .await
            .map_err(|err| store_failure("list planets", err))
    }

    pub async fn get_planet(&self, id: i32) -> Result<planet::Model, AppError> {
        self.planet_dao.find_by_id(id).await.map_err(|err| match err {
            DaoLayerError::NotFound { .. } => AppError::not_found(PLANET_NOT_FOUND),
            err => store_failure("find planet", err),
        })
    }
}
