//! Wire projections of stored records. Each projection has a fixed field
//! set; user passwords are never part of any of them.

use serde::Serialize;

use crate::db::{
    dao::UserWithFavorites,
    entities::{favorite, person, planet},
};

pub trait Project {
    type Wire: Serialize;

    fn project(&self) -> Self::Wire;
}

pub fn project_all<T: Project>(records: &[T]) -> Vec<T::Wire> {
    records.iter().map(Project::project).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonResponse {
    pub id: i32,
    pub name: String,
    pub height: i32,
    pub mass: i32,
    pub gender: String,
}

impl Project for person::Model {
    type Wire = PersonResponse;

    fn project(&self) -> PersonResponse {
        PersonResponse {
            id: self.id,
            name: self.name.clone(),
            height: self.height,
            mass: self.mass,
            gender: self.gender.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanetResponse {
    pub id: i32,
    pub name: String,
    pub climate: String,
    pub terrain: String,
    pub population: i64,
}

impl Project for planet::Model {
    type Wire = PlanetResponse;

    fn project(&self) -> PlanetResponse {
        PlanetResponse {
            id: self.id,
            name: self.name.clone(),
            climate: self.climate.clone(),
            terrain: self.terrain.clone(),
            population: self.population,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FavoriteResponse {
    pub id: i32,
    pub user_id: Option<i32>,
    pub character_id: Option<i32>,
    pub planets_id: Option<i32>,
}

impl Project for favorite::Model {
    type Wire = FavoriteResponse;

    fn project(&self) -> FavoriteResponse {
        FavoriteResponse {
            id: self.id,
            user_id: self.user_id,
            character_id: self.people_id,
            planets_id: self.planets_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub email: String,
    pub favorites: Vec<FavoriteResponse>,
}

impl Project for UserWithFavorites {
    type Wire = UserResponse;

    fn project(&self) -> UserResponse {
        UserResponse {
            id: self.user.id,
            email: self.user.email.clone(),
            favorites: project_all(&self.favorites),
        }
    }
}
