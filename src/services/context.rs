use sea_orm::DatabaseConnection;

use crate::{
    db::dao::DaoContext,
    services::{
        catalog_service::CatalogService, favorite_service::FavoriteService,
        user_service::UserService,
    },
};

#[derive(Clone)]
pub struct ServiceContext {
    daos: DaoContext,
}

impl ServiceContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self {
            daos: DaoContext::new(db),
        }
    }

    pub fn catalog(&self) -> CatalogService {
        CatalogService::new(self.daos.person(), self.daos.planet())
    }

    pub fn user(&self) -> UserService {
        UserService::new(self.daos.user())
    }

    pub fn favorite(&self) -> FavoriteService {
        FavoriteService::new(self.daos.favorite())
    }
}
