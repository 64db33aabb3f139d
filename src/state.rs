use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{config::AppConfig, services::ServiceContext};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(config: AppConfig, db: DatabaseConnection) -> Arc<Self> {
        Arc::new(Self { config, db })
    }

    pub fn services(&self) -> ServiceContext {
        ServiceContext::new(&self.db)
    }
}
