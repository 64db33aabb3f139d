use std::path::Path;

use sea_orm::DatabaseConnection;

use crate::{
    app::{App, build_app},
    config::{AppConfig, DatabaseConfig},
    db::connection,
    state::AppState,
};

/// Full HTTP stack over an arbitrary connection, usually a `MockDatabase`.
pub fn test_app(db: DatabaseConnection) -> App {
    build_app(AppState::new(AppConfig::default(), db))
}

/// Full HTTP stack over a file-backed SQLite database inside `dir`, with the
/// schema already synced.
pub async fn sqlite_test_app(dir: &Path) -> anyhow::Result<(App, DatabaseConnection)> {
    let database = DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", dir.join("catalog.db").display()),
        max_connections: 1,
        min_idle: 1,
    };
    let db = connection::connect(&database).await?;
    let config = AppConfig {
        database,
        ..AppConfig::default()
    };
    Ok((build_app(AppState::new(config, db.clone())), db))
}
