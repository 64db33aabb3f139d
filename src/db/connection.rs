use std::time::Duration;

use anyhow::{Context, Result, bail};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

use crate::config::DatabaseConfig;

const SQLITE_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Favorite uniqueness per (user, person) and (user, planet). NULL target
/// columns never collide, so one row kind does not block the other.
pub const FAVORITE_UNIQUE_INDEXES: [(&str, &str); 2] = [
    ("idx_favorites_user_person", "user_id, people_id"),
    ("idx_favorites_user_planet", "user_id, planets_id"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbProviderId {
    Postgres,
    Sqlite,
}

impl DbProviderId {
    pub fn as_str(self) -> &'static str {
        match self {
            DbProviderId::Postgres => "postgres",
            DbProviderId::Sqlite => "sqlite",
        }
    }

    pub fn from_url(url: &str) -> Result<Self> {
        let normalized = url.trim().to_ascii_lowercase();
        if normalized.starts_with("postgres://") || normalized.starts_with("postgresql://") {
            Ok(DbProviderId::Postgres)
        } else if normalized.starts_with("sqlite:") {
            Ok(DbProviderId::Sqlite)
        } else {
            bail!(
                "unsupported database url '{}'; expected scheme postgres://, postgresql://, or sqlite://",
                redact_url(url)
            )
        }
    }
}

pub async fn connect(cfg: &DatabaseConfig) -> Result<DatabaseConnection> {
    let provider = DbProviderId::from_url(&cfg.url)?;
    info!(
        provider = provider.as_str(),
        url = %redact_url(&cfg.url),
        "connecting to database"
    );

    let mut options = ConnectOptions::new(cfg.url.clone());
    options
        .max_connections(cfg.max_connections)
        .min_connections(cfg.min_idle)
        .connect_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    let db = Database::connect(options).await?;
    if provider == DbProviderId::Sqlite {
        db.execute_unprepared("PRAGMA foreign_keys = ON").await?;
        db.execute_unprepared(&format!("PRAGMA busy_timeout = {SQLITE_BUSY_TIMEOUT_MS}"))
            .await?;
    }

    sync_schema(&db).await?;
    Ok(db)
}

/// Creates missing tables from the entity definitions, then the favorite
/// uniqueness indexes.
pub async fn sync_schema(db: &DatabaseConnection) -> Result<()> {
    info!("syncing database schema from entities");
    db.get_schema_registry("starwars_api::db::entities::*")
        .sync(db)
        .await?;

    for (name, columns) in FAVORITE_UNIQUE_INDEXES {
        db.execute_unprepared(&format!(
            "CREATE UNIQUE INDEX IF NOT EXISTS {name} ON favorites ({columns})"
        ))
        .await
        .with_context(|| {
            format!("creating unique index {name}; remove duplicate favorites on ({columns}) first")
        })?;
    }
    Ok(())
}

fn redact_url(url: &str) -> String {
    let trimmed = url.trim();
    if let Some((scheme, _)) = trimmed.split_once("://") {
        format!("{scheme}://<redacted>")
    } else if let Some((scheme, _)) = trimmed.split_once(':') {
        format!("{scheme}:<redacted>")
    } else {
        "<invalid-url>".to_string()
    }
}
