use std::net::SocketAddr;

use anyhow::Context;
use axum::{ServiceExt, extract::Request};

use starwars_api::{
    app::build_app,
    config::AppConfig,
    db::{connection, seed},
    logging::init_tracing,
    state::AppState,
};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!("server failed: {err:?}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::from_env().context("failed to load config")?;
    init_tracing(&cfg.logging.rust_log)?;

    let db = connection::connect(&cfg.database).await?;
    if cfg.general.seed_demo_data {
        seed::seed_demo_data(&db).await?;
    }

    let addr: SocketAddr = format!("{}:{}", cfg.general.host, cfg.general.port)
        .parse()
        .with_context(|| {
            format!(
                "invalid HOST/PORT: {}:{}",
                cfg.general.host, cfg.general.port
            )
        })?;

    let state = AppState::new(cfg, db);
    let app = build_app(state);

    tracing::info!("listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;
    Ok(())
}
