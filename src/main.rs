use anyhow::Context;

use sapatos_api::config;
use sapatos_api::database::Db;
use sapatos_api::routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, BACK_PORT, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("Starting Sapatos API in {:?} mode", config.environment);

    // The pool connects lazily; an unreachable database degrades /health and
    // surfaces as 500s on data routes instead of blocking startup.
    let db = Db::connect(&config.database).context("failed to create database handle")?;
    match db.ping().await {
        Ok(()) => tracing::info!("Conectado exitosamente a la base de datos"),
        Err(e) => tracing::warn!("Base de datos no disponible al arranque: {}", e),
    }

    let app = routes::app(db);

    // Allow tests or deployments to override port via env
    let port = std::env::var("BACK_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(5000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Sapatos API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.context("server")?;
    Ok(())
}
