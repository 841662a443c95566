use holonet::{build_app, migrate, AppState};
use holonet_core::{init_tracing, HolonetConfig, ServerConfig};
use holonet_data::{connect, DatabaseConfig, HasPool};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = HolonetConfig::load("dev")?;
    let server: ServerConfig = config.section()?;
    let database: DatabaseConfig = config.section()?;
    tracing::info!(profile = config.profile(), "configuration loaded");

    let pool = connect(&database).await?;
    migrate(&pool).await?;

    let state = AppState::new(pool);
    let shutdown_pool = state.pool().clone();
    build_app(state)
        .on_stop(move || async move {
            shutdown_pool.close().await;
            tracing::info!("database pool closed");
        })
        .serve(&server.addr())
        .await
}
