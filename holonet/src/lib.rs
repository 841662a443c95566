//! # holonet
//!
//! Star Wars record service: users, characters (`/people`), planets and
//! the favorites linking them, served over HTTP from a SQLite database.

pub mod controllers;
pub mod error;
pub mod models;
pub mod services;
pub mod state;

use holonet_core::prelude::*;
use sqlx::migrate::MigrateError;
use sqlx::SqlitePool;

use controllers::{FavoriteController, PeopleController, PlanetController, UserController};
pub use error::AppError;
pub use state::AppState;

/// Every controller and plugin, ready to `build()` or `serve()`.
pub fn build_app(state: AppState) -> AppBuilder<AppState> {
    AppBuilder::new(state)
        .with(Tracing)
        .with(Cors::permissive())
        .with(Health)
        .with(Sitemap)
        .with(ErrorHandling)
        .with(NormalizePath)
        .register_controller::<PeopleController>()
        .register_controller::<PlanetController>()
        .register_controller::<UserController>()
        .register_controller::<FavoriteController>()
}

/// Create or upgrade the schema.
pub async fn migrate(pool: &SqlitePool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("database migrations applied");
    Ok(())
}
