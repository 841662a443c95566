use holonet_data::HasPool;
use sqlx::SqlitePool;

use crate::services::{CharacterService, FavoriteService, PlanetService, UserService};

/// Shared by every handler. Cloning is cheap: each service wraps the pool.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub characters: CharacterService,
    pub planets: PlanetService,
    pub users: UserService,
    pub favorites: FavoriteService,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            characters: CharacterService::new(pool.clone()),
            planets: PlanetService::new(pool.clone()),
            users: UserService::new(pool.clone()),
            favorites: FavoriteService::new(pool.clone()),
            pool,
        }
    }
}

impl HasPool for AppState {
    fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
