use holonet_data::{DataError, Repository, SqlxRepository};
use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::{Message, Planet, PlanetPayload};

#[derive(Clone)]
pub struct PlanetService {
    repo: SqlxRepository<Planet>,
}

impl PlanetService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repo: SqlxRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<Planet>, AppError> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn get(&self, id: i64) -> Result<Planet, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, payload: PlanetPayload) -> Result<Planet, AppError> {
        let new = payload.into_new()?;
        match self.repo.insert(&new).await {
            Ok(planet) => {
                tracing::info!(id = planet.id, name = %planet.name, "planet created");
                Ok(planet)
            }
            Err(DataError::Conflict(_)) => Err(AppError::Conflict(format!(
                "Planet {} already exists",
                new.name
            ))),
            Err(err) => Err(err.into()),
        }
    }

    pub async fn delete(&self, id: i64) -> Result<Message, AppError> {
        let mut tx = self.repo.begin_write().await?;
        let planet = tx
            .find_by_id::<Planet>(id)
            .await?
            .ok_or_else(|| not_found(id))?;
        if !tx.delete::<Planet>(id).await? {
            return Err(not_found(id));
        }
        tx.commit().await?;
        tracing::info!(id, name = %planet.name, "planet deleted");
        Ok(Message::deleted(&planet.name))
    }
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Planet with id {id} does not exist"))
}
