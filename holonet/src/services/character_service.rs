use holonet_data::{DataError, Repository, SqlxRepository};
use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::{Character, CharacterPayload, Message};

#[derive(Clone)]
pub struct CharacterService {
    repo: SqlxRepository<Character>,
}

impl CharacterService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repo: SqlxRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<Character>, AppError> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn get(&self, id: i64) -> Result<Character, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, payload: CharacterPayload) -> Result<Character, AppError> {
        let new = payload.into_new()?;
        match self.repo.insert(&new).await {
            Ok(character) => {
                tracing::info!(id = character.id, name = %character.name, "character created");
                Ok(character)
            }
            Err(DataError::Conflict(_)) => Err(AppError::Conflict(format!(
                "Character {} already exists",
                new.name
            ))),
            Err(err) => Err(err.into()),
        }
    }

    /// Look up and remove under one write lock, so of two racing deletes
    /// only one succeeds.
    pub async fn delete(&self, id: i64) -> Result<Message, AppError> {
        let mut tx = self.repo.begin_write().await?;
        let character = tx
            .find_by_id::<Character>(id)
            .await?
            .ok_or_else(|| not_found(id))?;
        if !tx.delete::<Character>(id).await? {
            return Err(not_found(id));
        }
        tx.commit().await?;
        tracing::info!(id, name = %character.name, "character deleted");
        Ok(Message::deleted(&character.name))
    }
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Character with id {id} does not exist"))
}
