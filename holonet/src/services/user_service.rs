use holonet_data::{DataError, Repository, SqlxRepository};
use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::{User, UserPayload};

#[derive(Clone)]
pub struct UserService {
    repo: SqlxRepository<User>,
}

impl UserService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repo: SqlxRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn get(&self, id: i64) -> Result<User, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::UserNotFound(id))
    }

    pub async fn create(&self, payload: UserPayload) -> Result<User, AppError> {
        let new = payload.into_new()?;
        match self.repo.insert(&new).await {
            Ok(user) => {
                tracing::info!(id = user.id, username = %user.username, "user created");
                Ok(user)
            }
            Err(DataError::Conflict(_)) => Err(AppError::Conflict(format!(
                "Username {} or email {} is already taken",
                new.username, new.email
            ))),
            Err(err) => Err(err.into()),
        }
    }
}
