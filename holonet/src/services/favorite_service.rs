use holonet_data::{DataError, Filter, Repository, SqlxRepository, Tx};
use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::{Character, Favorite, FavoriteView, NewFavorite, Planet, TargetKind, User};

/// Links users to the planets and characters they favorite.
///
/// A user holds at most one favorite per target. Link and unlink each run
/// in a single transaction that holds the write lock from the start, so the
/// duplicate check and the insert cannot interleave with another link.
#[derive(Clone)]
pub struct FavoriteService {
    pool: SqlitePool,
    views: SqlxRepository<FavoriteView>,
}

fn of_user(user_id: i64) -> Filter {
    Filter::new().eq("user_id", user_id)
}

fn of_target(user_id: i64, kind: TargetKind, target_id: i64) -> Filter {
    of_user(user_id).eq(kind.id_column(), target_id)
}

impl FavoriteService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            views: SqlxRepository::new(pool.clone()),
            pool,
        }
    }

    /// Every favorite of `user_id`, oldest first. Unknown users have none.
    pub async fn list(&self, user_id: i64) -> Result<Vec<FavoriteView>, AppError> {
        Ok(self.views.find_where(&of_user(user_id)).await?)
    }

    /// Favorite `target_id` for `user_id`.
    ///
    /// Checked in order: an existing link, then the target, then the user.
    pub async fn link(
        &self,
        user_id: i64,
        kind: TargetKind,
        target_id: i64,
    ) -> Result<FavoriteView, AppError> {
        let mut tx = Tx::begin_write(&self.pool).await?;

        let existing: Vec<FavoriteView> =
            tx.find_where(&of_target(user_id, kind, target_id)).await?;
        if let Some(favorite) = existing.first() {
            let name = favorite.target_name().unwrap_or_default().to_string();
            return Err(AppError::AlreadyFavorited { name });
        }

        let name = target_name(&mut tx, kind, target_id)
            .await?
            .ok_or(AppError::TargetNotFound { kind, id: target_id })?;

        if tx.find_by_id::<User>(user_id).await?.is_none() {
            return Err(AppError::UserNotFound(user_id));
        }

        let new = NewFavorite {
            user_id,
            kind,
            target_id,
        };
        let favorite: Favorite = match tx.insert(&new).await {
            Ok(favorite) => favorite,
            Err(DataError::Conflict(_)) => return Err(AppError::AlreadyFavorited { name }),
            Err(err) => return Err(err.into()),
        };
        let view = tx
            .find_by_id::<FavoriteView>(favorite.id)
            .await?
            .ok_or_else(|| DataError::NotFound(format!("favorite {}", favorite.id)))?;
        tx.commit().await?;

        tracing::info!(user_id, %kind, target_id, target = %name, "favorite added");
        Ok(view)
    }

    /// Remove the link, if any, and return what the user still favorites.
    pub async fn unlink(
        &self,
        user_id: i64,
        kind: TargetKind,
        target_id: i64,
    ) -> Result<Vec<FavoriteView>, AppError> {
        let mut tx = Tx::begin_write(&self.pool).await?;
        let removed = tx
            .delete_where::<Favorite>(&of_target(user_id, kind, target_id))
            .await?;
        let remaining = tx.find_where(&of_user(user_id)).await?;
        tx.commit().await?;

        tracing::debug!(user_id, %kind, target_id, removed, "favorite removed");
        Ok(remaining)
    }
}

async fn target_name(
    tx: &mut Tx<'_>,
    kind: TargetKind,
    id: i64,
) -> Result<Option<String>, DataError> {
    Ok(match kind {
        TargetKind::Planet => tx.find_by_id::<Planet>(id).await?.map(|p| p.name),
        TargetKind::People => tx.find_by_id::<Character>(id).await?.map(|c| c.name),
    })
}
