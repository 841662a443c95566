//! Explicit transactions for multi-statement operations.

use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::entity::{Entity, Insertable};
use crate::error::DataError;
use crate::filter::Filter;
use crate::ops;

/// Application states that own the database pool.
pub trait HasPool {
    fn pool(&self) -> &SqlitePool;
}

/// A SQLite transaction exposing the same operations as
/// [`Repository`](crate::Repository).
///
/// Dropping a `Tx` without calling [`commit`](Tx::commit) rolls it back.
pub struct Tx<'a>(Transaction<'a, Sqlite>);

impl Tx<'static> {
    /// A deferred transaction. Fine for reads; a write inside it fails with
    /// `SQLITE_BUSY` if another connection wrote first.
    pub async fn begin(pool: &SqlitePool) -> Result<Self, DataError> {
        Ok(Tx(pool.begin().await?))
    }

    /// A transaction holding the database write lock from its first
    /// statement. Concurrent writers queue on the busy timeout instead of
    /// failing on lock upgrade.
    pub async fn begin_write(pool: &SqlitePool) -> Result<Self, DataError> {
        Ok(Tx(pool.begin_with("BEGIN IMMEDIATE").await?))
    }
}

impl Tx<'_> {
    pub async fn find_by_id<T: Entity>(&mut self, id: i64) -> Result<Option<T>, DataError> {
        ops::find_by_id(&mut *self.0, id).await
    }

    pub async fn find_where<T: Entity>(&mut self, filter: &Filter) -> Result<Vec<T>, DataError> {
        ops::find_where(&mut *self.0, filter).await
    }

    pub async fn insert<N: Insertable>(&mut self, new: &N) -> Result<N::Entity, DataError> {
        ops::insert(&mut *self.0, new).await
    }

    /// Delete by primary key. `false` if no row had that id.
    pub async fn delete<T: Entity>(&mut self, id: i64) -> Result<bool, DataError> {
        let filter = Filter::new().eq(T::id_column(), id);
        let deleted = ops::delete_where::<T, _>(&mut *self.0, &filter).await?;
        Ok(deleted > 0)
    }

    pub async fn delete_where<T: Entity>(&mut self, filter: &Filter) -> Result<u64, DataError> {
        ops::delete_where::<T, _>(&mut *self.0, filter).await
    }

    pub async fn commit(self) -> Result<(), DataError> {
        Ok(self.0.commit().await?)
    }

    pub async fn rollback(self) -> Result<(), DataError> {
        Ok(self.0.rollback().await?)
    }
}
