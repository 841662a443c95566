use std::future::Future;
use std::marker::PhantomData;

use sqlx::SqlitePool;

use crate::entity::{Entity, Insertable};
use crate::error::DataError;
use crate::filter::Filter;
use crate::ops;
use crate::tx::Tx;

/// Record store interface for one entity type.
///
/// Every write is committed when the returned future resolves; use
/// [`SqlxRepository::begin`] to group several statements.
pub trait Repository<T: Entity>: Send + Sync {
    fn find_by_id(&self, id: i64) -> impl Future<Output = Result<Option<T>, DataError>> + Send;
    fn find_all(&self) -> impl Future<Output = Result<Vec<T>, DataError>> + Send;
    fn find_where(&self, filter: &Filter) -> impl Future<Output = Result<Vec<T>, DataError>> + Send;
    fn insert<N>(&self, new: &N) -> impl Future<Output = Result<T, DataError>> + Send
    where
        N: Insertable<Entity = T>;
    fn delete(&self, id: i64) -> impl Future<Output = Result<bool, DataError>> + Send;
    fn delete_where(&self, filter: &Filter) -> impl Future<Output = Result<u64, DataError>> + Send;
    fn count(&self) -> impl Future<Output = Result<u64, DataError>> + Send;
}

/// [`Repository`] over a SQLite pool.
///
/// ```ignore
/// let planets = SqlxRepository::<Planet>::new(pool.clone());
/// let all = planets.find_all().await?;
/// ```
pub struct SqlxRepository<T> {
    pool: SqlitePool,
    _marker: PhantomData<fn() -> T>,
}

impl<T> SqlxRepository<T> {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            _marker: PhantomData,
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Start a transaction on the same pool.
    pub async fn begin(&self) -> Result<Tx<'static>, DataError> {
        Tx::begin(&self.pool).await
    }

    /// Start a transaction that takes the write lock up front.
    pub async fn begin_write(&self) -> Result<Tx<'static>, DataError> {
        Tx::begin_write(&self.pool).await
    }
}

impl<T> Clone for SqlxRepository<T> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: Entity> Repository<T> for SqlxRepository<T> {
    async fn find_by_id(&self, id: i64) -> Result<Option<T>, DataError> {
        ops::find_by_id(&self.pool, id).await
    }

    async fn find_all(&self) -> Result<Vec<T>, DataError> {
        ops::find_where(&self.pool, &Filter::new()).await
    }

    async fn find_where(&self, filter: &Filter) -> Result<Vec<T>, DataError> {
        ops::find_where(&self.pool, filter).await
    }

    async fn insert<N>(&self, new: &N) -> Result<T, DataError>
    where
        N: Insertable<Entity = T>,
    {
        let entity = ops::insert(&self.pool, new).await?;
        tracing::debug!(table = T::table_name(), id = entity.id(), "inserted");
        Ok(entity)
    }

    async fn delete(&self, id: i64) -> Result<bool, DataError> {
        let filter = Filter::new().eq(T::id_column(), id);
        let deleted = ops::delete_where::<T, _>(&self.pool, &filter).await?;
        Ok(deleted > 0)
    }

    async fn delete_where(&self, filter: &Filter) -> Result<u64, DataError> {
        ops::delete_where::<T, _>(&self.pool, filter).await
    }

    async fn count(&self) -> Result<u64, DataError> {
        ops::count_where::<T, _>(&self.pool, &Filter::new()).await
    }
}
