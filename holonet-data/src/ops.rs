//! Statement builders shared by [`SqlxRepository`](crate::SqlxRepository)
//! and [`Tx`](crate::Tx), generic over the executor so the same SQL runs on
//! the pool or inside a transaction.

use sqlx::{Executor, QueryBuilder, Sqlite};

use crate::entity::{Entity, Insertable};
use crate::error::DataError;
use crate::filter::{push_value, Filter};

fn select<T: Entity>() -> QueryBuilder<'static, Sqlite> {
    QueryBuilder::new(format!(
        "SELECT {} FROM {}",
        T::columns().join(", "),
        T::table_name()
    ))
}

pub(crate) async fn find_by_id<'e, T, E>(exec: E, id: i64) -> Result<Option<T>, DataError>
where
    T: Entity,
    E: Executor<'e, Database = Sqlite>,
{
    let mut qb = select::<T>();
    Filter::new().eq(T::id_column(), id).push_where(&mut qb);
    Ok(qb.build_query_as::<T>().fetch_optional(exec).await?)
}

pub(crate) async fn find_where<'e, T, E>(exec: E, filter: &Filter) -> Result<Vec<T>, DataError>
where
    T: Entity,
    E: Executor<'e, Database = Sqlite>,
{
    let mut qb = select::<T>();
    filter.push_where(&mut qb);
    qb.push(" ORDER BY ").push(T::id_column());
    Ok(qb.build_query_as::<T>().fetch_all(exec).await?)
}

pub(crate) async fn count_where<'e, T, E>(exec: E, filter: &Filter) -> Result<u64, DataError>
where
    T: Entity,
    E: Executor<'e, Database = Sqlite>,
{
    let mut qb = QueryBuilder::<Sqlite>::new(format!("SELECT COUNT(*) FROM {}", T::table_name()));
    filter.push_where(&mut qb);
    let (count,): (i64,) = qb.build_query_as().fetch_one(exec).await?;
    Ok(count as u64)
}

pub(crate) async fn insert<'e, N, E>(exec: E, new: &N) -> Result<N::Entity, DataError>
where
    N: Insertable,
    E: Executor<'e, Database = Sqlite>,
{
    let values = new.values();
    if values.is_empty() {
        return Err(DataError::Other(format!(
            "nothing to insert into {}",
            N::Entity::table_name()
        )));
    }

    let columns: Vec<&str> = values.iter().map(|(column, _)| *column).collect();
    let mut qb = QueryBuilder::<Sqlite>::new(format!(
        "INSERT INTO {} ({}) VALUES (",
        N::Entity::table_name(),
        columns.join(", ")
    ));
    for (i, (_, value)) in values.iter().enumerate() {
        if i > 0 {
            qb.push(", ");
        }
        push_value(&mut qb, value);
    }
    qb.push(") RETURNING ").push(N::Entity::columns().join(", "));

    Ok(qb.build_query_as::<N::Entity>().fetch_one(exec).await?)
}

pub(crate) async fn delete_where<'e, T, E>(exec: E, filter: &Filter) -> Result<u64, DataError>
where
    T: Entity,
    E: Executor<'e, Database = Sqlite>,
{
    if filter.is_empty() {
        return Err(DataError::Other(format!(
            "refusing to delete from {} without a filter",
            T::table_name()
        )));
    }
    let mut qb = QueryBuilder::<Sqlite>::new(format!("DELETE FROM {}", T::table_name()));
    filter.push_where(&mut qb);
    let result = qb.build().execute(exec).await?;
    Ok(result.rows_affected())
}
