use sqlx::sqlite::SqliteRow;

/// A table-backed record type.
///
/// ```ignore
/// impl Entity for Planet {
///     fn table_name() -> &'static str { "planets" }
///     fn columns() -> &'static [&'static str] { &["id", "name", "terrain"] }
///     fn id(&self) -> i64 { self.id }
/// }
/// ```
pub trait Entity: for<'r> sqlx::FromRow<'r, SqliteRow> + Send + Sync + Unpin + 'static {
    /// Table (or view) the entity is read from.
    fn table_name() -> &'static str;

    fn id_column() -> &'static str {
        "id"
    }

    /// Columns selected, in `FromRow` order.
    fn columns() -> &'static [&'static str];

    fn id(&self) -> i64;
}

/// A not-yet-persisted record whose insert yields an `Entity`.
pub trait Insertable: Send + Sync {
    type Entity: Entity;

    /// Column/value pairs to insert. Columns left out take their defaults.
    fn values(&self) -> Vec<(&'static str, SqlValue)>;
}

/// A value bound into a generated statement.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Text(String),
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        SqlValue::Integer(v)
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        SqlValue::Text(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        SqlValue::Text(v.to_string())
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(SqlValue::Null, Into::into)
    }
}
