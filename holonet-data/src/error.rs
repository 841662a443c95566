use holonet_core::HttpError;

/// Errors raised by the record store.
#[derive(Debug)]
pub enum DataError {
    NotFound(String),
    /// A unique constraint rejected the write.
    Conflict(String),
    /// A foreign-key or check constraint rejected the write.
    Constraint(String),
    Database(Box<dyn std::error::Error + Send + Sync>),
    Other(String),
}

impl DataError {
    pub fn database(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        DataError::Database(Box::new(err))
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, DataError::Conflict(_))
    }
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::NotFound(msg) => write!(f, "Not found: {msg}"),
            DataError::Conflict(msg) => write!(f, "Conflict: {msg}"),
            DataError::Constraint(msg) => write!(f, "Constraint violation: {msg}"),
            DataError::Database(err) => write!(f, "Database error: {err}"),
            DataError::Other(msg) => write!(f, "Data error: {msg}"),
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::Database(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for DataError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::RowNotFound = err {
            return DataError::NotFound("Row not found".into());
        }
        if let Some(db_err) = err.as_database_error() {
            if db_err.is_unique_violation() {
                return DataError::Conflict(db_err.message().to_string());
            }
            if db_err.is_foreign_key_violation() || db_err.is_check_violation() {
                return DataError::Constraint(db_err.message().to_string());
            }
        }
        DataError::database(err)
    }
}

impl From<DataError> for HttpError {
    fn from(err: DataError) -> Self {
        match err {
            DataError::NotFound(msg) => HttpError::NotFound(msg),
            DataError::Conflict(msg) => HttpError::Conflict(msg),
            DataError::Constraint(msg) => HttpError::BadRequest(msg),
            DataError::Database(e) => HttpError::Internal(e.to_string()),
            DataError::Other(msg) => HttpError::Internal(msg),
        }
    }
}
