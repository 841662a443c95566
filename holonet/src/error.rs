use holonet_core::http::{IntoResponse, Response};
use holonet_core::{HttpError, ValidationErrorResponse};
use holonet_data::DataError;

use crate::models::TargetKind;

/// Domain errors of the record service.
#[derive(Debug)]
pub enum AppError {
    /// A required field was absent or a value was malformed.
    Validation(ValidationErrorResponse),
    /// A character or planet looked up by id does not exist. Rendered as 400.
    NotFound(String),
    UserNotFound(i64),
    AlreadyFavorited { name: String },
    TargetNotFound { kind: TargetKind, id: i64 },
    /// A unique constraint rejected the insert.
    Conflict(String),
    Store(DataError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation(resp) => f.write_str(resp.summary()),
            AppError::NotFound(msg) | AppError::Conflict(msg) => f.write_str(msg),
            AppError::UserNotFound(id) => write!(f, "User with id {id} does not exist"),
            AppError::AlreadyFavorited { name } => write!(f, "{name} is already on favorites"),
            AppError::TargetNotFound { kind, id } => {
                write!(f, "{} with ID:{id} doesn't exist", kind.label())
            }
            AppError::Store(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<DataError> for AppError {
    fn from(err: DataError) -> Self {
        AppError::Store(err)
    }
}

impl From<ValidationErrorResponse> for AppError {
    fn from(resp: ValidationErrorResponse) -> Self {
        AppError::Validation(resp)
    }
}

impl From<AppError> for HttpError {
    fn from(err: AppError) -> Self {
        let message = err.to_string();
        match err {
            AppError::Validation(resp) => HttpError::Validation(resp),
            AppError::NotFound(_) | AppError::TargetNotFound { .. } => HttpError::BadRequest(message),
            AppError::UserNotFound(_) => HttpError::NotFound(message),
            AppError::AlreadyFavorited { .. } | AppError::Conflict(_) => HttpError::Conflict(message),
            AppError::Store(err) => err.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        HttpError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holonet_core::http::StatusCode;

    fn status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn maps_each_kind_to_its_status() {
        assert_eq!(
            status(AppError::Validation(ValidationErrorResponse::missing("name"))),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status(AppError::NotFound("Planet with id 9 does not exist".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status(AppError::UserNotFound(9)), StatusCode::NOT_FOUND);
        assert_eq!(
            status(AppError::AlreadyFavorited { name: "Hoth".into() }),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status(AppError::TargetNotFound {
                kind: TargetKind::People,
                id: 2
            }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status(AppError::Conflict("dup".into())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status(AppError::Store(DataError::Other("disk on fire".into()))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn messages_keep_their_wire_format() {
        assert_eq!(
            AppError::AlreadyFavorited {
                name: "Tatooine".into()
            }
            .to_string(),
            "Tatooine is already on favorites"
        );
        assert_eq!(
            AppError::TargetNotFound {
                kind: TargetKind::Planet,
                id: 7
            }
            .to_string(),
            "Planet with ID:7 doesn't exist"
        );
        assert_eq!(
            AppError::UserNotFound(3).to_string(),
            "User with id 3 does not exist"
        );
    }
}
