use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::HttpError;
use crate::http::{FromRequest, FromRequestParts, Json, Parts, Path, Request};

/// Error code reported for a required field that was absent or null.
pub const MISSING: &str = "missing";

/// A field-level validation error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    pub code: String,
}

/// Collected validation failures for one request payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationErrorResponse {
    pub errors: Vec<FieldError>,
}

impl ValidationErrorResponse {
    pub fn missing(field: &str) -> Self {
        Self {
            errors: vec![FieldError {
                field: field.to_string(),
                message: "field is required".to_string(),
                code: MISSING.to_string(),
            }],
        }
    }

    /// Names of the offending fields, in report order.
    pub fn fields(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.field.as_str()).collect()
    }

    /// One-line message for the response body.
    pub fn summary(&self) -> &'static str {
        if self.errors.iter().all(|e| e.code == MISSING) {
            "Some field is missing in request body"
        } else {
            "Some field is invalid in request body"
        }
    }
}

impl From<garde::Report> for ValidationErrorResponse {
    fn from(report: garde::Report) -> Self {
        let errors = report
            .iter()
            .map(|(path, error)| {
                let field = match path.to_string() {
                    s if s.is_empty() => "value".to_string(),
                    s => s,
                };
                // garde's `required` rule reports "not set"
                let code = if error.message() == "not set" {
                    MISSING
                } else {
                    "invalid"
                };
                FieldError {
                    field,
                    message: error.message().to_string(),
                    code: code.to_string(),
                }
            })
            .collect();
        Self { errors }
    }
}

/// Validate `value` with its garde rules.
pub fn validate<T>(value: &T) -> Result<(), ValidationErrorResponse>
where
    T: garde::Validate,
    T::Context: Default,
{
    value.validate().map_err(ValidationErrorResponse::from)
}

/// Unwrap a field that validation already proved present.
pub fn required<T>(value: Option<T>, field: &str) -> Result<T, ValidationErrorResponse> {
    value.ok_or_else(|| ValidationErrorResponse::missing(field))
}

/// JSON body extractor whose rejections render as `400 {"message": ...}`
/// instead of axum's plain-text 415/422 responses.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| HttpError::BadRequest(rejection.body_text()))?;
        Ok(JsonBody(value))
    }
}

/// Path parameter extractor whose rejections (e.g. `/people/abc` for an
/// integer id) render as `400 {"message": ...}`.
pub struct PathParams<T>(pub T);

impl<S, T> FromRequestParts<S> for PathParams<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| HttpError::BadRequest(rejection.body_text()))?;
        Ok(PathParams(value))
    }
}

pub use garde::Validate;
