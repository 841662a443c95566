//! Re-exports for controller and service modules.

pub use crate::builder::AppBuilder;
pub use crate::controller::{Controller, RouteInfo, Routes};
pub use crate::error::HttpError;
pub use crate::http::{IntoResponse, Json, Path, Response, State, StatusCode};
pub use crate::plugins::{Cors, ErrorHandling, Health, NormalizePath, Sitemap, Tracing};
pub use crate::validation::{JsonBody, PathParams, Validate, ValidationErrorResponse};
