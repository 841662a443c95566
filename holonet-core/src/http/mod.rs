//! Re-exports of the HTTP types handlers and plugins are written against.

pub use axum::extract::{FromRequest, FromRequestParts, Path, Request, State};
pub use axum::http::request::Parts;
pub use axum::http::{Method, StatusCode};
pub use axum::response::{IntoResponse, Response};
pub use axum::routing;
pub use axum::{body, serve, Json, Router};
