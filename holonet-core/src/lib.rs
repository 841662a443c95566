//! # holonet-core
//!
//! Runtime shared by the Holonet service crates: an [`AppBuilder`] that
//! assembles controllers, plugins and Tower layers into an `axum::Router`,
//! layered configuration ([`HolonetConfig`]), and the [`HttpError`] type
//! every domain error is mapped onto.

pub mod builder;
pub mod config;
pub mod controller;
pub mod error;
pub mod http;
pub mod layers;
pub mod plugin;
pub mod plugins;
pub mod prelude;
pub mod validation;

pub use builder::AppBuilder;
pub use config::{ConfigError, ConfigSection, ConfigValue, HolonetConfig, ServerConfig};
pub use controller::{Controller, RouteInfo, Routes};
pub use error::{error_response, HttpError};
pub use layers::{default_cors, default_trace, init_tracing};
pub use plugin::Plugin;
pub use validation::{FieldError, JsonBody, PathParams, ValidationErrorResponse};
