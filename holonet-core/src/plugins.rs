//! Built-in plugins, installed via [`AppBuilder::with()`](crate::builder::AppBuilder::with).

use tower_http::cors::CorsLayer;

use crate::builder::AppBuilder;
use crate::controller::{RouteInfo, Routes};
use crate::http::routing::get;
use crate::http::{Json, Router};
use crate::plugin::Plugin;

/// CORS plugin.
pub struct Cors {
    layer: CorsLayer,
}

impl Cors {
    /// Any origin, method and header.
    pub fn permissive() -> Self {
        Self {
            layer: crate::layers::default_cors(),
        }
    }
}

impl Plugin for Cors {
    fn install<T: Clone + Send + Sync + 'static>(self, app: AppBuilder<T>) -> AppBuilder<T> {
        app.with_layer_fn(move |router| router.layer(self.layer))
    }
}

/// Initialises the `tracing` subscriber and logs every request/response
/// through tower-http's `TraceLayer`.
pub struct Tracing;

impl Plugin for Tracing {
    fn install<T: Clone + Send + Sync + 'static>(self, app: AppBuilder<T>) -> AppBuilder<T> {
        crate::layers::init_tracing();
        app.with_layer_fn(|router| router.layer(crate::layers::default_trace()))
    }
}

/// `GET /health` returning `OK`.
pub struct Health;

impl Plugin for Health {
    fn install<T: Clone + Send + Sync + 'static>(self, app: AppBuilder<T>) -> AppBuilder<T> {
        app.register(Routes::new().get("/health", health_handler))
    }
}

async fn health_handler() -> &'static str {
    "OK"
}

/// Converts panics into JSON 500 responses.
pub struct ErrorHandling;

impl Plugin for ErrorHandling {
    fn install<T: Clone + Send + Sync + 'static>(self, app: AppBuilder<T>) -> AppBuilder<T> {
        app.with_layer_fn(|router| router.layer(crate::layers::catch_panic_layer()))
    }
}

/// Routes `/people/` exactly like `/people`.
pub struct NormalizePath;

impl Plugin for NormalizePath {
    fn install<T: Clone + Send + Sync + 'static>(self, app: AppBuilder<T>) -> AppBuilder<T> {
        app.enable_normalize_path()
    }
}

/// `GET /` listing every registered route as JSON:
///
/// ```json
/// {"endpoints": [{"method": "GET", "path": "/people"}, ...]}
/// ```
///
/// Routes are collected at build time, so controllers registered after this
/// plugin still appear.
pub struct Sitemap;

impl Plugin for Sitemap {
    fn install<T: Clone + Send + Sync + 'static>(self, app: AppBuilder<T>) -> AppBuilder<T> {
        app.with_route_consumer(|routes| {
            let mut endpoints = routes.to_vec();
            endpoints.push(RouteInfo::new("GET", "/"));
            endpoints.sort();
            endpoints.dedup();
            let body = serde_json::json!({ "endpoints": endpoints });
            Router::new().route("/", get(move || async move { Json(body) }))
        })
    }
}
