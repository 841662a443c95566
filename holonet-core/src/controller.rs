use serde::Serialize;

use crate::http::routing::{self, MethodRouter};
use crate::http::Router;

/// Method and path of one registered endpoint.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct RouteInfo {
    pub path: &'static str,
    pub method: &'static str,
}

impl RouteInfo {
    pub fn new(method: &'static str, path: &'static str) -> Self {
        Self { path, method }
    }
}

/// A router fragment that remembers which endpoints it declares.
///
/// ```ignore
/// Routes::new()
///     .get("/planets", list)
///     .post("/planets", create)
///     .get("/planets/{id}", get_by_id)
/// ```
pub struct Routes<T> {
    router: Router<T>,
    info: Vec<RouteInfo>,
}

impl<T: Clone + Send + Sync + 'static> Routes<T> {
    pub fn new() -> Self {
        Self {
            router: Router::new(),
            info: Vec::new(),
        }
    }

    fn add(mut self, method: &'static str, path: &'static str, route: MethodRouter<T>) -> Self {
        self.router = self.router.route(path, route);
        self.info.push(RouteInfo::new(method, path));
        self
    }

    pub fn get<H, X>(self, path: &'static str, handler: H) -> Self
    where
        H: axum::handler::Handler<X, T>,
        X: 'static,
    {
        self.add("GET", path, routing::get(handler))
    }

    pub fn post<H, X>(self, path: &'static str, handler: H) -> Self
    where
        H: axum::handler::Handler<X, T>,
        X: 'static,
    {
        self.add("POST", path, routing::post(handler))
    }

    pub fn delete<H, X>(self, path: &'static str, handler: H) -> Self
    where
        H: axum::handler::Handler<X, T>,
        X: 'static,
    {
        self.add("DELETE", path, routing::delete(handler))
    }

    pub fn into_parts(self) -> (Router<T>, Vec<RouteInfo>) {
        (self.router, self.info)
    }
}

impl<T: Clone + Send + Sync + 'static> Default for Routes<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A group of handlers sharing the application state `T`.
pub trait Controller<T: Clone + Send + Sync + 'static> {
    fn routes() -> Routes<T>;
}
