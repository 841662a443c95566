use std::future::Future;
use std::pin::Pin;

use tracing::info;

use crate::controller::{Controller, RouteInfo, Routes};
use crate::http::{IntoResponse, Request, Router, StatusCode};
use crate::plugin::Plugin;

type LayerFn = Box<dyn FnOnce(Router) -> Router + Send>;

/// Produces a router fragment from the full list of registered routes.
type RouteConsumer<T> = Box<dyn FnOnce(&[RouteInfo]) -> Router<T> + Send>;

type ShutdownHook = Box<dyn FnOnce() -> Pin<Box<dyn Future<Output = ()> + Send>> + Send>;

/// Assembles controllers, plugins and Tower layers into an `axum::Router`,
/// or serves it directly.
///
/// ```ignore
/// AppBuilder::new(state)
///     .with(Health)
///     .with(Tracing)
///     .register_controller::<PlanetController>()
///     .serve("0.0.0.0:3000")
///     .await?;
/// ```
pub struct AppBuilder<T: Clone + Send + Sync + 'static> {
    state: T,
    routes: Vec<Router<T>>,
    route_info: Vec<RouteInfo>,
    route_consumers: Vec<RouteConsumer<T>>,
    custom_layers: Vec<LayerFn>,
    shutdown_hooks: Vec<ShutdownHook>,
    normalize_path: bool,
}

impl<T: Clone + Send + Sync + 'static> AppBuilder<T> {
    pub fn new(state: T) -> Self {
        Self {
            state,
            routes: Vec::new(),
            route_info: Vec::new(),
            route_consumers: Vec::new(),
            custom_layers: Vec::new(),
            shutdown_hooks: Vec::new(),
            normalize_path: false,
        }
    }

    pub fn state(&self) -> &T {
        &self.state
    }

    /// Install a [`Plugin`].
    pub fn with<P: Plugin>(self, plugin: P) -> Self {
        plugin.install(self)
    }

    /// Add a transformation applied to the final, stateless router.
    ///
    /// Layers run in registration order, so the last one registered is the
    /// outermost.
    pub fn with_layer_fn<F>(mut self, f: F) -> Self
    where
        F: FnOnce(Router) -> Router + Send + 'static,
    {
        self.custom_layers.push(Box::new(f));
        self
    }

    /// Merge a route table into the application.
    pub fn register(mut self, routes: Routes<T>) -> Self {
        let (router, info) = routes.into_parts();
        self.routes.push(router);
        self.route_info.extend(info);
        self
    }

    pub fn register_controller<C: Controller<T>>(self) -> Self {
        tracing::debug!(controller = std::any::type_name::<C>(), "registering controller");
        self.register(C::routes())
    }

    /// Register a callback that receives every route known at build time.
    pub fn with_route_consumer<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&[RouteInfo]) -> Router<T> + Send + 'static,
    {
        self.route_consumers.push(Box::new(f));
        self
    }

    /// Run `hook` after the server has shut down gracefully.
    pub fn on_stop<F, Fut>(mut self, hook: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.shutdown_hooks.push(Box::new(move || Box::pin(hook())));
        self
    }

    pub fn enable_normalize_path(mut self) -> Self {
        self.normalize_path = true;
        self
    }

    pub fn route_info(&self) -> &[RouteInfo] {
        &self.route_info
    }

    /// Assemble the final `axum::Router`.
    pub fn build(self) -> Router {
        self.build_inner().0
    }

    fn build_inner(self) -> (Router, Vec<ShutdownHook>) {
        let mut router = Router::new();
        for r in self.routes {
            router = router.merge(r);
        }
        for consumer in self.route_consumers {
            router = router.merge(consumer(&self.route_info));
        }

        let mut app = router.with_state(self.state);

        // Unmatched paths with a trailing slash are re-dispatched without it.
        if self.normalize_path {
            let inner = app.clone();
            app = app.fallback(move |req: Request| async move {
                let path = req.uri().path();
                if path.len() > 1 && path.ends_with('/') {
                    let trimmed = path.trim_end_matches('/');
                    let new_uri = match req.uri().query() {
                        Some(q) => format!("{trimmed}?{q}"),
                        None => trimmed.to_string(),
                    };
                    let (mut parts, body) = req.into_parts();
                    parts.uri = new_uri.parse().unwrap_or(parts.uri);
                    let new_req = axum::http::Request::from_parts(parts, body);
                    match tower::ServiceExt::oneshot(inner.clone(), new_req).await {
                        Ok(resp) => resp,
                        Err(infallible) => match infallible {},
                    }
                } else {
                    StatusCode::NOT_FOUND.into_response()
                }
            });
        }

        for layer_fn in self.custom_layers {
            app = layer_fn(app);
        }

        (app, self.shutdown_hooks)
    }

    /// Build the application and serve it until Ctrl-C / SIGTERM.
    pub async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
        let (app, shutdown_hooks) = self.build_inner();

        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!(%addr, "Holonet server listening");
        crate::http::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        for hook in shutdown_hooks {
            hook().await;
        }

        info!("Holonet server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(%err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
