use crate::builder::AppBuilder;

/// A unit of cross-cutting functionality installed with [`AppBuilder::with`].
///
/// ```ignore
/// AppBuilder::new(state)
///     .with(Health)
///     .with(Cors::permissive())
///     .with(Tracing)
///     .with(ErrorHandling)
/// ```
pub trait Plugin {
    fn install<T: Clone + Send + Sync + 'static>(self, app: AppBuilder<T>) -> AppBuilder<T>;
}
