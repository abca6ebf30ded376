//! Application assembly: container wiring and the HTTP router.

use crate::controller::PersonController;
use crate::di::Container;
use crate::error::Result;
use crate::interceptor::{Interceptor, InterceptorLayer, LoggingInterceptor};
use crate::module::{Module, PersonModule};
use axum::Router;
use std::sync::Arc;

/// Registers every module in `container`.
///
/// Bindings already present (for example a test double for
/// `dyn PersonService`) take precedence over the defaults.
pub fn bootstrap(mut container: Container) -> Result<Container> {
    PersonModule::register(&mut container)?;
    Ok(container)
}

/// Builds the router from a bootstrapped container.
pub fn build_app(container: &Container) -> Result<Router> {
    let person_controller = container.resolve::<PersonController>()?;
    let interceptors = vec![Arc::new(LoggingInterceptor) as Arc<dyn Interceptor>];

    Ok(Router::new()
        .merge(PersonController::router(person_controller))
        .layer(InterceptorLayer::new(interceptors)))
}
