use std::sync::Arc;

use axum::{routing::get, Extension, Router};

use crate::api::rest::handlers;
use crate::domain::ports::CallerResolver;
use crate::domain::service::Service;

/// Build the catalog router. Static segments are registered alongside the
/// parameterized lookups; axum matches `/people/population` before
/// `/people/{id}`.
pub fn router(service: Arc<Service>, caller: Arc<dyn CallerResolver>) -> Router {
    Router::new()
        .route("/people/population", get(handlers::import_people))
        .route("/people", get(handlers::list_people))
        .route("/people/{id}", get(handlers::get_person))
        .route("/planet/population", get(handlers::import_planets))
        .route("/planet", get(handlers::list_planets))
        .route("/planet/{id}", get(handlers::get_planet))
        .route("/user", get(handlers::list_users))
        .route("/user/favorites", get(handlers::list_user_favorites))
        .layer(Extension(service))
        .layer(Extension(caller))
}
