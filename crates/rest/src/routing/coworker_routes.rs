//! Coworker directory routes.

use axum::{Router, routing::get};
use roster_persistence::core::CoworkerStorage;

use crate::handlers;
use crate::state::AppState;

/// Creates all Roster API routes.
///
/// # Routes
///
/// ## Coworkers
/// - `GET /coworkers` - List and search
/// - `POST /coworkers` - Create
/// - `GET /coworkers/{id}` - Read
/// - `GET /departments` - Distinct departments
///
/// ## Operational
/// - `GET /health` - Health check
/// - `GET /_liveness` - Liveness check
/// - `GET /db-check` - Document store connectivity
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: CoworkerStorage + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/coworkers",
            get(handlers::list_handler::<S>).post(handlers::create_handler::<S>),
        )
        .route("/coworkers/{id}", get(handlers::read_handler::<S>))
        .route("/departments", get(handlers::departments_handler::<S>))
        // Operational routes
        .route("/health", get(handlers::health_handler::<S>))
        .route("/_liveness", get(handlers::liveness_handler))
        .route("/db-check", get(handlers::db_check_handler::<S>))
        .with_state(state)
}
