use axum::Router;

pub mod health;
pub mod products;

/// Creates the API routes.
///
/// Returns a stateless Router (all sub-routers have state already applied).
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().nest("/products", products::router(state))
}

/// Creates a router with the /ready endpoint backed by a database ping.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
