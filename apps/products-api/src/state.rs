//! Application state management

/// Shared application state
///
/// Cloning is cheap: the connection is a pool handle.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub db: database::postgres::DatabaseConnection,
}
