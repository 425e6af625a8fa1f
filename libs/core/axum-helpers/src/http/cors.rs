use axum::http::{HeaderValue, Method, header};
use std::time::Duration;
use tower_http::cors::CorsLayer;

/// Creates a CORS layer restricted to the given origins.
///
/// Origins that are not valid header values are skipped with a warning.
/// The layer allows the CRUD methods, `Content-Type`/`Accept`/`Authorization`
/// headers and caches preflight results for one hour.
pub fn create_cors_layer(allowed_origins: &[&str]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

/// Allows any origin. Used when no origin list is configured.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
