use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use crate::http::{create_cors_layer, create_permissive_cors_layer, security_headers};
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};

/// Wraps the application routes with the cross-cutting layers.
///
/// - 404 fallback with an `ErrorResponse` body
/// - request tracing
/// - security headers
/// - CORS from `ServerConfig::cors_allowed_origin`; `*` or an empty list
///   means any origin
/// - response compression
///
/// Domain routers apply their own state before being passed in.
///
/// ```ignore
/// let api_routes = Router::new()
///     .nest("/products", domain_products::handlers::router(service, mapper));
///
/// let router = create_router(api_routes, &config.server);
/// ```
pub fn create_router(apis: Router, server_config: &ServerConfig) -> Router {
    let origins = server_config.cors_origins();

    let cors_layer = if origins.is_empty() {
        info!("CORS configured to allow any origin");
        create_permissive_cors_layer()
    } else {
        info!("CORS configured with allowed origins: {}", origins.join(","));
        create_cors_layer(&origins)
    };

    apis.fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors_layer)
        .layer(CompressionLayer::new())
}

/// Serves `router` until SIGINT/SIGTERM, then runs `cleanup`.
///
/// In-flight requests are drained before `cleanup` starts. `cleanup` gets at
/// most `shutdown_timeout` before it is abandoned.
///
/// ```ignore
/// let cleanup = async move {
///     db.close().await.ok();
/// };
///
/// create_production_app(router, &config.server, Duration::from_secs(30), cleanup).await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let coordinator = ShutdownCoordinator::default();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { coordinator.wait_for_signal().await })
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
    match tokio::time::timeout(shutdown_timeout, cleanup).await {
        Ok(()) => info!("Cleanup completed successfully"),
        Err(_) => warn!(
            "Cleanup exceeded timeout of {:?}, forcing shutdown",
            shutdown_timeout
        ),
    }

    serve_result
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use axum::routing::get;
    use tower::ServiceExt;

    fn config(origin: &str) -> ServerConfig {
        ServerConfig {
            cors_allowed_origin: origin.to_string(),
            ..ServerConfig::default()
        }
    }

    fn app(origin: &str) -> Router {
        let apis = Router::new().route("/ping", get(|| async { "pong" }));
        create_router(apis, &config(origin))
    }

    #[tokio::test]
    async fn test_unknown_route_returns_error_response() {
        let response = app("*")
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: crate::ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error, "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_security_headers_on_routed_responses() {
        let response = app("*")
            .oneshot(Request::get("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::X_FRAME_OPTIONS], "DENY");
    }

    #[tokio::test]
    async fn test_configured_origin_is_echoed() {
        let response = app("https://shop.example.com")
            .oneshot(
                Request::get("/ping")
                    .header(header::ORIGIN, "https://shop.example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://shop.example.com"
        );
    }
}
