mod core;
mod features;
mod shared;

use crate::core::config::Config;
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::health::routes as health_routes;
use crate::features::locations::{routes as locations_routes, LocationService};
use axum::{middleware::from_fn, Router};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

const SWAGGER_UI_PATH: &str = "/docs";
const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!(
        "System info: tokio_worker_threads={}, pid={}",
        worker_threads,
        std::process::id()
    );
    tracing::info!("Configuration loaded successfully");

    // The dataset is loaded once; the server never starts with partial data
    let location_service = LocationService::load(&config.data.dir).map_err(|e| {
        anyhow::anyhow!(
            "Failed to load location data from {}: {}",
            config.data.dir.display(),
            e
        )
    })?;
    let location_service = Arc::new(location_service);
    tracing::info!("Location service initialized");

    let app = build_app(location_service, &config);

    let addr = config.app.server_address();
    let listener = bind_listener(&addr)?;
    tracing::info!("Server listening on {}", format!("http://{}", addr));
    tracing::info!(
        "Swagger UI available at {}",
        format!("http://{}{}", addr, SWAGGER_UI_PATH)
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn build_app(location_service: Arc<LocationService>, config: &Config) -> Router {
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger = if let Some(credentials) = config.swagger.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        Router::new()
            .merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, openapi))
            .layer(from_fn(middleware::basic_auth_middleware(Arc::new(
                credentials,
            ))))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        Router::new().merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, openapi))
    };

    Router::new()
        .merge(swagger)
        .merge(health_routes())
        .merge(locations_routes::routes(location_service))
        // Recover from handler panics with an enveloped 500
        .layer(CatchPanicLayer::custom(middleware::handle_panic))
        .layer(from_fn(middleware::security_headers))
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}

fn bind_listener(addr: &str) -> anyhow::Result<tokio::net::TcpListener> {
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    // Use socket2 for TCP listener configuration
    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    socket.set_nodelay(true)?;

    let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
    socket.set_tcp_keepalive(&keepalive)?;

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;

    Ok(tokio::net::TcpListener::from_std(socket.into())?)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to listen for SIGTERM: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{AppConfig, DataConfig, SwaggerConfig};
    use crate::shared::test_helpers::sample_dataset;
    use axum::http::{header, HeaderValue, StatusCode};
    use axum_test::TestServer;
    use base64::prelude::*;

    fn config(username: Option<&str>, password: Option<&str>) -> Config {
        Config {
            app: AppConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors_allowed_origins: vec!["*".to_string()],
            },
            data: DataConfig {
                dir: "./data/raw".into(),
            },
            swagger: SwaggerConfig {
                username: username.map(str::to_string),
                password: password.map(str::to_string),
                title: "Thai Location API".to_string(),
                version: "1.0.0".to_string(),
                description: "test".to_string(),
            },
        }
    }

    fn server(config: &Config) -> TestServer {
        let service = Arc::new(LocationService::new(sample_dataset()));
        TestServer::new(build_app(service, config)).unwrap()
    }

    #[tokio::test]
    async fn test_api_responses_carry_cache_and_request_id() {
        let server = server(&config(None, None));

        let response = server.get("/api/v1/geographies").await;
        response.assert_status_ok();
        assert_eq!(
            response.header("cache-control"),
            "public, max-age=300, s-maxage=3600"
        );
        assert_eq!(response.header("x-content-type-options"), "nosniff");
        assert!(response.headers().get("x-request-id").is_some());
    }

    #[tokio::test]
    async fn test_health_is_not_cached() {
        let server = server(&config(None, None));

        let response = server.get("/health").await;
        response.assert_status_ok();
        assert!(response.headers().get("cache-control").is_none());
    }

    #[tokio::test]
    async fn test_client_request_id_is_propagated() {
        let server = server(&config(None, None));

        let response = server
            .get("/health")
            .add_header(
                header::HeaderName::from_static("x-request-id"),
                HeaderValue::from_static("client-supplied-id"),
            )
            .await;
        assert_eq!(response.header("x-request-id"), "client-supplied-id");
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let server = server(&config(None, None));

        let response = server.get(OPENAPI_JSON_PATH).await;
        response.assert_status_ok();
        let doc: serde_json::Value = response.json();
        assert_eq!(doc["info"]["title"], "Thai Location API");
        assert!(doc["paths"]["/api/v1/provinces"].is_object());
    }

    #[tokio::test]
    async fn test_docs_require_credentials_when_configured() {
        let server = server(&config(Some("admin"), Some("secret")));

        server
            .get(OPENAPI_JSON_PATH)
            .expect_failure()
            .await
            .assert_status(StatusCode::UNAUTHORIZED);

        let token = BASE64_STANDARD.encode("admin:secret");
        server
            .get(OPENAPI_JSON_PATH)
            .add_header(
                header::AUTHORIZATION,
                HeaderValue::from_str(&format!("Basic {token}")).unwrap(),
            )
            .await
            .assert_status_ok();

        // API routes stay public
        server.get("/api/v1/geographies").await.assert_status_ok();
    }
}
