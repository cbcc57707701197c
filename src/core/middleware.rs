
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::Request,
    http::{header, HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use axum::response::IntoResponse;
use base64::prelude::*;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestId, RequestId};
use tracing::Span;
use uuid::Uuid;

use crate::core::error::AppError;

/// Path excluded from response caching
pub const HEALTH_PATH: &str = "/health";

const CACHE_CONTROL_VALUE: &str = "public, max-age=300, s-maxage=3600";
const CORS_MAX_AGE: Duration = Duration::from_secs(86400);

/// Request ID generator using UUID v7 (time-ordered)
#[derive(Clone, Copy)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Custom MakeSpan that includes request_id in the tracing span
#[derive(Clone, Debug)]
pub struct MakeSpanWithRequestId;

impl<B> tower_http::trace::MakeSpan<B> for MakeSpanWithRequestId {
    fn make_span(&mut self, request: &axum::http::Request<B>) -> Span {
        let request_id = request
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");

        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    }
}

pub fn cors_layer(allowed_origins: Vec<String>) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([HeaderName::from_static("x-request-id")])
        .max_age(CORS_MAX_AGE);

    // If origins list contains "*", allow any origin
    if allowed_origins.iter().any(|o| o == "*") {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors.allow_origin(AllowOrigin::list(origins))
    }
}

/// Adds hardening headers to every response, plus a public cache policy on
/// everything except the health check.
pub async fn security_headers(req: Request, next: Next) -> Response {
    let cacheable = req.uri().path() != HEALTH_PATH;
    let mut response = next.run(req).await;

    let headers = response.headers_mut();
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(
        header::X_XSS_PROTECTION,
        HeaderValue::from_static("1; mode=block"),
    );
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );

    if cacheable {
        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_VALUE),
        );
    }

    response
}

/// Turns a panicking handler into an enveloped 500 for `CatchPanicLayer`
pub fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::Internal(format!("Handler panicked: {}", detail)).into_response()
}

pub fn basic_auth_middleware(
    valid_credentials: Arc<String>,
) -> impl Fn(
    Request,
    Next,
)
    -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Response, Response>> + Send>>
       + Clone {
    move |req: Request, next: Next| {
        let credentials = valid_credentials.clone();
        Box::pin(async move {
            let authorized = req
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|header| header.to_str().ok())
                .and_then(|header| header.strip_prefix("Basic "))
                .and_then(|encoded| BASE64_STANDARD.decode(encoded).ok())
                .and_then(|decoded| String::from_utf8(decoded).ok())
                .is_some_and(|creds| creds == *credentials);

            if authorized {
                return Ok(next.run(req).await);
            }

            let mut response = Response::new(Body::from("Unauthorized"));
            *response.status_mut() = StatusCode::UNAUTHORIZED;
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static("Basic realm=\"API Docs\""),
            );

            Err(response)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{middleware::from_fn, routing::get, Router};
    use axum_test::TestServer;
    use tower_http::catch_panic::CatchPanicLayer;

    fn app() -> Router {
        Router::new()
            .route("/health", get(|| async { "ok" }))
            .route("/api/v1/geographies", get(|| async { "[]" }))
            .layer(from_fn(security_headers))
    }

    #[tokio::test]
    async fn test_security_headers_and_cache_policy() {
        let server = TestServer::new(app()).unwrap();

        let response = server.get("/api/v1/geographies").await;
        assert_eq!(response.header("x-content-type-options"), "nosniff");
        assert_eq!(response.header("x-frame-options"), "DENY");
        assert_eq!(response.header("cache-control"), CACHE_CONTROL_VALUE);

        let response = server.get("/health").await;
        assert_eq!(response.header("x-frame-options"), "DENY");
        assert!(response.headers().get("cache-control").is_none());
    }

    #[tokio::test]
    async fn test_basic_auth_guard() {
        let router = Router::new()
            .route("/docs", get(|| async { "docs" }))
            .layer(from_fn(basic_auth_middleware(Arc::new(
                "admin:secret".to_string(),
            ))));
        let server = TestServer::new(router).unwrap();

        server
            .get("/docs")
            .expect_failure()
            .await
            .assert_status(StatusCode::UNAUTHORIZED);

        let token = BASE64_STANDARD.encode("admin:secret");
        server
            .get("/docs")
            .add_header(
                header::AUTHORIZATION,
                HeaderValue::from_str(&format!("Basic {token}")).unwrap(),
            )
            .await
            .assert_status_ok();
    }

    async fn panicking_handler() -> &'static str {
        panic!("index out of bounds")
    }

    #[tokio::test]
    async fn test_panic_becomes_internal_error() {
        let router = Router::new()
            .route("/boom", get(panicking_handler))
            .route("/ok", get(|| async { "ok" }))
            .layer(CatchPanicLayer::custom(handle_panic));
        let server = TestServer::new(router).unwrap();

        let response = server.get("/boom").expect_failure().await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&serde_json::json!({
            "status": "error",
            "error": "Internal server error"
        }));

        // The server keeps serving after a panic
        server.get("/ok").await.assert_status_ok();
    }

    #[test]
    fn test_request_ids_are_unique() {
        let request = axum::http::Request::new(());
        let mut maker = MakeRequestUuid;
        let a = maker.make_request_id(&request).unwrap();
        let b = maker.make_request_id(&request).unwrap();
        assert_ne!(a.header_value(), b.header_value());
    }
}
