use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        FromRequestParts, Path, Query,
    },
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::core::error::{parse_id, AppError};

/// Query string extractor that reports rejections in the standard error envelope.
///
/// A key given more than once keeps its first value, so `?page=1&page=2`
/// reads as `page=1` instead of failing.
pub struct AppQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for AppQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppQueryRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(AppQueryRejection::Query)?;

        let mut fields = Map::new();
        for (key, value) in pairs {
            fields.entry(key).or_insert(Value::String(value));
        }

        serde_json::from_value(Value::Object(fields))
            .map(Self)
            .map_err(AppQueryRejection::Fields)
    }
}

pub enum AppQueryRejection {
    Query(QueryRejection),
    Fields(serde_json::Error),
}

impl IntoResponse for AppQueryRejection {
    fn into_response(self) -> Response {
        let message = match self {
            AppQueryRejection::Query(QueryRejection::FailedToDeserializeQueryString(err)) => {
                format!("Invalid query string: {}", err.body_text())
            }
            AppQueryRejection::Query(_) => "Failed to parse query string".to_string(),
            AppQueryRejection::Fields(err) => format!("Invalid query string: {}", err),
        };

        AppError::BadRequest(message).into_response()
    }
}

/// Integer id from the `{id}` path segment.
///
/// A segment that fails to decode (e.g. invalid UTF-8 after percent-decoding)
/// is reported exactly like one that is not an integer.
pub fn path_id(
    path: Result<Path<String>, PathRejection>,
    message: &str,
) -> Result<i64, AppError> {
    match path {
        Ok(Path(raw)) => parse_id(&raw, message),
        Err(_) => Err(AppError::BadRequest(message.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::get, Json, Router};
    use axum_test::TestServer;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Params {
        page: Option<String>,
        search: Option<String>,
    }

    async fn echo(AppQuery(params): AppQuery<Params>) -> Json<Value> {
        Json(json!({ "page": params.page, "search": params.search }))
    }

    async fn item(path: Result<Path<String>, PathRejection>) -> Result<String, AppError> {
        path_id(path, "Invalid item ID").map(|id| id.to_string())
    }

    fn server() -> TestServer {
        let router = Router::new()
            .route("/echo", get(echo))
            .route("/items/{id}", get(item));
        TestServer::new(router).unwrap()
    }

    #[tokio::test]
    async fn test_query_repeated_key_keeps_first_value() {
        let response = server().get("/echo?page=1&page=2&search=a").await;
        response.assert_status_ok();
        response.assert_json(&json!({ "page": "1", "search": "a" }));
    }

    #[tokio::test]
    async fn test_query_unknown_keys_are_ignored() {
        let response = server().get("/echo?other=x").await;
        response.assert_status_ok();
        response.assert_json(&json!({ "page": null, "search": null }));
    }

    #[tokio::test]
    async fn test_path_id_undecodable_segment_is_enveloped() {
        let response = server().get("/items/%FF").expect_failure().await;
        response.assert_status_bad_request();
        response.assert_json(&json!({ "status": "error", "error": "Invalid item ID" }));

        server().get("/items/42").await.assert_text("42");
    }
}
