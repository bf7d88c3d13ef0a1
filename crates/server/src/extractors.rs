// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Extractors that reject with `{"error": ".."}` JSON instead of axum's
//! plain-text bodies.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use serde_json::json;

/// [`Query<T>`] that rejects with a JSON 400, e.g. on an unknown field
/// under `deny_unknown_fields`.
pub struct JsonQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for JsonQuery<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(JsonQuery(value)),
            Err(rejection) => Err(query_error(rejection)),
        }
    }
}

/// [`Json<T>`] request body that rejects with a JSON error: 415 without a
/// JSON content type, 400 for anything else.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(body_error(rejection)),
        }
    }
}

fn query_error(rejection: QueryRejection) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": rejection.body_text() })),
    )
        .into_response()
}

fn body_error(rejection: JsonRejection) -> Response {
    let status = match &rejection {
        JsonRejection::MissingJsonContentType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        _ => StatusCode::BAD_REQUEST,
    };
    (
        status,
        Json(json!({ "error": rejection.body_text() })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::body::Body;
    use axum::routing::{get, post};
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase", deny_unknown_fields)]
    struct RenderParams {
        #[serde(default)]
        pending: bool,
    }

    #[derive(Debug, Deserialize)]
    struct Payload {
        count: u32,
    }

    async fn query_handler(JsonQuery(params): JsonQuery<RenderParams>) -> String {
        params.pending.to_string()
    }

    async fn body_handler(JsonBody(payload): JsonBody<Payload>) -> String {
        payload.count.to_string()
    }

    fn app() -> Router {
        Router::new()
            .route("/query", get(query_handler))
            .route("/body", post(body_handler))
    }

    async fn send(request: axum::http::Request<Body>) -> (StatusCode, String) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8_lossy(&body).to_string())
    }

    fn get_request(uri: &str) -> axum::http::Request<Body> {
        axum::http::Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    fn post_json(body: &str) -> axum::http::Request<Body> {
        axum::http::Request::builder()
            .method("POST")
            .uri("/body")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn valid_query_returns_200() {
        assert_eq!(
            send(get_request("/query?pending=true")).await,
            (StatusCode::OK, "true".to_string())
        );
        assert_eq!(
            send(get_request("/query")).await,
            (StatusCode::OK, "false".to_string())
        );
    }

    #[tokio::test]
    async fn unknown_query_field_returns_json_400() {
        let (status, body) = send(get_request("/query?badParam=1")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let parsed: serde_json::Value =
            serde_json::from_str(&body).expect("Response should be valid JSON");
        let error_msg = parsed["error"].as_str().unwrap();
        assert!(
            error_msg.contains("unknown field") || error_msg.contains("badParam"),
            "got: {error_msg}"
        );
    }

    #[tokio::test]
    async fn valid_body_returns_200() {
        assert_eq!(
            send(post_json(r#"{"count": 3}"#)).await,
            (StatusCode::OK, "3".to_string())
        );
    }

    #[tokio::test]
    async fn malformed_body_is_json_error() {
        let (status, body) = send(post_json("{not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let parsed: serde_json::Value =
            serde_json::from_str(&body).expect("Response must be valid JSON, not plain text");
        assert!(parsed.get("error").is_some());

        let (status, _) = send(post_json(r#"{"count": "three"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_content_type_is_415() {
        let request = axum::http::Request::builder()
            .method("POST")
            .uri("/body")
            .body(Body::from(r#"{"count": 3}"#))
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert!(body.contains("error"));
    }
}
