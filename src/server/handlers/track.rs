//! Redirect tracking handler.

use axum::extract::rejection::JsonRejection;
use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use url::form_urlencoded;

use super::super::types::{
    AppState, ClientErrorResponse, ResolutionErrorResponse, TrackRequest, TrackResponse,
};
use crate::error_handling::ErrorKind;

/// `GET ?url=...`
pub async fn track_redirect_get(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Response {
    track(&state, first_url_param(query.as_deref())).await
}

/// Value of the first `url` pair in a query string. Repeats are ignored and
/// undecodable bytes are replaced, so this never rejects a request.
fn first_url_param(query: Option<&str>) -> Option<String> {
    form_urlencoded::parse(query?.as_bytes())
        .find(|(key, _)| key == "url")
        .map(|(_, value)| value.into_owned())
}

/// `POST {"url": "..."}`
pub async fn track_redirect_post(
    State(state): State<AppState>,
    body: Result<Json<TrackRequest>, JsonRejection>,
) -> Response {
    match body {
        Ok(Json(request)) => track(&state, request.url).await,
        Err(rejection) => {
            log::warn!("POST -> [invalid body] {}", rejection.body_text());
            (
                StatusCode::BAD_REQUEST,
                Json(ClientErrorResponse {
                    error: ErrorKind::InvalidBody,
                    message: rejection.body_text(),
                }),
            )
                .into_response()
        }
    }
}

async fn track(state: &AppState, url: Option<String>) -> Response {
    let url = match url {
        Some(url) if !url.is_empty() => url,
        _ => {
            log::warn!("[missing url parameter]");
            return (
                StatusCode::BAD_REQUEST,
                Json(ClientErrorResponse {
                    error: ErrorKind::MissingParameter,
                    message: "provide the URL to track in the `url` parameter".to_string(),
                }),
            )
                .into_response();
        }
    };

    match state.resolver.resolve_with_details(&url).await {
        Ok(result) => {
            log::info!(
                "{} -> {} [{} redirects]",
                url,
                result.final_url,
                result.redirect_count
            );
            (StatusCode::OK, Json(TrackResponse::from(result))).into_response()
        }
        Err(e) => {
            log::warn!("{} -> [{}] {}", url, e.kind(), e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ResolutionErrorResponse {
                    error: e.kind(),
                    message: e.to_string(),
                    original_url: url,
                }),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use serde_json::Value;

    use crate::config::MAX_REDIRECT_HOPS;
    use crate::fetch::mock::ScriptedFetcher;
    use crate::fetch::RedirectResolver;

    fn state(fetcher: ScriptedFetcher) -> (AppState, Arc<ScriptedFetcher>) {
        let fetcher = Arc::new(fetcher);
        let resolver = RedirectResolver::new(fetcher.clone(), MAX_REDIRECT_HOPS);
        (AppState::new(resolver), fetcher)
    }

    async fn body_json(resp: Response) -> Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn query(url: Option<&str>) -> RawQuery {
        RawQuery(url.map(|url| {
            form_urlencoded::Serializer::new(String::new())
                .append_pair("url", url)
                .finish()
        }))
    }

    #[test]
    fn test_first_url_param() {
        assert_eq!(first_url_param(None), None);
        assert_eq!(first_url_param(Some("")), None);
        assert_eq!(first_url_param(Some("other=1")), None);
        assert_eq!(
            first_url_param(Some("url=http%3A%2F%2Fa.test%2F&url=http%3A%2F%2Fb.test%2F")),
            Some("http://a.test/".to_string())
        );
        assert_eq!(
            first_url_param(Some("x=1&url=http://a.test/?q%3D1")),
            Some("http://a.test/?q=1".to_string())
        );
        assert_eq!(first_url_param(Some("url=")), Some(String::new()));
        assert_eq!(first_url_param(Some("url=%zz")), Some("%zz".to_string()));
    }

    #[tokio::test]
    async fn test_repeated_url_uses_first() {
        let (state, fetcher) = state(
            ScriptedFetcher::new()
                .respond("http://a.test/", 200)
                .respond("http://b.test/", 200),
        );

        let resp = track_redirect_get(
            State(state),
            RawQuery(Some("url=http://a.test/&url=http://b.test/".to_string())),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["originalUrl"], "http://a.test/");
        assert_eq!(fetcher.visited(), vec!["http://a.test/".to_string()]);
    }

    #[tokio::test]
    async fn test_missing_url_makes_no_request() {
        let (state, fetcher) = state(ScriptedFetcher::new());

        let resp = track_redirect_get(State(state), query(None)).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_json(resp).await;
        assert_eq!(body["error"], "MissingParameter");
        assert!(body["message"].as_str().unwrap().contains("url"));
        assert_eq!(fetcher.calls(), 0);
    }

    #[tokio::test]
    async fn test_empty_url_makes_no_request() {
        let (state, fetcher) = state(ScriptedFetcher::new());

        let resp = track_redirect_get(State(state), query(Some(""))).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(fetcher.calls(), 0);
    }

    #[tokio::test]
    async fn test_success_body() {
        let (state, _) = state(
            ScriptedFetcher::new()
                .redirect("http://example.com/a", 301, "/b")
                .redirect("http://example.com/b", 301, "/c")
                .respond("http://example.com/c", 200),
        );

        let resp = track_redirect_get(State(state), query(Some("http://example.com/a"))).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["originalUrl"], "http://example.com/a");
        assert_eq!(body["finalUrl"], "http://example.com/c");
        assert_eq!(body["rawFinalUrl"], "http://example.com/c");
        assert_eq!(body["redirectCount"], 2);
        assert_eq!(
            body["redirectChain"],
            serde_json::json!([
                "http://example.com/a",
                "http://example.com/b",
                "http://example.com/c"
            ])
        );
    }

    #[tokio::test]
    async fn test_final_url_escapes_decoded_raw_kept() {
        let escaped = format!("/p?a=1{}u0026b=2", '\\');
        let raw_final = format!("http://example.com{}", escaped);
        let (state, _) = state(
            ScriptedFetcher::new()
                .redirect("http://example.com/start", 302, &escaped)
                .respond(&raw_final, 200),
        );

        let resp =
            track_redirect_get(State(state), query(Some("http://example.com/start"))).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["finalUrl"], "http://example.com/p?a=1&b=2");
        assert_eq!(body["rawFinalUrl"], raw_final.as_str());
        assert_eq!(body["redirectChain"][1], raw_final.as_str());
    }

    #[tokio::test]
    async fn test_too_many_redirects_is_500() {
        let (state, _) = state(
            ScriptedFetcher::new().chain(11, |i| format!("http://loop.test/{}", i)),
        );

        let resp = track_redirect_get(State(state), query(Some("http://loop.test/0"))).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(resp).await;
        assert_eq!(body["error"], "TooManyRedirects");
        assert_eq!(body["originalUrl"], "http://loop.test/0");
        assert!(body["message"]
            .as_str()
            .unwrap()
            .contains("redirect loop suspected"));
        assert!(body.get("redirectChain").is_none());
    }

    #[tokio::test]
    async fn test_request_failure_is_500() {
        let (state, _) = state(ScriptedFetcher::new());

        let resp = track_redirect_get(State(state), query(Some("http://down.test/"))).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(resp).await;
        assert_eq!(body["error"], "RequestFailed");
        assert_eq!(body["originalUrl"], "http://down.test/");
    }

    #[tokio::test]
    async fn test_parse_failure_is_500() {
        let (state, _) = state(
            ScriptedFetcher::new().redirect("http://example.com/a", 302, "http://[::1"),
        );

        let resp = track_redirect_get(State(state), query(Some("http://example.com/a"))).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(resp).await;
        assert_eq!(body["error"], "URLParseFailed");
    }

    #[tokio::test]
    async fn test_post_body() {
        let (state, _) = state(ScriptedFetcher::new().respond("http://example.com/", 200));

        let resp = track_redirect_post(
            State(state),
            Ok(Json(TrackRequest {
                url: Some("http://example.com/".to_string()),
            })),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["finalUrl"], "http://example.com/");
        assert_eq!(body["redirectCount"], 0);
    }

    #[tokio::test]
    async fn test_post_without_url_makes_no_request() {
        let (state, fetcher) = state(ScriptedFetcher::new());

        let resp = track_redirect_post(State(state), Ok(Json(TrackRequest::default()))).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_json(resp).await;
        assert_eq!(body["error"], "MissingParameter");
        assert_eq!(fetcher.calls(), 0);
    }
}
