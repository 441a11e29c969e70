//! HTTP adapter for saving lineups.
//!
//! Posts the lineup as JSON with the CSRF token in `X-CSRFToken`, the way the
//! team pages expect it. Relative save URLs resolve against the configured
//! base URL.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use lineup_shared::{SaveLineupRequest, SaveLineupResponse};

use crate::ports::outbound::{ApiError, ApiResponse, LineupApiPort};

pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone)]
pub struct HttpLineupApi {
    client: Client,
    base_url: Option<Url>,
}

impl HttpLineupApi {
    pub fn new(base_url: Option<&str>) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT_SECS)
    }

    /// Create client with custom timeout (for testing).
    pub fn with_timeout(base_url: Option<&str>, timeout_secs: u64) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        let base_url = base_url
            .map(|raw| {
                // A trailing slash keeps the last path segment when joining.
                let normalized = format!("{}/", raw.trim_end_matches('/'));
                Url::parse(&normalized).map_err(|e| ApiError::InvalidUrl(format!("{raw}: {e}")))
            })
            .transpose()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    /// Absolute endpoint for `save_url`.
    pub fn resolve(&self, save_url: &str) -> Result<Url, ApiError> {
        match Url::parse(save_url) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let base = self.base_url.as_ref().ok_or_else(|| {
                    ApiError::InvalidUrl(format!("{save_url}: relative URL without a base URL"))
                })?;
                base.join(save_url)
                    .map_err(|e| ApiError::InvalidUrl(format!("{save_url}: {e}")))
            }
            Err(e) => Err(ApiError::InvalidUrl(format!("{save_url}: {e}"))),
        }
    }
}

#[async_trait]
impl LineupApiPort for HttpLineupApi {
    async fn post_lineup(
        &self,
        save_url: &str,
        csrf_token: &str,
        request: &SaveLineupRequest,
    ) -> Result<ApiResponse, ApiError> {
        let url = self.resolve(save_url)?;
        tracing::debug!(%url, "Posting lineup");

        let response = self
            .client
            .post(url)
            .header(CSRF_HEADER, csrf_token)
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        let body = match serde_json::from_str::<SaveLineupResponse>(&text) {
            Ok(body) => body,
            Err(e) if status.is_success() => return Err(ApiError::InvalidResponse(e.to_string())),
            Err(e) => {
                tracing::debug!(status = status.as_u16(), error = %e, "Error response has no JSON body");
                SaveLineupResponse::default()
            }
        };

        Ok(ApiResponse::new(status.as_u16(), body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::State;
    use axum::http::{HeaderMap, StatusCode};
    use axum::response::IntoResponse;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};
    use tokio::net::TcpListener;

    #[derive(Clone, Default)]
    struct Captured {
        token: Arc<Mutex<Option<String>>>,
        body: Arc<Mutex<Option<Value>>>,
    }

    async fn save_handler(
        State(captured): State<Captured>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> impl IntoResponse {
        let token = headers
            .get(CSRF_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        *captured.token.lock().unwrap() = token;
        *captured.body.lock().unwrap() = Some(body.clone());

        Json(json!({
            "status": "success",
            "data": {
                "starters": body["starters"].as_array().unwrap().iter().map(|id| json!({"id": id})).collect::<Vec<_>>(),
                "substitutes": []
            }
        }))
    }

    async fn spawn(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn request() -> SaveLineupRequest {
        SaveLineupRequest {
            team_id: 4,
            formation: "4-4-2".to_string(),
            starters: (1..=11).collect(),
            substitutes: vec![12],
        }
    }

    #[tokio::test]
    async fn posts_json_with_csrf_header() {
        let captured = Captured::default();
        let router = Router::new()
            .route("/teams/4/lineup/", post(save_handler))
            .with_state(captured.clone());
        let base = spawn(router).await;
        let api = HttpLineupApi::new(Some(&base)).unwrap();

        let response = api
            .post_lineup("/teams/4/lineup/", "secret", &request())
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert!(response.body.is_success());
        let data = response.body.data.unwrap();
        assert_eq!(data.starters.len(), 11);
        assert_eq!(captured.token.lock().unwrap().as_deref(), Some("secret"));
        let body = captured.body.lock().unwrap().clone().unwrap();
        assert_eq!(body["team_id"], 4);
        assert_eq!(body["formation"], "4-4-2");
        assert_eq!(body["substitutes"], json!([12]));
    }

    #[tokio::test]
    async fn error_status_keeps_server_message() {
        let router = Router::new().route(
            "/save",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"status": "error", "message": "Invalid formation"})),
                )
            }),
        );
        let base = spawn(router).await;
        let api = HttpLineupApi::new(Some(&base)).unwrap();

        let response = api.post_lineup("/save", "t", &request()).await.unwrap();

        assert_eq!(response.status, 400);
        assert_eq!(
            response.body.error_message().as_deref(),
            Some("Invalid formation")
        );
    }

    #[tokio::test]
    async fn error_status_without_json_uses_empty_body() {
        let router = Router::new().route(
            "/save",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "<html>boom</html>") }),
        );
        let base = spawn(router).await;
        let api = HttpLineupApi::new(Some(&base)).unwrap();

        let response = api.post_lineup("/save", "t", &request()).await.unwrap();

        assert_eq!(response.status, 500);
        assert_eq!(response.body, SaveLineupResponse::default());
    }

    #[tokio::test]
    async fn success_with_garbage_body_is_invalid_response() {
        let router = Router::new().route("/save", post(|| async { "not json" }));
        let base = spawn(router).await;
        let api = HttpLineupApi::new(Some(&base)).unwrap();

        let result = api.post_lineup("/save", "t", &request()).await;

        assert!(matches!(result, Err(ApiError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn unreachable_server_is_request_failed() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let api = HttpLineupApi::with_timeout(None, 2).unwrap();

        let result = api
            .post_lineup(&format!("http://{}/save", addr), "t", &request())
            .await;

        assert!(matches!(result, Err(ApiError::RequestFailed(_))));
    }

    #[test]
    fn resolves_relative_urls_against_base() {
        let api = HttpLineupApi::new(Some("http://example.test/club/")).unwrap();

        assert_eq!(
            api.resolve("teams/4/lineup/").unwrap().as_str(),
            "http://example.test/club/teams/4/lineup/"
        );
        assert_eq!(
            api.resolve("/teams/4/lineup/").unwrap().as_str(),
            "http://example.test/teams/4/lineup/"
        );
        assert_eq!(
            api.resolve("https://other.test/save").unwrap().as_str(),
            "https://other.test/save"
        );
    }

    #[test]
    fn relative_url_without_base_is_rejected() {
        let api = HttpLineupApi::new(None).unwrap();

        assert!(matches!(
            api.resolve("/teams/4/lineup/"),
            Err(ApiError::InvalidUrl(_))
        ));
        assert!(matches!(
            HttpLineupApi::new(Some("not a url")),
            Err(ApiError::InvalidUrl(_))
        ));
    }
}
