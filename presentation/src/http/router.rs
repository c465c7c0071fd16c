//! Router assembly

use super::handlers::{chat, get_site, health, host_site, list_sites, recent_sites};
use super::state::AppState;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Largest accepted request body. Site structures carry full page HTML.
pub const BODY_LIMIT_BYTES: usize = 10 * 1024 * 1024;

/// Build the API router.
pub fn router(state: AppState, cors: bool) -> Router {
    let app = Router::new()
        .route("/api/chat", post(chat))
        .route("/api/host", post(host_site))
        .route("/api/sites", get(list_sites))
        .route("/api/recentsites", get(recent_sites))
        .route("/api/sites/:site_id", get(get_site))
        .route("/health", get(health))
        .with_state(state)
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http());

    if cors {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use serde_json::{Value, json};
    use sitewright_application::{
        CompletionRequest, GatewayError, HandleChatUseCase, HostingConfig, LlmGateway,
        PipelineConfig, SitePage, SiteHostingService, SiteStore, StorageError,
    };
    use sitewright_domain::{HostedSite, SiteId, SiteSummary};
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;

    struct ScriptedGateway {
        replies: Mutex<VecDeque<Result<Value, GatewayError>>>,
    }

    impl ScriptedGateway {
        fn new(replies: Vec<Result<Value, GatewayError>>) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(VecDeque::from(replies)),
            })
        }
    }

    #[async_trait]
    impl LlmGateway for ScriptedGateway {
        async fn complete(&self, _request: CompletionRequest) -> Result<Value, GatewayError> {
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(GatewayError::EmptyResponse))
        }
    }

    /// Keeps sites in insertion order; lists newest first.
    #[derive(Default)]
    struct VecStore {
        sites: Mutex<Vec<(HostedSite, SiteSummary)>>,
        fail: bool,
    }

    impl VecStore {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }
    }

    #[async_trait]
    impl SiteStore for VecStore {
        async fn put(&self, site: &HostedSite, summary: &SiteSummary) -> Result<(), StorageError> {
            if self.fail {
                return Err(StorageError::Io("bucket unavailable".into()));
            }
            self.sites
                .lock()
                .unwrap()
                .push((site.clone(), summary.clone()));
            Ok(())
        }

        async fn get(&self, id: &SiteId) -> Result<HostedSite, StorageError> {
            if self.fail {
                return Err(StorageError::Io("bucket unavailable".into()));
            }
            self.sites
                .lock()
                .unwrap()
                .iter()
                .find(|(site, _)| &site.site_id == id)
                .map(|(site, _)| site.clone())
                .ok_or_else(|| StorageError::NotFound(id.to_string()))
        }

        async fn list(&self, cursor: Option<&str>, limit: usize) -> Result<SitePage, StorageError> {
            if self.fail {
                return Err(StorageError::Io("bucket unavailable".into()));
            }
            let sites = self.sites.lock().unwrap();
            let skip: usize = cursor.and_then(|c| c.parse().ok()).unwrap_or(0);
            let newest_first: Vec<SiteSummary> =
                sites.iter().rev().map(|(_, s)| s.clone()).collect();
            let page: Vec<SiteSummary> = newest_first.iter().skip(skip).take(limit).cloned().collect();
            let next_cursor = (skip + limit < newest_first.len()).then(|| (skip + limit).to_string());
            Ok(SitePage {
                sites: page,
                next_cursor,
            })
        }
    }

    fn app_with(gateway: Arc<ScriptedGateway>, store: Arc<VecStore>, page_size: usize) -> Router {
        let chat = HandleChatUseCase::new(gateway, PipelineConfig::default());
        let hosting = SiteHostingService::new(
            store,
            HostingConfig::default()
                .with_public_base_url("https://sites.test")
                .with_page_size(page_size),
        );
        router(AppState::new(chat, hosting), true)
    }

    fn app() -> Router {
        app_with(ScriptedGateway::new(vec![]), Arc::new(VecStore::default()), 12)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&app(), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert!(body["version"].is_string());
    }

    #[tokio::test]
    async fn test_chat_returns_combined_result() {
        let gateway = ScriptedGateway::new(vec![
            Ok(json!({"needsImages": false, "explanation": "Text only"})),
            Ok(json!({
                "responseText": "Added an about page",
                "changes": [{
                    "name": "About",
                    "path": "/about.html",
                    "htmlContent": "<h1>About</h1>",
                    "action": "create"
                }]
            })),
        ]);
        let app = app_with(gateway, Arc::new(VecStore::default()), 12);

        let (status, body) = send(
            &app,
            post_json(
                "/api/chat",
                json!({
                    "prompt": "Add an about page",
                    "previousMessages": [{"role": "user", "content": "Make a bakery site"}],
                    "siteStructure": [{"name": "Home", "path": "/index.html", "html": "<p>hi</p>"}]
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["responseText"], "Added an about page");
        assert_eq!(body["changes"][0]["action"], "create");
        assert_eq!(body["imageDecision"]["needsImages"], false);
        assert!(body.get("imageUrls").is_none());
    }

    #[tokio::test]
    async fn test_chat_upstream_failure_is_generic_500() {
        let gateway = ScriptedGateway::new(vec![Err(GatewayError::Http {
            status: 502,
            body: "bad gateway".into(),
        })]);
        let app = app_with(gateway, Arc::new(VecStore::default()), 12);

        let (status, body) = send(&app, post_json("/api/chat", json!({"prompt": "hello"}))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Failed to process chat request"}));
    }

    #[tokio::test]
    async fn test_chat_generator_failure_is_same_500() {
        let gateway = ScriptedGateway::new(vec![
            Ok(json!({"needsImages": false, "explanation": ""})),
            Err(GatewayError::Timeout),
        ]);
        let app = app_with(gateway, Arc::new(VecStore::default()), 12);

        let (status, body) = send(&app, post_json("/api/chat", json!({"prompt": "hello"}))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to process chat request");
    }

    #[tokio::test]
    async fn test_chat_requires_prompt() {
        for body in [json!({}), json!({"prompt": "   "})] {
            let (status, body) = send(&app(), post_json("/api/chat", body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"], "Prompt is required");
        }
    }

    #[tokio::test]
    async fn test_host_requires_pages_array() {
        for body in [json!({}), json!({"pages": "nope"}), json!([1, 2])] {
            let (status, body) = send(&app(), post_json("/api/host", body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"], "Pages array is required");
        }
    }

    #[tokio::test]
    async fn test_host_then_fetch() {
        let app = app();
        let (status, published) = send(
            &app,
            post_json(
                "/api/host",
                json!({
                    "pages": [{"name": "Home", "path": "/index.html", "html": "<h1>Hi</h1>"}],
                    "metadata": {"agentType": "webapp"}
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(published["name"], "Home");
        let site_id = published["siteId"].as_str().unwrap().to_string();
        assert_eq!(
            published["url"],
            format!("https://sites.test/sites/{}", site_id)
        );
        assert!(published["createdAt"].is_string());

        let (status, site) = send(&app, get(&format!("/api/sites/{}", site_id))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(site["siteId"], site_id.as_str());
        assert_eq!(site["pages"][0]["path"], "/index.html");
        assert_eq!(site["metadata"]["agentType"], "webapp");
        assert_eq!(site["metadata"]["description"], "A generated website");
    }

    #[tokio::test]
    async fn test_unknown_site_is_404() {
        let app = app();
        for id in [SiteId::generate().to_string(), "not-a-uuid".to_string()] {
            let (status, body) = send(&app, get(&format!("/api/sites/{}", id))).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body["error"], "Site not found");
        }
    }

    #[tokio::test]
    async fn test_listing_pages_with_cursor() {
        let app = app_with(ScriptedGateway::new(vec![]), Arc::new(VecStore::default()), 2);
        for name in ["one", "two", "three"] {
            let (status, _) = send(
                &app,
                post_json(
                    "/api/host",
                    json!({"pages": [], "metadata": {"name": name}}),
                ),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
        }

        let (status, first) = send(&app, get("/api/sites")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(first["sites"].as_array().unwrap().len(), 2);
        assert_eq!(first["sites"][0]["name"], "three");
        assert_eq!(first["hasMore"], true);
        let cursor = first["nextStartAfter"].as_str().unwrap().to_string();

        let (_, second) = send(&app, get(&format!("/api/sites?startAfter={}", cursor))).await;
        assert_eq!(second["sites"].as_array().unwrap().len(), 1);
        assert_eq!(second["sites"][0]["name"], "one");
        assert_eq!(second["hasMore"], false);
        assert!(second.get("nextStartAfter").is_none());

        let (status, recent) = send(&app, get("/api/recentsites")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(recent.as_array().unwrap().len(), 3);
        assert_eq!(recent[0]["pageCount"], 0);
    }

    #[tokio::test]
    async fn test_storage_failures_map_to_500() {
        let app = app_with(ScriptedGateway::new(vec![]), Arc::new(VecStore::failing()), 12);

        let (status, body) = send(
            &app,
            post_json("/api/host", json!({"pages": []})),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to host site");

        let (status, body) = send(&app, get("/api/sites")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to list sites");

        let (_, body) = send(&app, get("/api/recentsites")).await;
        assert_eq!(body["error"], "Failed to list sites");

        let (status, body) =
            send(&app, get(&format!("/api/sites/{}", SiteId::generate()))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to fetch site");
    }
}
