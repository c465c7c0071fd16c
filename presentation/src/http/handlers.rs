//! Route handlers

use super::error::{
    ApiError, CHAT_FAILED, FETCH_FAILED, HOST_FAILED, LIST_FAILED, SITE_NOT_FOUND,
};
use super::state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sitewright_application::{ChatRequest, HostingError, PublishedSite, SiteListing};
use sitewright_domain::{
    CombinedResult, HostedSite, Message, MetadataDraft, Page, Prompt, SiteSummary,
};
use tracing::{error, info, warn};

const PROMPT_REQUIRED: &str = "Prompt is required";
const PAGES_REQUIRED: &str = "Pages array is required";

/// `POST /api/chat` body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatBody {
    pub prompt: Option<String>,
    pub previous_messages: Option<Vec<Message>>,
    pub site_structure: Option<Vec<Page>>,
}

/// `GET /api/sites` query
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub start_after: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatBody>, JsonRejection>,
) -> Result<Json<CombinedResult>, ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        warn!(error = %rejection, "Rejected chat body");
        ApiError::bad_request(rejection.body_text())
    })?;

    let prompt = body
        .prompt
        .and_then(|p| Prompt::try_new(p).ok())
        .ok_or_else(|| ApiError::bad_request(PROMPT_REQUIRED))?;

    let request = ChatRequest::new(prompt)
        .with_previous_messages(body.previous_messages.unwrap_or_default())
        .with_site_structure(body.site_structure.unwrap_or_default());

    match state.chat.execute(request).await {
        Ok(result) => Ok(Json(result)),
        Err(e) => {
            error!(error = %e, "Chat error");
            Err(ApiError::Internal(CHAT_FAILED))
        }
    }
}

/// `POST /api/host`; body `{pages, metadata?}`
pub async fn host_site(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<PublishedSite>, ApiError> {
    let Ok(Json(mut body)) = payload else {
        return Err(ApiError::bad_request(PAGES_REQUIRED));
    };
    let Some(fields) = body.as_object_mut() else {
        return Err(ApiError::bad_request(PAGES_REQUIRED));
    };

    let pages = match fields.remove("pages") {
        Some(pages @ Value::Array(_)) => serde_json::from_value::<Vec<Page>>(pages)
            .map_err(|e| ApiError::bad_request(format!("Invalid page entry: {e}")))?,
        _ => return Err(ApiError::bad_request(PAGES_REQUIRED)),
    };

    let metadata = match fields.remove("metadata") {
        None | Some(Value::Null) => MetadataDraft::default(),
        Some(value) => serde_json::from_value(value)
            .map_err(|e| ApiError::bad_request(format!("Invalid metadata: {e}")))?,
    };

    match state.hosting.publish(pages, metadata).await {
        Ok(published) => {
            info!(site_id = %published.site_id, "Hosted site");
            Ok(Json(published))
        }
        Err(e) => {
            error!(error = %e, "Error hosting site");
            Err(ApiError::Internal(HOST_FAILED))
        }
    }
}

/// `GET /api/sites?startAfter=<cursor>`
pub async fn list_sites(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<SiteListing>, ApiError> {
    let cursor = query.start_after.as_deref().filter(|c| !c.is_empty());

    state.hosting.list(cursor).await.map(Json).map_err(|e| {
        error!(error = %e, "Error listing sites");
        ApiError::Internal(LIST_FAILED)
    })
}

/// `GET /api/recentsites`
pub async fn recent_sites(
    State(state): State<AppState>,
) -> Result<Json<Vec<SiteSummary>>, ApiError> {
    state.hosting.list_recent().await.map(Json).map_err(|e| {
        error!(error = %e, "Error listing recent sites");
        ApiError::Internal(LIST_FAILED)
    })
}

/// `GET /api/sites/:site_id`
pub async fn get_site(
    State(state): State<AppState>,
    Path(site_id): Path<String>,
) -> Result<Json<HostedSite>, ApiError> {
    match state.hosting.get(&site_id).await {
        Ok(site) => Ok(Json(site)),
        Err(HostingError::NotFound(_)) => Err(ApiError::NotFound(SITE_NOT_FOUND.to_string())),
        Err(e) => {
            error!(error = %e, site_id = %site_id, "Error fetching site");
            Err(ApiError::Internal(FETCH_FAILED))
        }
    }
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}
