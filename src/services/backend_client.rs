//! REST client for the AI backend.
//!
//! Every endpoint answers with a `{ "success": bool, ... }` envelope. A
//! non-2xx status or `success: false` becomes a [`BackendError`]; callers
//! decide on the local fallback. There is no retry.

use std::time::Duration;

use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::types::backend::{
    AnalyzeTabsRequest, CreateTabRequest, NavigationIntent, ParseNavigationRequest, RemoteTab,
    TabAnalysis, TabSummary,
};
use crate::types::errors::BackendError;
use crate::types::settings::BackendSettings;

pub const CREATE_TAB_PATH: &str = "/api/hybrid-browser/tabs";
pub const ANALYZE_TABS_PATH: &str = "/ai/analyze-tabs";
pub const PARSE_NAVIGATION_PATH: &str = "/api/advanced-navigation/parse";

const MAX_ERROR_BODY_CHARS: usize = 300;

/// HTTP client bound to one backend base URL.
#[derive(Clone)]
pub struct BackendClient {
    client: reqwest::Client,
    base_url: Url,
    auth_token: Option<String>,
}

impl BackendClient {
    pub fn new(settings: &BackendSettings) -> Result<Self, BackendError> {
        let base_url = Url::parse(settings.base_url.trim_end_matches('/'))
            .map_err(|e| BackendError::InvalidUrl(format!("{}: {}", settings.base_url, e)))?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs.max(1)))
            .build()
            .map_err(|e| BackendError::NetworkError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url,
            auth_token: settings.auth_token.clone().filter(|t| !t.is_empty()),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends `path` to the base URL, keeping any path prefix the base carries.
    pub fn endpoint(&self, path: &str) -> Result<Url, BackendError> {
        let joined = format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path);
        Url::parse(&joined).map_err(|e| BackendError::InvalidUrl(format!("{joined}: {e}")))
    }

    /// Registers a tab with the backend.
    pub async fn create_tab(&self, tab_id: &str, url: &str) -> Result<RemoteTab, BackendError> {
        let request = CreateTabRequest {
            url: url.to_string(),
            tab_id: tab_id.to_string(),
        };
        let body = self.post(CREATE_TAB_PATH, &request).await?;
        let payload = body.get("tab").cloned().unwrap_or(body);
        decode(payload, "create tab")
    }

    /// Requests category and summary for a batch of tabs.
    pub async fn analyze_tabs(&self, tabs: Vec<TabSummary>) -> Result<Vec<TabAnalysis>, BackendError> {
        let request = AnalyzeTabsRequest { tabs };
        let body = self.post(ANALYZE_TABS_PATH, &request).await?;
        let analyses = body.get("analyses").cloned().unwrap_or(Value::Array(Vec::new()));
        decode(analyses, "analyze tabs")
    }

    /// Turns free-form input ("open my github notifications") into a navigation intent.
    pub async fn parse_navigation(&self, input: &str) -> Result<NavigationIntent, BackendError> {
        let request = ParseNavigationRequest {
            input: input.to_string(),
        };
        let body = self.post(PARSE_NAVIGATION_PATH, &request).await?;
        let payload = body.get("intent").cloned().unwrap_or(body);
        decode(payload, "parse navigation")
    }

    async fn post<T: Serialize>(&self, path: &str, request: &T) -> Result<Value, BackendError> {
        let url = self.endpoint(path)?;
        debug!(%url, "backend request");

        let mut builder = self.client.post(url).json(request);
        if let Some(token) = &self.auth_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| BackendError::NetworkError(format!("{path} request failed: {e}")))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| BackendError::NetworkError(format!("{path} body read failed: {e}")))?;

        if !status.is_success() {
            return Err(BackendError::HttpStatus {
                status: status.as_u16(),
                body: sanitize_error_body(&text),
            });
        }

        parse_envelope(&text)
    }
}

/// Parses a `{success, ...}` envelope, returning the whole object on success.
pub fn parse_envelope(body: &str) -> Result<Value, BackendError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| BackendError::ParseError(format!("{e}; body: {}", sanitize_error_body(body))))?;

    let success = value
        .get("success")
        .and_then(Value::as_bool)
        .ok_or_else(|| BackendError::ParseError("missing 'success' field".to_string()))?;

    if !success {
        let message = value
            .get("error")
            .or_else(|| value.get("message"))
            .and_then(Value::as_str)
            .unwrap_or("no error message")
            .to_string();
        return Err(BackendError::Rejected(message));
    }
    Ok(value)
}

/// Collapses whitespace and truncates a body for log and error output.
pub fn sanitize_error_body(body: &str) -> String {
    let collapsed = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() > MAX_ERROR_BODY_CHARS {
        let truncated: String = collapsed.chars().take(MAX_ERROR_BODY_CHARS).collect();
        format!("{truncated}...")
    } else {
        collapsed
    }
}

fn decode<T: DeserializeOwned>(value: Value, what: &str) -> Result<T, BackendError> {
    serde_json::from_value(value).map_err(|e| BackendError::ParseError(format!("{what}: {e}")))
}
