use serde::{Deserialize, Serialize};

/// What the workspace sends to the backend about a tab.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TabSummary {
    pub tab_id: String,
    pub url: String,
    pub title: String,
}

/// Body of `POST /api/hybrid-browser/tabs`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateTabRequest {
    pub url: String,
    pub tab_id: String,
}

/// Backend view of a freshly created tab.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RemoteTab {
    #[serde(default)]
    pub tab_id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

/// Body of `POST /ai/analyze-tabs`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyzeTabsRequest {
    pub tabs: Vec<TabSummary>,
}

/// Per-tab analysis result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TabAnalysis {
    pub tab_id: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

/// Body of `POST /api/advanced-navigation/parse`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParseNavigationRequest {
    pub input: String,
}

/// Navigation intent the backend extracted from free-form input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavigationIntent {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
}
