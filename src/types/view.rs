use serde::{Deserialize, Serialize};

use super::category::Category;
use super::tab::{Position, Tab};

/// Which subset of tabs the workspace shows.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FilterBy {
    #[default]
    All,
    Active,
    Analyzed,
    Recent,
    Bookmarked,
}

impl FilterBy {
    pub fn parse(value: &str) -> Option<FilterBy> {
        match value.trim().to_lowercase().as_str() {
            "all" => Some(FilterBy::All),
            "active" => Some(FilterBy::Active),
            "analyzed" => Some(FilterBy::Analyzed),
            "recent" => Some(FilterBy::Recent),
            "bookmarked" => Some(FilterBy::Bookmarked),
            _ => None,
        }
    }
}

/// How the renderer lays out the visible tabs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Bubbles,
    Grid,
    List,
    Groups,
}

impl ViewMode {
    /// The mode after this one when cycling with a shortcut.
    pub fn next(self) -> ViewMode {
        match self {
            ViewMode::Bubbles => ViewMode::Grid,
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Groups,
            ViewMode::Groups => ViewMode::Bubbles,
        }
    }

    pub fn parse(value: &str) -> Option<ViewMode> {
        match value.trim().to_lowercase().as_str() {
            "bubbles" | "bubble" => Some(ViewMode::Bubbles),
            "grid" => Some(ViewMode::Grid),
            "list" => Some(ViewMode::List),
            "groups" => Some(ViewMode::Groups),
            _ => None,
        }
    }
}

/// Search, filter and view mode currently selected in the workspace toolbar.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub search_term: String,
    pub filter_by: FilterBy,
    pub view_mode: ViewMode,
}

/// Tabs sharing one category, in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryGroup {
    pub category: Category,
    pub tab_ids: Vec<String>,
}

/// Everything the renderer needs to draw one frame of the workspace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedView {
    pub visible_tabs: Vec<Tab>,
    pub groups: Vec<CategoryGroup>,
    pub view_mode: ViewMode,
    pub active_tab_id: Option<String>,
    pub total_tabs: usize,
}

/// Arrangement applied to every tab at once.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LayoutStrategy {
    Grid,
    Circle,
    Spiral,
    CategoryClusters,
}

impl LayoutStrategy {
    pub fn parse(value: &str) -> Option<LayoutStrategy> {
        match value.trim().to_lowercase().as_str() {
            "grid" => Some(LayoutStrategy::Grid),
            "circle" => Some(LayoutStrategy::Circle),
            "spiral" => Some(LayoutStrategy::Spiral),
            "category_clusters" | "clusters" | "category" => Some(LayoutStrategy::CategoryClusters),
            _ => None,
        }
    }
}

/// Target position computed by a layout strategy for one tab.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub tab_id: String,
    pub position: Position,
}
