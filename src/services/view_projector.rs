//! View projector: turns the tab store contents plus toolbar state into the
//! list the renderer draws.
//!
//! Visible tabs must pass both the search predicate and the filter predicate.
//! Grouping always covers every tab, regardless of search or filter.

use crate::services::classifier::Classifier;
use crate::types::category::Category;
use crate::types::tab::{meta_keys, Tab};
use crate::types::view::{CategoryGroup, FilterBy, ProjectedView, ViewState};

/// How far back `FilterBy::Recent` reaches, in seconds.
pub const RECENT_WINDOW_SECS: i64 = 3600;

/// Inputs to a single projection.
#[derive(Debug, Clone, Copy)]
pub struct ProjectionInput<'a> {
    pub tabs: &'a [Tab],
    pub active_tab_id: Option<&'a str>,
    pub view: &'a ViewState,
    /// Reference time for the recent filter, in Unix seconds.
    pub now: i64,
}

/// Search predicate: empty term, or a case-insensitive substring of the
/// title, URL or category label.
pub fn matches_search(tab: &Tab, category: Category, search_term: &str) -> bool {
    let term = search_term.to_lowercase();
    if term.is_empty() {
        return true;
    }
    tab.title.to_lowercase().contains(&term)
        || tab.url.to_lowercase().contains(&term)
        || category.label().contains(&term)
}

/// Filter predicate for one tab.
pub fn matches_filter(tab: &Tab, filter_by: FilterBy, active_tab_id: Option<&str>, now: i64) -> bool {
    match filter_by {
        FilterBy::All => true,
        FilterBy::Active => active_tab_id == Some(tab.id.as_str()),
        FilterBy::Analyzed => tab.metadata.flag(meta_keys::AI_ANALYZED),
        FilterBy::Recent => now.saturating_sub(tab.created_at) <= RECENT_WINDOW_SECS,
        FilterBy::Bookmarked => tab.metadata.flag(meta_keys::BOOKMARKED),
    }
}

/// Tabs that pass both the search and the filter, in store order.
pub fn visible_tabs(input: &ProjectionInput<'_>, classifier: &Classifier) -> Vec<Tab> {
    input
        .tabs
        .iter()
        .filter(|tab| {
            matches_search(tab, classifier.classify(tab), &input.view.search_term)
                && matches_filter(tab, input.view.filter_by, input.active_tab_id, input.now)
        })
        .cloned()
        .collect()
}

/// Partitions all tabs by category, in rule-table order, dropping empty groups.
pub fn group_by_category(tabs: &[Tab], classifier: &Classifier) -> Vec<CategoryGroup> {
    let categorized: Vec<(Category, &Tab)> =
        tabs.iter().map(|t| (classifier.classify(t), t)).collect();

    classifier
        .category_order()
        .into_iter()
        .filter_map(|category| {
            let tab_ids: Vec<String> = categorized
                .iter()
                .filter(|(c, _)| *c == category)
                .map(|(_, t)| t.id.clone())
                .collect();
            (!tab_ids.is_empty()).then_some(CategoryGroup { category, tab_ids })
        })
        .collect()
}

/// Full projection for one frame.
pub fn project(input: &ProjectionInput<'_>, classifier: &Classifier) -> ProjectedView {
    ProjectedView {
        visible_tabs: visible_tabs(input, classifier),
        groups: group_by_category(input.tabs, classifier),
        view_mode: input.view.view_mode,
        active_tab_id: input.active_tab_id.map(str::to_string),
        total_tabs: input.tabs.len(),
    }
}
