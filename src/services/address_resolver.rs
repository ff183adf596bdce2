//! Address bar input handling.
//!
//! Decides whether typed text is a location or a search, and derives the
//! placeholder title a tab shows before its page reports one.

use serde::{Deserialize, Serialize};
use url::{form_urlencoded, Url};

use crate::types::tab::{BLANK_URL, WELCOME_URL};

pub const NEW_TAB_TITLE: &str = "New Tab";
pub const WELCOME_TITLE: &str = "Welcome";

/// Where typed address bar input should take the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ResolvedInput {
    Navigate { url: String },
    Search { query: String, url: String },
}

impl ResolvedInput {
    pub fn url(&self) -> &str {
        match self {
            ResolvedInput::Navigate { url } => url,
            ResolvedInput::Search { url, .. } => url,
        }
    }
}

/// Resolves raw address bar text against a search endpoint.
///
/// Empty input resolves to the blank page.
pub fn resolve_input(input: &str, search_url: &str) -> ResolvedInput {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return ResolvedInput::Navigate {
            url: BLANK_URL.to_string(),
        };
    }

    let lower = trimmed.to_lowercase();
    if lower.starts_with("http://")
        || lower.starts_with("https://")
        || lower.starts_with("about:")
        || lower.starts_with("file://")
    {
        return ResolvedInput::Navigate {
            url: trimmed.to_string(),
        };
    }

    if !trimmed.contains(char::is_whitespace) {
        if is_localhost(&lower) {
            return ResolvedInput::Navigate {
                url: format!("http://{}", trimmed),
            };
        }
        if looks_like_host(&lower) {
            let candidate = format!("https://{}", trimmed);
            if Url::parse(&candidate).is_ok() {
                return ResolvedInput::Navigate { url: candidate };
            }
        }
    }

    let encoded: String = form_urlencoded::byte_serialize(trimmed.as_bytes()).collect();
    ResolvedInput::Search {
        query: trimmed.to_string(),
        url: format!("{}{}", search_url, encoded),
    }
}

/// Placeholder title for a URL: hostname without `www.`, or a fixed label
/// for the blank and welcome pages.
pub fn derive_title(url: &str) -> String {
    let trimmed = url.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(BLANK_URL) {
        return NEW_TAB_TITLE.to_string();
    }
    if trimmed.eq_ignore_ascii_case(WELCOME_URL) {
        return WELCOME_TITLE.to_string();
    }
    match Url::parse(trimmed).ok().and_then(|u| u.host_str().map(str::to_string)) {
        Some(host) => host.strip_prefix("www.").unwrap_or(&host).to_string(),
        None => trimmed.to_string(),
    }
}

fn is_localhost(lower: &str) -> bool {
    let host = lower.split(['/', '?', '#']).next().unwrap_or("");
    let name = host.split(':').next().unwrap_or("");
    name == "localhost" || name == "127.0.0.1"
}

fn looks_like_host(lower: &str) -> bool {
    let host = lower.split(['/', '?', '#']).next().unwrap_or("");
    let name = host.split(':').next().unwrap_or("");
    let labels: Vec<&str> = name.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|l| l.is_empty()) {
        return false;
    }
    let tld = labels[labels.len() - 1];
    tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
        && labels
            .iter()
            .all(|l| l.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'))
}
