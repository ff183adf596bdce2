//! Keyword classifier that assigns each tab a [`Category`].
//!
//! Rules are tried in table order; the first rule with a keyword contained in
//! the lower-cased URL or title wins. Nothing matches means `Other`.

use crate::types::category::Category;
use crate::types::tab::Tab;

/// One classification rule: a category and the keywords that select it.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierRule {
    pub category: Category,
    pub keywords: Vec<String>,
}

impl ClassifierRule {
    pub fn new(category: Category, keywords: &[&str]) -> Self {
        Self {
            category,
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }
}

/// Ordered rule table used by the classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Classifier {
    rules: Vec<ClassifierRule>,
}

impl Classifier {
    pub fn new(rules: Vec<ClassifierRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[ClassifierRule] {
        &self.rules
    }

    /// Classifies a tab by its URL and title.
    pub fn classify(&self, tab: &Tab) -> Category {
        self.classify_text(&tab.url, &tab.title)
    }

    pub fn classify_text(&self, url: &str, title: &str) -> Category {
        let url = url.to_lowercase();
        let title = title.to_lowercase();
        self.rules
            .iter()
            .find(|rule| {
                rule.keywords
                    .iter()
                    .any(|k| url.contains(k.as_str()) || title.contains(k.as_str()))
            })
            .map(|rule| rule.category)
            .unwrap_or(Category::Other)
    }

    /// Categories in the order groups are presented: table order, then `Other`.
    pub fn category_order(&self) -> Vec<Category> {
        let mut order: Vec<Category> = Vec::new();
        for rule in &self.rules {
            if !order.contains(&rule.category) {
                order.push(rule.category);
            }
        }
        if !order.contains(&Category::Other) {
            order.push(Category::Other);
        }
        order
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(vec![
            ClassifierRule::new(
                Category::Work,
                &[
                    "github", "gitlab", "jira", "slack", "notion", "docs.google", "linear.app",
                    "confluence", "trello", "asana", "figma",
                ],
            ),
            ClassifierRule::new(
                Category::Shopping,
                &["amazon", "ebay", "etsy", "walmart", "aliexpress", "shop", "store", "cart"],
            ),
            ClassifierRule::new(
                Category::Research,
                &[
                    "wikipedia", "scholar", "arxiv", "stackoverflow", "developer.mozilla",
                    "research", "paper", "docs",
                ],
            ),
            ClassifierRule::new(
                Category::Entertainment,
                &["youtube", "netflix", "spotify", "twitch", "hulu", "disney", "music", "movie"],
            ),
            ClassifierRule::new(
                Category::Social,
                &[
                    "twitter", "x.com", "facebook", "instagram", "linkedin", "reddit", "tiktok",
                    "mastodon",
                ],
            ),
            ClassifierRule::new(
                Category::Tools,
                &["translate", "calculator", "converter", "maps", "calendar", "drive", "chatgpt"],
            ),
        ])
    }
}

/// Classifies with the default rule table.
pub fn classify(tab: &Tab) -> Category {
    Classifier::default().classify(tab)
}
