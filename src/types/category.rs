use std::fmt;

use serde::{Deserialize, Serialize};

/// Grouping label assigned to a tab by keyword matching.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Work,
    Shopping,
    Research,
    Entertainment,
    Social,
    Tools,
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Work,
        Category::Shopping,
        Category::Research,
        Category::Entertainment,
        Category::Social,
        Category::Tools,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Work => "work",
            Category::Shopping => "shopping",
            Category::Research => "research",
            Category::Entertainment => "entertainment",
            Category::Social => "social",
            Category::Tools => "tools",
            Category::Other => "other",
        }
    }

    /// Parses a label as produced by [`Category::label`], ignoring case.
    pub fn from_label(label: &str) -> Option<Category> {
        let lower = label.trim().to_lowercase();
        Category::ALL.into_iter().find(|c| c.label() == lower)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
