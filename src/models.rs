use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::constants::{NO_DESCRIPTION, NO_TITLE, UNKNOWN_SOURCE};

/// News category, applied server-side through the `category` query parameter
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    General,
    Business,
    Entertainment,
    Health,
    Science,
    Sports,
    Technology,
}

impl Category {
    /// Every category, in selector order
    pub const ALL: [Category; 7] = [
        Category::General,
        Category::Business,
        Category::Entertainment,
        Category::Health,
        Category::Science,
        Category::Sports,
        Category::Technology,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Business => "business",
            Category::Entertainment => "entertainment",
            Category::Health => "health",
            Category::Science => "science",
            Category::Sports => "sports",
            Category::Technology => "technology",
        }
    }

    /// Button label: the name with its first character capitalized
    pub fn label(&self) -> String {
        capitalize(self.as_str())
    }

    /// Position in [`Category::ALL`]
    pub fn index(&self) -> usize {
        Category::ALL
            .iter()
            .position(|c| c == self)
            .unwrap_or_default()
    }

    /// Category at a selector position, if any
    pub fn from_index(index: usize) -> Option<Category> {
        Category::ALL.get(index).copied()
    }

    pub fn next(&self) -> Category {
        Category::ALL[(self.index() + 1) % Category::ALL.len()]
    }

    pub fn prev(&self) -> Category {
        let len = Category::ALL.len();
        Category::ALL[(self.index() + len - 1) % len]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A category name that is not one of [`Category::ALL`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{0}' (expected one of: general, business, entertainment, health, science, sports, technology)")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A single news article as returned by the backend
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
}

impl Article {
    pub fn display_title(&self) -> &str {
        non_empty_or(&self.title, NO_TITLE)
    }

    pub fn display_description(&self) -> &str {
        non_empty_or(&self.description, NO_DESCRIPTION)
    }

    pub fn display_source(&self) -> &str {
        non_empty_or(&self.source, UNKNOWN_SOURCE)
    }
}

fn non_empty_or<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v,
        _ => fallback,
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of a successful `/news` response
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct NewsPayload {
    #[serde(default)]
    pub news_articles: Option<Vec<Article>>,
    #[serde(default)]
    pub error: Option<String>,
}

impl NewsPayload {
    /// Consume the payload, returning the articles only when there are some
    pub fn into_articles(self) -> Option<Vec<Article>> {
        self.news_articles.filter(|list| !list.is_empty())
    }
}
