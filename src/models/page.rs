use serde::{Deserialize, Serialize};

use super::ComponentDraft;

/// A slug as supplied by the editor. Anything other than text is kept so the
/// validator can report it instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlugValue {
    Text(String),
    Invalid(serde_json::Value),
}

impl SlugValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Invalid(_) => None,
        }
    }
}

impl From<&str> for SlugValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<SlugValue>,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub is_homepage: bool,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub components: Vec<ComponentDraft>,
}

impl PageDraft {
    pub fn new(name: &str, category_id: Option<i64>) -> Self {
        Self {
            name: Some(name.to_string()),
            category_id,
            ..Default::default()
        }
    }

    pub fn with_slug(mut self, slug: &str) -> Self {
        self.slug = Some(SlugValue::from(slug));
        self
    }

    pub fn has_components(&self) -> bool {
        !self.components.is_empty()
    }
}

/// Body of `PUT /api/Pages`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageUpdate {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
    pub slug: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub is_homepage: bool,
    pub is_published: bool,
}

/// Row from `GET /api/Pages`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub is_published: bool,
}
