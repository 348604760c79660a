use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Colour scheme a component renders with. Stored by the backend as `1` or `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value used for the `data-theme` attribute on rendered sections.
    pub fn as_attr(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl TryFrom<i64> for Theme {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Light),
            2 => Ok(Self::Dark),
            other => Err(format!(
                "invalid theme {}: expected 1 (light) or 2 (dark)",
                other
            )),
        }
    }
}

impl From<Theme> for i64 {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => 1,
            Theme::Dark => 2,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_attr())
    }
}

/// `isVisible` as it arrives from the backend: a boolean from some endpoints,
/// a 0/1 integer from others. The original representation is kept so that
/// a draft serializes back exactly as it was read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VisibilityFlag {
    Bool(bool),
    Int(i64),
    Other(serde_json::Value),
}

impl VisibilityFlag {
    /// Only `true` and `1` count as visible. A float `1.0` is the same number.
    pub fn is_visible(&self) -> bool {
        match self {
            Self::Bool(visible) => *visible,
            Self::Int(value) => *value == 1,
            Self::Other(value) => value.as_f64() == Some(1.0),
        }
    }
}

impl Default for VisibilityFlag {
    fn default() -> Self {
        Self::Bool(false)
    }
}

impl From<bool> for VisibilityFlag {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_id: Option<i64>,
    #[serde(default)]
    pub component_type: String,
    #[serde(default)]
    pub component_name: String,
    #[serde(default)]
    pub order_index: u32,
    #[serde(default, deserialize_with = "deserialize_content_json")]
    pub content_json: String,
    /// Structured content as held by the editor before it is flattened into
    /// `content_json`. Never sent to the backend.
    #[serde(default, skip_serializing)]
    pub content: Option<serde_json::Value>,
    #[serde(default)]
    pub is_visible: VisibilityFlag,
    #[serde(default)]
    pub theme: Theme,
}

impl ComponentDraft {
    pub fn new(component_type: &str, component_name: &str, order_index: u32) -> Self {
        Self {
            id: None,
            page_id: None,
            component_type: component_type.to_string(),
            component_name: component_name.to_string(),
            order_index,
            content_json: "{}".to_string(),
            content: None,
            is_visible: VisibilityFlag::Bool(true),
            theme: Theme::Light,
        }
    }

    pub fn with_content(mut self, content: &serde_json::Value) -> Self {
        self.content_json = content.to_string();
        self
    }

    pub fn content(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::from_str(&self.content_json)
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible.is_visible()
    }

    /// CSS `display` value a preview uses for this component.
    pub fn display_style(&self) -> &'static str {
        if self.is_visible() {
            "block"
        } else {
            "none"
        }
    }
}

/// Accepts `contentJson` either as the expected string or as a raw JSON value
/// that some editor forms still produce, and stores the serialized form.
fn deserialize_content_json<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}
