//! Request bodies for the pages backend.
//!
//! Nothing here performs I/O: each builder returns an [`ApiRequest`] that the
//! caller sends with whatever HTTP client it owns. Local drafts number their
//! components from 0; the backend numbers them from
//! [`PayloadOptions::order_index_base`], and the translation happens here.

use serde::Serialize;
use thiserror::Error;

use crate::config::Config;
use crate::models::{ComponentDraft, PageDraft, PageUpdate, SlugValue, Theme};
use crate::services::validation::{validate_page_update, ValidationError, ValidationLimits};

/// Offset added to a component id to park it during a reorder. Keeps the
/// parked indexes clear of the final 1..n range.
pub const REORDER_PARKING_OFFSET: i64 = 1000;

const DEFAULT_COMPONENT_TYPE: &str = "Generic";

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("component at position {position} has no id and cannot be reordered")]
    MissingComponentId { position: usize },
    #[error("component {id} cannot be parked for reordering: order index overflows")]
    ParkingIndexOverflow { id: i64 },
    #[error("failed to serialize request body: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Post,
    Put,
    Delete,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: serde_json::Value,
}

#[derive(Debug, Clone)]
pub struct PayloadOptions {
    pub base_path: String,
    pub order_index_base: u32,
    pub limits: ValidationLimits,
}

impl Default for PayloadOptions {
    fn default() -> Self {
        Self {
            base_path: "/api".to_string(),
            order_index_base: 1,
            limits: ValidationLimits::default(),
        }
    }
}

impl PayloadOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            base_path: config.api.base_path.clone(),
            order_index_base: config.builder.order_index_base,
            limits: config.validation.clone(),
        }
    }

    fn path(&self, suffix: &str) -> String {
        format!("{}{}", self.base_path.trim_end_matches('/'), suffix)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreatePageBody<'a> {
    name: &'a str,
    category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    slug: Option<&'a SlugValue>,
    meta_title: Option<&'a str>,
    meta_description: Option<&'a str>,
    is_homepage: bool,
    is_published: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    components: Vec<ComponentBody>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ComponentBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_id: Option<i64>,
    component_type: String,
    component_name: String,
    order_index: i64,
    content_json: String,
    is_visible: bool,
    theme: Theme,
}

impl ComponentBody {
    fn from_draft(component: &ComponentDraft, order_index: i64) -> Self {
        Self {
            id: None,
            page_id: None,
            component_type: component_type_or_default(component),
            component_name: component.component_name.clone(),
            order_index,
            content_json: resolve_content_json(component),
            is_visible: component.is_visible(),
            theme: component.theme,
        }
    }
}

fn component_type_or_default(component: &ComponentDraft) -> String {
    if component.component_type.trim().is_empty() {
        DEFAULT_COMPONENT_TYPE.to_string()
    } else {
        component.component_type.clone()
    }
}

/// The string sent as `contentJson`. Structured editor content wins, then an
/// existing non-empty `contentJson`, then an empty object.
pub fn resolve_content_json(component: &ComponentDraft) -> String {
    match &component.content {
        Some(content) if content.is_object() => content.to_string(),
        _ if !component.content_json.trim().is_empty() => component.content_json.clone(),
        _ => "{}".to_string(),
    }
}

/// `POST /Pages/with-components` when the draft carries components, since
/// creating them one by one collides on the backend's (pageId, orderIndex)
/// index; `POST /Pages` otherwise. Identity fields are never sent.
pub fn build_create_page_request(
    page: &PageDraft,
    options: &PayloadOptions,
) -> Result<ApiRequest, PayloadError> {
    let endpoint = if page.has_components() {
        "/Pages/with-components"
    } else {
        "/Pages"
    };
    tracing::debug!(
        endpoint,
        components = page.components.len(),
        "Selected page creation endpoint"
    );

    let components = page
        .components
        .iter()
        .enumerate()
        .map(|(position, component)| {
            let mut body =
                ComponentBody::from_draft(component, options.order_index_base as i64 + position as i64);
            if body.component_name.trim().is_empty() {
                body.component_name = format!("Component {}", position + 1);
            }
            body
        })
        .collect();

    let body = CreatePageBody {
        name: page.name.as_deref().unwrap_or_default(),
        category_id: page.category_id,
        slug: page.slug.as_ref(),
        meta_title: page.meta_title.as_deref(),
        meta_description: page.meta_description.as_deref(),
        is_homepage: page.is_homepage,
        is_published: page.is_published,
        components,
    };

    Ok(ApiRequest {
        method: Method::Post,
        path: options.path(endpoint),
        body: serde_json::to_value(&body)?,
    })
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.to_string())
}

/// Shape a draft into the update DTO. A missing or zero category falls back
/// to category 1.
pub fn page_update_from_draft(page_id: i64, page: &PageDraft) -> PageUpdate {
    PageUpdate {
        id: page_id,
        name: page.name.clone().unwrap_or_default(),
        category_id: page.category_id.filter(|&id| id != 0).unwrap_or(1),
        slug: non_blank(page.slug.as_ref().and_then(SlugValue::as_str)),
        meta_title: non_blank(page.meta_title.as_deref()),
        meta_description: non_blank(page.meta_description.as_deref()),
        is_homepage: page.is_homepage,
        is_published: page.is_published,
    }
}

pub fn build_update_page_request(
    page_id: i64,
    page: &PageDraft,
    options: &PayloadOptions,
) -> Result<ApiRequest, PayloadError> {
    let update = page_update_from_draft(page_id, page);
    validate_page_update(&update, &options.limits)?;

    Ok(ApiRequest {
        method: Method::Put,
        path: options.path("/Pages"),
        body: serde_json::to_value(&update)?,
    })
}

pub fn build_create_component_request(
    page_id: i64,
    component: &ComponentDraft,
    options: &PayloadOptions,
) -> Result<ApiRequest, PayloadError> {
    let mut body = ComponentBody::from_draft(
        component,
        options.order_index_base as i64 + component.order_index as i64,
    );
    body.page_id = Some(page_id);

    Ok(ApiRequest {
        method: Method::Post,
        path: options.path(&format!("/Pages/{}/components", page_id)),
        body: serde_json::to_value(&body)?,
    })
}

fn component_update(
    component_id: i64,
    component: &ComponentDraft,
    order_index: i64,
    options: &PayloadOptions,
) -> Result<ApiRequest, PayloadError> {
    let mut body = ComponentBody::from_draft(component, order_index);
    body.id = Some(component_id);

    Ok(ApiRequest {
        method: Method::Put,
        path: options.path(&format!("/Pages/components/{}", component_id)),
        body: serde_json::to_value(&body)?,
    })
}

pub fn build_update_component_request(
    component_id: i64,
    component: &ComponentDraft,
    options: &PayloadOptions,
) -> Result<ApiRequest, PayloadError> {
    component_update(
        component_id,
        component,
        options.order_index_base as i64 + component.order_index as i64,
        options,
    )
}

pub fn build_delete_component_request(component_id: i64, options: &PayloadOptions) -> ApiRequest {
    ApiRequest {
        method: Method::Delete,
        path: options.path(&format!("/Pages/components/{}", component_id)),
        body: serde_json::Value::Null,
    }
}

/// Updates that move `components` into their slice order.
///
/// Every component is first parked at `1000 + id`, then given its final
/// index. The parking pass must complete before the final pass starts or two
/// components can briefly share an index.
pub fn plan_component_reorder(
    components: &[ComponentDraft],
    options: &PayloadOptions,
) -> Result<Vec<ApiRequest>, PayloadError> {
    let ids = components
        .iter()
        .enumerate()
        .map(|(position, component)| {
            component
                .id
                .ok_or(PayloadError::MissingComponentId { position })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut requests = Vec::with_capacity(components.len() * 2);
    for (component, &id) in components.iter().zip(&ids) {
        let parked = REORDER_PARKING_OFFSET
            .checked_add(id)
            .ok_or(PayloadError::ParkingIndexOverflow { id })?;
        requests.push(component_update(id, component, parked, options)?);
    }
    for (position, (component, &id)) in components.iter().zip(&ids).enumerate() {
        requests.push(component_update(
            id,
            component,
            options.order_index_base as i64 + position as i64,
            options,
        )?);
    }

    tracing::debug!(
        components = components.len(),
        requests = requests.len(),
        "Planned component reorder"
    );
    Ok(requests)
}
