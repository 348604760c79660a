use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{ComponentDraft, PageDraft, PageUpdate, SlugValue};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ValidationLimits {
    #[serde(default = "default_name_min")]
    pub name_min: usize,
    #[serde(default = "default_name_max")]
    pub name_max: usize,
    #[serde(default = "default_slug_max")]
    pub slug_max: usize,
    #[serde(default = "default_meta_title_max")]
    pub meta_title_max: usize,
    #[serde(default = "default_meta_description_max")]
    pub meta_description_max: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            name_min: default_name_min(),
            name_max: default_name_max(),
            slug_max: default_slug_max(),
            meta_title_max: default_meta_title_max(),
            meta_description_max: default_meta_description_max(),
        }
    }
}

fn default_name_min() -> usize {
    2
}

fn default_name_max() -> usize {
    100
}

fn default_slug_max() -> usize {
    200
}

fn default_meta_title_max() -> usize {
    60
}

fn default_meta_description_max() -> usize {
    160
}

/// First rule an existing page failed before an update is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Page name must be at least {min} characters long")]
    NameTooShort { min: usize },
    #[error("Page name must not exceed {max} characters")]
    NameTooLong { max: usize },
    #[error("Page slug must not exceed {max} characters")]
    SlugTooLong { max: usize },
    #[error("Meta title must not exceed {max} characters")]
    MetaTitleTooLong { max: usize },
    #[error("Meta description must not exceed {max} characters")]
    MetaDescriptionTooLong { max: usize },
}

/// Length in UTF-16 code units, the unit the backend enforces its limits in.
fn text_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Check a page draft before it is saved. Every rule runs; an empty list
/// means the draft is valid.
pub fn validate_page_data(page: &PageDraft) -> Vec<String> {
    validate_page_data_with(page, &ValidationLimits::default())
}

pub fn validate_page_data_with(page: &PageDraft, limits: &ValidationLimits) -> Vec<String> {
    let mut errors = Vec::new();

    let name_ok = page
        .name
        .as_deref()
        .is_some_and(|name| !name.is_empty() && text_len(name) >= limits.name_min);
    if !name_ok {
        errors.push(format!(
            "Page name must be at least {} characters long",
            limits.name_min
        ));
    }

    if page.category_id.is_none() {
        errors.push("Category ID is required".to_string());
    }

    // Slug is optional; a single character is a perfectly good slug.
    match &page.slug {
        None => {}
        Some(SlugValue::Invalid(_)) => errors.push("Slug must be a text string".to_string()),
        Some(SlugValue::Text(slug)) => {
            if text_len(slug) > limits.slug_max {
                errors.push(format!("Slug cannot exceed {} characters", limits.slug_max));
            }
        }
    }

    errors
}

pub fn validate_page_update(
    update: &PageUpdate,
    limits: &ValidationLimits,
) -> Result<(), ValidationError> {
    let name_len = text_len(&update.name);
    if name_len < limits.name_min {
        return Err(ValidationError::NameTooShort {
            min: limits.name_min,
        });
    }
    if name_len > limits.name_max {
        return Err(ValidationError::NameTooLong {
            max: limits.name_max,
        });
    }
    if let Some(slug) = &update.slug {
        if text_len(slug) > limits.slug_max {
            return Err(ValidationError::SlugTooLong {
                max: limits.slug_max,
            });
        }
    }
    if let Some(title) = &update.meta_title {
        if text_len(title) > limits.meta_title_max {
            return Err(ValidationError::MetaTitleTooLong {
                max: limits.meta_title_max,
            });
        }
    }
    if let Some(description) = &update.meta_description {
        if text_len(description) > limits.meta_description_max {
            return Err(ValidationError::MetaDescriptionTooLong {
                max: limits.meta_description_max,
            });
        }
    }
    Ok(())
}

/// Check the components of a local draft: order indexes unique and dense
/// from 0, content stored as a JSON object string, and a type on each.
pub fn validate_components(components: &[ComponentDraft]) -> Vec<String> {
    let mut errors = Vec::new();
    let mut seen = BTreeSet::new();
    let mut duplicates = BTreeSet::new();

    for (position, component) in components.iter().enumerate() {
        let label = position + 1;

        if component.component_type.trim().is_empty() {
            errors.push(format!("Component {}: componentType is required", label));
        }

        match component.content() {
            Ok(value) if value.is_object() => {}
            _ => errors.push(format!(
                "Component {}: contentJson must be a JSON object",
                label
            )),
        }

        if !seen.insert(component.order_index) {
            duplicates.insert(component.order_index);
        }
    }

    for index in &duplicates {
        errors.push(format!("Duplicate orderIndex {}", index));
    }

    if duplicates.is_empty() {
        let dense = seen.iter().copied().eq(0..components.len() as u32);
        if !dense {
            errors.push(format!(
                "Component order indexes must run from 0 to {} without gaps",
                components.len().saturating_sub(1)
            ));
        }
    }

    errors
}
