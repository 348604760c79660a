use once_cell::sync::Lazy;
use regex::Regex;

pub const MAX_SLUG_LENGTH: usize = 200;

static DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9\s-]").expect("Invalid slug character regex pattern"));
static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex pattern"));
static HYPHEN_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-+").expect("Invalid hyphen regex pattern"));
static SLUG_INPUT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9-]*$").expect("Invalid slug input regex pattern"));

/// Derive a URL slug from a display name.
///
/// Characters outside `[a-z0-9]`, whitespace and `-` are dropped rather than
/// replaced, so `"HR & Admin"` becomes `"hr-admin"`. Never fails: input with
/// nothing usable yields an empty string.
pub fn generate_slug(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }

    let lowered = name.to_lowercase();
    let stripped = DISALLOWED.replace_all(&lowered, "");
    let hyphenated = WHITESPACE_RUN.replace_all(stripped.trim(), "-");
    let collapsed = HYPHEN_RUN.replace_all(&hyphenated, "-");

    collapsed.trim_matches('-').to_string()
}

pub fn generate_slug_opt(name: Option<&str>) -> String {
    name.map(generate_slug).unwrap_or_default()
}

/// Slug for an arbitrary JSON value; anything but a string gives `""`.
pub fn generate_slug_value(value: &serde_json::Value) -> String {
    generate_slug_opt(value.as_str())
}

/// Use the editor-supplied slug when there is one, otherwise derive it.
pub fn slug_or_generate(slug: Option<&str>, name: &str) -> String {
    match slug.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => generate_slug(name),
    }
}

pub fn validate_slug(slug: &str) -> bool {
    if slug.is_empty() || slug.chars().count() > MAX_SLUG_LENGTH {
        return false;
    }
    slug.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Whether the slug input field accepts `value` as typed. An empty field is
/// allowed so the editor can clear it.
pub fn is_slug_input_allowed(value: &str) -> bool {
    SLUG_INPUT.is_match(value)
}
