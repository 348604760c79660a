use crate::models::{ComponentDraft, Theme, VisibilityFlag};

/// Components to render. The editor shows everything; the public view only
/// shows components flagged visible. Input order is kept.
pub fn get_visible_components(
    components: &[ComponentDraft],
    is_edit_mode: bool,
) -> Vec<ComponentDraft> {
    components
        .iter()
        .filter(|component| is_edit_mode || component.is_visible())
        .cloned()
        .collect()
}

/// Flip a component's visibility. The result is always stored as a boolean,
/// whatever representation the backend sent.
pub fn toggle_visibility(component: &mut ComponentDraft) -> bool {
    let visible = !component.is_visible();
    component.is_visible = VisibilityFlag::Bool(visible);
    visible
}

pub fn toggle_theme(component: &mut ComponentDraft) -> Theme {
    component.theme = component.theme.toggled();
    component.theme
}
