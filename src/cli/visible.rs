use anyhow::Result;
use std::path::Path;

use crate::models::PageDraft;
use crate::services::visibility::get_visible_components;

pub fn run(file: &Path, edit: bool) -> Result<()> {
    let page: PageDraft = super::read_json(file)?;
    let shown = get_visible_components(&page.components, edit);

    tracing::info!(
        "Showing {} of {} components ({} mode)",
        shown.len(),
        page.components.len(),
        if edit { "edit" } else { "view" }
    );

    println!("{:<6} {:<30} {:<24} {:<6} {:<6}", "ORDER", "NAME", "TYPE", "THEME", "SHOWN");
    println!("{}", "-".repeat(76));
    for component in shown {
        println!(
            "{:<6} {:<30} {:<24} {:<6} {:<6}",
            component.order_index,
            component.component_name,
            component.component_type,
            component.theme,
            component.display_style()
        );
    }
    Ok(())
}
