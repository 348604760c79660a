use anyhow::Result;
use std::path::Path;

use crate::models::PageSummary;
use crate::services::search::search_pages;

pub fn run(file: &Path, query: &str) -> Result<()> {
    let pages: Vec<PageSummary> = super::read_json(file)?;
    let found = search_pages(&pages, query);

    if found.is_empty() {
        tracing::warn!("No pages match '{}'", query);
        return Ok(());
    }

    println!("{:<8} {:<40} {:<30} {:<20}", "ID", "TITLE", "SLUG", "CATEGORY");
    println!("{}", "-".repeat(100));
    for page in found {
        println!(
            "{:<8} {:<40} {:<30} {:<20}",
            page.id,
            page.title.as_deref().unwrap_or("-"),
            page.slug.as_deref().unwrap_or("-"),
            page.category_name.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}
