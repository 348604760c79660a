use crate::models::PageSummary;

/// Case-insensitive substring match over title, slug and category name.
pub fn search_pages<'a>(pages: &'a [PageSummary], query: &str) -> Vec<&'a PageSummary> {
    let query = query.to_lowercase();
    if query.is_empty() {
        return pages.iter().collect();
    }

    let matches = |field: &Option<String>| {
        field
            .as_deref()
            .is_some_and(|value| value.to_lowercase().contains(&query))
    };

    pages
        .iter()
        .filter(|page| matches(&page.title) || matches(&page.slug) || matches(&page.category_name))
        .collect()
}
