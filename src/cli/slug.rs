use crate::services::slug::generate_slug;

pub fn run(names: &[String]) {
    for name in names {
        let slug = generate_slug(name);
        if slug.is_empty() {
            tracing::warn!("'{}' has no characters usable in a slug", name);
        }
        println!("{}", slug);
    }
}
