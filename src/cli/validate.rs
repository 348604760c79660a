use anyhow::Result;
use std::path::Path;

use crate::models::PageDraft;
use crate::services::validation::{validate_components, validate_page_data_with};
use crate::Config;

/// Page errors followed by component errors for the draft in `file`.
pub fn check(config: &Config, file: &Path) -> Result<Vec<String>> {
    let page: PageDraft = super::read_json(file)?;
    let mut errors = validate_page_data_with(&page, &config.validation);
    errors.extend(validate_components(&page.components));
    Ok(errors)
}

pub fn run(config_path: &Path, file: &Path) -> Result<()> {
    let config = Config::load_or_default(config_path)?;
    let errors = check(&config, file)?;

    if errors.is_empty() {
        println!("{} is valid", file.display());
        return Ok(());
    }

    for error in &errors {
        println!("- {}", error);
    }
    anyhow::bail!(
        "{} has {} validation error(s)",
        file.display(),
        errors.len()
    );
}
