use anyhow::Result;
use std::path::Path;

use crate::models::PageDraft;
use crate::services::payload::{
    build_create_page_request, build_update_page_request, ApiRequest, PayloadOptions,
};
use crate::Config;

pub fn build(config: &Config, file: &Path, update: Option<i64>) -> Result<ApiRequest> {
    let page: PageDraft = super::read_json(file)?;
    let options = PayloadOptions::from_config(config);
    let request = match update {
        Some(page_id) => build_update_page_request(page_id, &page, &options)?,
        None => build_create_page_request(&page, &options)?,
    };
    Ok(request)
}

pub fn run(config_path: &Path, file: &Path, update: Option<i64>) -> Result<()> {
    let config = Config::load_or_default(config_path)?;
    let request = build(&config, file, update)?;

    tracing::info!("{} {}", request.method, request.path);
    println!("{} {}", request.method, request.path);
    println!("{}", serde_json::to_string_pretty(&request.body)?);
    Ok(())
}
