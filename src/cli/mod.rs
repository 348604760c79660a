pub mod payload;
pub mod search;
pub mod slug;
pub mod validate;
pub mod visible;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pagesmith")]
#[command(version)]
#[command(about = "Slugs, validation and request bodies for the page builder", long_about = None)]
pub struct Cli {
    #[arg(short, long, default_value = "pagesmith.toml", env = "PAGESMITH_CONFIG")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the slug derived from each name
    Slug {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Validate a page draft stored as JSON
    Validate { file: PathBuf },
    /// Print the backend request that saves a page draft
    Payload {
        file: PathBuf,
        /// Build an update for this page id instead of a create
        #[arg(long)]
        update: Option<i64>,
    },
    /// List the components a page draft would render
    Visible {
        file: PathBuf,
        /// Include hidden components, as the editor does
        #[arg(long)]
        edit: bool,
    },
    /// Filter a JSON list of page summaries
    Search { file: PathBuf, query: String },
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}
