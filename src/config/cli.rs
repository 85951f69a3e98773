use crate::config::defaults::DEFAULT_SOURCE;
use crate::core::MatchMode;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_source_location, Validate};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "service-catalog")]
#[command(about = "Browse and search a catalog of cloud services")]
pub struct CliConfig {
    /// Catalog location: a JSON file path or an http(s) URL
    #[arg(long)]
    pub source: Option<String>,

    /// TOML configuration file; flags given here take precedence
    #[arg(short, long)]
    pub config: Option<String>,

    /// Search query to apply before rendering
    #[arg(short, long)]
    pub query: Option<String>,

    /// Category to mark as active
    #[arg(short, long)]
    pub group: Option<String>,

    /// How multiple search words combine
    #[arg(long, value_enum)]
    pub match_mode: Option<MatchMode>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the rendering to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Read queries from stdin until `:quit`
    #[arg(short, long)]
    pub interactive: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Catalog location when no config file sets one.
    pub fn source(&self) -> &str {
        self.source.as_deref().unwrap_or(DEFAULT_SOURCE)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_source_location("source", self.source())?;
        if let Some(output) = &self.output {
            validate_path("output", output)?;
        }
        Ok(())
    }
}

/// Writes rendered output beneath a base directory.
#[derive(Debug, Clone)]
pub struct LocalOutput {
    base_path: String,
}

impl LocalOutput {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    pub fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&full_path, data)?;
        tracing::debug!("Wrote {} bytes to {}", data.len(), full_path.display());
        Ok(())
    }
}
