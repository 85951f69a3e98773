pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{cli::LocalOutput, CliConfig, OutputFormat};

pub use crate::adapters::{source_from_location, FileSource, HttpSource};
pub use crate::config::TomlConfig;
pub use crate::core::browser::Browser;
pub use crate::core::grouping::group_and_order;
pub use crate::core::loader::load;
pub use crate::core::search::{search, SearchOptions};
pub use crate::render::{HtmlRenderer, TextRenderer};
pub use crate::utils::error::{CatalogError, LoadError, Result};
