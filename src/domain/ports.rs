use crate::domain::model::{HighlightMarker, IconMap, MatchMode, OrderedCatalog, SearchOutcome};
use crate::utils::error::LoadError;
use async_trait::async_trait;
use std::time::Duration;

/// Where the catalog payload comes from. Fetched once per process.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Human-readable location used in logs and error messages.
    fn describe(&self) -> String;

    async fn fetch(&self) -> std::result::Result<Vec<u8>, LoadError>;
}

pub trait ConfigProvider: Send + Sync {
    fn source(&self) -> &str;
    fn priority_order(&self) -> &[String];
    fn match_mode(&self) -> MatchMode;
    fn icons(&self) -> IconMap;
    fn timeout(&self) -> Duration;
    /// Overrides the renderer's own highlight markup when set.
    fn highlight_marker(&self) -> Option<HighlightMarker>;
}

/// Presentation surface for the catalog and search results.
pub trait Renderer {
    /// Highlight markup this surface expects inside search results.
    fn marker(&self) -> HighlightMarker;

    fn render_catalog(
        &self,
        catalog: &OrderedCatalog,
        icons: &IconMap,
        active_group: Option<&str>,
    ) -> String;

    fn render_outcome(
        &self,
        outcome: &SearchOutcome,
        icons: &IconMap,
        active_group: Option<&str>,
    ) -> String;
}
