pub mod browser;
pub mod grouping;
pub mod loader;
pub mod markup;
pub mod search;

pub use crate::domain::model::{
    Category, HighlightMarker, IconMap, MatchMode, OrderedCatalog, SearchOutcome, SearchResult,
    ServiceRecord,
};
pub use crate::domain::ports::{CatalogSource, ConfigProvider, Renderer};
pub use crate::utils::error::Result;
