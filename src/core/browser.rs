use crate::core::grouping::group_and_order;
use crate::core::search::{search, SearchOptions};
use crate::core::{Category, OrderedCatalog, SearchOutcome, ServiceRecord};

/// Application state for one browsing session over an immutable catalog.
/// The catalog never changes after construction; queries recompute from it.
#[derive(Debug, Clone)]
pub struct Browser {
    catalog: OrderedCatalog,
    options: SearchOptions,
    current_query: String,
    active_group: Option<String>,
}

impl Browser {
    pub fn new(catalog: OrderedCatalog, options: SearchOptions) -> Self {
        Self {
            catalog,
            options,
            current_query: String::new(),
            active_group: None,
        }
    }

    pub fn from_records(
        records: &[ServiceRecord],
        priority_order: &[String],
        options: SearchOptions,
    ) -> Self {
        Self::new(group_and_order(records, priority_order), options)
    }

    pub fn catalog(&self) -> &OrderedCatalog {
        &self.catalog
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn current_query(&self) -> &str {
        &self.current_query
    }

    pub fn active_group(&self) -> Option<&str> {
        self.active_group.as_deref()
    }

    /// The unfiltered view shown before any query.
    pub fn initial_view(&self) -> SearchOutcome {
        search(&self.catalog, "", &self.options)
    }

    pub fn search(&mut self, query: &str) -> SearchOutcome {
        self.current_query = query.trim().to_lowercase();
        search(&self.catalog, query, &self.options)
    }

    pub fn clear(&mut self) -> SearchOutcome {
        self.current_query.clear();
        self.initial_view()
    }

    /// Marks `name` as the active category. Unknown names leave the state as-is.
    pub fn navigate(&mut self, name: &str) -> Option<&Category> {
        let Some(category) = self.catalog.category(name) else {
            tracing::warn!("No category named '{}'", name);
            return None;
        };
        self.active_group = Some(category.name.clone());
        Some(category)
    }
}
