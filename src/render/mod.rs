//! Presentation surfaces. Renderers only consume the catalog and search
//! outcomes; all filtering happens in `core`.

pub mod html;
pub mod text;

use crate::core::markup::escape_html;
use crate::core::{OrderedCatalog, SearchOutcome};

pub use html::HtmlRenderer;
pub use text::TextRenderer;

/// Card content as escaped markup (possibly highlighted), plus the raw URL.
pub(crate) struct CardView<'a> {
    pub title: String,
    pub short_desc: String,
    pub long_desc: String,
    pub url: &'a str,
}

pub(crate) struct CategoryView<'a> {
    pub name: &'a str,
    /// Size of the category in the full catalog, independent of any filter.
    pub total: usize,
    /// Visible cards; empty when a query hides the whole category.
    pub cards: Vec<CardView<'a>>,
}

pub(crate) fn views_from_catalog(catalog: &OrderedCatalog) -> Vec<CategoryView<'_>> {
    catalog
        .categories
        .iter()
        .map(|category| CategoryView {
            name: &category.name,
            total: category.services.len(),
            cards: category
                .services
                .iter()
                .map(|service| CardView {
                    title: escape_html(&service.title),
                    short_desc: escape_html(&service.short_desc),
                    long_desc: escape_html(&service.long_desc),
                    url: &service.url,
                })
                .collect(),
        })
        .collect()
}

pub(crate) fn views_from_outcome(outcome: &SearchOutcome) -> Vec<CategoryView<'_>> {
    let mut views: Vec<CategoryView<'_>> = Vec::new();
    for result in &outcome.results {
        let start_new = views.last().map_or(true, |v| v.name != result.category);
        if start_new {
            views.push(CategoryView {
                name: &result.category,
                total: 0,
                cards: Vec::new(),
            });
        }
        let Some(view) = views.last_mut() else { continue };
        view.total += 1;
        if result.matched {
            view.cards.push(CardView {
                title: result.highlighted_title.clone(),
                short_desc: result.highlighted_short_desc.clone(),
                long_desc: result.highlighted_long_desc.clone(),
                url: &result.record.url,
            });
        }
    }
    views
}
