use crate::core::markup::unescape_html;
use crate::core::{HighlightMarker, IconMap, OrderedCatalog, Renderer, SearchOutcome};
use crate::render::{views_from_catalog, views_from_outcome, CategoryView};

const ANSI_HIGHLIGHT: &str = "\x1b[1;33m";
const ANSI_RESET: &str = "\x1b[0m";

/// Plain terminal output. Entities are decoded back to the original text.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    marker: HighlightMarker,
}

impl TextRenderer {
    pub fn new(marker: HighlightMarker) -> Self {
        Self { marker }
    }

    /// Highlights with brackets instead of ANSI colour, for pipes and logs.
    pub fn plain() -> Self {
        Self::new(HighlightMarker::new("[", "]"))
    }

    fn render(
        &self,
        views: &[CategoryView<'_>],
        icons: &IconMap,
        active: Option<&str>,
        outcome: Option<&SearchOutcome>,
    ) -> String {
        let mut out = String::from("Categories\n");
        for view in views {
            let pointer = if active == Some(view.name) { '>' } else { ' ' };
            out.push_str(&format!("{} {} ({})\n", pointer, view.name, view.total));
        }

        if let Some(summary) = outcome.and_then(SearchOutcome::summary) {
            out.push_str(&format!("\n{}\n", summary));
        }
        if outcome.is_some_and(SearchOutcome::is_empty_result) {
            out.push_str("No services match your search\n");
            return out;
        }

        for view in views.iter().filter(|v| !v.cards.is_empty()) {
            out.push_str(&format!(
                "\n== {} [{}] ({} services)\n",
                view.name,
                icons.icon_for(view.name),
                view.total
            ));
            for card in &view.cards {
                out.push_str(&format!("  * {}\n", unescape_html(&card.title)));
                for line in [&card.short_desc, &card.long_desc] {
                    if !line.is_empty() {
                        out.push_str(&format!("    {}\n", unescape_html(line)));
                    }
                }
                if !card.url.is_empty() {
                    out.push_str(&format!("    {}\n", card.url));
                }
            }
        }
        out
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(HighlightMarker::new(ANSI_HIGHLIGHT, ANSI_RESET))
    }
}

impl Renderer for TextRenderer {
    fn marker(&self) -> HighlightMarker {
        self.marker.clone()
    }

    fn render_catalog(
        &self,
        catalog: &OrderedCatalog,
        icons: &IconMap,
        active_group: Option<&str>,
    ) -> String {
        self.render(&views_from_catalog(catalog), icons, active_group, None)
    }

    fn render_outcome(
        &self,
        outcome: &SearchOutcome,
        icons: &IconMap,
        active_group: Option<&str>,
    ) -> String {
        self.render(&views_from_outcome(outcome), icons, active_group, Some(outcome))
    }
}
