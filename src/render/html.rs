use crate::core::markup::{escape_html, sanitize_id};
use crate::core::{HighlightMarker, IconMap, OrderedCatalog, Renderer, SearchOutcome};
use crate::render::{views_from_catalog, views_from_outcome, CategoryView};

/// Renders a static HTML page: sidebar navigation plus one card grid per category.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    marker: HighlightMarker,
}

impl HtmlRenderer {
    pub fn new(marker: HighlightMarker) -> Self {
        Self { marker }
    }

    fn sidebar(&self, views: &[CategoryView<'_>], icons: &IconMap, active: Option<&str>) -> String {
        let mut nav = String::from("<nav class=\"sidebar-nav\" id=\"sidebarNav\">\n");
        for view in views {
            let class = if active == Some(view.name) {
                "nav-item active"
            } else {
                "nav-item"
            };
            let name = escape_html(view.name);
            nav.push_str(&format!(
                "  <div class=\"{}\" data-group=\"{}\" role=\"button\" tabindex=\"0\">\
<i class=\"{}\"></i><span class=\"nav-item-text\">{}</span>\
<span class=\"nav-item-badge\">{}</span></div>\n",
                class,
                name,
                escape_html(icons.icon_for(view.name)),
                name,
                view.total
            ));
        }
        nav.push_str("</nav>\n");
        nav
    }

    fn sections(&self, views: &[CategoryView<'_>], icons: &IconMap) -> String {
        let mut out = String::new();
        for view in views.iter().filter(|v| !v.cards.is_empty()) {
            out.push_str(&format!(
                "<div class=\"service-group\" id=\"group-{}\">\n\
  <div class=\"group-header\"><div class=\"group-title\"><i class=\"{}\"></i><h2>{}</h2></div>\
<div class=\"group-meta\"><span class=\"service-count\">{} services</span></div></div>\n\
  <div class=\"services-grid\">\n",
                sanitize_id(view.name),
                escape_html(icons.icon_for(view.name)),
                escape_html(view.name),
                view.total
            ));
            for card in &view.cards {
                out.push_str(&format!(
                    "    <a class=\"service-card\" href=\"{}\" target=\"_blank\" rel=\"noopener\">\
<div class=\"service-title\">{}</div>\
<div class=\"service-short-desc\">{}</div>\
<div class=\"service-long-desc\">{}</div></a>\n",
                    escape_html(card.url),
                    card.title,
                    card.short_desc,
                    card.long_desc
                ));
            }
            out.push_str("  </div>\n</div>\n");
        }
        out
    }

    fn page(
        &self,
        views: &[CategoryView<'_>],
        icons: &IconMap,
        active: Option<&str>,
        outcome: Option<&SearchOutcome>,
    ) -> String {
        let summary = outcome.and_then(SearchOutcome::summary).unwrap_or_default();
        let no_results = outcome.is_some_and(SearchOutcome::is_empty_result);

        let mut page = String::from("<div class=\"catalog\">\n");
        page.push_str(&self.sidebar(views, icons, active));
        page.push_str(&format!(
            "<div class=\"search-results\" id=\"searchResults\">{}</div>\n",
            escape_html(&summary)
        ));
        if no_results {
            page.push_str("<div class=\"no-results\" id=\"noResults\">No services match your search</div>\n");
        } else {
            page.push_str("<main class=\"services-container\" id=\"servicesContainer\">\n");
            page.push_str(&self.sections(views, icons));
            page.push_str("</main>\n");
        }
        page.push_str("</div>\n");
        page
    }
}

impl Renderer for HtmlRenderer {
    fn marker(&self) -> HighlightMarker {
        self.marker.clone()
    }

    fn render_catalog(
        &self,
        catalog: &OrderedCatalog,
        icons: &IconMap,
        active_group: Option<&str>,
    ) -> String {
        self.page(&views_from_catalog(catalog), icons, active_group, None)
    }

    fn render_outcome(
        &self,
        outcome: &SearchOutcome,
        icons: &IconMap,
        active_group: Option<&str>,
    ) -> String {
        self.page(&views_from_outcome(outcome), icons, active_group, Some(outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grouping::group_and_order;
    use crate::core::search::{search, SearchOptions};
    use crate::core::ServiceRecord;
    use std::collections::HashMap;

    fn catalog() -> OrderedCatalog {
        let records = vec![
            ServiceRecord {
                title: "Object Storage".to_string(),
                short_desc: "Object Storage service".to_string(),
                long_desc: "Buckets <for> everyone".to_string(),
                url: "https://example.com/os?a=1&b=2".to_string(),
                group: Some("Storage".to_string()),
            },
            ServiceRecord {
                title: "Model Studio".to_string(),
                short_desc: "Train models".to_string(),
                long_desc: String::new(),
                url: "https://example.com/ml".to_string(),
                group: Some("AI/ML".to_string()),
            },
        ];
        group_and_order(&records, &["Storage".to_string()])
    }

    fn icons() -> IconMap {
        let mut map = HashMap::new();
        map.insert("Storage".to_string(), "fas fa-hdd".to_string());
        IconMap::new(map, "fas fa-folder")
    }

    #[test]
    fn test_catalog_page_lists_every_category() {
        let html = HtmlRenderer::default().render_catalog(&catalog(), &icons(), None);

        assert!(html.contains("id=\"group-storage\""));
        assert!(html.contains("id=\"group-ai-ml\""));
        assert!(html.contains("<i class=\"fas fa-hdd\"></i>"));
        assert!(html.contains("<i class=\"fas fa-folder\"></i>"));
        assert!(html.contains("Buckets &lt;for&gt; everyone"));
        assert!(html.contains("href=\"https://example.com/os?a=1&amp;b=2\""));
        assert!(html.find("group-storage").unwrap() < html.find("group-ai-ml").unwrap());
    }

    #[test]
    fn test_unfiltered_outcome_matches_initial_render() {
        let renderer = HtmlRenderer::default();
        let catalog = catalog();
        let outcome = search(&catalog, "", &SearchOptions::default());

        assert_eq!(
            renderer.render_outcome(&outcome, &icons(), None),
            renderer.render_catalog(&catalog, &icons(), None)
        );
    }

    #[test]
    fn test_filtered_page_hides_unmatched_categories() {
        let renderer = HtmlRenderer::default();
        let outcome = search(&catalog(), "storage", &SearchOptions::default());
        let html = renderer.render_outcome(&outcome, &icons(), Some("Storage"));

        assert!(html.contains("1 services found in 1 categories"));
        assert!(html.contains(r#"Object <span class="highlight">Storage</span> service"#));
        assert!(!html.contains("id=\"group-ai-ml\""));
        assert!(html.contains("class=\"nav-item active\" data-group=\"Storage\""));
        // Sidebar keeps every category.
        assert!(html.contains("data-group=\"AI/ML\""));
    }

    #[test]
    fn test_no_results_block() {
        let outcome = search(&catalog(), "kubernetes", &SearchOptions::default());
        let html = HtmlRenderer::default().render_outcome(&outcome, &icons(), None);

        assert!(html.contains("id=\"noResults\""));
        assert!(html.contains("0 services found in 0 categories"));
        assert!(!html.contains("servicesContainer"));
    }
}
