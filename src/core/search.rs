use crate::core::markup::escape_html;
use crate::core::{
    HighlightMarker, MatchMode, OrderedCatalog, SearchOutcome, SearchResult, ServiceRecord,
};
use std::ops::Range;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub mode: MatchMode,
    pub marker: HighlightMarker,
}

/// Per-character lowercase. Query and fields go through the same mapping.
fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Lowercased, whitespace-delimited query tokens. Empty for a blank query.
pub fn tokenize(query: &str) -> Vec<String> {
    fold_case(query)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Lowercased copy of a field; `spans[i]` is the byte range of the original
/// character that produced folded byte `i`.
struct FoldedField {
    folded: String,
    spans: Vec<Range<usize>>,
}

impl FoldedField {
    fn new(text: &str) -> Self {
        let mut folded = String::with_capacity(text.len());
        let mut spans = Vec::with_capacity(text.len());
        for (start, ch) in text.char_indices() {
            let original = start..start + ch.len_utf8();
            for lower in ch.to_lowercase() {
                folded.push(lower);
                spans.extend(std::iter::repeat(original.clone()).take(lower.len_utf8()));
            }
        }
        Self { folded, spans }
    }

    /// Original byte ranges of every non-overlapping occurrence of `token`.
    fn occurrences<'a>(&'a self, token: &'a str) -> impl Iterator<Item = Range<usize>> + 'a {
        self.folded
            .match_indices(token)
            .map(move |(pos, found)| self.spans[pos].start..self.spans[pos + found.len() - 1].end)
    }
}

/// Escapes `text` and wraps every occurrence of any token in the marker.
/// Ranges are located on the raw text so tokens never hit entity or marker text.
/// Returns the marked-up field and, per token, whether it occurred.
fn highlight_field(text: &str, tokens: &[String], marker: &HighlightMarker) -> (String, Vec<bool>) {
    let field = FoldedField::new(text);
    let mut hits = vec![false; tokens.len()];
    let mut ranges: Vec<Range<usize>> = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        for range in field.occurrences(token) {
            hits[i] = true;
            ranges.push(range);
        }
    }

    if ranges.is_empty() {
        return (escape_html(text), hits);
    }

    ranges.sort_by_key(|r| (r.start, r.end));
    let mut merged: Vec<Range<usize>> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if range.start <= last.end => last.end = last.end.max(range.end),
            _ => merged.push(range),
        }
    }

    let mut out = String::with_capacity(text.len() + merged.len() * 32);
    let mut cursor = 0;
    for range in merged {
        out.push_str(&escape_html(&text[cursor..range.start]));
        out.push_str(&marker.open);
        out.push_str(&escape_html(&text[range.clone()]));
        out.push_str(&marker.close);
        cursor = range.end;
    }
    out.push_str(&escape_html(&text[cursor..]));

    (out, hits)
}

fn unfiltered_result(record: &ServiceRecord, category: &str) -> SearchResult {
    SearchResult {
        record: record.clone(),
        category: category.to_string(),
        matched: true,
        highlighted_title: escape_html(&record.title),
        highlighted_short_desc: escape_html(&record.short_desc),
        highlighted_long_desc: escape_html(&record.long_desc),
    }
}

fn match_record(
    record: &ServiceRecord,
    category: &str,
    tokens: &[String],
    options: &SearchOptions,
) -> SearchResult {
    let mut token_hits = vec![false; tokens.len()];
    let [title, short_desc, long_desc] = record.text_fields().map(|field| {
        let (marked, hits) = highlight_field(field, tokens, &options.marker);
        for (seen, hit) in token_hits.iter_mut().zip(hits) {
            *seen |= hit;
        }
        marked
    });

    let matched = match options.mode {
        MatchMode::Any => token_hits.iter().any(|&hit| hit),
        MatchMode::All => !token_hits.is_empty() && token_hits.iter().all(|&hit| hit),
    };

    if !matched {
        return SearchResult {
            matched: false,
            ..unfiltered_result(record, category)
        };
    }

    SearchResult {
        record: record.clone(),
        category: category.to_string(),
        matched,
        highlighted_title: title,
        highlighted_short_desc: short_desc,
        highlighted_long_desc: long_desc,
    }
}

/// Filters and highlights the catalog for `query`. A blank query is "show all":
/// every record matches and nothing is highlighted.
pub fn search(catalog: &OrderedCatalog, query: &str, options: &SearchOptions) -> SearchOutcome {
    let tokens = tokenize(query);

    if tokens.is_empty() {
        let results: Vec<SearchResult> = catalog
            .categories
            .iter()
            .flat_map(|c| c.services.iter().map(|s| unfiltered_result(s, &c.name)))
            .collect();
        return SearchOutcome {
            query: query.to_string(),
            tokens,
            filtered: false,
            match_count: results.len(),
            category_match_count: catalog.categories.len(),
            results,
        };
    }

    let mut results = Vec::with_capacity(catalog.record_count());
    let mut match_count = 0;
    let mut category_match_count = 0;

    for category in &catalog.categories {
        let mut category_has_match = false;
        for record in &category.services {
            let result = match_record(record, &category.name, &tokens, options);
            if result.matched {
                match_count += 1;
                category_has_match = true;
            }
            results.push(result);
        }
        if category_has_match {
            category_match_count += 1;
        }
    }

    tracing::debug!(
        "Query {:?} ({:?} mode): {} services found in {} categories",
        tokens,
        options.mode,
        match_count,
        category_match_count
    );

    SearchOutcome {
        query: query.to_string(),
        tokens,
        filtered: true,
        results,
        match_count,
        category_match_count,
    }
}
