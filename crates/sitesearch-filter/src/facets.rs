use std::collections::{BTreeMap, BTreeSet};

use sitesearch_core::types::{ContentItem, ContentKind, FilterState};

use crate::matching::{matches_terms, passes_category, passes_type, query_terms};

/// Distinct categories in ascending ordinal order.
///
/// Callers pass the full corpus, not a filtered result, so the offered
/// options stay put while the user narrows the search.
pub fn categories(corpus: &[ContentItem]) -> Vec<String> {
    corpus
        .iter()
        .map(ContentItem::category)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Hits per category for the current query and type facet, ignoring the
/// category facet itself. Every category of `corpus` is listed, zero or not.
pub fn facet_counts(corpus: &[ContentItem], state: &FilterState) -> Vec<(String, usize)> {
    let terms = query_terms(&state.query);
    let mut counts: BTreeMap<&str, usize> = corpus.iter().map(|item| (item.category(), 0)).collect();
    for item in corpus.iter().filter(|item| passes_type(item, state) && matches_terms(item, &terms)) {
        *counts.entry(item.category()).or_default() += 1;
    }
    counts.into_iter().map(|(category, n)| (category.to_string(), n)).collect()
}

/// Hits per content kind for the current query and category facet, ignoring
/// the type facet itself.
pub fn kind_counts(corpus: &[ContentItem], state: &FilterState) -> Vec<(ContentKind, usize)> {
    let terms = query_terms(&state.query);
    let mut counts: BTreeMap<ContentKind, usize> = ContentKind::ALL.iter().map(|k| (*k, 0)).collect();
    for item in corpus.iter().filter(|item| passes_category(item, state) && matches_terms(item, &terms)) {
        *counts.entry(item.kind()).or_default() += 1;
    }
    counts.into_iter().collect()
}
