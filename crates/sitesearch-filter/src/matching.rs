//! Filter predicate: type facet, then category facet, then text query.
//!
//! The text query is split on whitespace into lowercase terms. An item
//! matches when every term is a substring of its haystack
//! (`title description category [tags...]`, lowercased). Matching is plain
//! substring search, so "plat" matches "platform".

use sitesearch_core::types::{ContentItem, FilterState};

/// Lowercase query terms; empty when the query is blank.
pub fn query_terms(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_lowercase).collect()
}

/// The lowercased text a query is matched against. Tags are appended for
/// articles only.
pub fn haystack(item: &ContentItem) -> String {
    let entry = item.entry();
    let mut text = format!("{} {} {}", entry.title, entry.description, entry.category);
    if let Some(tags) = item.tags() {
        text.push(' ');
        text.push_str(&tags.join(" "));
    }
    text.to_lowercase()
}

pub fn matches_terms(item: &ContentItem, terms: &[String]) -> bool {
    if terms.is_empty() { return true; }
    let hay = haystack(item);
    terms.iter().all(|t| hay.contains(t.as_str()))
}

pub(crate) fn passes_type(item: &ContentItem, state: &FilterState) -> bool {
    state.type_facet.admits(item.kind())
}

pub(crate) fn passes_category(item: &ContentItem, state: &FilterState) -> bool {
    state.category.as_deref().map_or(true, |c| item.category() == c)
}

/// Whether a single item satisfies every active criterion of `state`.
pub fn matches(item: &ContentItem, state: &FilterState) -> bool {
    passes_type(item, state) && passes_category(item, state) && matches_terms(item, &query_terms(&state.query))
}

/// Stable filter: the matching items, in corpus order.
pub fn filter<'a>(corpus: &'a [ContentItem], state: &FilterState) -> Vec<&'a ContentItem> {
    let terms = query_terms(&state.query);
    let results: Vec<&ContentItem> = corpus
        .iter()
        .filter(|item| passes_type(item, state))
        .filter(|item| passes_category(item, state))
        .filter(|item| matches_terms(item, &terms))
        .collect();
    tracing::debug!(
        query = %state.query,
        type_facet = %state.type_facet,
        category = ?state.category,
        corpus = corpus.len(),
        hits = results.len(),
        "filtered corpus"
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitesearch_core::types::{Article, Entry};

    #[test]
    fn terms_drop_repeated_whitespace() {
        assert_eq!(query_terms("  Cloud \t  Infrastructure\n"), vec!["cloud", "infrastructure"]);
        assert!(query_terms("   ").is_empty());
        assert!(query_terms("").is_empty());
    }

    #[test]
    fn haystack_omits_tag_segment_for_non_articles() {
        let entry = Entry::new("Cognix", "AI-powered software cognition", "/p/cognix", "AI Platform");
        let platform = ContentItem::Platform(entry.clone());
        assert_eq!(haystack(&platform), "cognix ai-powered software cognition ai platform");

        let article = ContentItem::Article(Article::new(entry, vec!["MLOps".into(), "Infra".into()], "x"));
        assert_eq!(haystack(&article), "cognix ai-powered software cognition ai platform mlops infra");
    }

    #[test]
    fn substring_not_word_match() {
        let item = ContentItem::Page(Entry::new("Platforms", "Overview", "/platforms", "Company"));
        assert!(matches_terms(&item, &query_terms("plat")));
        assert!(matches_terms(&item, &query_terms("FORMS view")));
        assert!(!matches_terms(&item, &query_terms("plat missing")));
    }
}
