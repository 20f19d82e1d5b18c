use std::hash::{Hash, Hasher};

use twox_hash::XxHash64;

use sitesearch_core::types::{ContentItem, ContentSources};

/// Flatten the three collections into one corpus: platforms, then pages,
/// then articles, each in its own order. Nothing is dropped or reordered.
pub fn aggregate(sources: &ContentSources) -> Vec<ContentItem> {
    let mut corpus = Vec::with_capacity(sources.len());
    corpus.extend(sources.platforms.iter().cloned().map(ContentItem::Platform));
    corpus.extend(sources.pages.iter().cloned().map(ContentItem::Page));
    corpus.extend(sources.articles.iter().cloned().map(ContentItem::Article));
    corpus
}

/// Content fingerprint of the three collections.
pub fn fingerprint(sources: &ContentSources) -> u64 {
    let mut hasher = XxHash64::with_seed(0);
    sources.hash(&mut hasher);
    hasher.finish()
}

/// Remembers the last aggregation and reuses it while the collections are unchanged.
#[derive(Debug, Default)]
pub struct AggregateCache {
    key: Option<u64>,
    corpus: Vec<ContentItem>,
    builds: usize,
}

impl AggregateCache {
    pub fn new() -> Self { Self::default() }

    pub fn get_or_aggregate(&mut self, sources: &ContentSources) -> &[ContentItem] {
        let key = fingerprint(sources);
        if self.key != Some(key) {
            tracing::debug!(key, items = sources.len(), "aggregating corpus");
            self.corpus = aggregate(sources);
            self.key = Some(key);
            self.builds += 1;
        }
        &self.corpus
    }

    /// How many times the corpus was actually rebuilt.
    pub fn builds(&self) -> usize { self.builds }

    pub fn clear(&mut self) {
        self.key = None;
        self.corpus.clear();
    }
}
