use tracing::info;

use sitesearch_core::traits::{ContentSource, SearchEngine};
use sitesearch_core::types::{ContentItem, ContentKind, ContentSources, FilterState};

use crate::aggregate::aggregate;
use crate::facets::{categories, facet_counts, kind_counts};
use crate::matching::filter;

/// A loaded corpus plus its category list, ready to answer searches.
pub struct SiteSearch {
    corpus: Vec<ContentItem>,
    categories: Vec<String>,
}

impl SiteSearch {
    pub fn new(sources: &ContentSources) -> Self {
        Self::from_corpus(aggregate(sources))
    }

    pub fn from_corpus(corpus: Vec<ContentItem>) -> Self {
        let categories = categories(&corpus);
        info!(items = corpus.len(), categories = categories.len(), "search corpus ready");
        Self { corpus, categories }
    }

    pub fn from_source(source: &dyn ContentSource) -> sitesearch_core::Result<Self> {
        Ok(Self::new(&source.load()?))
    }

    pub fn len(&self) -> usize { self.corpus.len() }

    pub fn is_empty(&self) -> bool { self.corpus.is_empty() }

    pub fn facet_counts(&self, state: &FilterState) -> Vec<(String, usize)> {
        facet_counts(&self.corpus, state)
    }

    pub fn kind_counts(&self, state: &FilterState) -> Vec<(ContentKind, usize)> {
        kind_counts(&self.corpus, state)
    }
}

impl SearchEngine for SiteSearch {
    fn corpus(&self) -> &[ContentItem] { &self.corpus }

    fn categories(&self) -> &[String] { &self.categories }

    fn search(&self, state: &FilterState) -> Vec<&ContentItem> {
        filter(&self.corpus, state)
    }
}
