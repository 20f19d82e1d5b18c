use crate::types::{ContentItem, ContentSources, FilterState};

/// Supplies the three raw collections a corpus is aggregated from.
pub trait ContentSource: Send + Sync {
    fn load(&self) -> crate::Result<ContentSources>;
}

pub trait SearchEngine: Send + Sync {
    /// Every item of the corpus, in aggregation order.
    fn corpus(&self) -> &[ContentItem];
    /// Distinct categories of the full corpus, sorted.
    fn categories(&self) -> &[String];
    fn search(&self, state: &FilterState) -> Vec<&ContentItem>;
}
