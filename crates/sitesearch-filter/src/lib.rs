//! sitesearch-filter
//!
//! In-memory faceted search over the site's static content: aggregation of
//! the platform/page/article collections, category derivation and the
//! stable type/category/query filter. See `engine::SiteSearch` for the facade.

pub mod aggregate;
pub mod engine;
pub mod facets;
pub mod matching;

pub use aggregate::{aggregate, AggregateCache};
pub use engine::SiteSearch;
pub use facets::{categories, facet_counts, kind_counts};
pub use matching::{filter, haystack, matches, query_terms};
