#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

//! Core types, configuration and content loading for the site search engine.

pub mod config;
pub mod content;
pub mod error;
pub mod traits;
pub mod types;
pub mod validate;

pub use error::{ContentIssue, Error, Result};
pub use types::{Article, ContentItem, ContentKind, ContentSources, Entry, FilterState, TypeFacet};
