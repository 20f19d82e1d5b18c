//! Domain types shared by the content store and the search engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Discriminant of a [`ContentItem`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContentKind {
    Platform,
    Page,
    Article,
}

impl ContentKind {
    pub const ALL: [ContentKind; 3] = [ContentKind::Platform, ContentKind::Page, ContentKind::Article];

    pub fn as_str(self) -> &'static str {
        match self {
            ContentKind::Platform => "Platform",
            ContentKind::Page => "Page",
            ContentKind::Article => "Article",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields every searchable item carries.
///
/// - `title`: display heading
/// - `description`: free text used for matching and display
/// - `path`: navigable route, unique across the merged corpus
/// - `category`: facet value (e.g. "AI Platform", "Company")
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Entry {
    pub title: String,
    pub description: String,
    pub path: String,
    pub category: String,
}

impl Entry {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        path: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            path: path.into(),
            category: category.into(),
        }
    }
}

/// A blog post. Only articles carry tags and a display date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Article {
    #[serde(flatten)]
    pub entry: Entry,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub date: String,
}

impl Article {
    pub fn new(entry: Entry, tags: Vec<String>, date: impl Into<String>) -> Self {
        Self { entry, tags, date: date.into() }
    }

    /// Leading tags shown next to a result; the rest stay searchable.
    pub fn display_tags(&self, limit: usize) -> &[String] {
        &self.tags[..self.tags.len().min(limit)]
    }
}

/// One searchable item of the merged corpus.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind")]
pub enum ContentItem {
    Platform(Entry),
    Page(Entry),
    Article(Article),
}

impl ContentItem {
    pub fn kind(&self) -> ContentKind {
        match self {
            ContentItem::Platform(_) => ContentKind::Platform,
            ContentItem::Page(_) => ContentKind::Page,
            ContentItem::Article(_) => ContentKind::Article,
        }
    }

    pub fn entry(&self) -> &Entry {
        match self {
            ContentItem::Platform(e) | ContentItem::Page(e) => e,
            ContentItem::Article(a) => &a.entry,
        }
    }

    pub fn title(&self) -> &str { &self.entry().title }
    pub fn description(&self) -> &str { &self.entry().description }
    pub fn path(&self) -> &str { &self.entry().path }
    pub fn category(&self) -> &str { &self.entry().category }

    /// `None` for anything that is not an article.
    pub fn tags(&self) -> Option<&[String]> {
        match self {
            ContentItem::Article(a) => Some(&a.tags),
            _ => None,
        }
    }
}

/// The three separately authored collections that make up a corpus.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ContentSources {
    #[serde(default)]
    pub platforms: Vec<Entry>,
    #[serde(default)]
    pub pages: Vec<Entry>,
    #[serde(default)]
    pub articles: Vec<Article>,
}

impl ContentSources {
    pub fn len(&self) -> usize {
        self.platforms.len() + self.pages.len() + self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Content-type facet. `All` places no constraint.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TypeFacet {
    #[default]
    All,
    Kind(ContentKind),
}

impl TypeFacet {
    pub fn admits(self, kind: ContentKind) -> bool {
        match self {
            TypeFacet::All => true,
            TypeFacet::Kind(k) => k == kind,
        }
    }
}

impl From<ContentKind> for TypeFacet {
    fn from(kind: ContentKind) -> Self {
        TypeFacet::Kind(kind)
    }
}

impl FromStr for TypeFacet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(TypeFacet::All),
            "platform" => Ok(TypeFacet::Kind(ContentKind::Platform)),
            "page" => Ok(TypeFacet::Kind(ContentKind::Page)),
            "article" => Ok(TypeFacet::Kind(ContentKind::Article)),
            _ => Err(Error::InvalidFacet(s.to_string())),
        }
    }
}

impl fmt::Display for TypeFacet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeFacet::All => f.write_str("All"),
            TypeFacet::Kind(k) => k.fmt(f),
        }
    }
}

/// Active search criteria, owned by whoever drives the search view.
///
/// The three criteria are independent: changing one never resets another.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub type_facet: TypeFacet,
    pub category: Option<String>,
}

impl FilterState {
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    #[must_use]
    pub fn with_type(mut self, facet: impl Into<TypeFacet>) -> Self {
        self.type_facet = facet.into();
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_unconstrained(&self) -> bool {
        self.query.trim().is_empty() && self.type_facet == TypeFacet::All && self.category.is_none()
    }
}
