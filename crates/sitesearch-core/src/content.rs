//! File-backed content collections.
//!
//! A content directory looks like:
//!
//! ```text
//! content/
//!   platforms.toml      # [[items]] title/description/path/category
//!   pages.toml
//!   articles.toml       # or articles/<slug>.toml, one article per file
//! ```
//!
//! Every collection may also be JSON (`platforms.json`, ...). Collection files
//! hold an `items` array; per-article files hold a single article.

use figment::providers::{Format, Json, Toml};
use figment::Figment;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::traits::ContentSource;
use crate::types::{Article, ContentSources, Entry};

#[derive(Deserialize)]
struct Collection<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

pub struct ContentStore {
    dir: PathBuf,
}

impl ContentStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self { Self { dir: dir.into() } }

    pub fn dir(&self) -> &Path { &self.dir }

    pub fn load_platforms(&self) -> Result<Vec<Entry>> { self.load_collection("platforms") }

    pub fn load_pages(&self) -> Result<Vec<Entry>> { self.load_collection("pages") }

    /// Articles come from `articles.{toml,json}` when present, else from an
    /// `articles/` directory walked in path order.
    pub fn load_articles(&self) -> Result<Vec<Article>> {
        if self.collection_file("articles").is_some() {
            return self.load_collection("articles");
        }
        let articles_dir = self.dir.join("articles");
        if !articles_dir.is_dir() {
            warn!(dir = %self.dir.display(), "no articles collection found");
            return Ok(Vec::new());
        }
        let files = list_document_files(&articles_dir)?;
        let mut articles = Vec::with_capacity(files.len());
        for file in &files {
            debug!(file = %file.display(), "loading article");
            articles.push(extract_file::<Article>(file)?);
        }
        Ok(articles)
    }

    fn load_collection<T: DeserializeOwned>(&self, name: &str) -> Result<Vec<T>> {
        match self.collection_file(name) {
            Some(path) => {
                let collection: Collection<T> = extract_file(&path)?;
                debug!(file = %path.display(), count = collection.items.len(), "loaded collection");
                Ok(collection.items)
            }
            None => {
                warn!(dir = %self.dir.display(), collection = name, "collection file missing, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    fn collection_file(&self, name: &str) -> Option<PathBuf> {
        ["toml", "json"]
            .iter()
            .map(|ext| self.dir.join(format!("{name}.{ext}")))
            .find(|p| p.is_file())
    }
}

impl ContentSource for ContentStore {
    fn load(&self) -> Result<ContentSources> {
        let sources = ContentSources {
            platforms: self.load_platforms()?,
            pages: self.load_pages()?,
            articles: self.load_articles()?,
        };
        info!(
            dir = %self.dir.display(),
            platforms = sources.platforms.len(),
            pages = sources.pages.len(),
            articles = sources.articles.len(),
            "content loaded"
        );
        Ok(sources)
    }
}

/// In-memory source, for embedding a corpus that is already built.
pub struct StaticSource(pub ContentSources);

impl ContentSource for StaticSource {
    fn load(&self) -> Result<ContentSources> { Ok(self.0.clone()) }
}

fn extract_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let figment = match path.extension().and_then(|s| s.to_str()) {
        Some("json") => Figment::from(Json::file(path)),
        _ => Figment::from(Toml::file(path)),
    };
    figment.extract().map_err(|e| Error::Content { path: path.to_path_buf(), message: e.to_string() })
}

fn list_document_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in walkdir::WalkDir::new(root) {
        let entry = entry.map_err(|e| Error::Content { path: root.to_path_buf(), message: e.to_string() })?;
        if !entry.file_type().is_file() { continue; }
        let path = entry.path();
        if matches!(path.extension().and_then(|s| s.to_str()), Some("toml" | "json")) {
            files.push(path.to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}
