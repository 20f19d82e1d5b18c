use std::path::PathBuf;

use sitesearch_core::content::ContentStore;
use sitesearch_core::traits::{ContentSource, SearchEngine};
use sitesearch_core::types::{ContentKind, FilterState};
use sitesearch_core::validate::validate;
use sitesearch_filter::SiteSearch;

fn content_dir() -> PathBuf {
    // crates/sitesearch-filter -> crates -> repo root
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).ancestors().nth(2).unwrap().to_path_buf();
    root.join("content")
}

#[test]
fn site_content_full_flow() {
    let sources = ContentStore::new(content_dir()).load().expect("load content");
    validate(&sources).expect("site content is well formed");
    eprintln!(
        "content: {} platforms, {} pages, {} articles",
        sources.platforms.len(),
        sources.pages.len(),
        sources.articles.len()
    );

    let engine = SiteSearch::new(&sources);
    assert_eq!(engine.len(), sources.len());
    assert_eq!(engine.categories(), &["AI Platform", "Company", "Legal", "Quality", "Technical"]);
    assert_eq!(engine.search(&FilterState::default()).len(), engine.len());

    let hits = engine.search(&FilterState::new().with_query("mlops"));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].path(), "/blog/scaling-model-operations");

    let hits = engine.search(&FilterState::new().with_query("cloud infrastructure"));
    let paths: Vec<&str> = hits.iter().map(|h| h.path()).collect();
    assert_eq!(paths, vec!["/platforms/nimbra"]);

    let articles = engine.search(&FilterState::new().with_type(ContentKind::Article));
    assert!(articles.windows(2).all(|w| w[0].path() != w[1].path()));
    assert_eq!(articles[0].title(), "Scaling Model Operations", "articles keep file order");

    let company = engine.search(&FilterState::new().with_category("Company"));
    assert_eq!(company.len(), 4);
    for (q, expected) in [("platform", 3usize), ("zzz_no_such_term", 0)] {
        let hits = engine.search(&FilterState::new().with_query(q));
        eprintln!("q='{}' -> {} hits", q, hits.len());
        assert_eq!(hits.len(), expected);
    }
}
