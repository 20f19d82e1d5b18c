//! Upstream data-contract check for content collections.
//!
//! The engine itself trusts its input. Callers that load hand-authored content
//! run this first so a missing field or a reused path is reported by name
//! instead of producing odd search results.

use std::collections::HashMap;

use crate::error::{ContentIssue, Error, Result};
use crate::types::{ContentKind, ContentSources, Entry};

pub fn validate(sources: &ContentSources) -> Result<()> {
    let issues = collect_issues(sources);
    if issues.is_empty() { Ok(()) } else { Err(Error::InvalidContent(issues)) }
}

/// Every violation, in collection order (platforms, pages, articles).
pub fn collect_issues(sources: &ContentSources) -> Vec<ContentIssue> {
    let entries = tagged(ContentKind::Platform, sources.platforms.iter())
        .chain(tagged(ContentKind::Page, sources.pages.iter()))
        .chain(tagged(ContentKind::Article, sources.articles.iter().map(|a| &a.entry)));

    let mut issues = Vec::new();
    let mut seen: HashMap<&str, ContentKind> = HashMap::new();
    for (kind, index, entry) in entries {
        for (field, value) in required_fields(entry) {
            if value.trim().is_empty() {
                issues.push(ContentIssue::EmptyField { kind, index, field });
            }
        }
        if entry.path.trim().is_empty() { continue; }
        if let Some(first) = seen.get(entry.path.as_str()) {
            issues.push(ContentIssue::DuplicatePath { path: entry.path.clone(), first: *first, second: kind });
        } else {
            seen.insert(entry.path.as_str(), kind);
        }
    }
    issues
}

fn required_fields(entry: &Entry) -> [(&'static str, &str); 4] {
    [
        ("title", entry.title.as_str()),
        ("description", entry.description.as_str()),
        ("path", entry.path.as_str()),
        ("category", entry.category.as_str()),
    ]
}

fn tagged<'a>(
    kind: ContentKind,
    entries: impl Iterator<Item = &'a Entry>,
) -> impl Iterator<Item = (ContentKind, usize, &'a Entry)> {
    entries.enumerate().map(move |(index, entry)| (kind, index, entry))
}
