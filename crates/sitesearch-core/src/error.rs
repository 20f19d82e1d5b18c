use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::ContentKind;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid type facet '{0}' (expected all, platform, page or article)")]
    InvalidFacet(String),

    #[error("Failed to load content from {path}: {message}")]
    Content { path: PathBuf, message: String },

    #[error("Invalid content: {}", render_issues(.0))]
    InvalidContent(Vec<ContentIssue>),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// One upstream data-contract violation found by [`crate::validate::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentIssue {
    EmptyField { kind: ContentKind, index: usize, field: &'static str },
    DuplicatePath { path: String, first: ContentKind, second: ContentKind },
}

impl fmt::Display for ContentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentIssue::EmptyField { kind, index, field } => {
                write!(f, "{kind} #{index} has an empty '{field}'")
            }
            ContentIssue::DuplicatePath { path, first, second } => {
                write!(f, "path '{path}' is used by a {first} and a {second}")
            }
        }
    }
}

fn render_issues(issues: &[ContentIssue]) -> String {
    issues.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}
