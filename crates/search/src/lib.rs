//! Title search over the sidebar page forests.
//!
//! The search dialog does not keep a persistent index: each time it opens (or
//! the forests change) it flattens the private and teamspace forests into one
//! ordered list and filters that list by title. Plain queries are
//! case-insensitive substring matches; an optional regex mode mirrors the
//! plain/regex split used elsewhere in PageDesk tooling.

use pagedesk_sidebar::{Page, Section};
use regex::{Regex, RegexBuilder};
use thiserror::Error;

/// Error conditions raised while building a query.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),
}

/// Determines how the query pattern is interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryMode {
    Plain,
    Regex,
}

impl Default for QueryMode {
    fn default() -> Self {
        Self::Plain
    }
}

/// A compiled title query. Blank patterns match every page, so an empty
/// search box shows the full flattened list.
#[derive(Clone, Debug)]
pub struct PageQuery {
    pattern: String,
    mode: QueryMode,
    matcher: Option<Regex>,
}

impl PageQuery {
    /// Builds a plain, case-insensitive substring query.
    pub fn plain(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into().trim().to_lowercase(),
            mode: QueryMode::Plain,
            matcher: None,
        }
    }

    /// Builds a case-insensitive regex query.
    pub fn regex(pattern: impl Into<String>) -> Result<Self, QueryError> {
        let pattern = pattern.into();
        if pattern.trim().is_empty() {
            return Ok(Self {
                pattern,
                mode: QueryMode::Regex,
                matcher: None,
            });
        }
        let matcher = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .map_err(|err| QueryError::InvalidPattern(err.to_string()))?;
        Ok(Self {
            pattern,
            mode: QueryMode::Regex,
            matcher: Some(matcher),
        })
    }

    pub fn mode(&self) -> QueryMode {
        self.mode
    }

    /// Returns `true` when the query matches everything.
    pub fn is_blank(&self) -> bool {
        self.pattern.trim().is_empty()
    }

    /// Tests a page title against the query.
    pub fn matches(&self, title: &str) -> bool {
        if self.is_blank() {
            return true;
        }
        match (&self.mode, &self.matcher) {
            (QueryMode::Regex, Some(matcher)) => matcher.is_match(title),
            _ => title.to_lowercase().contains(&self.pattern),
        }
    }
}

/// A page matched by a query, tagged with the section it was found in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageHit<'a> {
    pub page: &'a Page,
    pub section: Section,
}

/// Flattens a forest into pre-order: each parent before all of its
/// descendants, roots in forest order. Deterministic for a given forest.
pub fn flatten(forest: &[Page]) -> Vec<&Page> {
    let mut pages = Vec::new();
    for page in forest {
        push_subtree(page, &mut pages);
    }
    pages
}

fn push_subtree<'a>(page: &'a Page, pages: &mut Vec<&'a Page>) {
    pages.push(page);
    for child in &page.children {
        push_subtree(child, pages);
    }
}

/// Flattens both forests (private first, matching the dialog's list order)
/// and keeps the pages whose titles match the query.
pub fn search_pages<'a>(
    private: &'a [Page],
    teamspace: &'a [Page],
    query: &PageQuery,
) -> Vec<PageHit<'a>> {
    let mut hits = Vec::new();
    for page in flatten(private) {
        if query.matches(&page.title) {
            hits.push(PageHit {
                page,
                section: Section::Private,
            });
        }
    }
    for page in flatten(teamspace) {
        if query.matches(&page.title) {
            hits.push(PageHit {
                page,
                section: Section::Teamspace,
            });
        }
    }
    hits
}
