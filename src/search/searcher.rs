use serde::Serialize;
use serde_json::Value;

use super::matcher::PromptMatcher;
use crate::error::PromptError;
use crate::json::{stringify, truncate_chars};
use crate::walker::walk;

/// Search snippets are cut to this many characters
pub const SNIPPET_LIMIT: usize = 300;

/// A single matching prompt item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Flattened category name
    pub category: String,
    /// Position in the category's own item list
    pub index: usize,
    /// Item text, truncated for display
    pub prompt: String,
}

/// Search every category of a document
///
/// Both filters are optional and combine with AND. With neither, every item
/// is returned in walk order.
pub fn search_prompts(
    document: &Value,
    pattern: Option<&str>,
    category: Option<&str>,
) -> Result<Vec<SearchResult>, PromptError> {
    let matcher = PromptMatcher::new(pattern, category)?;
    let mut results = Vec::new();

    for cat in walk(document) {
        if !matcher.accepts_category(&cat.name) {
            continue;
        }

        for (index, item) in cat.items.iter().enumerate() {
            let text = stringify(item);
            if !matcher.accepts_item(&text) {
                continue;
            }

            results.push(SearchResult {
                category: cat.name.clone(),
                index,
                prompt: truncate_chars(&text, SNIPPET_LIMIT),
            });
        }
    }

    log::debug!(
        "Search pattern={:?} category={:?} matched {} items",
        pattern,
        category,
        results.len()
    );

    Ok(results)
}

#[cfg(test)]
#[path = "searcher_tests.rs"]
mod searcher_tests;
