//! Search module
//!
//! Finds prompt items by regular expression and category name. Categories
//! carry their flattened `parent.child` names here.

mod matcher;
mod searcher;

pub use searcher::{SNIPPET_LIMIT, SearchResult, search_prompts};
