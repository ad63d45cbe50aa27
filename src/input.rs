//! Input module
//!
//! Loads prompt catalogs from disk into a generic JSON value.

mod reader;

pub use reader::{PromptDocument, load_document, parse_document};
