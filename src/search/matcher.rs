use regex::{Regex, RegexBuilder};

use crate::error::PromptError;

/// Compiled search filters (case-insensitive)
#[derive(Debug, Clone)]
pub struct PromptMatcher {
    pattern: Option<Regex>,
    category: Option<String>,
}

impl PromptMatcher {
    /// Build a matcher from optional pattern and category filters
    ///
    /// Returns [`PromptError::InvalidPattern`] if the pattern is not a valid
    /// regular expression.
    pub fn new(pattern: Option<&str>, category: Option<&str>) -> Result<Self, PromptError> {
        let pattern = pattern
            .map(|p| RegexBuilder::new(p).case_insensitive(true).build())
            .transpose()?;

        Ok(Self {
            pattern,
            category: category.map(str::to_lowercase),
        })
    }

    /// Whether the category filter accepts this category name
    pub fn accepts_category(&self, name: &str) -> bool {
        match &self.category {
            Some(filter) => name.to_lowercase().contains(filter.as_str()),
            None => true,
        }
    }

    /// Whether the pattern occurs anywhere in the item text
    pub fn accepts_item(&self, text: &str) -> bool {
        match &self.pattern {
            Some(regex) => regex.is_match(text),
            None => true,
        }
    }
}
