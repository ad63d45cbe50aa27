use serde_json::Value;

use super::types::AnalysisStats;
use crate::json::{char_len, stringify, truncate_chars};
use crate::walker::walk;

/// Longest and shortest samples are cut to this many characters
pub const SAMPLE_LIMIT: usize = 200;

/// Compute statistics over every category of a document
///
/// Items from all categories are considered together, in walk order. When
/// several items share the extreme length, the first one wins.
pub fn analyze_prompts(document: &Value) -> AnalysisStats {
    let mut stats = AnalysisStats::default();
    let mut all_prompts: Vec<&Value> = Vec::new();

    for category in walk(document) {
        stats.total_categories += 1;
        stats.total_prompts += category.items.len();
        stats.categories.push(category.name, category.items.len());
        all_prompts.extend(category.items);
    }

    let rendered: Vec<_> = all_prompts.iter().copied().map(stringify).collect();
    let lengths: Vec<usize> = rendered.iter().map(|text| char_len(text)).collect();

    if let (Some(longest), Some(shortest)) = (first_max(&lengths), first_min(&lengths)) {
        let total: usize = lengths.iter().sum();
        stats.avg_prompt_length = total as f64 / lengths.len() as f64;
        stats.longest_prompt = truncate_chars(&rendered[longest], SAMPLE_LIMIT);
        stats.shortest_prompt = truncate_chars(&rendered[shortest], SAMPLE_LIMIT);
    }

    log::debug!(
        "Analyzed {} categories, {} prompts",
        stats.total_categories,
        stats.total_prompts
    );

    stats
}

// Iterator::max_by_key returns the last maximum, so scan explicitly.
fn first_max(lengths: &[usize]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, len) in lengths.iter().enumerate() {
        if best.is_none_or(|b| *len > lengths[b]) {
            best = Some(i);
        }
    }
    best
}

fn first_min(lengths: &[usize]) -> Option<usize> {
    lengths
        .iter()
        .enumerate()
        .min_by_key(|(_, len)| **len)
        .map(|(i, _)| i)
}

#[cfg(test)]
#[path = "analyzer_tests.rs"]
mod analyzer_tests;
