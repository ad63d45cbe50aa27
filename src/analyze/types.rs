//! Type definitions for analysis statistics

use std::cmp::Reverse;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Item counts per category, in walk order
///
/// Serialized as a JSON object whose keys keep insertion order. Names are
/// unique: pushing a name again replaces its count but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCounts(Vec<(String, usize)>);

impl CategoryCounts {
    pub fn push(&mut self, name: impl Into<String>, count: usize) {
        let name = name.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = count,
            None => self.0.push((name, count)),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn get(&self, name: &str) -> Option<usize> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(name, count)| (name.as_str(), *count))
    }

    /// Categories ordered by descending count; ties keep walk order
    pub fn sorted_by_count(&self) -> Vec<(&str, usize)> {
        let mut sorted: Vec<(&str, usize)> = self.iter().collect();
        sorted.sort_by_key(|(_, count)| Reverse(*count));
        sorted
    }
}

impl Serialize for CategoryCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, count) in &self.0 {
            map.serialize_entry(name, count)?;
        }
        map.end()
    }
}

struct CategoryCountsVisitor;

impl<'de> Visitor<'de> for CategoryCountsVisitor {
    type Value = CategoryCounts;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a map of category names to item counts")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut counts = CategoryCounts::default();
        while let Some((name, count)) = access.next_entry::<String, usize>()? {
            counts.push(name, count);
        }
        Ok(counts)
    }
}

impl<'de> Deserialize<'de> for CategoryCounts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CategoryCountsVisitor)
    }
}

/// Aggregate statistics for a prompt catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisStats {
    pub total_categories: usize,
    pub total_prompts: usize,
    pub categories: CategoryCounts,
    pub avg_prompt_length: f64,
    /// Longest item, truncated for display
    pub longest_prompt: String,
    /// Shortest item, truncated for display
    pub shortest_prompt: String,
}
