use serde::{Deserialize, Serialize};
use std::fmt;

use super::normalizer::normalize;

/// One question/answer record as published in the FAQ source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    #[serde(default)]
    pub question: String,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

impl FaqEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            keywords: Vec::new(),
        }
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }
}

/// Entry paired with the comparison forms of its question and keywords.
#[derive(Debug, Clone)]
pub(crate) struct IndexedEntry {
    pub(crate) source_index: usize,
    pub(crate) entry: FaqEntry,
    pub(crate) normalized_question: String,
    pub(crate) normalized_keywords: Vec<String>,
}

impl IndexedEntry {
    fn new(source_index: usize, entry: FaqEntry) -> Self {
        let normalized_question = normalize(&entry.question);
        let normalized_keywords = entry
            .keywords
            .iter()
            .map(|keyword| normalize(keyword))
            .filter(|keyword| !keyword.is_empty())
            .collect();

        Self {
            source_index,
            entry,
            normalized_question,
            normalized_keywords,
        }
    }
}

/// Ordered, read-only collection of FAQ entries.
///
/// Source order is preserved; the matcher resolves ties by lowest index.
/// Entries without a usable answer are rejected on construction but still
/// count towards the source index of the entries after them.
#[derive(Debug, Clone, Default)]
pub struct FaqSet {
    entries: Vec<IndexedEntry>,
}

impl FaqSet {
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = FaqEntry>,
    {
        Self::from_sourced(entries.into_iter().enumerate())
    }

    /// Build from entries tagged with their position in the source data.
    pub(crate) fn from_sourced<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (usize, FaqEntry)>,
    {
        let entries = entries
            .into_iter()
            .filter(|(_, entry)| !entry.answer.trim().is_empty())
            .map(|(source_index, entry)| IndexedEntry::new(source_index, entry))
            .collect();
        Self { entries }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index` within the set, not within the source data.
    pub fn get(&self, index: usize) -> Option<&FaqEntry> {
        self.entries.get(index).map(|indexed| &indexed.entry)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FaqEntry> {
        self.entries.iter().map(|indexed| &indexed.entry)
    }

    pub(crate) fn indexed(&self) -> &[IndexedEntry] {
        &self.entries
    }
}

impl FromIterator<FaqEntry> for FaqSet {
    fn from_iter<I: IntoIterator<Item = FaqEntry>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Matching strategy that produced an answer, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Exact,
    Partial,
    Keyword,
}

impl MatchTier {
    pub const fn ordered() -> [Self; 3] {
        [Self::Exact, Self::Partial, Self::Keyword]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Partial => "partial",
            Self::Keyword => "keyword",
        }
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
