use std::collections::HashSet;

use tracing::debug;

use super::domain::{FaqEntry, FaqSet, IndexedEntry, MatchTier};
use super::normalizer::normalize;

/// Reply used when no tier produces a hit on a non-empty set.
pub const FALLBACK_REPLY: &str =
    "Sorry, I don’t have an answer for that yet. Please contact the college for more details.";

/// Entry selected by the matcher together with the tier that selected it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqMatch<'a> {
    /// Position of the record in the source data, counting skipped records.
    pub index: usize,
    pub tier: MatchTier,
    pub entry: &'a FaqEntry,
}

impl FaqMatch<'_> {
    pub fn answer(&self) -> &str {
        &self.entry.answer
    }
}

/// Run the exact, partial, and keyword tiers in order and return the first hit.
///
/// Within a tier the entry with the lowest index wins. A query that normalizes
/// to nothing is contained in every question, so it lands on the first entry.
pub fn find<'a>(query: &str, set: &'a FaqSet) -> Option<FaqMatch<'a>> {
    let cleaned = normalize(query);
    let entries = set.indexed();
    let hit = MatchTier::ordered().into_iter().find_map(|tier| {
        let index = match tier {
            MatchTier::Exact => exact_hit(&cleaned, entries),
            MatchTier::Partial => partial_hit(&cleaned, entries),
            MatchTier::Keyword => keyword_hit(&cleaned, entries),
        }?;
        Some((index, tier))
    });

    match hit {
        Some((position, tier)) => {
            let indexed = &entries[position];
            debug!(%tier, index = indexed.source_index, query = %cleaned, "faq entry matched");
            Some(FaqMatch {
                index: indexed.source_index,
                tier,
                entry: &indexed.entry,
            })
        }
        None => {
            debug!(query = %cleaned, "no faq entry matched");
            None
        }
    }
}

/// Answer for `query`, or [`FALLBACK_REPLY`] when nothing matches.
///
/// Does not distinguish an empty set from a miss; callers that need the
/// not-loaded signal go through [`FaqDesk`](super::desk::FaqDesk).
pub fn match_query(query: &str, set: &FaqSet) -> String {
    find(query, set)
        .map(|hit| hit.answer().to_string())
        .unwrap_or_else(|| FALLBACK_REPLY.to_string())
}

fn exact_hit(cleaned: &str, entries: &[IndexedEntry]) -> Option<usize> {
    entries
        .iter()
        .position(|indexed| indexed.normalized_question == cleaned)
}

// Query inside the stored question, never the other way round.
fn partial_hit(cleaned: &str, entries: &[IndexedEntry]) -> Option<usize> {
    entries
        .iter()
        .position(|indexed| indexed.normalized_question.contains(cleaned))
}

fn keyword_hit(cleaned: &str, entries: &[IndexedEntry]) -> Option<usize> {
    let tokens: HashSet<&str> = cleaned.split(' ').filter(|token| !token.is_empty()).collect();

    entries.iter().position(|indexed| {
        indexed
            .normalized_keywords
            .iter()
            .any(|keyword| tokens.contains(keyword.as_str()))
    })
}
