use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::{FaqSet, MatchTier};
use super::matcher::{self, FALLBACK_REPLY};

/// Reply used while the FAQ set is empty or has not been loaded.
pub const NOT_LOADED_REPLY: &str = "⚠️ FAQs not loaded yet. Please try again in a moment.";

/// Canned messages returned when the matcher cannot produce an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyTemplates {
    pub not_loaded: String,
    pub fallback: String,
}

impl Default for ReplyTemplates {
    fn default() -> Self {
        Self {
            not_loaded: NOT_LOADED_REPLY.to_string(),
            fallback: FALLBACK_REPLY.to_string(),
        }
    }
}

/// Outcome of asking the desk a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Answered {
        tier: MatchTier,
        /// Position of the record in the source data.
        index: usize,
        answer: String,
    },
    NoMatch(String),
    NotLoaded(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Answered { answer, .. } => answer,
            Reply::NoMatch(message) | Reply::NotLoaded(message) => message,
        }
    }

    pub fn status(&self) -> ReplyStatus {
        match self {
            Reply::Answered { .. } => ReplyStatus::Answered,
            Reply::NoMatch(_) => ReplyStatus::NoMatch,
            Reply::NotLoaded(_) => ReplyStatus::NotLoaded,
        }
    }

    pub fn tier(&self) -> Option<MatchTier> {
        match self {
            Reply::Answered { tier, .. } => Some(*tier),
            _ => None,
        }
    }

    pub fn view(&self) -> ReplyView {
        ReplyView {
            status: self.status(),
            reply: self.text().to_string(),
            tier: self.tier(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyStatus {
    Answered,
    NoMatch,
    NotLoaded,
}

/// Serializable form of a [`Reply`] for HTTP clients.
#[derive(Debug, Clone, Serialize)]
pub struct ReplyView {
    pub status: ReplyStatus,
    pub reply: String,
    pub tier: Option<MatchTier>,
}

/// Summary of the loaded FAQ data.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView {
    pub entries: usize,
    /// `None` when the desk was built without data.
    pub loaded_at: Option<DateTime<Utc>>,
}

/// Owns one FAQ set and answers questions against it.
#[derive(Debug, Clone)]
pub struct FaqDesk {
    set: FaqSet,
    replies: ReplyTemplates,
    loaded_at: Option<DateTime<Utc>>,
}

impl FaqDesk {
    pub fn new(set: FaqSet) -> Self {
        Self::with_replies(set, ReplyTemplates::default())
    }

    pub fn with_replies(set: FaqSet, replies: ReplyTemplates) -> Self {
        Self {
            set,
            replies,
            loaded_at: Some(Utc::now()),
        }
    }

    /// Desk with no data; every question gets the not-loaded reply.
    pub fn unloaded(replies: ReplyTemplates) -> Self {
        Self {
            set: FaqSet::empty(),
            replies,
            loaded_at: None,
        }
    }

    pub fn set(&self) -> &FaqSet {
        &self.set
    }

    pub fn is_ready(&self) -> bool {
        !self.set.is_empty()
    }

    pub fn catalog(&self) -> CatalogView {
        CatalogView {
            entries: self.set.len(),
            loaded_at: self.loaded_at,
        }
    }

    pub fn ask(&self, query: &str) -> Reply {
        if self.set.is_empty() {
            return Reply::NotLoaded(self.replies.not_loaded.clone());
        }

        match matcher::find(query, &self.set) {
            Some(hit) => Reply::Answered {
                tier: hit.tier,
                index: hit.index,
                answer: hit.answer().to_string(),
            },
            None => Reply::NoMatch(self.replies.fallback.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::faq::domain::FaqEntry;

    #[test]
    fn empty_desk_reports_not_loaded_instead_of_fallback() {
        let desk = FaqDesk::new(FaqSet::empty());
        let reply = desk.ask("xyzzy_unmatched");

        assert_eq!(reply, Reply::NotLoaded(NOT_LOADED_REPLY.to_string()));
        assert_ne!(reply.text(), FALLBACK_REPLY);
        assert!(!desk.is_ready());
    }

    #[test]
    fn loaded_desk_distinguishes_answers_from_misses() {
        let desk = FaqDesk::new(FaqSet::new([FaqEntry::new("Fees", "A1")]));

        let answered = desk.ask("fees");
        assert_eq!(answered.status(), ReplyStatus::Answered);
        assert_eq!(answered.tier(), Some(MatchTier::Exact));
        assert_eq!(answered.text(), "A1");

        let missed = desk.ask("xyzzy_unmatched");
        assert_eq!(missed, Reply::NoMatch(FALLBACK_REPLY.to_string()));
        assert_eq!(missed.tier(), None);
    }

    #[test]
    fn custom_fallback_is_used_for_misses() {
        let replies = ReplyTemplates {
            fallback: "Ask the front office.".to_string(),
            ..ReplyTemplates::default()
        };
        let desk = FaqDesk::with_replies(FaqSet::new([FaqEntry::new("Fees", "A1")]), replies);

        assert_eq!(desk.ask("parking").text(), "Ask the front office.");
        assert_eq!(desk.catalog().entries, 1);
        assert!(desk.catalog().loaded_at.is_some());
    }

    #[test]
    fn unloaded_desk_has_no_load_time() {
        let desk = FaqDesk::unloaded(ReplyTemplates::default());
        let catalog = desk.catalog();

        assert_eq!(catalog.entries, 0);
        assert!(catalog.loaded_at.is_none());
        assert!(desk.ask("fees").text().starts_with("⚠️ "));
    }
}
