//! FAQ answering: normalization, the tiered matcher, data loading, and the
//! desk/transcript types that front-ends build on.

mod conversation;
mod desk;
mod domain;
mod loader;
mod matcher;
mod normalizer;
pub mod router;

pub use conversation::{Conversation, Message, Sender, EMPTY_SOURCE_NOTICE, LOAD_FAILED_NOTICE};
pub use desk::{
    CatalogView, FaqDesk, Reply, ReplyStatus, ReplyTemplates, ReplyView, NOT_LOADED_REPLY,
};
pub use domain::{FaqEntry, FaqSet, MatchTier};
pub use loader::{FaqFormat, FaqLoadError, FaqLoader};
pub use matcher::{find, match_query, FaqMatch, FALLBACK_REPLY};
pub use normalizer::normalize;
pub use router::{faq_router, AskRequest};
