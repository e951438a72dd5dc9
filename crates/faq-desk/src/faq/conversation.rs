use chrono::{DateTime, Utc};
use serde::Serialize;

use super::desk::{FaqDesk, Reply};

/// Notice shown when the FAQ source parsed but held no usable entries.
pub const EMPTY_SOURCE_NOTICE: &str = "⚠️ FAQs are empty. Please check faq.json format/content.";
/// Notice shown when the FAQ source could not be read or parsed.
pub const LOAD_FAILED_NOTICE: &str = "⚠️ Unable to load FAQs. Please check faq.json.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

/// Running chat transcript between a user and a [`FaqDesk`].
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Record the user's question and the desk's reply.
    ///
    /// Blank input is ignored and leaves the transcript untouched.
    pub fn submit(&mut self, desk: &FaqDesk, input: &str) -> Option<Reply> {
        let query = input.trim();
        if query.is_empty() {
            return None;
        }

        self.push(Sender::User, query);
        let reply = desk.ask(query);
        self.push(Sender::Bot, reply.text());
        Some(reply)
    }

    pub fn push_notice(&mut self, text: &str) {
        self.push(Sender::Bot, text);
    }

    fn push(&mut self, sender: Sender, text: &str) {
        self.messages.push(Message {
            sender,
            text: text.to_string(),
            sent_at: Utc::now(),
        });
    }
}
