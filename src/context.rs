//! Conversation context for retrieval-augmented Q&A.
//!
//! The engine itself never calls a chat model; it produces the two inputs the
//! layer above needs: a bounded per-session transcript
//! ([`ConversationContext`], owned by the caller instead of any process-wide
//! state) and a formatted block of retrieved entries
//! ([`build_memory_context`]) ready to drop into a prompt.

#![allow(dead_code)]

use serde::{Deserialize, Serialize};

use crate::memory::types::MemoryRecord;

/// Default cap on retained conversation turns.
pub const MAX_HISTORY: usize = 20;

/// Longest snippet taken from an entry when building prompt context.
const SNIPPET_MAX_CHARS: usize = 400;

/// Who produced a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One message in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
}

/// Bounded per-session conversation history.
///
/// One value per session, passed explicitly by the caller; concurrent
/// sessions never share state. Pushing beyond the cap drops the oldest
/// turns.
#[derive(Debug, Clone)]
pub struct ConversationContext {
    turns: Vec<ConversationTurn>,
    max_history: usize,
}

impl Default for ConversationContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationContext {
    pub fn new() -> Self {
        Self::with_max_history(MAX_HISTORY)
    }

    pub fn with_max_history(max_history: usize) -> Self {
        Self {
            turns: Vec::new(),
            max_history,
        }
    }

    /// Append a turn, evicting the oldest turns beyond the history cap.
    pub fn push(&mut self, role: Role, content: impl Into<String>) {
        self.turns.push(ConversationTurn {
            role,
            content: content.into(),
        });
        if self.turns.len() > self.max_history {
            let excess = self.turns.len() - self.max_history;
            self.turns.drain(..excess);
        }
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    /// The most recent user message, if any — the retrieval query for the
    /// next response.
    pub fn last_user_message(&self) -> Option<&str> {
        self.turns
            .iter()
            .rev()
            .find(|turn| turn.role == Role::User)
            .map(|turn| turn.content.as_str())
    }
}

/// Format reranked records as a prompt context block.
///
/// One line per entry: `[Entry <id> | <date>] <snippet>`, where the snippet
/// prefers the LLM summary over the raw content and is truncated to 400
/// characters.
pub fn build_memory_context(records: &[&MemoryRecord]) -> String {
    records
        .iter()
        .map(|record| {
            let text = record
                .summary
                .as_deref()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(&record.content);
            let snippet = truncate_snippet(text.trim(), SNIPPET_MAX_CHARS);
            match record.created_at {
                Some(created) => {
                    format!("[Entry {} | {}] {}", record.id, created.date_naive(), snippet)
                }
                None => format!("[Entry {}] {}", record.id, snippet),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Truncate to `max_chars` characters (not bytes), appending "..." if
/// truncated. Cuts on a char boundary so multi-byte text never panics.
fn truncate_snippet(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::types::MemoryCategory;

    #[test]
    fn history_is_bounded() {
        let mut ctx = ConversationContext::with_max_history(3);
        for i in 0..6 {
            ctx.push(Role::User, format!("message {i}"));
        }
        assert_eq!(ctx.turns().len(), 3);
        assert_eq!(ctx.turns()[0].content, "message 3");
        assert_eq!(ctx.turns()[2].content, "message 5");
    }

    #[test]
    fn last_user_message_skips_assistant_turns() {
        let mut ctx = ConversationContext::new();
        ctx.push(Role::User, "how was my week?");
        ctx.push(Role::Assistant, "busy but upbeat");
        assert_eq!(ctx.last_user_message(), Some("how was my week?"));
    }

    #[test]
    fn empty_context_has_no_user_message() {
        assert!(ConversationContext::new().last_user_message().is_none());
    }

    #[test]
    fn memory_context_prefers_summary_over_content() {
        let mut rec = MemoryRecord::new(MemoryCategory::Event, "a very long raw transcript");
        rec.id = "e1".into();
        rec.summary = Some("Short summary.".into());
        rec.created_at = Some("2026-03-14T08:00:00Z".parse().unwrap());

        let block = build_memory_context(&[&rec]);
        assert_eq!(block, "[Entry e1 | 2026-03-14] Short summary.");
    }

    #[test]
    fn memory_context_without_timestamp_omits_date() {
        let mut rec = MemoryRecord::new(MemoryCategory::Event, "raw text");
        rec.id = "e2".into();
        rec.created_at = None;

        let block = build_memory_context(&[&rec]);
        assert_eq!(block, "[Entry e2] raw text");
    }

    #[test]
    fn memory_context_joins_records_with_newlines() {
        let mut a = MemoryRecord::new(MemoryCategory::Event, "first");
        a.id = "a".into();
        a.created_at = None;
        let mut b = MemoryRecord::new(MemoryCategory::Event, "second");
        b.id = "b".into();
        b.created_at = None;

        let block = build_memory_context(&[&a, &b]);
        assert_eq!(block, "[Entry a] first\n[Entry b] second");
    }

    #[test]
    fn long_snippets_are_truncated_with_ellipsis() {
        let mut rec = MemoryRecord::new(MemoryCategory::Event, "x".repeat(500));
        rec.id = "long".into();
        rec.created_at = None;

        let block = build_memory_context(&[&rec]);
        assert!(block.ends_with("..."));
        assert!(block.len() < 450);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        // 300 chars but 600 bytes; within the char limit, so untouched.
        let text = "é".repeat(300);
        assert_eq!(truncate_snippet(&text, 400), text);

        let long = "é".repeat(450);
        let snippet = truncate_snippet(&long, 400);
        assert!(snippet.ends_with("..."));
        assert_eq!(snippet.chars().count(), 403);
        // must not have split a codepoint
        assert!(snippet.chars().all(|c| c == 'é' || c == '.'));
    }

    #[test]
    fn default_context_keeps_turns_up_to_the_standard_cap() {
        let mut ctx = ConversationContext::default();
        ctx.push(Role::User, "first");
        assert_eq!(ctx.turns().len(), 1);
        assert_eq!(ctx.last_user_message(), Some("first"));

        for i in 0..40 {
            ctx.push(Role::Assistant, format!("reply {i}"));
        }
        assert_eq!(ctx.turns().len(), MAX_HISTORY);
    }
}
