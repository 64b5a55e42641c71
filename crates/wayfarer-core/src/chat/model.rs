//! Chat domain model.
//!
//! This module contains the session-level entities: exchanges (a user
//! message paired with its AI reply), sessions (one conversation thread),
//! and the per-itinerary chat state that gets persisted as a unit.
//!
//! The persisted wire format uses camelCase field names and ISO 8601
//! timestamps; see the serde attributes on each type.

use super::message::{ChatMessage, Sender};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Maximum display length of an auto-derived session name.
pub const SESSION_NAME_MAX_CHARS: usize = 50;

/// One user message paired with the AI's reply to it.
///
/// An exchange is created as a unit and is never persisted with only one
/// side populated. Exchanges within a session are kept in strict
/// chronological append order, which is the canonical conversation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatExchange {
    /// Unique exchange identifier.
    pub id: String,
    /// The user's side of the exchange.
    pub user_message: ChatMessage,
    /// The AI's reply.
    pub ai_message: ChatMessage,
}

impl ChatExchange {
    /// Builds a new exchange from both sides of a completed turn.
    pub fn new(user_message: ChatMessage, ai_message: ChatMessage) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_message,
            ai_message,
        }
    }
}

/// One independent conversation thread scoped to a single itinerary.
///
/// `messages` holds standalone messages that are not replies to anything
/// (in practice, the initial AI greeting). `exchanges` holds the actual
/// conversation, append-only during normal operation.
///
/// A session with zero exchanges is considered *empty*: it exists only
/// transiently in memory and never survives a save (see
/// [`ItineraryChats::without_empty_sessions`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    /// Unique session identifier.
    pub id: String,
    /// Display label. Starts as an auto-generated placeholder, overwritten
    /// by the user's first message once the first exchange completes.
    pub name: String,
    /// Standalone messages (initial greeting only).
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    /// The conversation, in chronological append order.
    #[serde(default)]
    pub exchanges: Vec<ChatExchange>,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every exchange append.
    pub updated_at: DateTime<Utc>,
}

impl ChatSession {
    /// Creates a fresh session with a placeholder name and an AI greeting.
    pub fn new(name: impl Into<String>, greeting: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            messages: vec![ChatMessage::new(greeting, Sender::Ai)],
            exchanges: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// A session with no completed exchanges is empty and never persisted.
    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }
}

/// The persisted unit of chat state for one itinerary.
///
/// `sessions` is ordered newest-first: new sessions are pushed to the
/// front. `VecDeque` makes that convention an explicit primitive rather
/// than an implicit array-unshift habit.
///
/// Invariant: `active_session_id`, if set, references a session present in
/// `sessions`. The invariant is repaired on every load via
/// [`ItineraryChats::repair_active_session`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryChats {
    /// Foreign key into the itinerary store; not owned by this subsystem.
    pub itinerary_id: String,
    /// All sessions for this itinerary, newest first.
    #[serde(default)]
    pub sessions: VecDeque<ChatSession>,
    /// The currently displayed session, if any.
    #[serde(default)]
    pub active_session_id: Option<String>,
}

impl ItineraryChats {
    /// Creates an empty shell for an itinerary with no chat history yet.
    pub fn new(itinerary_id: impl Into<String>) -> Self {
        Self {
            itinerary_id: itinerary_id.into(),
            sessions: VecDeque::new(),
            active_session_id: None,
        }
    }

    /// Finds a session by id.
    pub fn session(&self, session_id: &str) -> Option<&ChatSession> {
        self.sessions.iter().find(|s| s.id == session_id)
    }

    /// Returns the currently active session, if one is set and present.
    pub fn active_session(&self) -> Option<&ChatSession> {
        self.active_session_id
            .as_deref()
            .and_then(|id| self.session(id))
    }

    /// Repairs the active-session invariant after a load.
    ///
    /// - No sessions: `active_session_id` becomes `None`.
    /// - Active id unset or referencing a removed session: reassigned to
    ///   the first (newest) session's id.
    pub fn repair_active_session(&mut self) {
        if self.sessions.is_empty() {
            self.active_session_id = None;
        } else {
            let valid = self
                .active_session_id
                .as_deref()
                .is_some_and(|id| self.session(id).is_some());
            if !valid {
                self.active_session_id = self.sessions.front().map(|s| s.id.clone());
            }
        }
    }

    /// Returns the durable view of this state: every empty session dropped.
    ///
    /// Note the active session id is left untouched even if it points at a
    /// dropped session; the dangling reference is repaired on the next load.
    pub fn without_empty_sessions(&self) -> Self {
        Self {
            itinerary_id: self.itinerary_id.clone(),
            sessions: self
                .sessions
                .iter()
                .filter(|s| !s.is_empty())
                .cloned()
                .collect(),
            active_session_id: self.active_session_id.clone(),
        }
    }
}

/// Derives a session name from the user's first message.
///
/// Truncates to [`SESSION_NAME_MAX_CHARS`] characters (char-boundary safe),
/// trims trailing whitespace, and appends an ellipsis marker when the
/// content was cut.
pub fn derive_session_name(content: &str) -> String {
    if content.chars().count() <= SESSION_NAME_MAX_CHARS {
        return content.to_string();
    }
    let truncated: String = content.chars().take(SESSION_NAME_MAX_CHARS).collect();
    format!("{}...", truncated.trim_end())
}
