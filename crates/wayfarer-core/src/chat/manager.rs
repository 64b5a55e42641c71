//! Chat session lifecycle management.

use super::model::{derive_session_name, ChatExchange, ChatSession, ItineraryChats};
use super::store::ChatStateStore;
use crate::chat::message::ChatMessage;
use chrono::Utc;
use std::sync::Arc;

/// Greeting shown as the standalone first message of every new session.
pub const ASSISTANT_GREETING: &str = "Hi! I'm your AI travel assistant. I can help you with \
questions about your itineraries, suggest modifications, or answer any travel-related \
questions. What would you like to know?";

/// Lifecycle of the manager for the currently selected itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    /// No itinerary has ever been selected.
    Uninitialized,
    /// A load is in progress; operations are no-ops.
    Loading,
    /// Load complete (successfully or via graceful fallback).
    Ready,
}

/// Manages the chat sessions of the currently selected itinerary.
///
/// `ChatSessionManager` is responsible for:
/// - Loading per-itinerary chat state (with invariant repair and
///   self-healing write-back)
/// - Creating new sessions
/// - Switching between sessions
/// - Appending completed exchanges
/// - Deleting and renaming sessions
///
/// Every mutating operation writes through to the injected
/// [`ChatStateStore`] before it returns, so in-memory and persisted state
/// never diverge after a successful operation. Persistence is best-effort:
/// a failed write is logged and the in-memory mutation stands.
///
/// The manager is single-owner by design; callers serialize operations the
/// way a UI event loop does.
pub struct ChatSessionManager {
    /// Persistent storage backend for chat state.
    store: Arc<dyn ChatStateStore>,
    lifecycle: Lifecycle,
    /// Chat state for the selected itinerary; `None` when no itinerary is
    /// selected.
    chats: Option<ItineraryChats>,
}

impl ChatSessionManager {
    /// Creates a new `ChatSessionManager` with a storage backend.
    ///
    /// No itinerary is selected initially; call
    /// [`select_itinerary`](Self::select_itinerary) first.
    pub fn new(store: Arc<dyn ChatStateStore>) -> Self {
        Self {
            store,
            lifecycle: Lifecycle::Uninitialized,
            chats: None,
        }
    }

    /// Selects an itinerary (or none) and loads its chat state.
    ///
    /// The previous itinerary's in-memory state is discarded. With no
    /// itinerary selected the manager becomes ready with no state and all
    /// operations no-op.
    ///
    /// A stored record is repaired (active-session invariant) and written
    /// back so a corrupted-then-repaired record self-heals on disk. An
    /// absent or unreadable record degrades to a fresh empty shell, which
    /// is not persisted until the first mutation.
    pub async fn select_itinerary(&mut self, itinerary_id: Option<&str>) {
        self.lifecycle = Lifecycle::Loading;
        self.chats = None;

        let Some(itinerary_id) = itinerary_id else {
            self.lifecycle = Lifecycle::Ready;
            return;
        };

        let chats = match self.store.load_for(itinerary_id).await {
            Ok(Some(mut stored)) => {
                stored.repair_active_session();
                // Self-heal: write the repaired record back.
                if let Err(e) = self.store.save_for(&stored).await {
                    tracing::warn!(itinerary_id, error = %e, "failed to write back repaired chat state");
                }
                tracing::debug!(
                    itinerary_id,
                    sessions = stored.sessions.len(),
                    "loaded chat state"
                );
                stored
            }
            Ok(None) => ItineraryChats::new(itinerary_id),
            Err(e) => {
                tracing::warn!(itinerary_id, error = %e, "failed to load chat state, starting empty");
                ItineraryChats::new(itinerary_id)
            }
        };

        self.chats = Some(chats);
        self.lifecycle = Lifecycle::Ready;
    }

    /// Creates a new session, activates it, and writes through.
    ///
    /// Guarded: if the current active session has no exchanges yet, the
    /// request is suppressed and `false` is returned. This prevents
    /// repeated clicks from piling up empty sessions.
    ///
    /// The new session is addressable immediately, but being empty it will
    /// not survive a reload until its first exchange is added.
    pub async fn create_new_chat(&mut self) -> bool {
        let Some(chats) = self.ready_state() else {
            return false;
        };
        if chats.active_session().is_some_and(ChatSession::is_empty) {
            return false;
        }

        let session = ChatSession::new(
            format!("Chat {}", chats.sessions.len() + 1),
            ASSISTANT_GREETING,
        );
        let mut next = chats.clone();
        next.active_session_id = Some(session.id.clone());
        next.sessions.push_front(session);
        self.write_through(next).await;
        true
    }

    /// Activates a session by id and writes through.
    ///
    /// The id is taken verbatim; callers pass a known id from the current
    /// session list.
    pub async fn load_chat_session(&mut self, session_id: &str) {
        let Some(chats) = self.ready_state() else {
            return;
        };
        let mut next = chats.clone();
        next.active_session_id = Some(session_id.to_string());
        self.write_through(next).await;
    }

    /// Appends a completed exchange to the active session and writes
    /// through.
    ///
    /// Both sides must be populated; on a failed remote call the caller
    /// synthesizes a fallback AI reply rather than leaving the user message
    /// dangling. On the session's first exchange, its name is replaced with
    /// a truncated form of the user message.
    ///
    /// Returns `false` if there is no active session to append to.
    pub async fn add_exchange(&mut self, user_message: ChatMessage, ai_message: ChatMessage) -> bool {
        let Some(chats) = self.ready_state() else {
            return false;
        };
        let Some(active_id) = chats.active_session_id.clone() else {
            return false;
        };

        let mut next = chats.clone();
        let Some(session) = next.sessions.iter_mut().find(|s| s.id == active_id) else {
            return false;
        };

        if session.exchanges.is_empty() {
            session.name = derive_session_name(&user_message.content);
        }
        session
            .exchanges
            .push(ChatExchange::new(user_message, ai_message));
        session.updated_at = Utc::now();

        self.write_through(next).await;
        true
    }

    /// Removes a session and writes through.
    ///
    /// If the removed session was active, the first remaining session
    /// becomes active, or none if the list is now empty.
    pub async fn delete_chat_session(&mut self, session_id: &str) {
        let Some(chats) = self.ready_state() else {
            return;
        };
        let mut next = chats.clone();
        next.sessions.retain(|s| s.id != session_id);
        if next.active_session_id.as_deref() == Some(session_id) {
            next.active_session_id = next.sessions.front().map(|s| s.id.clone());
        }
        self.write_through(next).await;
    }

    /// Overwrites a session's name verbatim and writes through.
    ///
    /// The caller is responsible for trimming and validating the input.
    /// `updated_at` is not bumped; renaming is not conversation activity.
    pub async fn rename_chat_session(&mut self, session_id: &str, new_name: &str) {
        let Some(chats) = self.ready_state() else {
            return;
        };
        let mut next = chats.clone();
        if let Some(session) = next.sessions.iter_mut().find(|s| s.id == session_id) {
            session.name = new_name.to_string();
        }
        self.write_through(next).await;
    }

    /// The chat state of the selected itinerary, if one is loaded.
    pub fn chats(&self) -> Option<&ItineraryChats> {
        self.chats.as_ref()
    }

    /// The currently active session, if any.
    pub fn active_session(&self) -> Option<&ChatSession> {
        self.chats.as_ref().and_then(ItineraryChats::active_session)
    }

    /// All sessions of the selected itinerary, newest first.
    pub fn sessions(&self) -> impl Iterator<Item = &ChatSession> {
        self.chats.iter().flat_map(|c| c.sessions.iter())
    }

    /// Whether the last `select_itinerary` call has completed.
    pub fn is_loaded(&self) -> bool {
        self.lifecycle == Lifecycle::Ready
    }

    fn ready_state(&self) -> Option<&ItineraryChats> {
        if self.lifecycle != Lifecycle::Ready {
            return None;
        }
        self.chats.as_ref()
    }

    /// Persists the next state (best-effort) and replaces the in-memory
    /// state wholesale.
    async fn write_through(&mut self, next: ItineraryChats) {
        if let Err(e) = self.store.save_for(&next).await {
            tracing::warn!(
                itinerary_id = %next.itinerary_id,
                error = %e,
                "failed to persist chat state, keeping in-memory update"
            );
        }
        self.chats = Some(next);
    }
}

#[cfg(test)]
#[path = "manager_test.rs"]
mod tests;
