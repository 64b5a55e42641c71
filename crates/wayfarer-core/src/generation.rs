//! Generation service port.
//!
//! The itinerary and chat generation backend is an external workflow
//! service; the core only knows this interface. The UI layer calls it and
//! feeds completed turns back into the session manager.

use crate::error::Result;
use async_trait::async_trait;

/// Substitute assistant reply the caller uses to complete an exchange when
/// the remote chat call fails. The conversation record stays well-formed:
/// no user message is ever left without a reply.
pub const FALLBACK_CHAT_REPLY: &str =
    "I'm sorry, I couldn't generate a response at the moment. Please try again.";

/// An abstract client for the external generation/chat workflow service.
///
/// Both calls may fail with transport or service errors; neither is
/// retried here. Callers own loading indicators and timeouts.
#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Generates a full itinerary (markdown) from a natural-language travel
    /// request.
    async fn generate_itinerary(&self, travel_request: &str) -> Result<String>;

    /// Answers a travel question, optionally grounded in an itinerary
    /// context block (see `SavedItinerary::context_text`).
    async fn send_chat_message(
        &self,
        question: &str,
        itinerary_context: Option<&str>,
    ) -> Result<String>;
}
