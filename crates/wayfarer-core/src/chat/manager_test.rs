use super::*;
use crate::chat::message::{ChatMessage, Sender};
use crate::error::{Result, WayfarerError};
use std::sync::Mutex;

// Mock ChatStateStore for testing
struct MockChatStore {
    records: Mutex<Vec<ItineraryChats>>,
}

impl MockChatStore {
    fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    fn seeded(records: Vec<ItineraryChats>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }
}

#[async_trait::async_trait]
impl ChatStateStore for MockChatStore {
    async fn load_all(&self) -> Result<Vec<ItineraryChats>> {
        Ok(self.records.lock().unwrap().clone())
    }

    async fn save_all(&self, all: &[ItineraryChats]) -> Result<()> {
        *self.records.lock().unwrap() = all.to_vec();
        Ok(())
    }
}

// Store whose reads always fail
struct BrokenReadStore;

#[async_trait::async_trait]
impl ChatStateStore for BrokenReadStore {
    async fn load_all(&self) -> Result<Vec<ItineraryChats>> {
        Err(WayfarerError::storage("record is corrupted"))
    }

    async fn save_all(&self, _all: &[ItineraryChats]) -> Result<()> {
        Ok(())
    }
}

// Store whose writes always fail
struct BrokenWriteStore;

#[async_trait::async_trait]
impl ChatStateStore for BrokenWriteStore {
    async fn load_all(&self) -> Result<Vec<ItineraryChats>> {
        Ok(Vec::new())
    }

    async fn save_all(&self, _all: &[ItineraryChats]) -> Result<()> {
        Err(WayfarerError::storage("quota exceeded"))
    }
}

fn turn(question: &str) -> (ChatMessage, ChatMessage) {
    (
        ChatMessage::new(question, Sender::User),
        ChatMessage::new("Here is what I found.", Sender::Ai),
    )
}

async fn ready_manager(store: Arc<dyn ChatStateStore>) -> ChatSessionManager {
    let mut manager = ChatSessionManager::new(store);
    manager.select_itinerary(Some("trip-1")).await;
    manager
}

#[tokio::test]
async fn test_operations_noop_before_select() {
    let mut manager = ChatSessionManager::new(Arc::new(MockChatStore::new()));

    assert!(!manager.is_loaded());
    assert!(!manager.create_new_chat().await);
    let (user, ai) = turn("hello");
    assert!(!manager.add_exchange(user, ai).await);
    assert!(manager.chats().is_none());
}

#[tokio::test]
async fn test_operations_noop_with_no_itinerary() {
    let mut manager = ChatSessionManager::new(Arc::new(MockChatStore::new()));
    manager.select_itinerary(None).await;

    assert!(manager.is_loaded());
    assert!(!manager.create_new_chat().await);
    assert!(manager.chats().is_none());
}

#[tokio::test]
async fn test_create_new_chat() {
    let mut manager = ready_manager(Arc::new(MockChatStore::new())).await;

    assert!(manager.create_new_chat().await);

    let chats = manager.chats().unwrap();
    assert_eq!(chats.sessions.len(), 1);
    let session = chats.sessions.front().unwrap();
    assert_eq!(session.name, "Chat 1");
    assert_eq!(chats.active_session_id, Some(session.id.clone()));
    assert_eq!(session.messages[0].content, ASSISTANT_GREETING);
    assert!(session.exchanges.is_empty());
}

#[tokio::test]
async fn test_create_is_guarded_while_active_session_empty() {
    let mut manager = ready_manager(Arc::new(MockChatStore::new())).await;

    assert!(manager.create_new_chat().await);
    // Second call is suppressed: the active session has no exchanges yet.
    assert!(!manager.create_new_chat().await);
    assert_eq!(manager.sessions().count(), 1);

    // After an exchange the guard lifts.
    let (user, ai) = turn("What about Lisbon?");
    assert!(manager.add_exchange(user, ai).await);
    assert!(manager.create_new_chat().await);
    assert_eq!(manager.sessions().count(), 2);
}

#[tokio::test]
async fn test_new_sessions_prepend_newest_first() {
    let mut manager = ready_manager(Arc::new(MockChatStore::new())).await;

    manager.create_new_chat().await;
    let (user, ai) = turn("first question");
    manager.add_exchange(user, ai).await;
    manager.create_new_chat().await;

    let names: Vec<_> = manager.sessions().map(|s| s.name.clone()).collect();
    assert_eq!(names, vec!["Chat 2".to_string(), "first question".to_string()]);
}

#[tokio::test]
async fn test_empty_sessions_do_not_survive_reload() {
    let store = Arc::new(MockChatStore::new());
    let mut manager = ready_manager(store.clone()).await;

    manager.create_new_chat().await;
    assert_eq!(manager.sessions().count(), 1);

    // Simulated reload: fresh manager over the same store.
    let mut reloaded = ChatSessionManager::new(store);
    reloaded.select_itinerary(Some("trip-1")).await;

    let chats = reloaded.chats().unwrap();
    assert!(chats.sessions.is_empty());
    assert_eq!(chats.active_session_id, None);
}

#[tokio::test]
async fn test_first_exchange_renames_session_once() {
    let mut manager = ready_manager(Arc::new(MockChatStore::new())).await;
    manager.create_new_chat().await;

    let (user, ai) = turn("Plan me a trip to Kyoto for two weeks");
    manager.add_exchange(user, ai).await;
    assert_eq!(
        manager.active_session().unwrap().name,
        "Plan me a trip to Kyoto for two weeks"
    );

    let (user, ai) = turn("Actually make it three weeks instead please");
    manager.add_exchange(user, ai).await;
    assert_eq!(
        manager.active_session().unwrap().name,
        "Plan me a trip to Kyoto for two weeks"
    );
    assert_eq!(manager.active_session().unwrap().exchanges.len(), 2);
}

#[tokio::test]
async fn test_first_exchange_name_is_truncated() {
    let mut manager = ready_manager(Arc::new(MockChatStore::new())).await;
    manager.create_new_chat().await;

    let question =
        "I would like a very detailed fourteen day itinerary through rural Japan in autumn";
    let (user, ai) = turn(question);
    manager.add_exchange(user, ai).await;

    let name = &manager.active_session().unwrap().name;
    assert!(name.ends_with("..."));
    assert!(question.starts_with(name.trim_end_matches("...")));
}

#[tokio::test]
async fn test_add_exchange_refreshes_updated_at() {
    let mut manager = ready_manager(Arc::new(MockChatStore::new())).await;
    manager.create_new_chat().await;
    let created_at = manager.active_session().unwrap().created_at;

    let (user, ai) = turn("hello");
    manager.add_exchange(user, ai).await;

    assert!(manager.active_session().unwrap().updated_at >= created_at);
}

#[tokio::test]
async fn test_delete_active_reassigns_to_front() {
    let mut manager = ready_manager(Arc::new(MockChatStore::new())).await;

    // Three non-empty sessions; newest first order is [C, B, A].
    for question in ["question a", "question b", "question c"] {
        manager.create_new_chat().await;
        let (user, ai) = turn(question);
        manager.add_exchange(user, ai).await;
    }

    let ids: Vec<_> = manager.sessions().map(|s| s.id.clone()).collect();
    let (c, b, a) = (ids[0].clone(), ids[1].clone(), ids[2].clone());

    manager.load_chat_session(&b).await;
    manager.delete_chat_session(&b).await;

    let chats = manager.chats().unwrap();
    assert_eq!(chats.sessions.len(), 2);
    assert_eq!(chats.active_session_id, Some(c.clone()));

    // Deleting a non-active session leaves the active id alone.
    manager.delete_chat_session(&a).await;
    assert_eq!(manager.chats().unwrap().active_session_id, Some(c.clone()));

    // Deleting the last remaining session clears the active id.
    manager.delete_chat_session(&c).await;
    let chats = manager.chats().unwrap();
    assert!(chats.sessions.is_empty());
    assert_eq!(chats.active_session_id, None);
}

#[tokio::test]
async fn test_rename_is_verbatim() {
    let mut manager = ready_manager(Arc::new(MockChatStore::new())).await;
    manager.create_new_chat().await;
    let (user, ai) = turn("hello");
    manager.add_exchange(user, ai).await;

    let id = manager.active_session().unwrap().id.clone();
    manager.rename_chat_session(&id, "Kyoto planning").await;
    assert_eq!(manager.active_session().unwrap().name, "Kyoto planning");

    // A later exchange must not clobber the explicit rename.
    let (user, ai) = turn("one more thing");
    manager.add_exchange(user, ai).await;
    assert_eq!(manager.active_session().unwrap().name, "Kyoto planning");
}

#[tokio::test]
async fn test_load_chat_session_switches_active() {
    let mut manager = ready_manager(Arc::new(MockChatStore::new())).await;

    manager.create_new_chat().await;
    let (user, ai) = turn("question one");
    manager.add_exchange(user, ai).await;
    let first = manager.active_session().unwrap().id.clone();

    manager.create_new_chat().await;
    let (user, ai) = turn("question two");
    manager.add_exchange(user, ai).await;

    manager.load_chat_session(&first).await;
    assert_eq!(manager.active_session().unwrap().id, first);
}

#[tokio::test]
async fn test_orphaned_active_session_repaired_and_healed() {
    let mut stored = ItineraryChats::new("trip-1");
    let mut session = ChatSession::new("Chat 1", ASSISTANT_GREETING);
    session.exchanges.push(ChatExchange::new(
        ChatMessage::new("hi", Sender::User),
        ChatMessage::new("hello", Sender::Ai),
    ));
    let surviving = session.id.clone();
    stored.sessions.push_front(session);
    stored.active_session_id = Some("deleted-session".to_string());

    let store = Arc::new(MockChatStore::seeded(vec![stored]));
    let mut manager = ChatSessionManager::new(store.clone());
    manager.select_itinerary(Some("trip-1")).await;

    // Repaired in memory.
    assert_eq!(
        manager.chats().unwrap().active_session_id,
        Some(surviving.clone())
    );
    // And healed on disk, without another mutation.
    let healed = store.load_for("trip-1").await.unwrap().unwrap();
    assert_eq!(healed.active_session_id, Some(surviving));
}

#[tokio::test]
async fn test_unreadable_store_degrades_to_empty() {
    let mut manager = ChatSessionManager::new(Arc::new(BrokenReadStore));
    manager.select_itinerary(Some("trip-1")).await;

    assert!(manager.is_loaded());
    let chats = manager.chats().unwrap();
    assert_eq!(chats.itinerary_id, "trip-1");
    assert!(chats.sessions.is_empty());
    assert_eq!(chats.active_session_id, None);
}

#[tokio::test]
async fn test_failed_write_keeps_in_memory_update() {
    let mut manager = ChatSessionManager::new(Arc::new(BrokenWriteStore));
    manager.select_itinerary(Some("trip-1")).await;

    assert!(manager.create_new_chat().await);
    assert_eq!(manager.sessions().count(), 1);
}

#[tokio::test]
async fn test_write_through_matches_reloaded_view() {
    let store = Arc::new(MockChatStore::new());
    let mut manager = ready_manager(store.clone()).await;

    manager.create_new_chat().await;
    let (user, ai) = turn("Where should I stay in Porto?");
    manager.add_exchange(user, ai).await;
    manager.create_new_chat().await;

    let stored = store.load_for("trip-1").await.unwrap().unwrap();
    let in_memory = manager.chats().unwrap().without_empty_sessions();
    assert_eq!(stored, in_memory);
}

#[tokio::test]
async fn test_switching_itinerary_discards_previous_state() {
    let store = Arc::new(MockChatStore::new());
    let mut manager = ready_manager(store.clone()).await;

    manager.create_new_chat().await;
    let (user, ai) = turn("hello");
    manager.add_exchange(user, ai).await;

    manager.select_itinerary(Some("trip-2")).await;
    let chats = manager.chats().unwrap();
    assert_eq!(chats.itinerary_id, "trip-2");
    assert!(chats.sessions.is_empty());

    // trip-1's state is still in the store, untouched.
    let kept = store.load_for("trip-1").await.unwrap().unwrap();
    assert_eq!(kept.sessions.len(), 1);
}
