use async_trait::async_trait;
use std::sync::RwLock;

use crate::models::conversation::Conversation;
use crate::store::{ ConversationStore, StoreError };

enum Slot {
    Current(Option<Conversation>),
    Failing(String),
}

/// Holds the current conversation in memory, for embedding hosts and tests.
pub struct MemoryConversationStore {
    slot: RwLock<Slot>,
}

impl MemoryConversationStore {
    pub fn new(conversation: Option<Conversation>) -> Self {
        Self { slot: RwLock::new(Slot::Current(conversation)) }
    }

    /// A store whose every retrieval fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self { slot: RwLock::new(Slot::Failing(message.into())) }
    }

    pub fn set_conversation(&self, conversation: Option<Conversation>) {
        let mut slot = self.slot.write().unwrap_or_else(|e| e.into_inner());
        *slot = Slot::Current(conversation);
    }
}

#[async_trait]
impl ConversationStore for MemoryConversationStore {
    async fn get_conversation(&self) -> Result<Option<Conversation>, StoreError> {
        let slot = self.slot
            .read()
            .map_err(|e| StoreError::Retrieval(format!("Conversation store poisoned: {}", e)))?;
        match &*slot {
            Slot::Current(conversation) => Ok(conversation.clone()),
            Slot::Failing(message) => Err(StoreError::Retrieval(message.clone())),
        }
    }
}
