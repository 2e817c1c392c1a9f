mod file;
mod memory;

use async_trait::async_trait;
use log::info;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use crate::models::conversation::Conversation;

pub use self::file::FileConversationStore;
pub use self::memory::MemoryConversationStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Conversation file IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Conversation JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    /// Failure reported by the host, passed through untouched.
    #[error("{0}")]
    Retrieval(String),
}

/// Source of the conversation the command acts on.
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// `Ok(None)` means the host has no current conversation.
    async fn get_conversation(&self) -> Result<Option<Conversation>, StoreError>;
}

pub fn initialize_conversation_store(path: PathBuf) -> Arc<dyn ConversationStore> {
    info!("Conversations will be read from: {}", path.display());
    Arc::new(FileConversationStore::new(path))
}
