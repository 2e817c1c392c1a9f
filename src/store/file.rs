use async_trait::async_trait;
use log::debug;
use std::path::PathBuf;

use crate::models::conversation::{ Conversation, ConversationData };
use crate::store::{ ConversationStore, StoreError };

/// Reads the host's JSON conversation export. A missing file or a `null`
/// document means there is no current conversation.
pub struct FileConversationStore {
    path: PathBuf,
}

impl FileConversationStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl ConversationStore for FileConversationStore {
    async fn get_conversation(&self) -> Result<Option<Conversation>, StoreError> {
        let json_str = match tokio::fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No conversation file at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        let data: Option<ConversationData> = serde_json::from_str(&json_str)?;
        Ok(data.map(Conversation::from))
    }
}
