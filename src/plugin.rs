use log::{ info, warn };
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

use crate::command::{ parse_args, CommandError, PasteOptions };
use crate::completions::{ command_with_leader, COMMAND_NAME };
use crate::config::PluginConfig;
use crate::models::conversation::Conversation;
use crate::paste::{ PasteClient, PasteError, PasteLinks, PasteSubmitter };
use crate::store::{ ConversationStore, StoreError };
use crate::transcript::format_conversation;

const COMMAND_HELP: &str = "Post a conversation to https://pastebin.com

Arguments:
    visibility: Optional, one of: public, unlisted, private
    expire_time: Optional, one of: N, 10M, 1H, 1D, 1W, 2W, 1M, 6M, 1Y
    title: Optional, custom title, if not provided, conversation title will be used.

Examples:
    # Use the defaults.
    {COMMAND}
    # An unlisted paste.
    {COMMAND} unlisted
    # Custom everything
    {COMMAND} public 10M My custom title
";

#[derive(Debug, Error)]
pub enum PluginError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("No current conversation")]
    NoConversation,
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error("Failed to render transcript: {0}")]
    Transcript(#[from] serde_json::Error),
    #[error(transparent)]
    Paste(#[from] PasteError),
}

/// What the host shows for one command invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandResponse {
    pub success: bool,
    pub data: Option<String>,
    pub message: String,
}

impl From<Result<PasteLinks, PluginError>> for CommandResponse {
    fn from(result: Result<PasteLinks, PluginError>) -> Self {
        match result {
            Ok(links) => {
                let mut message_parts = vec![format!("Paste URL: {}", links.url)];
                if let Some(raw_url) = &links.raw_url {
                    message_parts.push(format!("Raw URL: {}", raw_url));
                }
                CommandResponse {
                    success: true,
                    data: Some(links.url),
                    message: message_parts.join("\n"),
                }
            }
            Err(e) => CommandResponse {
                success: false,
                data: None,
                message: e.to_string(),
            },
        }
    }
}

pub fn command_help() -> String {
    COMMAND_HELP.replace("{COMMAND}", &command_with_leader(COMMAND_NAME))
}

pub struct PastebinPlugin {
    config: PluginConfig,
    store: Arc<dyn ConversationStore>,
    submitter: PasteSubmitter,
}

impl PastebinPlugin {
    pub fn new(
        config: PluginConfig,
        store: Arc<dyn ConversationStore>,
        client: Arc<dyn PasteClient>
    ) -> Self {
        info!("--- Pastebin Plugin ---");
        info!("Default Visibility: {}", config.paste_defaults.visibility);
        info!("Default Expire: {}", config.paste_defaults.expire);
        info!("Paste Format: {}", config.paste_defaults.format);
        info!("Include Raw Link: {}", config.include_raw_link);
        info!("-----------------------");

        let submitter = PasteSubmitter::new(
            client,
            config.paste_defaults.format.clone(),
            config.include_raw_link
        );
        Self {
            config,
            store,
            submitter,
        }
    }

    pub async fn paste(
        &self,
        conversation: &Conversation,
        options: &PasteOptions
    ) -> Result<PasteLinks, PluginError> {
        let content = format_conversation(conversation)?;
        info!(
            "Pasting conversation ({} messages) with visibility: {}, expire: {}, title: {}",
            conversation.messages.len(),
            options.visibility,
            options.expire,
            options.title.as_deref().unwrap_or(&conversation.title)
        );
        Ok(self.submitter.submit(content, options, &conversation.title).await?)
    }

    pub async fn run(&self, args: &str) -> Result<PasteLinks, PluginError> {
        let conversation = self.store.get_conversation().await?.ok_or(PluginError::NoConversation)?;
        let defaults = &self.config.paste_defaults;
        let options = parse_args(args, &defaults.visibility, &defaults.expire)?;
        self.paste(&conversation, &options).await
    }

    /// Entry point for the `pastebin` command; failures come back as a message.
    pub async fn command_pastebin(&self, args: &str) -> CommandResponse {
        let result = self.run(args).await;
        if let Err(e) = &result {
            warn!("pastebin command failed: {}", e);
        }
        CommandResponse::from(result)
    }
}
