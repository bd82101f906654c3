use tracing::{debug, info};

use crate::config::ChatConfig;
use crate::error::DeskResult;
use crate::models::ChatMessage;
use crate::store::{DeskStore, KeyValueStore};

/// Sender name used when nobody is signed in
pub const GUEST_NAME: &str = "Guest";

/// Per-listing conversation between a visitor and the listing owner
pub struct ChatRoom<'a, S: KeyValueStore> {
    store: &'a mut DeskStore<S>,
    config: &'a ChatConfig,
}

impl<'a, S: KeyValueStore> ChatRoom<'a, S> {
    pub fn new(store: &'a mut DeskStore<S>, config: &'a ChatConfig) -> Self {
        Self { store, config }
    }

    /// Stored messages for `property_id`, or the owner's greeting when the
    /// conversation is empty. The greeting is never persisted.
    pub fn transcript(&self, property_id: &str) -> DeskResult<Vec<ChatMessage>> {
        let messages = self.store.messages(property_id)?;
        if messages.is_empty() {
            return Ok(vec![ChatMessage::received(
                &self.config.greeting,
                &self.config.owner_name,
            )]);
        }
        Ok(messages)
    }

    /// Append the visitor's message. Blank input is ignored.
    pub fn send(&mut self, property_id: &str, text: &str) -> DeskResult<Option<ChatMessage>> {
        let text = text.trim();
        if text.is_empty() {
            debug!("Ignoring empty chat message for {}", property_id);
            return Ok(None);
        }

        let sender = self
            .store
            .current_user()?
            .map(|user| user.name)
            .unwrap_or_else(|| GUEST_NAME.to_string());
        let message = ChatMessage::sent(text, sender);
        self.store.append_message(property_id, message.clone())?;
        info!("💬 {} -> listing {}", message.sender, property_id);
        Ok(Some(message))
    }

    /// Wait the configured delay, then append the owner's canned reply.
    pub async fn reply(&mut self, property_id: &str) -> DeskResult<ChatMessage> {
        tokio::time::sleep(self.config.reply_delay()).await;

        let message = ChatMessage::received(&self.config.auto_reply, &self.config.owner_name);
        self.store.append_message(property_id, message.clone())?;
        debug!("Auto-replied on listing {}", property_id);
        Ok(message)
    }
}
