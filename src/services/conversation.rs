use std::sync::Arc;
use uuid::Uuid;

use crate::models::Chat;
use crate::storage::{Storage, StorageError};
use crate::views::{Conversation, Profile};

/// Assembles chat records into display-ready conversations: the chronological
/// message list, summary stats, and resolved participant identities.
pub struct ConversationService {
    storage: Arc<dyn Storage>,
}

impl ConversationService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// All conversations the user takes part in, newest chat first. Fails the
    /// whole operation on any storage fault, never returning partial results.
    #[tracing::instrument(name = "Assemble conversations for a user.", skip(self))]
    pub async fn chats_for_user(&self, user_id: Uuid) -> Result<Vec<Conversation>, StorageError> {
        let chats = self.storage.list_chats_by_participant(user_id).await?;

        let mut conversations = Vec::with_capacity(chats.len());
        for chat in chats {
            conversations.push(self.assemble(chat).await?);
        }
        Ok(conversations)
    }

    /// One conversation, or `None` when the chat id is unknown. Not-found is
    /// distinct from a storage failure.
    #[tracing::instrument(name = "Assemble a single conversation.", skip(self))]
    pub async fn chat_detail(&self, chat_id: Uuid) -> Result<Option<Conversation>, StorageError> {
        match self.storage.get_chat(chat_id).await? {
            Some(chat) => Ok(Some(self.assemble(chat).await?)),
            None => Ok(None),
        }
    }

    async fn assemble(&self, chat: Chat) -> Result<Conversation, StorageError> {
        let messages = self.storage.list_messages_by_chat(chat.id).await?;

        // participants missing from the user store are omitted, not replaced
        // with placeholders; clients fall back to the raw id
        let mut participants_details = Vec::with_capacity(chat.participants.len());
        for participant_id in chat.participants {
            if let Some(user) = self.storage.get_user(participant_id).await? {
                participants_details.push(Profile::from(user));
            }
        }

        let last_message = messages.last().cloned();
        Ok(Conversation {
            id: chat.id,
            participants: chat.participants,
            item_id: chat.item_id,
            item_kind: chat.item_kind,
            item_description: chat.item_description,
            created_at: chat.created_at,
            message_count: messages.len(),
            last_message,
            messages,
            participants_details,
        })
    }
}
