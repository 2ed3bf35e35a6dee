use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use indexmap::IndexMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{Storage, StorageError};
use crate::models::{
    same_participants, Chat, Item, ItemKind, Message, NewChat, NewItem, NewMessage, NewUser, User,
};

/// In-memory reference backend. `IndexMap` keeps insertion order, which makes
/// iteration deterministic for a fixed store state; a single `RwLock` around
/// the whole state gives read-your-writes and atomic check-then-create for
/// chats.
pub struct InMemoryStorage {
    state: RwLock<State>,
}

#[derive(Default)]
struct State {
    users: IndexMap<Uuid, User>,
    items: IndexMap<Uuid, Item>,
    chats: IndexMap<Uuid, Chat>,
    messages: IndexMap<Uuid, Message>,
    last_stamp: Option<DateTime<Utc>>,
}

impl State {
    /// Strictly increasing creation timestamps, assigned at insertion. Keeps
    /// listing order reproducible even when the wall clock does not advance
    /// between two inserts.
    fn next_stamp(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let stamp = match self.last_stamp {
            Some(last) if now <= last => last + Duration::nanoseconds(1),
            _ => now,
        };
        self.last_stamp = Some(stamp);
        stamp
    }
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(State::default()),
        }
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn create_user(&self, new: NewUser) -> Result<User, StorageError> {
        let mut state = self.state.write().await;
        let user = User {
            id: Uuid::new_v4(),
            email: new.email,
            password: new.password,
            created_at: state.next_stamp(),
        };
        state.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_user(&self, id: Uuid) -> Result<Option<User>, StorageError> {
        let state = self.state.read().await;
        Ok(state.users.get(&id).cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, StorageError> {
        let state = self.state.read().await;
        Ok(state.users.values().find(|u| u.email == email).cloned())
    }

    async fn create_item(&self, new: NewItem) -> Result<Item, StorageError> {
        let mut state = self.state.write().await;
        let item = Item {
            id: Uuid::new_v4(),
            user_id: new.user_id,
            kind: new.kind,
            prompt: new.prompt,
            description: new.description,
            image_url: new.image_url,
            image_data: new.image_data,
            keywords: new.keywords,
            created_at: state.next_stamp(),
        };
        state.items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn get_item(&self, id: Uuid) -> Result<Option<Item>, StorageError> {
        let state = self.state.read().await;
        Ok(state.items.get(&id).cloned())
    }

    async fn list_items(&self, kind: ItemKind) -> Result<Vec<Item>, StorageError> {
        let state = self.state.read().await;
        let mut items: Vec<Item> = state
            .items
            .values()
            .filter(|item| item.kind == kind)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    async fn list_items_by_user(
        &self,
        kind: ItemKind,
        user_id: Uuid,
    ) -> Result<Vec<Item>, StorageError> {
        let state = self.state.read().await;
        let mut items: Vec<Item> = state
            .items
            .values()
            .filter(|item| item.kind == kind && item.user_id == user_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    async fn delete_item(&self, kind: ItemKind, id: Uuid) -> Result<(), StorageError> {
        let mut state = self.state.write().await;
        match state.items.get(&id) {
            Some(item) if item.kind == kind => {
                state.items.shift_remove(&id);
                Ok(())
            }
            _ => Err(StorageError::NotFound("item")),
        }
    }

    async fn create_chat(&self, new: NewChat) -> Result<(Chat, bool), StorageError> {
        // single write lock covers the lookup and the insert, so concurrent
        // identical requests from both participants cannot duplicate a chat
        let mut state = self.state.write().await;
        if let Some(existing) = state
            .chats
            .values()
            .find(|chat| same_participants(&chat.participants, &new.participants))
        {
            return Ok((existing.clone(), false));
        }

        let chat = Chat {
            id: Uuid::new_v4(),
            participants: new.participants,
            item_id: new.item_id,
            item_kind: new.item_kind,
            item_description: new.item_description,
            created_at: state.next_stamp(),
        };
        state.chats.insert(chat.id, chat.clone());
        Ok((chat, true))
    }

    async fn get_chat(&self, id: Uuid) -> Result<Option<Chat>, StorageError> {
        let state = self.state.read().await;
        Ok(state.chats.get(&id).cloned())
    }

    async fn list_chats_by_participant(&self, user_id: Uuid) -> Result<Vec<Chat>, StorageError> {
        let state = self.state.read().await;
        let mut chats: Vec<Chat> = state
            .chats
            .values()
            .filter(|chat| chat.participants.contains(&user_id))
            .cloned()
            .collect();
        chats.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(chats)
    }

    async fn find_chat_by_participants(
        &self,
        participants: &[Uuid; 2],
    ) -> Result<Option<Chat>, StorageError> {
        let state = self.state.read().await;
        Ok(state
            .chats
            .values()
            .find(|chat| same_participants(&chat.participants, participants))
            .cloned())
    }

    async fn create_message(&self, new: NewMessage) -> Result<Message, StorageError> {
        let mut state = self.state.write().await;
        if !state.chats.contains_key(&new.chat_id) {
            return Err(StorageError::NotFound("chat"));
        }

        let message = Message {
            id: Uuid::new_v4(),
            chat_id: new.chat_id,
            sender_id: new.sender_id,
            content: new.content,
            image_data: new.image_data,
            created_at: state.next_stamp(),
        };
        state.messages.insert(message.id, message.clone());
        Ok(message)
    }

    async fn list_messages_by_chat(&self, chat_id: Uuid) -> Result<Vec<Message>, StorageError> {
        let state = self.state.read().await;
        let mut messages: Vec<Message> = state
            .messages
            .values()
            .filter(|message| message.chat_id == chat_id)
            .cloned()
            .collect();
        messages.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(messages)
    }
}
