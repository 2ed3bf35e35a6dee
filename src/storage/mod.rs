//! Storage collaborator boundary.
//!
//! All persistence goes through the [`Storage`] trait so route handlers and
//! services stay independent of the backing technology. The in-memory
//! implementation in [`memory`] is the reference backend; a database-backed
//! implementation only has to honor the same contract (distinct not-found
//! outcome, newest-first listings, store-assigned monotone timestamps, and
//! atomic lookup-or-create for chats).

pub mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{Chat, Item, ItemKind, Message, NewChat, NewItem, NewMessage, NewUser, User};

pub use memory::InMemoryStorage;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The requested entity does not exist. Distinct from a backend fault so
    /// callers can tell "no data" from "failure".
    #[error("{0} not found")]
    NotFound(&'static str),
    /// Any collaborator-side fault. Propagated unchanged to the caller.
    #[error("storage backend failure: {0}")]
    Backend(String),
}

#[async_trait]
pub trait Storage: Send + Sync {
    // users
    async fn create_user(&self, new: NewUser) -> Result<User, StorageError>;
    async fn get_user(&self, id: Uuid) -> Result<Option<User>, StorageError>;
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, StorageError>;

    // items
    async fn create_item(&self, new: NewItem) -> Result<Item, StorageError>;
    async fn get_item(&self, id: Uuid) -> Result<Option<Item>, StorageError>;
    /// All items of one kind, newest first.
    async fn list_items(&self, kind: ItemKind) -> Result<Vec<Item>, StorageError>;
    async fn list_items_by_user(
        &self,
        kind: ItemKind,
        user_id: Uuid,
    ) -> Result<Vec<Item>, StorageError>;
    /// Deletes an item of the given kind. `NotFound` when the id is unknown
    /// or belongs to an item of another kind.
    async fn delete_item(&self, kind: ItemKind, id: Uuid) -> Result<(), StorageError>;

    // chats
    /// Atomic lookup-or-create keyed on the unordered participant pair.
    /// Returns the chat and whether it was freshly created.
    async fn create_chat(&self, new: NewChat) -> Result<(Chat, bool), StorageError>;
    async fn get_chat(&self, id: Uuid) -> Result<Option<Chat>, StorageError>;
    /// All chats containing the user, newest first.
    async fn list_chats_by_participant(&self, user_id: Uuid) -> Result<Vec<Chat>, StorageError>;
    async fn find_chat_by_participants(
        &self,
        participants: &[Uuid; 2],
    ) -> Result<Option<Chat>, StorageError>;

    // messages
    /// Appends a message. Rejects a dead `chat_id` with `NotFound`; the
    /// creation timestamp is assigned here, not by the caller.
    async fn create_message(&self, new: NewMessage) -> Result<Message, StorageError>;
    /// Messages of a chat, ascending by creation time, insertion-order ties.
    async fn list_messages_by_chat(&self, chat_id: Uuid) -> Result<Vec<Message>, StorageError>;
}
