use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{ItemKind, Message};
use crate::views::Profile;

/// A chat assembled for display: the raw chat record joined with its full
/// message list (chronological), summary stats, and the participant
/// identities that could be resolved. Participants missing from the user
/// store are omitted rather than replaced with placeholders; the client
/// falls back to showing the raw id.
#[derive(Debug, Serialize)]
pub struct Conversation {
    pub id: Uuid,
    pub participants: [Uuid; 2],
    pub item_id: Uuid,
    pub item_kind: ItemKind,
    pub item_description: String,
    pub created_at: DateTime<Utc>,
    pub messages: Vec<Message>,
    pub last_message: Option<Message>,
    pub message_count: usize,
    pub participants_details: Vec<Profile>,
}
