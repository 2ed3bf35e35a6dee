use serde::{Deserialize, Serialize};
use serde_valid::Validate;
use uuid::Uuid;

use crate::models::{ItemKind, NewChat};

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct ChatForm {
    #[validate(min_items = 2)]
    #[validate(max_items = 2)]
    pub participants: Vec<Uuid>,
    pub item_id: Uuid,
    pub item_kind: ItemKind,
    #[validate(max_length = 2000)]
    pub item_description: String,
    /// When present on a fresh chat, an intro message carrying this image is
    /// posted on behalf of the lost-item reporter (first participant).
    pub lost_item_image_data: Option<String>,
}

impl ChatForm {
    /// The two participants as a pair, rejecting duplicates. Length is
    /// already enforced by validation.
    pub fn participant_pair(&self) -> Result<[Uuid; 2], String> {
        match self.participants.as_slice() {
            [a, b] if a != b => Ok([*a, *b]),
            [a, b] if a == b => Err("participants must be two distinct users".to_string()),
            _ => Err("participants must contain exactly two users".to_string()),
        }
    }

    pub fn into_new_chat(self, participants: [Uuid; 2]) -> NewChat {
        NewChat {
            participants,
            item_id: self.item_id,
            item_kind: self.item_kind,
            item_description: self.item_description,
        }
    }
}
