use serde::{Deserialize, Serialize};
use serde_valid::Validate;
use uuid::Uuid;

use crate::models::NewMessage;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct MessageForm {
    pub chat_id: Uuid,
    pub sender_id: Uuid,
    #[validate(min_length = 1)]
    #[validate(max_length = 4000)]
    pub content: String,
    pub image_data: Option<String>,
}

impl From<MessageForm> for NewMessage {
    fn from(form: MessageForm) -> Self {
        NewMessage {
            chat_id: form.chat_id,
            sender_id: form.sender_id,
            content: form.content,
            image_data: form.image_data,
        }
    }
}

/// Image-only message: the caption is produced server-side by the
/// description connector.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct ImageMessageForm {
    pub chat_id: Uuid,
    pub sender_id: Uuid,
    #[validate(min_length = 1)]
    pub image_data: String,
}
