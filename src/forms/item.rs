use serde::{Deserialize, Serialize};
use serde_valid::Validate;
use uuid::Uuid;

use crate::matching;
use crate::models::{ItemKind, NewItem};

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct ItemForm {
    pub user_id: Uuid,
    #[validate(min_length = 1)]
    #[validate(max_length = 2000)]
    pub prompt: String,
    #[validate(max_length = 2000)]
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub image_data: Option<String>,
}

impl ItemForm {
    /// Derives the keyword set once, from the prompt text with the
    /// description as fallback when the prompt is blank.
    pub fn into_new_item(self, kind: ItemKind) -> NewItem {
        let source = if self.prompt.trim().is_empty() {
            self.description.as_deref().unwrap_or("")
        } else {
            self.prompt.as_str()
        };
        let keywords = matching::extract(source);

        NewItem {
            user_id: self.user_id,
            kind,
            prompt: self.prompt,
            description: self.description,
            image_url: self.image_url,
            image_data: self.image_data,
            keywords,
        }
    }
}
