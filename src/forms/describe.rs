use serde::{Deserialize, Serialize};
use serde_valid::Validate;

use crate::models::ItemKind;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct AnalyzeImage {
    #[validate(min_length = 1)]
    pub image_data: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct GeneratePrompt {
    #[validate(max_length = 2000)]
    pub description: Option<String>,
    pub image_url: Option<String>,
    #[serde(rename = "type")]
    pub kind: ItemKind,
}
