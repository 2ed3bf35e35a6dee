use serde::Serialize;

use crate::models::Item;
use crate::services::ItemMatch;

/// Response body for a freshly reported lost item: the persisted item plus
/// the candidate matches computed for it.
#[derive(Debug, Serialize)]
pub struct Reported {
    pub item: Item,
    pub matches: Vec<ItemMatch>,
}

/// Response body for an AI-described image: the generated prompt text and the
/// data URL echoed back for the client session.
#[derive(Debug, Serialize)]
pub struct DescribedImage {
    pub prompt: String,
    pub image_data: String,
}

/// Response body for the text-only prompt generator.
#[derive(Debug, Serialize)]
pub struct GeneratedPrompt {
    pub prompt: String,
}
