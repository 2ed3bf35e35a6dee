use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Found,
    Lost,
}

/// A reported item. Immutable after creation except deletion (found items
/// only); the keyword set is derived once from the prompt text at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub user_id: Uuid,
    pub kind: ItemKind,
    pub prompt: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub image_data: Option<String>,
    pub keywords: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewItem {
    pub user_id: Uuid,
    pub kind: ItemKind,
    pub prompt: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub image_data: Option<String>,
    pub keywords: Vec<String>,
}
