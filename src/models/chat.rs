use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ItemKind;

/// A two-party conversation thread tied to a matched item. One chat exists
/// per unordered participant pair; creation is idempotent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: Uuid,
    pub participants: [Uuid; 2],
    pub item_id: Uuid,
    pub item_kind: ItemKind,
    pub item_description: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewChat {
    pub participants: [Uuid; 2],
    pub item_id: Uuid,
    pub item_kind: ItemKind,
    pub item_description: String,
}

/// Order-independent pair equality. Duplicate participants are rejected at
/// the form boundary, so two distinct ids are assumed here.
pub fn same_participants(a: &[Uuid; 2], b: &[Uuid; 2]) -> bool {
    (a[0] == b[0] && a[1] == b[1]) || (a[0] == b[1] && a[1] == b[0])
}
