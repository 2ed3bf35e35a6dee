use serde::Serialize;
use std::sync::Arc;

use crate::matching;
use crate::models::{Item, ItemKind};
use crate::storage::{Storage, StorageError};

/// Upper bound on candidates returned per lost item.
pub const MAX_MATCHES: usize = 3;

/// Ephemeral match candidate. Never persisted; recomputed on demand when a
/// lost item is submitted.
#[derive(Debug, Clone, Serialize)]
pub struct ItemMatch {
    pub item: Item,
    pub match_score: usize,
}

/// Ranks found-item candidates against a lost-item query. Read-only over the
/// store; storage failures propagate unchanged.
pub struct MatchService {
    storage: Arc<dyn Storage>,
}

impl MatchService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    #[tracing::instrument(name = "Find matches for a lost item.", skip(self, lost_item), fields(lost_item_id = %lost_item.id))]
    pub async fn find_matches(&self, lost_item: &Item) -> Result<Vec<ItemMatch>, StorageError> {
        let candidates = self.storage.list_items(ItemKind::Found).await?;

        let mut matches: Vec<ItemMatch> = candidates
            .into_iter()
            .filter(|candidate| candidate.user_id != lost_item.user_id)
            .map(|candidate| {
                let match_score = matching::score(&lost_item.keywords, &candidate.keywords);
                ItemMatch {
                    item: candidate,
                    match_score,
                }
            })
            .filter(|candidate| candidate.match_score > 0)
            .collect();

        // stable sort keeps the storage listing order for equal scores
        matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        matches.truncate(MAX_MATCHES);

        tracing::info!(matches = matches.len(), "match computation finished");
        Ok(matches)
    }
}
