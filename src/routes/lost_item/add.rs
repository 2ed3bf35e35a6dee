use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use std::sync::Arc;

use crate::forms;
use crate::helpers::JsonResponse;
use crate::models::ItemKind;
use crate::services::MatchService;
use crate::storage::Storage;
use crate::views;

/// Reports a lost item and computes candidate matches. Creation and matching
/// are sequential, independent steps: when matching fails the item stays
/// persisted and an empty match list is returned.
#[tracing::instrument(name = "Report lost item.", skip(storage, matcher, form))]
#[post("")]
pub async fn add_handler(
    form: web::Json<forms::ItemForm>,
    storage: web::Data<Arc<dyn Storage>>,
    matcher: web::Data<MatchService>,
) -> Result<impl Responder> {
    form.validate()
        .map_err(|err| JsonResponse::<views::Reported>::build().bad_request(err.to_string()))?;

    let item = storage
        .create_item(form.into_inner().into_new_item(ItemKind::Lost))
        .await
        .map_err(|_err| JsonResponse::<views::Reported>::build().internal_server_error(""))?;

    let matches = match matcher.find_matches(&item).await {
        Ok(matches) => matches,
        Err(err) => {
            tracing::error!(item_id = %item.id, "match computation failed: {:?}", err);
            Vec::new()
        }
    };

    tracing::info!(item_id = %item.id, matches = matches.len(), "lost item saved");
    Ok(JsonResponse::build()
        .set_id(item.id)
        .set_item(views::Reported { item, matches })
        .ok("Saved"))
}
