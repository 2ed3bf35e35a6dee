use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use std::sync::Arc;

use crate::forms;
use crate::helpers::JsonResponse;
use crate::models::{Item, ItemKind};
use crate::storage::Storage;

#[tracing::instrument(name = "Report found item.", skip(storage, form))]
#[post("")]
pub async fn add_handler(
    form: web::Json<forms::ItemForm>,
    storage: web::Data<Arc<dyn Storage>>,
) -> Result<impl Responder> {
    form.validate()
        .map_err(|err| JsonResponse::<Item>::build().bad_request(err.to_string()))?;

    let item = storage
        .create_item(form.into_inner().into_new_item(ItemKind::Found))
        .await
        .map_err(|_err| JsonResponse::<Item>::build().internal_server_error(""))?;

    tracing::info!(item_id = %item.id, keywords = ?item.keywords, "found item saved");
    Ok(JsonResponse::build().set_id(item.id).set_item(item).ok("Saved"))
}
