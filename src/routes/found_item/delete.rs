use actix_web::{delete, web, Responder, Result};
use std::sync::Arc;
use uuid::Uuid;

use crate::helpers::JsonResponse;
use crate::models::{Item, ItemKind};
use crate::storage::{Storage, StorageError};

#[tracing::instrument(name = "Delete found item.", skip(storage))]
#[delete("/{id}")]
pub async fn delete_handler(
    path: web::Path<(Uuid,)>,
    storage: web::Data<Arc<dyn Storage>>,
) -> Result<impl Responder> {
    let item_id = path.0;
    storage
        .delete_item(ItemKind::Found, item_id)
        .await
        .map(|_| JsonResponse::<Item>::build().set_id(item_id).ok("Deleted"))
        .map_err(|err| match err {
            StorageError::NotFound(_) => {
                JsonResponse::<Item>::build().not_found("not found")
            }
            _ => JsonResponse::<Item>::build().internal_server_error(""),
        })
}
