use actix_web::{get, web, Responder, Result};
use std::sync::Arc;
use uuid::Uuid;

use crate::helpers::JsonResponse;
use crate::models::{Item, ItemKind};
use crate::storage::Storage;

#[tracing::instrument(name = "List found items.", skip(storage))]
#[get("")]
pub async fn list_handler(storage: web::Data<Arc<dyn Storage>>) -> Result<impl Responder> {
    storage
        .list_items(ItemKind::Found)
        .await
        .map(|items| JsonResponse::build().set_list(items).ok("OK"))
        .map_err(|_err| JsonResponse::<Item>::build().internal_server_error(""))
}

#[tracing::instrument(name = "List a user's found items.", skip(storage))]
#[get("/user/{user_id}")]
pub async fn user_list_handler(
    path: web::Path<(Uuid,)>,
    storage: web::Data<Arc<dyn Storage>>,
) -> Result<impl Responder> {
    storage
        .list_items_by_user(ItemKind::Found, path.0)
        .await
        .map(|items| JsonResponse::build().set_list(items).ok("OK"))
        .map_err(|_err| JsonResponse::<Item>::build().internal_server_error(""))
}
