use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use std::sync::Arc;

use crate::forms;
use crate::helpers::JsonResponse;
use crate::models::{Message, NewMessage};
use crate::storage::{Storage, StorageError};

#[tracing::instrument(name = "Send message.", skip(storage, form))]
#[post("")]
pub async fn add_handler(
    form: web::Json<forms::MessageForm>,
    storage: web::Data<Arc<dyn Storage>>,
) -> Result<impl Responder> {
    form.validate()
        .map_err(|err| JsonResponse::<Message>::build().bad_request(err.to_string()))?;

    let message = storage
        .create_message(NewMessage::from(form.into_inner()))
        .await
        .map_err(|err| match err {
            StorageError::NotFound(_) => JsonResponse::<Message>::build().not_found("chat not found"),
            _ => JsonResponse::<Message>::build().internal_server_error(""),
        })?;

    Ok(JsonResponse::build()
        .set_id(message.id)
        .set_item(message)
        .ok("Sent"))
}
