use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use std::sync::Arc;

use crate::forms;
use crate::helpers::JsonResponse;
use crate::models::{Chat, NewMessage};
use crate::storage::Storage;

/// Opens (or returns) the chat for a participant pair. Creation is idempotent
/// per unordered pair; the storage layer performs the lookup-or-create
/// atomically.
#[tracing::instrument(name = "Open chat.", skip(storage, form))]
#[post("")]
pub async fn add_handler(
    form: web::Json<forms::ChatForm>,
    storage: web::Data<Arc<dyn Storage>>,
) -> Result<impl Responder> {
    form.validate()
        .map_err(|err| JsonResponse::<Chat>::build().bad_request(err.to_string()))?;
    let form = form.into_inner();

    let participants = form
        .participant_pair()
        .map_err(|err| JsonResponse::<Chat>::build().bad_request(err))?;

    let image_data = form.lost_item_image_data.clone();
    let item_description = form.item_description.clone();
    let (chat, created) = storage
        .create_chat(form.into_new_chat(participants))
        .await
        .map_err(|_err| JsonResponse::<Chat>::build().internal_server_error(""))?;

    // On a fresh chat, share the lost user's image as an intro message. A
    // failure here must not fail chat creation.
    if created {
        if let Some(image_data) = image_data {
            let intro = NewMessage {
                chat_id: chat.id,
                sender_id: participants[0],
                content: format!(
                    "[Lost Item Details] I lost this item and here are the details: {}",
                    item_description
                ),
                image_data: Some(image_data),
            };
            if let Err(err) = storage.create_message(intro).await {
                tracing::warn!(chat_id = %chat.id, "could not auto-share lost item image: {:?}", err);
            }
        }
    }

    Ok(JsonResponse::build().set_id(chat.id).set_item(chat).ok("OK"))
}
