use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use std::sync::Arc;

use crate::connectors::DescribeConnector;
use crate::forms;
use crate::helpers::{parse_data_url, JsonResponse};
use crate::models::{Message, NewMessage};
use crate::storage::{Storage, StorageError};

/// Sends an image message. The caption comes from the description connector;
/// when that call fails the message still goes out with a generic caption.
#[tracing::instrument(name = "Send image message.", skip(storage, describe, form))]
#[post("/image")]
pub async fn image_handler(
    form: web::Json<forms::ImageMessageForm>,
    storage: web::Data<Arc<dyn Storage>>,
    describe: web::Data<Arc<dyn DescribeConnector>>,
) -> Result<impl Responder> {
    form.validate()
        .map_err(|err| JsonResponse::<Message>::build().bad_request(err.to_string()))?;
    let form = form.into_inner();

    let payload = parse_data_url(&form.image_data)
        .map_err(|err| JsonResponse::<Message>::build().bad_request(err))?;

    let caption = match describe
        .describe_chat_image(&payload.data, &payload.mime_type)
        .await
    {
        Ok(caption) => caption,
        Err(err) => {
            tracing::warn!("chat image description failed: {}", err);
            "Image shared".to_string()
        }
    };

    let message = storage
        .create_message(NewMessage {
            chat_id: form.chat_id,
            sender_id: form.sender_id,
            content: format!("[Image] {}", caption),
            image_data: Some(form.image_data),
        })
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
