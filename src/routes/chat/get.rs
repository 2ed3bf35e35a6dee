use actix_web::{get, web, Responder, Result};
use uuid::Uuid;

use crate::helpers::JsonResponse;
use crate::services::ConversationService;
use crate::views;

#[tracing::instrument(name = "List a user's conversations.", skip(conversations))]
#[get("/user/{user_id}")]
pub async fn user_list_handler(
    path: web::Path<(Uuid,)>,
    conversations: web::Data<ConversationService>,
) -> Result<impl Responder> {
    conversations
        .chats_for_user(path.0)
        .await
        .map(|list| JsonResponse::build().set_list(list).ok("OK"))
        .map_err(|_err| JsonResponse::<views::Conversation>::build().internal_server_error(""))
}

#[tracing::instrument(name = "Get a conversation.", skip(conversations))]
#[get("/{chat_id}")]
pub async fn get_handler(
    path: web::Path<(Uuid,)>,
    conversations: web::Data<ConversationService>,
) -> Result<impl Responder> {
    let conversation = conversations
        .chat_detail(path.0)
        .await
        .map_err(|_err| JsonResponse::<views::Conversation>::build().internal_server_error(""))?
        .ok_or_else(|| JsonResponse::<views::Conversation>::build().not_found("not found"))?;

    Ok(JsonResponse::build()
        .set_id(conversation.id)
        .set_item(conversation)
        .ok("OK"))
}
