use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use std::sync::Arc;

use crate::forms;
use crate::helpers::JsonResponse;
use crate::models::NewUser;
use crate::storage::Storage;
use crate::views;

/// Demo-mode login: any credentials are accepted and an unknown email simply
/// creates the account.
#[tracing::instrument(name = "Login.", skip(storage, form), fields(email = %form.email))]
#[post("/login")]
pub async fn login_handler(
    form: web::Json<forms::Login>,
    storage: web::Data<Arc<dyn Storage>>,
) -> Result<impl Responder> {
    form.validate()
        .map_err(|err| JsonResponse::<views::Profile>::build().bad_request(err.to_string()))?;
    let form = form.into_inner();

    let existing = storage
        .get_user_by_email(&form.email)
        .await
        .map_err(|_err| JsonResponse::<views::Profile>::build().internal_server_error(""))?;

    let user = match existing {
        Some(user) => user,
        None => storage
            .create_user(NewUser {
                email: form.email,
                password: form.password,
            })
            .await
            .map_err(|_err| JsonResponse::<views::Profile>::build().internal_server_error(""))?,
    };

    Ok(JsonResponse::build()
        .set_id(user.id)
        .set_item(views::Profile::from(user))
        .ok("OK"))
}
