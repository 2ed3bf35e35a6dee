use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use std::sync::Arc;

use crate::connectors::{describe_service, DescribeConnector};
use crate::forms;
use crate::helpers::{parse_data_url, JsonResponse};
use crate::views;

/// Generates a report prompt from an uploaded image via the description
/// connector. The image is echoed back so the client can attach it to the
/// subsequent item report.
#[tracing::instrument(name = "Describe uploaded image.", skip(describe, form))]
#[post("/image")]
pub async fn image_handler(
    form: web::Json<forms::AnalyzeImage>,
    describe: web::Data<Arc<dyn DescribeConnector>>,
) -> Result<impl Responder> {
    form.validate()
        .map_err(|err| JsonResponse::<views::DescribedImage>::build().bad_request(err.to_string()))?;
    let form = form.into_inner();

    let payload = parse_data_url(&form.image_data)
        .map_err(|err| JsonResponse::<views::DescribedImage>::build().bad_request(err))?;

    let prompt = describe
        .describe_item_image(&payload.data, &payload.mime_type, form.kind)
        .await
        .map_err(|err| {
            tracing::error!("image description failed: {}", err);
            JsonResponse::<views::DescribedImage>::build()
                .internal_server_error("Failed to analyze image")
        })?;

    Ok(JsonResponse::build()
        .set_item(views::DescribedImage {
            prompt,
            image_data: form.image_data,
        })
        .ok("OK"))
}

/// Text-only prompt generation, used when no image is available. Pure
/// template expansion, no external call.
#[tracing::instrument(name = "Generate report prompt.", skip(form))]
#[post("/prompt")]
pub async fn prompt_handler(form: web::Json<forms::GeneratePrompt>) -> Result<impl Responder> {
    form.validate()
        .map_err(|err| JsonResponse::<views::GeneratedPrompt>::build().bad_request(err.to_string()))?;
    let form = form.into_inner();

    let description = form
        .description
        .as_deref()
        .filter(|text| !text.trim().is_empty());
    if description.is_none() && form.image_url.is_none() {
        return Err(JsonResponse::<views::GeneratedPrompt>::build()
            .bad_request("Description or image URL is required"));
    }

    let prompt = describe_service::template_prompt(form.kind, description);
    Ok(JsonResponse::build()
        .set_item(views::GeneratedPrompt { prompt })
        .ok("OK"))
}
