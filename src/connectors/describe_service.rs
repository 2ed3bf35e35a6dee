use async_trait::async_trait;
use chrono::Utc;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

use super::errors::ConnectorError;
use crate::configuration::AiSettings;
use crate::models::ItemKind;

/// Produces natural-language item descriptions. The matching core treats the
/// returned text purely as prompt input for keyword extraction and has no
/// knowledge of how it was produced.
#[async_trait]
pub trait DescribeConnector: Send + Sync {
    /// 3-5 sentence report description for an inline image.
    async fn describe_item_image(
        &self,
        image_base64: &str,
        mime_type: &str,
        kind: ItemKind,
    ) -> Result<String, ConnectorError>;

    /// 1-2 sentence caption for an image shared in a chat.
    async fn describe_chat_image(
        &self,
        image_base64: &str,
        mime_type: &str,
    ) -> Result<String, ConnectorError>;
}

/// HTTP client for a Gemini-style `generateContent` endpoint.
pub struct DescribeClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl DescribeClient {
    pub fn new(settings: &AiSettings, api_key: String) -> Result<Self, ConnectorError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|err| ConnectorError::Internal(format!("HTTP client build failed: {}", err)))?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            api_key,
        })
    }

    async fn generate(
        &self,
        image_base64: &str,
        mime_type: &str,
        instruction: &str,
    ) -> Result<String, ConnectorError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let body = json!({
            "contents": [{
                "parts": [
                    {"inline_data": {"mime_type": mime_type, "data": image_base64}},
                    {"text": instruction},
                ]
            }]
        });

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let details = response.text().await.unwrap_or_default();
            return Err(ConnectorError::HttpError(format!(
                "description service returned {}: {}",
                status, details
            )));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|err| ConnectorError::InvalidResponse(err.to_string()))?;

        payload
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or_else(|| {
                ConnectorError::InvalidResponse("no text candidate in response".to_string())
            })
    }
}

#[async_trait]
impl DescribeConnector for DescribeClient {
    #[tracing::instrument(name = "Describe item image.", skip(self, image_base64))]
    async fn describe_item_image(
        &self,
        image_base64: &str,
        mime_type: &str,
        kind: ItemKind,
    ) -> Result<String, ConnectorError> {
        let instruction = match kind {
            ItemKind::Found => {
                "Analyze this image and create a detailed 3-5 sentence description of the item \
                 for a lost and found report. Include specific details like color, type, brand, \
                 size, condition, distinctive features, and any identifying marks. Make it \
                 detailed enough for someone to identify if they lost it."
            }
            ItemKind::Lost => {
                "Analyze this image and create a detailed 3-5 sentence description of the item \
                 for a lost and found report. Include specific details like color, type, brand, \
                 size, condition, distinctive features, and where it might have been lost. Make \
                 it detailed enough for someone to identify if they found it."
            }
        };

        self.generate(image_base64, mime_type, instruction).await
    }

    #[tracing::instrument(name = "Describe chat image.", skip(self, image_base64))]
    async fn describe_chat_image(
        &self,
        image_base64: &str,
        mime_type: &str,
    ) -> Result<String, ConnectorError> {
        self.generate(
            image_base64,
            mime_type,
            "Briefly describe what you see in this image in 1-2 sentences.",
        )
        .await
    }
}

/// Offline implementation producing date-stamped template text. Used when the
/// external service is disabled or unconfigured; the output still flows
/// through keyword extraction like any other prompt.
pub struct TemplateDescribe;

#[async_trait]
impl DescribeConnector for TemplateDescribe {
    async fn describe_item_image(
        &self,
        _image_base64: &str,
        _mime_type: &str,
        kind: ItemKind,
    ) -> Result<String, ConnectorError> {
        Ok(template_prompt(kind, None))
    }

    async fn describe_chat_image(
        &self,
        _image_base64: &str,
        _mime_type: &str,
    ) -> Result<String, ConnectorError> {
        Ok("Image shared".to_string())
    }
}

/// Template report text, with an optional user-supplied description folded in.
pub fn template_prompt(kind: ItemKind, description: Option<&str>) -> String {
    let date = Utc::now().format("%m/%d/%Y");

    match (kind, description) {
        (ItemKind::Found, Some(description)) => format!(
            "{} found on {}. This item was discovered and reported to the lost & found system. \
             The finder has taken possession of the item and is willing to return it to the \
             rightful owner. Please contact immediately if this matches something you have lost. \
             The item appears to be in good condition and is being safely stored.",
            capitalize(description),
            date
        ),
        (ItemKind::Found, None) => format!(
            "Item found on {} from uploaded image. The finder has taken possession of this item \
             and reported it to the lost & found system. Please contact immediately if this \
             matches something you have lost. The item is being safely stored and the finder is \
             willing to return it to the rightful owner.",
            date
        ),
        (ItemKind::Lost, Some(description)) => format!(
            "{} lost on {}. This item contains important personal belongings and has significant \
             value to the owner. Last seen in the general area where it was reported missing. \
             The owner is actively searching for this item and would greatly appreciate any \
             assistance in locating it. Please contact immediately if found.",
            capitalize(description),
            date
        ),
        (ItemKind::Lost, None) => format!(
            "Item lost on {} from uploaded image. Contains important personal belongings with \
             significant value to the owner. The item was last seen in the general area where it \
             was reported missing. Owner is actively searching and would greatly appreciate any \
             assistance. Please contact immediately if found.",
            date
        ),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Picks the connector implementation for the current configuration.
pub fn init(settings: &AiSettings) -> Arc<dyn DescribeConnector> {
    if !settings.enabled {
        tracing::info!("description service disabled, using offline templates");
        return Arc::new(TemplateDescribe);
    }

    let api_key = match settings.api_key.clone() {
        Some(key) if !key.is_empty() => key,
        _ => {
            tracing::warn!("description service enabled but AI_API_KEY is missing, falling back to offline templates");
            return Arc::new(TemplateDescribe);
        }
    };

    match DescribeClient::new(settings, api_key) {
        Ok(client) => Arc::new(client),
        Err(err) => {
            tracing::error!("failed to build description client: {}, falling back to offline templates", err);
            Arc::new(TemplateDescribe)
        }
    }
}
