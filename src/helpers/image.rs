use base64::{engine::general_purpose, Engine as _};

/// Decoded upload ceiling, matching the client-side limit.
pub(crate) const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// An image carried inline as a `data:<mime>;base64,<payload>` URL.
#[derive(Debug, Clone)]
pub(crate) struct ImagePayload {
    pub(crate) mime_type: String,
    pub(crate) data: String,
}

/// Splits and validates a data URL. Only image mime types are accepted and
/// the decoded payload must stay under [`MAX_IMAGE_BYTES`].
pub(crate) fn parse_data_url(value: &str) -> Result<ImagePayload, String> {
    let rest = value
        .strip_prefix("data:")
        .ok_or_else(|| "expected a data URL".to_string())?;

    let (mime_type, data) = rest
        .split_once(";base64,")
        .ok_or_else(|| "expected a base64 data URL".to_string())?;

    if !mime_type.starts_with("image/") {
        return Err("only image files are allowed".to_string());
    }

    let decoded = general_purpose::STANDARD
        .decode(data)
        .map_err(|_| "invalid base64 payload".to_string())?;

    if decoded.len() > MAX_IMAGE_BYTES {
        return Err("image exceeds the 5MB limit".to_string());
    }

    Ok(ImagePayload {
        mime_type: mime_type.to_string(),
        data: data.to_string(),
    })
}
