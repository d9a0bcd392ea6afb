use crate::models::ErrorEnvelope;
use crate::{Error, Result};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

/// Statuses the API uses for successful calls.
fn is_success(status: StatusCode) -> bool {
    (200..=399).contains(&status.as_u16())
}

/// Decodes a Cloudinary response into `T`.
///
/// Out-of-range statuses carry an `{"error": {"message": ...}}` envelope and
/// become [`Error::Api`]. Takes the response by value so the body is released
/// on every path.
pub(crate) async fn decode_response<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await.map_err(|e| {
        tracing::error!("Failed to read Cloudinary response body: {}", e);
        e
    })?;

    if !is_success(status) {
        let envelope: ErrorEnvelope = serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                "Failed to parse Cloudinary error (status {}): {}\nBody: {}",
                status,
                e,
                body
            );
            e
        })?;
        tracing::error!(
            "Cloudinary API error (status {}): {}",
            status,
            envelope.error.message
        );
        return Err(Error::Api(envelope.error));
    }

    serde_json::from_str(&body).map_err(|e| {
        tracing::error!("Failed to parse Cloudinary response: {}\nBody: {}", e, body);
        Error::Serialization(e)
    })
}
