use serde::de::DeserializeOwned;

use crate::error::{Result, UpstreamError};
use crate::models::ApiErrorBody;

/// Decode an upstream body that should be a JSON array of `T`.
///
/// A JSON object carrying an `error` field becomes
/// [`UpstreamError::UpstreamReported`]; anything else that does not decode
/// becomes [`UpstreamError::MalformedResponse`] with the raw body attached.
pub fn decode_list<T: DeserializeOwned>(body: &[u8]) -> Result<Vec<T>> {
    let array_error = match serde_json::from_slice::<Vec<T>>(body) {
        Ok(records) => return Ok(records),
        Err(e) => e,
    };

    if let Ok(reported) = serde_json::from_slice::<ApiErrorBody>(body) {
        return Err(UpstreamError::UpstreamReported(reported.error));
    }

    Err(UpstreamError::MalformedResponse {
        body: String::from_utf8_lossy(body).into_owned(),
        reason: array_error.to_string(),
    })
}
