//! Request body framing for JSON endpoints.
//!
//! Bodies are buffered up to [`MAX_BODY_BYTES`]. An empty body reads as `{}`;
//! anything else must be a JSON object.

use actix_web::web;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::Error;

/// Largest accepted request body.
pub const MAX_BODY_BYTES: usize = 1_000_000;

/// Buffer `payload` and decode it as a JSON object into `T`.
///
/// # Errors
///
/// Returns `payload_too_large` past [`MAX_BODY_BYTES`] and `invalid_request`
/// for unreadable, malformed or non-object bodies.
pub async fn read_json_object<T: DeserializeOwned>(mut payload: web::Payload) -> Result<T, Error> {
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk
            .map_err(|err| Error::invalid_request(format!("failed to read request body: {err}")))?;
        if body.len() + chunk.len() > MAX_BODY_BYTES {
            return Err(Error::payload_too_large(format!(
                "request body exceeds {MAX_BODY_BYTES} bytes"
            )));
        }
        body.extend_from_slice(&chunk);
    }
    parse_json_object(&body)
}

/// Decode a buffered body; see [`read_json_object`].
pub fn parse_json_object<T: DeserializeOwned>(body: &[u8]) -> Result<T, Error> {
    let value = if body.is_empty() {
        Value::Object(serde_json::Map::new())
    } else {
        serde_json::from_slice(body)
            .map_err(|err| Error::invalid_request(format!("malformed JSON body: {err}")))?
    };
    if !value.is_object() {
        return Err(Error::invalid_request("request body must be a JSON object"));
    }
    serde_json::from_value(value)
        .map_err(|err| Error::invalid_request(format!("unexpected request body: {err}")))
}
