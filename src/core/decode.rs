use crate::domain::model::ApiErrorBody;
use crate::domain::ports::RawResponse;
use crate::utils::error::{HereError, Result};
use serde::de::DeserializeOwned;

const MAX_ERROR_BODY: usize = 512;

/// Maps a response onto `T` for status 200, otherwise onto a typed error.
pub fn decode<T: DeserializeOwned>(response: &RawResponse) -> Result<T> {
    if response.status != 200 {
        return Err(decode_error(response));
    }

    Ok(serde_json::from_slice(&response.body)?)
}

fn decode_error(response: &RawResponse) -> HereError {
    match serde_json::from_slice::<ApiErrorBody>(&response.body) {
        Ok(body) => HereError::Api {
            status: response.status,
            title: body.error,
            description: body.error_description,
        },
        Err(_) => HereError::UnexpectedResponse {
            status: response.status,
            body: truncated_body(&response.body),
        },
    }
}

fn truncated_body(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    if text.len() <= MAX_ERROR_BODY {
        return text.into_owned();
    }

    let mut end = MAX_ERROR_BODY;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}
