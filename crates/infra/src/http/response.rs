//! Response interpretation shared by the endpoint catalogue.
//!
//! Every endpoint documents exactly one success status. Anything else is an
//! error: non-2xx becomes `Business`, a different 2xx becomes
//! `UnexpectedStatus`.

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::errors::ApiError;

/// Require `expected` and decode the JSON body.
pub async fn expect_json<T: DeserializeOwned>(
    response: Response,
    expected: StatusCode,
) -> Result<T, ApiError> {
    let response = check_status(response, expected).await?;
    response
        .json()
        .await
        .map_err(|e| ApiError::Serialization(format!("Failed to parse response: {}", e)))
}

/// Require `expected` and discard the body.
pub async fn expect_status(response: Response, expected: StatusCode) -> Result<(), ApiError> {
    check_status(response, expected).await.map(drop)
}

async fn check_status(response: Response, expected: StatusCode) -> Result<Response, ApiError> {
    let status = response.status();
    if status == expected {
        return Ok(response);
    }

    if status.is_success() {
        return Err(ApiError::UnexpectedStatus { expected, actual: status });
    }

    Err(ApiError::Business { status, body: read_body(response).await })
}

/// Body text of an error response. An unreadable body becomes empty.
pub(crate) async fn read_body(response: Response) -> String {
    let status = response.status();
    match response.text().await {
        Ok(body) => body,
        Err(err) => {
            debug!(%status, error = %err, "failed to read error response body");
            String::new()
        }
    }
}
