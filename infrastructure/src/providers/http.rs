//! Shared HTTP plumbing for the provider adapters

use duo_application::ClientError;
use reqwest::Response;
use tracing::debug;

/// Map a reqwest failure that produced no response
///
/// The URL is stripped: the Gemini key travels in its query string.
pub(crate) fn transport_error(error: reqwest::Error) -> ClientError {
    ClientError::Transport(error.without_url().to_string())
}

/// Read the body of a response, failing with [`ClientError::Status`] on a
/// non-success status code
pub(crate) async fn read_success_body(response: Response) -> Result<String, ClientError> {
    let status = response.status();
    let body = response.text().await.map_err(transport_error)?;

    if !status.is_success() {
        debug!("Provider answered with status {}", status.as_u16());
        return Err(ClientError::Status {
            status: status.as_u16(),
            body,
        });
    }

    Ok(body)
}
