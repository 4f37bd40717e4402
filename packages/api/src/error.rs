use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong talking to a backend.
///
/// Deliberately coarse. The screens show one generic failure regardless of
/// cause, so two categories are enough: the request never completed, or the
/// server answered and said no.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed: connection refused, DNS, timeout, or an
    /// unreadable response body.
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("server returned {0}")]
    Status(StatusCode),
}

/// Pass successful responses through, turn everything else into
/// [`ApiError::Status`].
pub(crate) fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        tracing::warn!("request to {} rejected: {}", response.url(), status);
        Err(ApiError::Status(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_names_the_code() {
        let error = ApiError::Status(StatusCode::UNAUTHORIZED);
        assert_eq!(error.to_string(), "server returned 401 Unauthorized");
    }
}
