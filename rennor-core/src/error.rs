use reqwest::StatusCode;
use thiserror::Error;

/// Rejection of user-supplied horizon input.
///
/// The display text is the user-facing message of the original application;
/// the orchestrator surfaces it verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Input is missing, not a whole number, or outside the accepted range.
    #[error("Número de días debe estar entre 1 y 30")]
    OutOfRange,
}

/// Failure of a single outbound call to the prediction service.
///
/// `Network` means no usable response was obtained at all (DNS failure,
/// refused connection, timeout, interrupted body). `Decode` means a response
/// arrived but its body was not JSON; the raw text is retained for
/// diagnostics and must never reach the end user.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request to prediction service failed: {reason}")]
    Network { reason: String },

    #[error("prediction service returned a non-JSON body (status {status})")]
    Decode {
        status: StatusCode,
        /// Raw body text, kept for logs only.
        raw: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_display_omits_raw_body() {
        let err = ClientError::Decode {
            status: StatusCode::BAD_GATEWAY,
            raw: "<html>stack trace</html>".to_string(),
        };

        let rendered = err.to_string();
        assert!(rendered.contains("502"));
        assert!(!rendered.contains("stack trace"));
    }
}
